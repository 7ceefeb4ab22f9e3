//! Dashboard landing page: headline stats, regulatory status, trend charts
//! and recent activity.

use leptos::prelude::*;

use crate::components::charts::{BarChart, ChartPoint, LineChart};
use crate::components::progress_bar::ProgressBar;

const COMPLIANCE_SCORE: f64 = 92.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegulationStatus {
    Compliant,
    Partial,
    Review,
}

impl RegulationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::Partial => "Partial",
            Self::Review => "Needs Review",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Compliant => "status--ok",
            Self::Partial => "status--warn",
            Self::Review => "status--bad",
        }
    }
}

const REGULATIONS: &[(&str, RegulationStatus)] = &[
    ("GDPR", RegulationStatus::Compliant),
    ("HIPAA", RegulationStatus::Compliant),
    ("ISO 27001", RegulationStatus::Partial),
    ("PCI-DSS", RegulationStatus::Review),
];

struct Activity {
    time: &'static str,
    action: &'static str,
    result: &'static str,
}

const RECENT_ACTIVITY: &[Activity] = &[
    Activity { time: "2 mins ago", action: "Data audit completed", result: "success" },
    Activity { time: "15 mins ago", action: "Report verification", result: "success" },
    Activity { time: "1 hour ago", action: "Compliance check", result: "warning" },
    Activity { time: "2 hours ago", action: "System update", result: "success" },
];

const SCORE_TREND: &[ChartPoint] = &[
    ChartPoint { label: "Jan", value: 85.0 },
    ChartPoint { label: "Feb", value: 87.0 },
    ChartPoint { label: "Mar", value: 89.0 },
    ChartPoint { label: "Apr", value: 88.0 },
    ChartPoint { label: "May", value: 90.0 },
    ChartPoint { label: "Jun", value: 92.0 },
];

const MONTHLY_AUDITS: &[ChartPoint] = &[
    ChartPoint { label: "Jan", value: 1050.0 },
    ChartPoint { label: "Feb", value: 1100.0 },
    ChartPoint { label: "Mar", value: 1150.0 },
    ChartPoint { label: "Apr", value: 1200.0 },
    ChartPoint { label: "May", value: 1250.0 },
    ChartPoint { label: "Jun", value: 1284.0 },
];

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Dashboard Overview"</h2>
                <p class="muted">"Monitor your compliance status in real-time"</p>
            </div>

            <div class="grid grid--4">
                <section class="card">
                    <h3 class="card__title">"Compliance Score"</h3>
                    <div class="stat stat--accent">{format!("{COMPLIANCE_SCORE}%")}</div>
                    <ProgressBar value=COMPLIANCE_SCORE/>
                    <p class="muted small">"+5% from last month"</p>
                </section>
                <section class="card">
                    <h3 class="card__title">"Risk Level"</h3>
                    <div class="stat stat--warn">"Low"</div>
                    <div class="risk-meter">
                        <span class="risk-meter__seg risk-meter__seg--on"></span>
                        <span class="risk-meter__seg"></span>
                        <span class="risk-meter__seg"></span>
                    </div>
                    <p class="muted small">"2 items need attention"</p>
                </section>
                <section class="card">
                    <h3 class="card__title">"Total Audits"</h3>
                    <div class="stat stat--primary">"1,284"</div>
                    <span class="small accent">"↑ 89% passed"</span>
                    <p class="muted small">"Last 30 days"</p>
                </section>
                <section class="card">
                    <h3 class="card__title">"Trend"</h3>
                    <div class="stat stat--accent">"+12.5%"</div>
                    <p class="muted small">"Compliance improvement"</p>
                    <p class="muted small">"vs. previous quarter"</p>
                </section>
            </div>

            <section class="card">
                <h3 class="card__title">"Regulatory Status"</h3>
                <div class="grid grid--4">
                    {REGULATIONS
                        .iter()
                        .map(|(name, status)| {
                            view! {
                                <div class="tile">
                                    <div class=format!("status-dot status-dot--lg {}", status.css_modifier())></div>
                                    <h4>{*name}</h4>
                                    <span class=format!("badge {}", status.css_modifier())>{status.label()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <div class="grid grid--2">
                <section class="card">
                    <h3 class="card__title">"Compliance Trend"</h3>
                    <LineChart data=SCORE_TREND min=80.0 max=100.0 name="Score %"/>
                </section>
                <section class="card">
                    <h3 class="card__title">"Monthly Audits"</h3>
                    <BarChart data=MONTHLY_AUDITS max=1400.0 name="Total Audits"/>
                </section>
            </div>

            <section class="card">
                <h3 class="card__title">"Recent Activity"</h3>
                <ul class="list">
                    {RECENT_ACTIVITY
                        .iter()
                        .map(|a| {
                            let modifier = if a.result == "success" { "status--ok" } else { "status--warn" };
                            view! {
                                <li class="list__row">
                                    <span class=format!("status-dot {modifier}")></span>
                                    <div class="list__main">
                                        <p class="strong">{a.action}</p>
                                        <p class="muted small">{a.time}</p>
                                    </div>
                                    <span class=format!("badge {modifier}")>{a.result}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
