//! Real-time compliance score with a simulated refresh.
//!
//! Refresh is a one-shot 1.5 s timer that replaces the score with a random
//! value in `88..=97` and announces it. The button is disabled while a
//! refresh is pending, so at most one timer exists per page.

#[cfg(test)]
#[path = "realtime_test.rs"]
mod realtime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::charts::{AreaChart, ChartPoint, PieChart, PieSegment};
use crate::components::progress_bar::ProgressBar;
use crate::state::toast::{Notice, ToastState};

pub const INITIAL_SCORE: u32 = 92;
pub const REFRESH_DELAY_MS: u32 = 1500;

/// Map a unit-interval sample to a refreshed score in `88..=97`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn refreshed_score(sample: f64) -> u32 {
    88 + ((sample.clamp(0.0, 1.0) * 10.0).floor() as u32).min(9)
}

#[must_use]
pub fn refreshed_notice() -> Notice {
    Notice::info("Data Refreshed", "Real-time compliance data updated successfully")
}

const TREND: &[ChartPoint] = &[
    ChartPoint { label: "Jan", value: 85.0 },
    ChartPoint { label: "Feb", value: 87.0 },
    ChartPoint { label: "Mar", value: 89.0 },
    ChartPoint { label: "Apr", value: 88.0 },
    ChartPoint { label: "May", value: 90.0 },
    ChartPoint { label: "Jun", value: 92.0 },
];

const BREAKDOWN: &[PieSegment] = &[
    PieSegment { label: "GDPR", value: 95.0, color: "#59D091" },
    PieSegment { label: "HIPAA", value: 93.0, color: "#E4757D" },
    PieSegment { label: "ISO 27001", value: 88.0, color: "#718096" },
    PieSegment { label: "PCI-DSS", value: 85.0, color: "#1D4ED8" },
];

const METRICS: &[(&str, &str)] = &[
    ("Active Monitors", "24/7"),
    ("Last Check", "2 min ago"),
    ("Issues Detected", "3"),
    ("Auto-Resolved", "12"),
];

const LIVE_ACTIVITY: &[(&str, &str, &str)] = &[
    ("Just now", "Compliance check completed", "status--ok"),
    ("2 min ago", "GDPR validation passed", "status--ok"),
    ("5 min ago", "Minor issue detected in ISO 27001", "status--warn"),
    ("8 min ago", "Auto-remediation triggered", "status--ok"),
    ("12 min ago", "PCI-DSS audit scheduled", "status--info"),
];

#[component]
pub fn RealtimePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let score = RwSignal::new(INITIAL_SCORE);
    let refreshing = RwSignal::new(false);

    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    let on_refresh = move |_: leptos::ev::MouseEvent| {
        if refreshing.get_untracked() {
            return;
        }
        refreshing.set(true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(REFRESH_DELAY_MS))).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                score.set(refreshed_score(js_sys::Math::random()));
                refreshing.set(false);
                crate::util::notify::notify(toasts, refreshed_notice());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&alive, toasts, score);
        }
    };

    view! {
        <div class="page">
            <div class="page__header page__header--row">
                <div>
                    <h2>"Real-Time Compliance Score"</h2>
                    <p class="muted">"Live compliance monitoring with instant updates"</p>
                </div>
                <button class="btn btn--accent" disabled=move || refreshing.get() on:click=on_refresh>
                    <span class="spin-icon" class:spin-icon--active=move || refreshing.get()>"⟳"</span>
                    " Refresh"
                </button>
            </div>

            <section class="card">
                <h3 class="card__title">"Current Compliance Score"</h3>
                <div class="card__row">
                    <div>
                        <div class="stat stat--accent stat--xl">{move || format!("{}%", score.get())}</div>
                        <p class="muted">"Overall Compliance"</p>
                        <span class="badge status--ok">"↗ +5% from last month"</span>
                    </div>
                    <div class="grow">
                        <ProgressBar value=Signal::derive(move || f64::from(score.get()))/>
                        <div class="grid grid--2">
                            {METRICS
                                .iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="tile">
                                            <p class="muted small">{*label}</p>
                                            <p class="strong">{*value}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </section>

            <section class="card">
                <h3 class="card__title">"Compliance Trend (6 Months)"</h3>
                <p class="muted small">"Historical performance analysis"</p>
                <AreaChart data=TREND min=80.0 max=100.0 name="Score"/>
            </section>

            <div class="grid grid--2">
                <section class="card">
                    <h3 class="card__title">"Regulatory Breakdown"</h3>
                    <PieChart data=BREAKDOWN/>
                </section>
                <section class="card">
                    <h3 class="card__title">"Live Activity Feed"</h3>
                    <ul class="list">
                        {LIVE_ACTIVITY
                            .iter()
                            .map(|(time, event, modifier)| {
                                view! {
                                    <li class="list__row">
                                        <span class=format!("status-dot {modifier}")></span>
                                        <div class="list__main">
                                            <p class="strong small">{*event}</p>
                                            <p class="muted small">{*time}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}
