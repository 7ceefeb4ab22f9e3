//! Regulatory alignment checks per framework and requirement category.

#[cfg(test)]
#[path = "regulatory_test.rs"]
mod regulatory_test;

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;

struct Regulation {
    name: &'static str,
    full_name: &'static str,
    score: u8,
    status: (&'static str, &'static str),
    checks: u32,
    passed: u32,
    issues: u32,
}

const COMPLIANT: (&str, &str) = ("Compliant", "status--ok");
const PARTIAL: (&str, &str) = ("Partial", "status--warn");
const REVIEW: (&str, &str) = ("Review", "status--bad");

const REGULATIONS: &[Regulation] = &[
    Regulation {
        name: "GDPR",
        full_name: "General Data Protection Regulation",
        score: 95,
        status: COMPLIANT,
        checks: 24,
        passed: 23,
        issues: 1,
    },
    Regulation {
        name: "HIPAA",
        full_name: "Health Insurance Portability and Accountability Act",
        score: 93,
        status: COMPLIANT,
        checks: 18,
        passed: 17,
        issues: 1,
    },
    Regulation {
        name: "ISO 27001",
        full_name: "Information Security Management",
        score: 88,
        status: PARTIAL,
        checks: 32,
        passed: 28,
        issues: 4,
    },
    Regulation {
        name: "PCI-DSS",
        full_name: "Payment Card Industry Data Security Standard",
        score: 85,
        status: REVIEW,
        checks: 28,
        passed: 24,
        issues: 4,
    },
];

/// Requirement counts for one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequirementTally {
    pub category: &'static str,
    pub compliant: u32,
    pub partial: u32,
    pub failed: u32,
}

impl RequirementTally {
    /// Share of requirements fully compliant, as a percentage. Empty
    /// categories report 0.
    #[must_use]
    pub fn compliant_percent(&self) -> f64 {
        let total = self.compliant + self.partial + self.failed;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.compliant) / f64::from(total) * 100.0
    }
}

pub const REQUIREMENTS: &[RequirementTally] = &[
    RequirementTally { category: "Data Protection", compliant: 18, partial: 2, failed: 0 },
    RequirementTally { category: "Access Control", compliant: 15, partial: 1, failed: 1 },
    RequirementTally { category: "Encryption", compliant: 12, partial: 0, failed: 0 },
    RequirementTally { category: "Audit Logging", compliant: 10, partial: 2, failed: 0 },
    RequirementTally { category: "Incident Response", compliant: 8, partial: 1, failed: 1 },
];

const ACTIONS: &[(&str, &str, &str)] = &[
    ("GDPR data mapping updated", "10 min ago", "success"),
    ("HIPAA access logs reviewed", "1 hour ago", "success"),
    ("ISO 27001 policy alignment check", "2 hours ago", "warning"),
    ("PCI-DSS encryption audit", "3 hours ago", "pending"),
];

fn action_modifier(status: &str) -> &'static str {
    match status {
        "success" => "status--ok",
        "warning" => "status--warn",
        _ => "status--outline",
    }
}

#[component]
pub fn RegulatoryPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Regulatory Alignment Checks"</h2>
                <p class="muted">"Automated validation against compliance frameworks"</p>
            </div>

            <div class="grid grid--4">
                {REGULATIONS
                    .iter()
                    .map(|reg| {
                        let (label, modifier) = reg.status;
                        view! {
                            <section class="card">
                                <div class="card__row">
                                    <span class="card__icon" aria-hidden="true">"⛨"</span>
                                    <span class=format!("badge {modifier}")>{label}</span>
                                </div>
                                <h3 class="card__title">{reg.name}</h3>
                                <p class="muted small">{reg.full_name}</p>
                                <div class="task-progress__row">
                                    <span>"Compliance Score"</span>
                                    <span class="strong accent">{format!("{}%", reg.score)}</span>
                                </div>
                                <ProgressBar value=f64::from(reg.score)/>
                                <div class="grid grid--3 center small">
                                    <div class="tile">
                                        <div class="strong">{reg.checks}</div>
                                        <div class="muted">"Checks"</div>
                                    </div>
                                    <div class="tile">
                                        <div class="strong accent">{reg.passed}</div>
                                        <div class="muted">"Passed"</div>
                                    </div>
                                    <div class="tile">
                                        <div class="strong status--warn">{reg.issues}</div>
                                        <div class="muted">"Issues"</div>
                                    </div>
                                </div>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="card">
                <h3 class="card__title">"Requirement Categories"</h3>
                <p class="muted small">"Breakdown by compliance category"</p>
                <div class="stack">
                    {REQUIREMENTS
                        .iter()
                        .map(|req| {
                            view! {
                                <div class="tile tile--row">
                                    <div class="card__row">
                                        <span class="strong">{req.category}</span>
                                        <span class="small">
                                            <span class="status--ok">{format!("✔ {} Compliant", req.compliant)}</span>
                                            " "
                                            <span class="status--warn">{format!("⚠ {} Partial", req.partial)}</span>
                                            " "
                                            <span class="status--bad">{format!("✖ {} Failed", req.failed)}</span>
                                        </span>
                                    </div>
                                    <ProgressBar value=req.compliant_percent()/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card">
                <h3 class="card__title">"Recent Compliance Actions"</h3>
                <ul class="list">
                    {ACTIONS
                        .iter()
                        .map(|(action, time, status)| {
                            view! {
                                <li class="list__row">
                                    <div class="list__main">
                                        <p class="strong small">{*action}</p>
                                        <p class="muted small">{*time}</p>
                                    </div>
                                    <span class=format!("badge {}", action_modifier(status))>{*status}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
