//! Automated data auditing with a simulated audit run.

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::state::progress::ProgressSpec;
use crate::util::format::group_thousands;
use crate::util::ticker::use_progress_task;

/// Ten 500 ms ticks of 10%.
pub const AUDIT_TASK: ProgressSpec = ProgressSpec {
    step: 10.0,
    period_ms: 500,
    title: "Audit Complete",
    description: "Data audit completed successfully. 1,247 records validated.",
};

struct AuditResult {
    category: &'static str,
    passed: bool,
    issues: u32,
    records: u64,
}

const AUDIT_RESULTS: &[AuditResult] = &[
    AuditResult { category: "Data Integrity", passed: true, issues: 0, records: 1247 },
    AuditResult { category: "Schema Validation", passed: true, issues: 0, records: 1247 },
    AuditResult { category: "Duplicate Detection", passed: false, issues: 3, records: 1247 },
    AuditResult { category: "Missing Fields", passed: true, issues: 0, records: 1247 },
    AuditResult { category: "Format Compliance", passed: false, issues: 2, records: 1247 },
];

const WORKFLOW: &[&str] = &[
    "Data Collection & Sampling",
    "Schema Validation",
    "Integrity Checks",
    "Anomaly Detection (AI)",
    "Compliance Verification",
    "Report Generation",
];

#[component]
pub fn DataAuditingPage() -> impl IntoView {
    let (audit, start) = use_progress_task(AUDIT_TASK);
    let running = move || audit.with(|c| c.is_running());

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Automated Data Auditing"</h2>
                <p class="muted">"AI-powered continuous monitoring of data integrity"</p>
            </div>

            <section class="card">
                <div class="card__row">
                    <div>
                        <h3 class="card__title">"Run Data Audit"</h3>
                        <p class="muted small">"Validate data integrity and compliance"</p>
                    </div>
                    <div class="btn-group">
                        <button class="btn btn--accent" disabled=running on:click=move |_| start.run(())>
                            {move || if running() { "Running..." } else { "Start Audit" }}
                        </button>
                        <button class="btn btn--outline">"Export"</button>
                    </div>
                </div>
                <Show when=running>
                    <div class="task-progress">
                        <div class="task-progress__row">
                            <span>"Progress"</span>
                            <span class="strong">{move || audit.with(|c| c.percent_label())}</span>
                        </div>
                        <ProgressBar value=Signal::derive(move || audit.with(|c| c.percent()))/>
                        <p class="muted small">"Analyzing records..."</p>
                    </div>
                </Show>
            </section>

            <section class="card">
                <h3 class="card__title">"Audit Results"</h3>
                <div class="stack">
                    {AUDIT_RESULTS
                        .iter()
                        .map(|r| {
                            let (icon, badge, modifier) =
                                if r.passed { ("✔", "Passed", "status--ok") } else { ("⚠", "Warning", "status--warn") };
                            view! {
                                <div class="tile tile--row">
                                    <div class="card__row">
                                        <span class=format!("strong {modifier}")>{icon} " " {r.category}</span>
                                        <span class=format!("badge {modifier}")>{badge}</span>
                                    </div>
                                    <div class="grid grid--2 small muted">
                                        <div>
                                            <span class="block">"Issues Found"</span>
                                            <span class="strong">{r.issues}</span>
                                        </div>
                                        <div>
                                            <span class="block">"Records Checked"</span>
                                            <span class="strong">{group_thousands(r.records)}</span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card">
                <h3 class="card__title">"Audit Workflow"</h3>
                <p class="muted small">"Automated steps in the auditing process"</p>
                <ol class="steps">
                    {WORKFLOW
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <li class="steps__item">
                                    <span class="steps__num">{i + 1}</span>
                                    <span>{*step}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>
        </div>
    }
}
