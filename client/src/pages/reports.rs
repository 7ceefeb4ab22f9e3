//! Report templates, previously generated reports and export formats.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastState};
use crate::util::notify::notify;

/// Output format of an exported report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Csv => "CSV",
            Self::Json => "JSON",
        }
    }
}

/// Notice announcing that an export has started.
#[must_use]
pub fn export_notice(report: &str, format: ExportFormat) -> Notice {
    Notice::info("Report Export Started", format!("Generating {report} in {} format...", format.label()))
}

struct Report {
    name: &'static str,
    date: &'static str,
    kind: &'static str,
    size: &'static str,
    formats: &'static [ExportFormat],
}

const ALL_FORMATS: &[ExportFormat] = &[ExportFormat::Pdf, ExportFormat::Csv, ExportFormat::Json];

const REPORTS: &[Report] = &[
    Report {
        name: "Monthly Compliance Report",
        date: "June 2024",
        kind: "Comprehensive",
        size: "2.4 MB",
        formats: ALL_FORMATS,
    },
    Report {
        name: "GDPR Audit Report",
        date: "June 15, 2024",
        kind: "Regulatory",
        size: "1.8 MB",
        formats: &[ExportFormat::Pdf, ExportFormat::Json],
    },
    Report {
        name: "Risk Assessment Report",
        date: "June 10, 2024",
        kind: "Risk Analysis",
        size: "1.2 MB",
        formats: &[ExportFormat::Pdf, ExportFormat::Csv],
    },
    Report {
        name: "Data Integrity Report",
        date: "June 5, 2024",
        kind: "Data Audit",
        size: "3.1 MB",
        formats: ALL_FORMATS,
    },
];

const TEMPLATES: &[(&str, &str)] = &[
    ("Executive Summary", "High-level overview for leadership"),
    ("Technical Audit", "Detailed technical findings"),
    ("Regulatory Compliance", "Framework-specific reports"),
    ("Custom Template", "Build your own report template"),
];

const FORMAT_INFO: &[(&str, &str, &str)] = &[
    ("📄", "PDF", "Formatted document for sharing"),
    ("📊", "CSV", "Spreadsheet data format"),
    ("{ }", "JSON", "Structured data for APIs"),
];

#[component]
pub fn ReportsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let export = move |report: &'static str, format: ExportFormat| notify(toasts, export_notice(report, format));

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Exportable Audit Reports"</h2>
                <p class="muted">"Generate comprehensive reports in multiple formats"</p>
            </div>

            <section class="card">
                <h3 class="card__title">"Generate New Report"</h3>
                <p class="muted small">"Create customized compliance reports"</p>
                <div class="grid grid--4">
                    {TEMPLATES
                        .iter()
                        .map(|(name, description)| {
                            let name: &'static str = *name;
                            view! {
                                <div class="tile">
                                    <div class="card__icon" aria-hidden="true">"▤"</div>
                                    <h4>{name}</h4>
                                    <p class="muted small">{*description}</p>
                                    <button
                                        class="btn btn--accent btn--sm btn--block"
                                        on:click=move |_| export(name, ExportFormat::Pdf)
                                    >
                                        "Generate"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card">
                <div class="card__row">
                    <div>
                        <h3 class="card__title">"Available Reports"</h3>
                        <p class="muted small">"Download previously generated reports"</p>
                    </div>
                    <div class="btn-group">
                        <button class="btn btn--outline btn--sm">"Filter by Date"</button>
                        <button class="btn btn--outline btn--sm">"Filter by Type"</button>
                    </div>
                </div>
                <div class="stack">
                    {REPORTS
                        .iter()
                        .map(|report| {
                            let buttons = report
                                .formats
                                .iter()
                                .map(|format| {
                                    let format = *format;
                                    view! {
                                        <button
                                            class="btn btn--outline btn--sm"
                                            on:click=move |_| export(report.name, format)
                                        >
                                            "⤓ "
                                            {format.label()}
                                        </button>
                                    }
                                })
                                .collect_view();
                            view! {
                                <div class="tile tile--row card__row">
                                    <div class="list__main">
                                        <h4>{report.name}</h4>
                                        <p class="muted small">
                                            {report.date} " • " {report.size} " "
                                            <span class="badge status--outline">{report.kind}</span>
                                        </p>
                                    </div>
                                    <div class="btn-group">{buttons}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card">
                <h3 class="card__title">"Export Formats"</h3>
                <div class="grid grid--3 center">
                    {FORMAT_INFO
                        .iter()
                        .map(|(icon, format, desc)| {
                            view! {
                                <div class="tile">
                                    <div class="big-icon">{*icon}</div>
                                    <h4>{*format}</h4>
                                    <p class="muted small">{*desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
