//! Feature catalogue; each card links to its dashboard page.

use leptos::prelude::*;

use crate::util::routes::AppRoute;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    route: AppRoute,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "✔",
        title: "Automated Data Auditing",
        description: "AI-powered continuous monitoring of data integrity with automated compliance checks and anomaly detection.",
        route: AppRoute::Auditing,
    },
    Feature {
        icon: "⛨",
        title: "AI-Powered Report Verification",
        description: "Intelligent verification of compliance reports using machine learning algorithms for accuracy and completeness.",
        route: AppRoute::Verification,
    },
    Feature {
        icon: "↗",
        title: "Real-Time Compliance Score",
        description: "Live compliance scoring with instant updates and trend analysis for proactive risk management.",
        route: AppRoute::Realtime,
    },
    Feature {
        icon: "◎",
        title: "Regulatory Alignment Checks",
        description: "Automated validation against GDPR, HIPAA, ISO 27001, PCI-DSS, and other regulatory frameworks.",
        route: AppRoute::Regulatory,
    },
    Feature {
        icon: "▤",
        title: "Exportable Audit Reports",
        description: "Generate comprehensive audit reports in multiple formats (PDF, CSV, JSON) with customizable templates.",
        route: AppRoute::Reports,
    },
    Feature {
        icon: "⚡",
        title: "Integrations",
        description: "Seamless integration with your existing tools and platforms via REST API and webhooks.",
        route: AppRoute::Integrations,
    },
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Features"</h2>
                <p class="muted">"Explore our comprehensive compliance tools"</p>
            </div>
            <div class="grid grid--2">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <section class="card">
                                <div class="card__icon" aria-hidden="true">{f.icon}</div>
                                <h3 class="card__title">{f.title}</h3>
                                <p class="muted">{f.description}</p>
                                <a class="btn btn--accent btn--block" href=f.route.path()>
                                    "Run Audit"
                                </a>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
