//! Integration catalogue with connect/disconnect toggles.

use leptos::prelude::*;

use crate::components::switch::Switch;
use crate::state::integrations::IntegrationStates;
use crate::state::toast::ToastState;
use crate::util::notify::notify;

struct Integration {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    logo: &'static str,
}

const CATALOGUE: &[Integration] = &[
    Integration {
        key: "slack",
        name: "Slack",
        description: "Real-time compliance alerts and notifications",
        category: "Communication",
        logo: "💬",
    },
    Integration {
        key: "jira",
        name: "Jira",
        description: "Automatic ticket creation for compliance issues",
        category: "Project Management",
        logo: "📋",
    },
    Integration {
        key: "github",
        name: "GitHub",
        description: "Code compliance scanning and repository audits",
        category: "Development",
        logo: "🔧",
    },
    Integration {
        key: "microsoft",
        name: "Microsoft Teams",
        description: "Collaborate on compliance workflows",
        category: "Communication",
        logo: "👥",
    },
    Integration {
        key: "salesforce",
        name: "Salesforce",
        description: "CRM data compliance monitoring",
        category: "CRM",
        logo: "☁️",
    },
    Integration {
        key: "aws",
        name: "AWS",
        description: "Cloud infrastructure compliance checks",
        category: "Cloud",
        logo: "☁️",
    },
];

const API_STATUS: &[(&str, &str, &str)] = &[
    ("REST API", "Available", "active"),
    ("Webhooks", "Configured", "active"),
    ("Rate Limit", "1000/hour", "normal"),
    ("API Version", "v2.1", "current"),
];

const WEBHOOKS: &[(&str, &str)] = &[
    ("compliance.score.changed", "https://api.example.com/webhooks/compliance"),
    ("audit.completed", "https://api.example.com/webhooks/audit"),
    ("issue.detected", "https://api.example.com/webhooks/issues"),
];

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let states = RwSignal::new(IntegrationStates::default());

    let cards = CATALOGUE
        .iter()
        .map(|integration| {
            let connected = Signal::derive(move || states.with(|s| s.is_connected(integration.key)));
            let toggle = Callback::new(move |()| {
                let mut notice = None;
                states.update(|s| notice = Some(s.toggle(integration.key, integration.name)));
                if let Some(notice) = notice {
                    notify(toasts, notice);
                }
            });
            view! {
                <div class="tile">
                    <div class="card__row">
                        <div class="integration">
                            <span class="big-icon">{integration.logo}</span>
                            <div>
                                <h4>{integration.name}</h4>
                                <span class="badge status--outline">{integration.category}</span>
                            </div>
                        </div>
                        <Switch checked=connected on_toggle=toggle label=integration.name/>
                    </div>
                    <p class="muted small">{integration.description}</p>
                    <Show
                        when=move || connected.get()
                        fallback=move || {
                            view! {
                                <button class="btn btn--outline btn--sm btn--block" on:click=move |_| toggle.run(())>
                                    "⚡ Connect"
                                </button>
                            }
                        }
                    >
                        <span class="small accent">"✔ Connected"</span>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Integrations"</h2>
                <p class="muted">"Connect your existing tools and platforms"</p>
            </div>

            <section class="card">
                <h3 class="card__title">"API & Integration Status"</h3>
                <div class="grid grid--4 center">
                    {API_STATUS
                        .iter()
                        .map(|(label, value, status)| {
                            let modifier = if *status == "active" { "status--ok" } else { "status--info" };
                            view! {
                                <div class="tile">
                                    <p class="muted small">{*label}</p>
                                    <p class="strong">{*value}</p>
                                    <span class=format!("badge {modifier}")>{*status}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card">
                <h3 class="card__title">"Available Integrations"</h3>
                <p class="muted small">
                    {move || format!("Seamless connection with your tech stack ({} connected)", states.with(IntegrationStates::connected_count))}
                </p>
                <div class="grid grid--3">{cards}</div>
            </section>

            <section class="card">
                <div class="card__row">
                    <div>
                        <h3 class="card__title">"Webhook Configuration"</h3>
                        <p class="muted small">"Configure event-driven integrations"</p>
                    </div>
                    <button class="btn btn--accent">"⚙ Configure Webhooks"</button>
                </div>
                <ul class="list">
                    {WEBHOOKS
                        .iter()
                        .map(|(event, endpoint)| {
                            view! {
                                <li class="list__row">
                                    <div class="list__main">
                                        <p class="strong small">{*event}</p>
                                        <p class="muted small">{*endpoint}</p>
                                    </div>
                                    <span class="badge status--ok">"Active"</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
