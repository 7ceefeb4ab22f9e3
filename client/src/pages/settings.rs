//! Admin settings. Every control here is local UI state; nothing is saved.

use leptos::prelude::*;

use crate::components::switch::Switch;

const NOTIFICATION_PREFS: &[(&str, &str)] = &[
    ("Email Notifications", "Receive compliance alerts via email"),
    ("Audit Reports", "Weekly audit summary reports"),
    ("Risk Alerts", "Immediate alerts for high-risk findings"),
];

const PERMISSIONS: &[&str] = &["View Dashboard", "Run Audits", "Export Reports", "Manage Settings"];

/// Switch that owns its own on/off state, starting on.
#[component]
fn LocalSwitch(#[prop(into)] label: String) -> impl IntoView {
    let on = RwSignal::new(true);
    view! { <Switch checked=on on_toggle=Callback::new(move |()| on.update(|v| *v = !*v)) label=label/> }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] kind: Option<&'static str>,
    #[prop(optional)] value: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label" for=id>{label}</label>
            <input class="input" id=id type=kind.unwrap_or("text") value=value.unwrap_or_default()/>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Admin Settings"</h2>
                <p class="muted">"Manage your account and preferences"</p>
            </div>

            <section class="card">
                <h3 class="card__title">"👤 Profile Information"</h3>
                <p class="muted small">"Update your personal details"</p>
                <div class="grid grid--2">
                    <Field id="firstName" label="First Name" value="Admin"/>
                    <Field id="lastName" label="Last Name" value="User"/>
                </div>
                <Field id="email" label="Email" kind="email" value="admin@bereanstechnology.com"/>
                <button class="btn btn--accent">"Save Changes"</button>
            </section>

            <section class="card">
                <h3 class="card__title">"🔒 Change Password"</h3>
                <p class="muted small">"Update your account password"</p>
                <Field id="currentPassword" label="Current Password" kind="password"/>
                <Field id="newPassword" label="New Password" kind="password"/>
                <Field id="confirmPassword" label="Confirm New Password" kind="password"/>
                <button class="btn btn--accent">"Update Password"</button>
            </section>

            <section class="card">
                <h3 class="card__title">"🔔 Notification Preferences"</h3>
                <p class="muted small">"Manage your notification settings"</p>
                <div class="stack">
                    {NOTIFICATION_PREFS
                        .iter()
                        .map(|(title, desc)| {
                            view! {
                                <div class="card__row pref">
                                    <div>
                                        <p class="strong">{*title}</p>
                                        <p class="muted small">{*desc}</p>
                                    </div>
                                    <LocalSwitch label=*title/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card">
                <h3 class="card__title">"🔑 API & Integration Keys"</h3>
                <p class="muted small">"Manage your API access tokens"</p>
                <div class="field">
                    <label class="field__label" for="apiKey">"API Key"</label>
                    <div class="btn-group">
                        <input class="input" id="apiKey" value="sk_live_••••••••••••••••" readonly=true/>
                        <button class="btn btn--outline">"Regenerate"</button>
                    </div>
                </div>
                <div class="field">
                    <label class="field__label" for="webhookUrl">"Webhook URL"</label>
                    <input class="input" id="webhookUrl" placeholder="https://your-domain.com/webhook"/>
                </div>
            </section>

            <section class="card">
                <h3 class="card__title">"⛨ Access Control"</h3>
                <p class="muted small">"Manage user permissions and roles"</p>
                <div class="stack">
                    {PERMISSIONS
                        .iter()
                        .map(|permission| {
                            view! {
                                <div class="tile card__row">
                                    <span class="strong">{*permission}</span>
                                    <LocalSwitch label=*permission/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
