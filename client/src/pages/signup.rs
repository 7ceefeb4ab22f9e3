//! Account creation screen.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::pages::login::{COMPANY_SITE, apply_outcome};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::SignupForm;
use crate::util::routes::AppRoute;

#[component]
fn PasswordField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    visible: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label" for=id>{label}</label>
            <div class="input-icon">
                <span class="input-icon__glyph" aria-hidden="true">"🔒"</span>
                <input
                    class="input"
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder="••••••••"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="input-icon__toggle"
                    title="Show password"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "🙈" } else { "👁" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let form = move || SignupForm {
        name: name.get_untracked(),
        email: email.get_untracked(),
        password: password.get_untracked(),
        confirm_password: confirm.get_untracked(),
    };

    #[cfg(feature = "hydrate")]
    let run = move |federated: bool| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        let form = form();
        leptos::task::spawn_local(async move {
            use crate::net::session::HttpSessionService;
            use crate::util::auth::{FederatedIntent, submit_federated, submit_signup};

            let outcome = if federated {
                submit_federated(&HttpSessionService, FederatedIntent::SignUp).await
            } else {
                submit_signup(&HttpSessionService, &form).await
            };
            let _ = busy.try_set(false);
            if let Some(path) = apply_outcome(outcome, auth, toasts) {
                navigate(path, NavigateOptions::default());
            }
        });
    };
    #[cfg(not(feature = "hydrate"))]
    let run = move |_federated: bool| {
        let _ = (auth, toasts, form);
    };

    let run_federated = run.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run(false);
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__hero"></div>
            <div class="auth-page__panel">
                <div class="auth-card glass-card">
                    <div class="auth-card__header">
                        <a href=COMPANY_SITE rel="external">
                            <img class="auth-card__logo" src="/logo.svg" alt="BereansTechnology Logo"/>
                        </a>
                        <p class="muted">"Create account"</p>
                    </div>
                    <form class="stack" on:submit=on_submit>
                        <div class="field">
                            <label class="field__label" for="name">"Full Name"</label>
                            <div class="input-icon">
                                <span class="input-icon__glyph" aria-hidden="true">"👤"</span>
                                <input
                                    class="input"
                                    id="name"
                                    placeholder="John Doe"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="field">
                            <label class="field__label" for="email">"Email"</label>
                            <div class="input-icon">
                                <span class="input-icon__glyph" aria-hidden="true">"✉"</span>
                                <input
                                    class="input"
                                    id="email"
                                    type="email"
                                    placeholder="your@email.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <PasswordField id="password" label="Password" value=password visible=show_password/>
                        <PasswordField id="confirmPassword" label="Confirm Password" value=confirm visible=show_password/>
                        <button type="submit" class="btn btn--accent btn--block" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn--google btn--block"
                            disabled=move || busy.get()
                            on:click=move |_| run_federated(true)
                        >
                            <img src="/google-icon.svg" alt="Google" class="btn__icon"/>
                            {move || if busy.get() { "Signing up..." } else { "Sign up with Google" }}
                        </button>
                        <p class="center small">
                            <span class="muted">"Already have an account? "</span>
                            <a class="accent strong" href=AppRoute::Login.path()>"Sign in"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
