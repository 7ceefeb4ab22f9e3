//! Email/password and federated sign-in screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Submissions run through `util::auth` against the host's
//! session API; success stores the user in the shell's `AuthState` and moves
//! to `/dashboard`, failure leaves the form as it was.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::AuthOutcome;
use crate::util::notify::notify;
use crate::util::routes::AppRoute;

pub(crate) const COMPANY_SITE: &str = "https://bereanstechnology.com/";

/// Publish an auth outcome to the shell: one toast, and the user on success.
/// Returns where to navigate next, if anywhere.
pub(crate) fn apply_outcome(
    outcome: AuthOutcome,
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
) -> Option<&'static str> {
    notify(toasts, outcome.notice);
    if let Some(user) = outcome.user {
        auth.update(|a| {
            a.user = Some(user);
            a.loading = false;
        });
    }
    outcome.redirect
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let run = {
        let navigate = navigate.clone();
        move |federated: bool| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let navigate = navigate.clone();
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();
            leptos::task::spawn_local(async move {
                use crate::net::session::HttpSessionService;
                use crate::util::auth::{FederatedIntent, submit_federated, submit_login};

                let outcome = if federated {
                    submit_federated(&HttpSessionService, FederatedIntent::SignIn).await
                } else {
                    submit_login(&HttpSessionService, &email_value, &password_value).await
                };
                let _ = busy.try_set(false);
                if let Some(path) = apply_outcome(outcome, auth, toasts) {
                    navigate(path, NavigateOptions::default());
                }
            });
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let run = move |_federated: bool| {
        let _ = (auth, toasts);
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
                        <p class="muted">"Sign in to your account"</p>
                    </div>
                    <form class="stack" on:submit=on_submit>
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
                        <div class="field">
                            <label class="field__label" for="password">"Password"</label>
                            <div class="input-icon">
                                <span class="input-icon__glyph" aria-hidden="true">"🔒"</span>
                                <input
                                    class="input"
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="••••••••"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button
                                    type="button"
                                    class="input-icon__toggle"
                                    title="Show password"
                                    on:click=move |_| show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "🙈" } else { "👁" }}
                                </button>
                            </div>
                        </div>
                        <div class="card__row small">
                            <label class="checkbox">
                                <input type="checkbox"/>
                                <span class="muted">"Remember me"</span>
                            </label>
                            <a class="accent" href="#">"Forgot password?"</a>
                        </div>
                        <button type="submit" class="btn btn--accent btn--block" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn--google btn--block"
                            disabled=move || busy.get()
                            on:click=move |_| run_federated(true)
                        >
                            <img src="/google-icon.svg" alt="Google" class="btn__icon"/>
                            {move || if busy.get() { "Signing in..." } else { "Sign in with Google" }}
                        </button>
                        <p class="center small">
                            <span class="muted">"Don't have an account? "</span>
                            <a class="accent strong" href=AppRoute::Signup.path()>"Sign up"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
