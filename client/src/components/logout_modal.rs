//! Logout confirmation dialog.
//!
//! Shared by the header menu and the sidebar button through a single `open`
//! flag owned by `DashboardLayout`. Only Confirm ends the session; Cancel,
//! a backdrop click and Escape (routed by the layout's window listener) all
//! just close the dialog.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[component]
pub fn LogoutModal(open: RwSignal<bool>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let dismiss = move || open.set(false);
    let on_confirm = move |_: leptos::ev::MouseEvent| {
        open.set(false);
        #[cfg(feature = "hydrate")]
        {
            use crate::net::session::HttpSessionService;
            use crate::util::auth::{LogoutChoice, resolve_logout};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let (target, failure) = resolve_logout(&HttpSessionService, LogoutChoice::Confirm).await;
                if let Some(message) = failure {
                    log::warn!("sign-out failed: {message}");
                }
                let _ = auth.try_update(|a| a.user = None);
                if let Some(path) = target {
                    navigate(path, NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| dismiss()>
                <div
                    class="dialog"
                    role="alertdialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <h2 class="dialog__title">"Are you sure you want to logout?"</h2>
                    <p class="dialog__description">"You will be redirected to the login page."</p>
                    <div class="dialog__actions">
                        <button class="btn btn--ghost" on:click=move |_| dismiss()>
                            "Cancel"
                        </button>
                        <button class="btn btn--accent" on:click=on_confirm>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
