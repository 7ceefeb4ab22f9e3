//! Renders the shell-level toast queue.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Stack of live toasts, oldest at the top. Each can be closed early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    view! {
                        <li class=format!("toast {}", toast.notice.severity.css_modifier()) role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.notice.title}</div>
                                <div class="toast__description">{toast.notice.description}</div>
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|state| {
                                        state.dismiss(id);
                                    });
                                }
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            </For>
        </ol>
    }
}
