//! Two-state toggle rendered as a button.

use leptos::prelude::*;

#[component]
pub fn Switch(#[prop(into)] checked: Signal<bool>, on_toggle: Callback<()>, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            class="switch"
            class:switch--on=move || checked.get()
            aria-checked=move || checked.get().to_string()
            aria-label=label
            on:click=move |_| on_toggle.run(())
        >
            <span class="switch__thumb"></span>
        </button>
    }
}
