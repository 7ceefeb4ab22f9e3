//! Horizontal percentage bar.

use leptos::prelude::*;

/// Filled track showing `value` percent (clamped to 0..=100).
#[component]
pub fn ProgressBar(#[prop(into)] value: Signal<f64>) -> impl IntoView {
    let width = move || format!("{}%", value.get().clamp(0.0, 100.0));
    view! {
        <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=move || value.get().to_string()>
            <div class="progress__fill" style:width=width></div>
        </div>
    }
}
