//! Push a toast and schedule its auto-dismiss.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastState};

/// Queue `notice` on the shell's toast stack. In the browser the toast is
/// dismissed after `TOAST_DURATION_MS` unless the user closes it first.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let mut id = 0;
    toasts.update(|state| id = state.push(notice));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            crate::state::toast::TOAST_DURATION_MS,
        )))
        .await;
        let _ = toasts.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
