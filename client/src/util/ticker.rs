//! Fixed-period driver for [`ProgressController`].
//!
//! DESIGN
//! ======
//! One task per run. The loop sleeps for the controller's period, ticks, and
//! exits once the run completes or the owning page is torn down (`alive`
//! cleared in `on_cleanup`). Nothing touches the signals after teardown.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use leptos::prelude::*;

use crate::state::progress::ProgressController;
use crate::state::toast::ToastState;

/// Start a run on `controller` and drive it to completion.
///
/// Does nothing if a run is already in progress.
pub fn start_progress(controller: RwSignal<ProgressController>, toasts: RwSignal<ToastState>, alive: Arc<AtomicBool>) {
    let mut started = false;
    controller.update(|c| started = c.start());
    if !started {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use std::sync::atomic::Ordering;

        let period = controller.with_untracked(|c| c.spec().period_ms);
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(period))).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            let mut done = None;
            controller.update(|c| done = c.tick());
            if let Some(notice) = done {
                crate::util::notify::notify(toasts, notice);
                break;
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, alive);
}

/// Page-scoped progress task: a controller for `spec` and a start callback.
///
/// The ticker is cancelled when the calling component is cleaned up.
pub fn use_progress_task(spec: crate::state::progress::ProgressSpec) -> (RwSignal<ProgressController>, Callback<()>) {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let controller = RwSignal::new(ProgressController::new(spec));
    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));

    let start = Callback::new(move |()| start_progress(controller, toasts, alive.clone()));
    (controller, start)
}
