//! Page scroll suppression behind the mobile navigation overlay.
//!
//! Sets `overflow: hidden` on `<body>` while locked and clears it otherwise.
//! Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// CSS `overflow` value for the body in the given lock state.
#[must_use]
pub fn overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "unset" }
}

/// Apply or release the body scroll lock.
pub fn apply(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", overflow_value(locked));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
