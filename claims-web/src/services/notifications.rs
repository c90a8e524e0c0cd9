//! Toast scheduling: every toast removes itself after the configured duration.

use leptos::prelude::*;
use lib_claims::{Notification, ToastQueue};
use std::time::Duration;

/// Queue a toast and schedule its dismissal.
pub fn show(toasts: RwSignal<ToastQueue>, duration: Duration, notification: Notification) {
    log::debug!("toast: {:?} {}", notification.level, notification.message);

    let Some(id) = toasts.try_update(|queue| queue.push(notification)) else {
        return;
    };

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(duration).await;
        // The signal is gone if the app unmounted while the toast was visible.
        let _ = toasts.try_update(|queue| queue.dismiss(id));
    });
}

/// Remove a toast right away (close button).
pub fn dismiss(toasts: RwSignal<ToastQueue>, id: u64) {
    toasts.update(|queue| {
        queue.dismiss(id);
    });
}
