//! Toast overlay rendering the notification queue

use leptos::prelude::*;

use crate::services::notifications;
use crate::state::dashboard::use_dashboard_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_dashboard_context();
    let toasts = ctx.toasts;

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|queue| queue.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.notification.level.css_class()>
                            <span class="toast-message">{toast.notification.message}</span>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| notifications::dismiss(toasts, id)
                            >
                                "\u{00D7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
