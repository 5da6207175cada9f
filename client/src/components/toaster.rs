//! Toast viewport rendered once at the app root.
//!
//! Each toast is dismissed after `TOAST_DURATION_MS` or by its close button.
//! The timer dismisses by id, so a toast already evicted or closed by hand is
//! simply not found.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move |last_seen: Option<u64>| {
        let newest = toasts.with(|t| t.toasts.last().map_or(0, |toast| toast.id));
        if newest > last_seen.unwrap_or(0) {
            leptos::task::spawn_local(async move {
                let delay = u64::from(crate::state::toast::TOAST_DURATION_MS);
                gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
                toasts.update(|t| t.dismiss(newest));
            });
        }
        newest.max(last_seen.unwrap_or(0))
    });

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.kind {
                        ToastKind::Default => "toast",
                        ToastKind::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <li class=class role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.notice.title}</p>
                                <p class="toast__description">{toast.notice.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
