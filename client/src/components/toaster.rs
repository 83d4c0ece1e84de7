//! Toast stack rendered once at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and modals call [`success`] / [`error`] with the shared
//! `RwSignal<ToastState>`; each toast removes itself after
//! [`TOAST_LIFETIME`] or when clicked.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(4);

/// Queue a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_LIFETIME).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

pub fn error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message);
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="toast"
                            class:toast--success=toast.kind == ToastKind::Success
                            class:toast--error=toast.kind == ToastKind::Error
                            on:click=move |_| toasts.update(|t| t.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
