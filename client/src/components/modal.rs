//! Shared dialog chrome and the success-screen pause used by form modals.

use leptos::prelude::*;

use crate::net::types::Choice;

/// How long a modal shows its success screen before closing.
pub const SUCCESS_DISMISS_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

/// Wait out [`SUCCESS_DISMISS_DELAY`]. Resolves immediately outside the browser.
#[allow(clippy::unused_async)]
pub async fn success_pause() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(SUCCESS_DISMISS_DELAY).await;
}

/// Backdrop + dialog box. Clicking the backdrop closes unless `locked`.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(into)] locked: Signal<bool>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="dialog-backdrop"
            on:click=move |_| {
                if !locked.get_untracked() {
                    on_close.run(());
                }
            }
        >
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <div>
                        <h2>{title}</h2>
                        {subtitle.map(|text| view! { <p class="dialog__subtitle">{text}</p> })}
                    </div>
                    <button
                        class="dialog__close"
                        title="Close"
                        aria-label="Close"
                        disabled=move || locked.get()
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}

/// Success screen shown in place of a submitted form.
#[component]
pub fn SuccessPanel(#[prop(into)] heading: String, #[prop(into)] detail: String) -> impl IntoView {
    view! {
        <div class="dialog__success">
            <span class="dialog__success-icon" aria-hidden="true">"✓"</span>
            <h3>{heading}</h3>
            <p>{detail}</p>
        </div>
    }
}

/// `<select>` over a [`Choice`] enum with a disabled placeholder option.
#[component]
pub fn ChoiceSelect<C>(
    #[prop(into)] id: String,
    #[prop(into)] placeholder: String,
    value: Signal<Option<C>>,
    on_change: Callback<Option<C>>,
) -> impl IntoView
where
    C: Choice + Send + Sync,
{
    view! {
        <select
            id=id.clone()
            name=id
            class="dialog__input"
            prop:value=move || value.get().map(C::value).unwrap_or_default()
            on:change=move |ev| on_change.run(C::from_value(&event_target_value(&ev)))
        >
            <option value="" disabled=true>{placeholder}</option>
            {C::ALL
                .iter()
                .map(|choice| view! { <option value=choice.value()>{choice.label()}</option> })
                .collect_view()}
        </select>
    }
}
