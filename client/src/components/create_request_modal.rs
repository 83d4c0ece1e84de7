//! NGO dialog for posting a new food request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the NGO dashboard while open. Validation lives in
//! [`RequestDraft::to_payload`]; this component only wires inputs, the
//! location shortcuts, and the submit/success flow.

use leptos::prelude::*;

use crate::components::modal::{ChoiceSelect, ModalFrame, SuccessPanel, success_pause};
use crate::components::toaster;
use crate::config::ClientConfig;
use crate::net::types::{FoodCategory, FoodType, GeoPoint, UrgencyLevel, Verification};
use crate::state::auth::AuthState;
use crate::state::request_draft::RequestDraft;
use crate::state::toast::ToastState;
use crate::util::{geolocation, session};

const CREATE_FAILED: &str = "Failed to create request";

#[component]
pub fn CreateRequestModal(on_close: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let verification = move || -> Option<Verification> {
        auth.with_untracked(|s| s.user.as_ref().and_then(|u| u.verification.clone()))
    };
    let draft = RwSignal::new(RequestDraft::for_ngo(verification().as_ref()));
    let loading = RwSignal::new(false);
    let success = RwSignal::new(false);
    let locating = RwSignal::new(false);

    let use_ngo_location = move |_| match draft.try_update(|d| d.use_ngo_location(verification().as_ref())) {
        Some(Err(err)) => toaster::error(toasts, err.to_string()),
        _ => toaster::success(toasts, "Using NGO location"),
    };

    let use_current_location = move |_| {
        if locating.get_untracked() {
            return;
        }
        locating.set(true);
        leptos::task::spawn_local(async move {
            match geolocation::current_position().await {
                Ok(point) => {
                    draft.update(|d| d.set_location(point));
                    toaster::success(toasts, "Location captured!");
                }
                Err(err) => toaster::error(toasts, err.to_string()),
            }
            locating.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let payload = match draft.with_untracked(RequestDraft::to_payload) {
            Ok(payload) => payload,
            Err(err) => {
                toaster::error(toasts, err.to_string());
                return;
            }
        };
        loading.set(true);
        let api = config.with_value(|c| session::api(auth, c));
        leptos::task::spawn_local(async move {
            match api.create_request(&payload).await {
                Ok(_) => {
                    success.set(true);
                    toaster::success(toasts, "Food request created successfully! Waiting for admin approval.");
                    success_pause().await;
                    on_success.run(());
                    on_close.run(());
                    success.set(false);
                    draft.set(RequestDraft::for_ngo(verification().as_ref()));
                }
                Err(err) => toaster::error(toasts, err.user_message(CREATE_FAILED)),
            }
            loading.set(false);
        });
    };

    let location_label = move || {
        draft.with(|d| match d.location() {
            Some(GeoPoint { lat, lng }) => format!("{lat:.5}, {lng:.5}"),
            None => "No location selected".to_owned(),
        })
    };

    view! {
        <ModalFrame
            title="Create Food Request"
            subtitle="Tell donors what your organization needs"
            locked=loading
            on_close=on_close
        >
            <Show
                when=move || !success.get()
                fallback=|| {
                    view! {
                        <SuccessPanel
                            heading="Request Created!"
                            detail="Your request is pending admin approval."
                        />
                    }
                }
            >
                <form class="dialog__form" on:submit=on_submit>
                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Food Type *"
                            <ChoiceSelect
                                id="food_type"
                                placeholder="Select food type"
                                value=Signal::derive(move || draft.with(|d| d.food_type))
                                on_change=Callback::new(move |v: Option<FoodType>| draft.update(|d| d.food_type = v))
                            />
                        </label>
                        <label class="dialog__label">
                            "Food Category *"
                            <ChoiceSelect
                                id="food_category"
                                placeholder="Select category"
                                value=Signal::derive(move || draft.with(|d| d.food_category))
                                on_change=Callback::new(move |v: Option<FoodCategory>| {
                                    draft.update(|d| d.food_category = v);
                                })
                            />
                        </label>
                    </div>
                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Quantity (servings) *"
                            <input
                                class="dialog__input"
                                type="number"
                                min="1"
                                placeholder="e.g. 50"
                                prop:value=move || draft.with(|d| d.quantity.clone())
                                on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Urgency"
                            <ChoiceSelect
                                id="urgency_level"
                                placeholder="Select urgency"
                                value=Signal::derive(move || Some(draft.with(|d| d.urgency_level)))
                                on_change=Callback::new(move |v: Option<UrgencyLevel>| {
                                    draft.update(|d| d.urgency_level = v.unwrap_or_default());
                                })
                            />
                        </label>
                    </div>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            placeholder="Any dietary notes or pickup instructions"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <fieldset class="dialog__fieldset">
                        <legend>"Pickup Location *"</legend>
                        <div class="dialog__actions dialog__actions--start">
                            <button type="button" class="btn" on:click=use_ngo_location>
                                "Use NGO Location"
                            </button>
                            <button
                                type="button"
                                class="btn"
                                disabled=move || locating.get()
                                on:click=use_current_location
                            >
                                {move || if locating.get() { "Locating..." } else { "Use Current Location" }}
                            </button>
                        </div>
                        <div class="dialog__row">
                            <label class="dialog__label">
                                "Latitude"
                                <input
                                    class="dialog__input"
                                    type="number"
                                    step="any"
                                    prop:value=move || draft.with(|d| d.lat.clone())
                                    on:input=move |ev| draft.update(|d| d.lat = event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Longitude"
                                <input
                                    class="dialog__input"
                                    type="number"
                                    step="any"
                                    prop:value=move || draft.with(|d| d.lng.clone())
                                    on:input=move |ev| draft.update(|d| d.lng = event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <p class="dialog__hint">{location_label}</p>
                    </fieldset>
                    <label class="dialog__label">
                        "Address *"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Street, city"
                            prop:value=move || draft.with(|d| d.address.clone())
                            on:input=move |ev| draft.update(|d| d.address = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Expires At"
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || draft.with(|d| d.expires_at.clone())
                            on:input=move |ev| draft.update(|d| d.expires_at = event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button
                            type="button"
                            class="btn"
                            disabled=move || loading.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || loading.get()>
                            {move || if loading.get() { "Creating..." } else { "Create Request" }}
                        </button>
                    </div>
                </form>
            </Show>
        </ModalFrame>
    }
}
