//! Donor dialog for committing food against an open request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the donor dashboard for one selected request. The photo is
//! uploaded as soon as it is picked; the returned file id is what the
//! fulfillment references. Quantity is capped at the request's remaining
//! servings before anything is sent.

use leptos::prelude::*;

use crate::components::modal::{ChoiceSelect, ModalFrame, SuccessPanel, success_pause};
use crate::components::toaster;
use crate::config::ClientConfig;
use crate::net::types::{Choice, DeliveryMethod, DonorType, FoodCondition, FoodRequest, GeoPoint};
use crate::state::auth::AuthState;
use crate::state::fulfillment_draft::{FulfillmentDraft, PhotoPreview};
use crate::state::toast::ToastState;
use crate::util::{geolocation, session};

const SUBMIT_FAILED: &str = "Failed to submit fulfillment";

fn revoke_preview(url: Option<String>) {
    #[cfg(feature = "hydrate")]
    if let Some(url) = url {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = url;
}

#[component]
pub fn FulfillRequestModal(
    request: FoodRequest,
    user_location: Option<GeoPoint>,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let request = StoredValue::new(request);

    let draft = RwSignal::new(request.with_value(|r| FulfillmentDraft::for_request(r, user_location)));
    let loading = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let locating = RwSignal::new(false);
    let success = RwSignal::new(false);
    let photo_preview = RwSignal::new(PhotoPreview::default());
    let remaining = request.with_value(FoodRequest::remaining);

    let set_preview = move |next: Option<String>| {
        revoke_preview(photo_preview.try_update(|p| p.replace(next)).flatten());
    };
    on_cleanup(move || {
        revoke_preview(photo_preview.try_update_untracked(|p| p.replace(None)).flatten());
    });

    let on_photo_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            set_preview(web_sys::Url::create_object_url_with_blob(&file).ok());
            uploading.set(true);
            let api = config.with_value(|c| session::api(auth, c));
            leptos::task::spawn_local(async move {
                match api.upload_file(&file).await {
                    Ok(uploaded) => {
                        draft.update(|d| d.food_photo = Some(uploaded.file_id));
                        toaster::success(toasts, "Photo uploaded!");
                    }
                    Err(err) => {
                        log::warn!("photo upload failed: {err}");
                        set_preview(None);
                        let text = draft.try_update(FulfillmentDraft::photo_upload_failed);
                        toaster::error(toasts, text.unwrap_or_default());
                    }
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let capture_location = move |_| {
        if locating.get_untracked() {
            return;
        }
        locating.set(true);
        leptos::task::spawn_local(async move {
            match geolocation::current_position().await {
                Ok(point) => {
                    draft.update(|d| d.geo_tag = Some(point));
                    toaster::success(toasts, "Location captured!");
                }
                Err(err) => toaster::error(toasts, err.to_string()),
            }
            locating.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() || uploading.get_untracked() {
            return;
        }
        let payload = match request.with_value(|r| draft.with_untracked(|d| d.to_payload(r))) {
            Ok(payload) => payload,
            Err(err) => {
                toaster::error(toasts, err.to_string());
                return;
            }
        };
        loading.set(true);
        let api = config.with_value(|c| session::api(auth, c));
        leptos::task::spawn_local(async move {
            match api.create_fulfillment(&payload).await {
                Ok(_) => {
                    success.set(true);
                    toaster::success(toasts, "Donation submitted successfully! Thank you for your generosity!");
                    success_pause().await;
                    on_success.run(());
                    on_close.run(());
                    success.set(false);
                    set_preview(None);
                    draft.set(request.with_value(|r| FulfillmentDraft::for_request(r, user_location)));
                }
                Err(err) => toaster::error(toasts, err.user_message(SUBMIT_FAILED)),
            }
            loading.set(false);
        });
    };

    let summary = request.with_value(|r| {
        format!("{} · {} · {} servings remaining", r.ngo_name, r.food_type.label(), r.remaining())
    });

    view! {
        <ModalFrame
            title="Fulfill Food Request"
            subtitle=summary
            locked=Signal::derive(move || loading.get() || uploading.get())
            on_close=on_close
        >
            <Show
                when=move || !success.get()
                fallback=|| {
                    view! {
                        <SuccessPanel
                            heading="Thank You!"
                            detail="Your donation has been submitted for review."
                        />
                    }
                }
            >
                <form class="dialog__form" on:submit=on_submit>
                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Donor Type *"
                            <ChoiceSelect
                                id="donor_type"
                                placeholder="Select donor type"
                                value=Signal::derive(move || draft.with(|d| d.donor_type))
                                on_change=Callback::new(move |v: Option<DonorType>| draft.update(|d| d.donor_type = v))
                            />
                        </label>
                        <label class="dialog__label">
                            {format!("Quantity (max {remaining}) *")}
                            <input
                                class="dialog__input"
                                type="number"
                                min="1"
                                max=remaining.to_string()
                                prop:value=move || draft.with(|d| d.quantity.clone())
                                on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Food Condition *"
                            <ChoiceSelect
                                id="food_condition"
                                placeholder="Select condition"
                                value=Signal::derive(move || draft.with(|d| d.food_condition))
                                on_change=Callback::new(move |v: Option<FoodCondition>| {
                                    draft.update(|d| d.food_condition = v);
                                })
                            />
                        </label>
                        <label class="dialog__label">
                            "Delivery Method *"
                            <ChoiceSelect
                                id="delivery_method"
                                placeholder="Select delivery method"
                                value=Signal::derive(move || draft.with(|d| d.delivery_method))
                                on_change=Callback::new(move |v: Option<DeliveryMethod>| {
                                    draft.update(|d| d.delivery_method = v);
                                })
                            />
                        </label>
                    </div>
                    <label class="dialog__label">
                        "Available From *"
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || draft.with(|d| d.availability_time.clone())
                            on:input=move |ev| draft.update(|d| d.availability_time = event_target_value(&ev))
                        />
                    </label>
                    <fieldset class="dialog__fieldset">
                        <legend>"Food Photo *"</legend>
                        <label class="btn dialog__file">
                            {move || {
                                if uploading.get() {
                                    "Uploading..."
                                } else if photo_preview.with(|p| p.url().is_some()) {
                                    "Retake Photo"
                                } else {
                                    "Take or Choose Photo"
                                }
                            }}
                            <input
                                class="dialog__file-input"
                                type="file"
                                accept="image/*"
                                capture="environment"
                                disabled=move || uploading.get()
                                on:change=on_photo_change
                            />
                        </label>
                        {move || {
                            photo_preview
                                .with(|p| p.url().map(str::to_owned))
                                .map(|src| view! { <img class="dialog__photo-preview" src=src alt="Food preview" /> })
                        }}
                    </fieldset>
                    <fieldset class="dialog__fieldset">
                        <legend>"Pickup Location"</legend>
                        <button
                            type="button"
                            class="btn"
                            disabled=move || locating.get()
                            on:click=capture_location
                        >
                            {move || if locating.get() { "Locating..." } else { "Capture Location" }}
                        </button>
                        <p class="dialog__hint">
                            {move || {
                                draft.with(|d| match d.geo_tag {
                                    Some(GeoPoint { lat, lng }) => format!("{lat:.5}, {lng:.5}"),
                                    None => "Location not captured".to_owned(),
                                })
                            }}
                        </p>
                    </fieldset>
                    <div class="dialog__actions">
                        <button
                            type="button"
                            class="btn"
                            disabled=move || loading.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || loading.get() || uploading.get()
                        >
                            {move || if loading.get() { "Submitting..." } else { "Submit Donation" }}
                        </button>
                    </div>
                </form>
            </Show>
        </ModalFrame>
    }
}
