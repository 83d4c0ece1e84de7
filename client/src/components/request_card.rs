//! Cards for food requests and fulfillments on the role dashboards.
//!
//! DESIGN
//! ======
//! Cards are presentational; dashboards pass optional action callbacks so the
//! same card serves the donor, NGO, volunteer, and admin lists.

use leptos::prelude::*;

use crate::net::types::{Choice, FoodRequest, Fulfillment, UrgencyLevel};
use crate::util::datetime::display_timestamp;

/// Request summary with an optional primary action (e.g. "Fulfill").
#[component]
pub fn RequestCard(
    request: FoodRequest,
    #[prop(optional)] action: Option<(&'static str, Callback<FoodRequest>)>,
    #[prop(optional)] secondary: Option<(&'static str, Callback<FoodRequest>)>,
) -> impl IntoView {
    let remaining = request.remaining();
    let urgency = request.urgency_level;
    let expires = request.expires_at.as_deref().map(display_timestamp);
    let buttons = [action, secondary]
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, (label, callback))| {
            let request = request.clone();
            view! {
                <button
                    class="btn"
                    class:btn--primary=index == 0
                    on:click=move |_| callback.run(request.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <article class="request-card">
            <header class="request-card__header">
                <span class="request-card__title">{request.ngo_name.clone()}</span>
                <span
                    class="badge"
                    class:badge--critical=urgency == UrgencyLevel::Critical
                    class:badge--high=urgency == UrgencyLevel::High
                >
                    {urgency.label()}
                </span>
            </header>
            <p class="request-card__meta">
                {format!("{} · {}", request.food_type.label(), request.food_category.label())}
            </p>
            <p class="request-card__quantity">
                {format!("{remaining} of {} servings still needed", request.quantity)}
            </p>
            {(!request.description.is_empty())
                .then(|| view! { <p class="request-card__description">{request.description.clone()}</p> })}
            <p class="request-card__address">{request.address.clone()}</p>
            {expires.map(|at| view! { <p class="request-card__expiry">{format!("Expires {at}")}</p> })}
            <footer class="request-card__footer">
                <span class="request-card__status">{request.status.clone()}</span>
                {buttons}
            </footer>
        </article>
    }
}

/// Fulfillment summary with an optional action pair (approve/reject, accept).
#[component]
pub fn FulfillmentCard(
    fulfillment: Fulfillment,
    #[prop(optional)] action: Option<(&'static str, Callback<Fulfillment>)>,
    #[prop(optional)] secondary: Option<(&'static str, Callback<Fulfillment>)>,
) -> impl IntoView {
    let buttons = [action, secondary]
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, (label, callback))| {
            let fulfillment = fulfillment.clone();
            view! {
                <button
                    class="btn"
                    class:btn--primary=index == 0
                    on:click=move |_| callback.run(fulfillment.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();
    let destination = fulfillment
        .ngo_name
        .clone()
        .into_iter()
        .chain(fulfillment.address.clone())
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <article class="request-card request-card--fulfillment">
            <header class="request-card__header">
                <span class="request-card__title">
                    {format!("{} servings · {}", fulfillment.quantity, fulfillment.donor_type.label())}
                </span>
                <span class="badge">{fulfillment.delivery_method.label()}</span>
            </header>
            <p class="request-card__meta">
                {format!(
                    "{} · available {}",
                    fulfillment.food_condition.label(),
                    display_timestamp(&fulfillment.availability_time),
                )}
            </p>
            {(!destination.is_empty()).then(|| view! { <p class="request-card__address">{destination}</p> })}
            <footer class="request-card__footer">
                <span class="request-card__status">{fulfillment.status.clone()}</span>
                {buttons}
            </footer>
        </article>
    }
}
