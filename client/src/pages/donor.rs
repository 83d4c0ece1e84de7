//! Donor dashboard: open requests to fulfill and the donor's own donations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The donor's position is looked up once on mount and handed to the
//! fulfill dialog as the default geo tag. A failed lookup is not surfaced;
//! the dialog still offers its own capture button.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::fulfill_request_modal::FulfillRequestModal;
use crate::components::request_card::{FulfillmentCard, RequestCard};
use crate::config::ClientConfig;
use crate::net::types::{FoodRequest, GeoPoint};
use crate::pages::listing::{ListingSection, render_listing};
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::geolocation;
use crate::util::session;

#[component]
pub fn DonorDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let available = LocalResource::new(move || {
        let api = config.with_value(|c| session::api(auth, c));
        async move { api.available_requests().await }
    });
    let donations = LocalResource::new(move || {
        let api = config.with_value(|c| session::api(auth, c));
        async move { api.my_fulfillments().await }
    });

    let user_location = RwSignal::new(None::<GeoPoint>);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(point) = geolocation::current_position().await {
            user_location.set(Some(point));
        }
    });

    let selected = RwSignal::new(None::<FoodRequest>);
    let on_fulfill = Callback::new(move |request: FoodRequest| selected.set(Some(request)));
    let on_close = Callback::new(move |()| selected.set(None));
    let on_donated = Callback::new(move |()| {
        available.refetch();
        donations.refetch();
    });

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="Donor Dashboard" />
            <ListingSection title="Requests Needing Food">
                <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                    {move || {
                        available
                            .get()
                            .map(|result| {
                                render_listing(
                                    result,
                                    "No open requests right now. Check back soon!",
                                    "Failed to load requests",
                                    move |request| {
                                        view! { <RequestCard request=request action=("Fulfill", on_fulfill) /> }
                                            .into_any()
                                    },
                                )
                            })
                    }}
                </Suspense>
            </ListingSection>
            <ListingSection title="Your Donations">
                <Suspense fallback=move || view! { <p>"Loading donations..."</p> }>
                    {move || {
                        donations
                            .get()
                            .map(|result| {
                                render_listing(
                                    result,
                                    "You have not donated yet.",
                                    "Failed to load donations",
                                    |fulfillment| view! { <FulfillmentCard fulfillment=fulfillment /> }.into_any(),
                                )
                            })
                    }}
                </Suspense>
            </ListingSection>
            {move || {
                selected
                    .get()
                    .map(|request| {
                        view! {
                            <FulfillRequestModal
                                request=request
                                user_location=user_location.get_untracked()
                                on_close=on_close
                                on_success=on_donated
                            />
                        }
                    })
            }}
        </div>
    }
}
