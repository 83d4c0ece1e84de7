//! Volunteer dashboard: donations that asked for volunteer pickup.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::request_card::FulfillmentCard;
use crate::components::toaster;
use crate::config::ClientConfig;
use crate::net::types::Fulfillment;
use crate::pages::listing::{ListingSection, render_listing};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::session;

#[component]
pub fn VolunteerDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let deliveries = LocalResource::new(move || {
        let api = config.with_value(|c| session::api(auth, c));
        async move { api.volunteer_deliveries().await }
    });

    let busy = RwSignal::new(false);
    let on_accept = Callback::new(move |fulfillment: Fulfillment| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = config.with_value(|c| session::api(auth, c));
        leptos::task::spawn_local(async move {
            match api.accept_delivery(&fulfillment.id).await {
                Ok(_) => {
                    toaster::success(toasts, "Delivery accepted!");
                    deliveries.refetch();
                }
                Err(err) => toaster::error(toasts, err.user_message("Failed to accept delivery")),
            }
            busy.set(false);
        });
    });

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="Volunteer Dashboard" />
            <ListingSection title="Deliveries Needing Pickup">
                <Suspense fallback=move || view! { <p>"Loading deliveries..."</p> }>
                    {move || {
                        deliveries
                            .get()
                            .map(|result| {
                                render_listing(
                                    result,
                                    "No deliveries waiting. Thank you for standing by!",
                                    "Failed to load deliveries",
                                    move |fulfillment| {
                                        view! { <FulfillmentCard fulfillment=fulfillment action=("Accept", on_accept) /> }
                                            .into_any()
                                    },
                                )
                            })
                    }}
                </Suspense>
            </ListingSection>
        </div>
    }
}
