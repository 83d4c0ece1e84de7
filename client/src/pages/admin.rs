//! Admin dashboard: moderation queues for requests and fulfillments.
//!
//! Each decision is a single POST; the affected queue is refetched on
//! success so approved or rejected items drop out of the list.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::request_card::{FulfillmentCard, RequestCard};
use crate::components::toaster;
use crate::config::ClientConfig;
use crate::net::api::{Decision, ModerationQueue};
use crate::net::types::{FoodRequest, Fulfillment};
use crate::pages::listing::{ListingSection, render_listing};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::session;

fn decision_toast(decision: Decision) -> &'static str {
    match decision {
        Decision::Approve => "Approved!",
        Decision::Reject => "Rejected",
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let pending_requests = LocalResource::new(move || {
        let api = config.with_value(|c| session::api(auth, c));
        async move { api.pending_requests().await }
    });
    let pending_fulfillments = LocalResource::new(move || {
        let api = config.with_value(|c| session::api(auth, c));
        async move { api.pending_fulfillments().await }
    });

    let moderate = move |queue: ModerationQueue, id: String, decision: Decision| {
        let api = config.with_value(|c| session::api(auth, c));
        leptos::task::spawn_local(async move {
            match api.moderate(queue, &id, decision).await {
                Ok(_) => {
                    toaster::success(toasts, decision_toast(decision));
                    match queue {
                        ModerationQueue::Requests => pending_requests.refetch(),
                        ModerationQueue::Fulfillments => pending_fulfillments.refetch(),
                    }
                }
                Err(err) => toaster::error(toasts, err.user_message("Action failed")),
            }
        });
    };

    let approve_request =
        Callback::new(move |r: FoodRequest| moderate(ModerationQueue::Requests, r.id, Decision::Approve));
    let reject_request =
        Callback::new(move |r: FoodRequest| moderate(ModerationQueue::Requests, r.id, Decision::Reject));
    let approve_fulfillment =
        Callback::new(move |f: Fulfillment| moderate(ModerationQueue::Fulfillments, f.id, Decision::Approve));
    let reject_fulfillment =
        Callback::new(move |f: Fulfillment| moderate(ModerationQueue::Fulfillments, f.id, Decision::Reject));

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="Admin Dashboard" />
            <ListingSection title="Pending Requests">
                <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                    {move || {
                        pending_requests
                            .get()
                            .map(|result| {
                                render_listing(
                                    result,
                                    "No requests awaiting approval.",
                                    "Failed to load pending requests",
                                    move |request| {
                                        view! {
                                            <RequestCard
                                                request=request
                                                action=("Approve", approve_request)
                                                secondary=("Reject", reject_request)
                                            />
                                        }
                                            .into_any()
                                    },
                                )
                            })
                    }}
                </Suspense>
            </ListingSection>
            <ListingSection title="Pending Donations">
                <Suspense fallback=move || view! { <p>"Loading donations..."</p> }>
                    {move || {
                        pending_fulfillments
                            .get()
                            .map(|result| {
                                render_listing(
                                    result,
                                    "No donations awaiting approval.",
                                    "Failed to load pending donations",
                                    move |fulfillment| {
                                        view! {
                                            <FulfillmentCard
                                                fulfillment=fulfillment
                                                action=("Approve", approve_fulfillment)
                                                secondary=("Reject", reject_fulfillment)
                                            />
                                        }
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
