//! NGO dashboard: the organization's own requests plus the create dialog.

use leptos::prelude::*;

use crate::components::create_request_modal::CreateRequestModal;
use crate::components::dashboard_header::DashboardHeader;
use crate::components::request_card::RequestCard;
use crate::config::ClientConfig;
use crate::pages::listing::{ListingSection, render_listing};
use crate::state::auth::AuthState;
use crate::util::session;

#[component]
pub fn NgoDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let requests = LocalResource::new(move || {
        let api = config.with_value(|c| session::api(auth, c));
        async move { api.my_requests().await }
    });

    let show_create = RwSignal::new(false);
    let on_close = Callback::new(move |()| show_create.set(false));
    let on_created = Callback::new(move |()| requests.refetch());

    view! {
        <div class="dashboard-page">
            <DashboardHeader title="NGO Dashboard">
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Create Request"
                </button>
            </DashboardHeader>
            <ListingSection title="Your Requests">
                <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                    {move || {
                        requests
                            .get()
                            .map(|result| {
                                render_listing(
                                    result,
                                    "No requests yet. Create one to start receiving donations.",
                                    "Failed to load requests",
                                    |request| view! { <RequestCard request=request /> }.into_any(),
                                )
                            })
                    }}
                </Suspense>
            </ListingSection>
            <Show when=move || show_create.get()>
                <CreateRequestModal on_close=on_close on_success=on_created />
            </Show>
        </div>
    }
}
