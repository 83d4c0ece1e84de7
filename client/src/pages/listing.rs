//! Shared rendering for dashboard lists backed by a `LocalResource`.

use leptos::prelude::*;

use crate::net::error::ApiError;

/// Render a fetched list: an error line, an empty-state line, or one card per item.
pub fn render_listing<T, F>(result: Result<Vec<T>, ApiError>, empty: &'static str, failed: &'static str, card: F) -> AnyView
where
    F: Fn(T) -> AnyView,
{
    match result {
        Err(err) => view! { <p class="dashboard-page__error">{err.user_message(failed)}</p> }.into_any(),
        Ok(items) if items.is_empty() => view! { <p class="dashboard-page__empty">{empty}</p> }.into_any(),
        Ok(items) => view! { <div class="dashboard-page__cards">{items.into_iter().map(card).collect_view()}</div> }
            .into_any(),
    }
}

#[component]
pub fn ListingSection(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="dashboard-page__section">
            <h2 class="dashboard-page__section-title">{title}</h2>
            {children()}
        </section>
    }
}
