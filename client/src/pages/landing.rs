//! Public landing page.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::AUTH_PATH;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Onboarded users jump straight to their dashboard; everyone else signs in.
    let cta_href = move || {
        auth.with(|s| match s.user.as_ref() {
            Some(user) if user.phone_verified => user.role.map_or_else(|| AUTH_PATH.to_owned(), Role::dashboard_path),
            _ => AUTH_PATH.to_owned(),
        })
    };
    let cta_label = move || if auth.with(AuthState::is_authenticated) { "Go to Dashboard" } else { "Get Started" };

    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1 class="landing-page__title">"SmartPlate"</h1>
                <p class="landing-page__tagline">"Rescue surplus food. Feed communities."</p>
                <p class="landing-page__lede">
                    "NGOs post what they need, donors fulfill it, and volunteers close the last mile."
                </p>
                <a class="btn btn--primary landing-page__cta" href=cta_href>
                    {cta_label}
                </a>
            </header>
            <section class="landing-page__roles">
                {Role::SELECTABLE
                    .into_iter()
                    .map(|role| {
                        view! {
                            <article class="landing-page__role">
                                <h2>{role.title()}</h2>
                                <p>{role.description()}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
