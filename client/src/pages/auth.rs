//! Sign-in and onboarding page: Google login, phone verification, role choice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/auth` and `/auth/google` behind `AuthRoute`. The step machine
//! lives in `state::onboarding`; this page performs the network calls and
//! turns each `NextStep` into either a visible step or a navigation.
//!
//! The OTP is not sent anywhere. "Send OTP" only reveals the code input and
//! the backend accepts any six-digit code.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::google_sign_in::GoogleSignIn;
use crate::components::toaster;
use crate::config::ClientConfig;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::onboarding::{
    AuthStep, NextStep, OTP_DIGITS, PHONE_DIGITS, after_login, after_phone_verified, digits_only, validate_otp,
    validate_phone,
};
use crate::state::toast::ToastState;
use crate::util::session;

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let navigate = use_navigate();

    let step = RwSignal::new(AuthStep::Login);
    let phone = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let otp_sent = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let destination = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(path) = destination.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    let advance = move |next: NextStep| match next {
        NextStep::Show(next_step) => step.set(next_step),
        NextStep::Navigate(path) => destination.set(Some(path)),
    };

    let on_credential = Callback::new(move |credential: String| {
        loading.set(true);
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            match session::login(auth, &config, &credential).await {
                Ok(user) => {
                    toaster::success(toasts, "Signed in successfully!");
                    advance(after_login(&user));
                }
                Err(_) => toaster::error(toasts, "Login failed. Please try again."),
            }
            loading.set(false);
        });
    });
    let on_google_error = Callback::new(move |()| toaster::error(toasts, "Google login failed"));

    let on_send_otp = Callback::new(move |()| {
        if let Err(message) = validate_phone(&phone.get_untracked()) {
            toaster::error(toasts, message);
            return;
        }
        otp_sent.set(true);
        toaster::success(toasts, "OTP sent! (For MVP, enter any 6-digit code)");
    });

    let on_verify = Callback::new(move |()| {
        if loading.get_untracked() {
            return;
        }
        let (phone_value, otp_value) = (phone.get_untracked(), otp.get_untracked());
        if let Err(message) = validate_otp(&otp_value) {
            toaster::error(toasts, message);
            return;
        }
        loading.set(true);
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            match session::verify_phone(auth, &config, &phone_value, &otp_value).await {
                Ok(()) => {
                    toaster::success(toasts, "Phone verified!");
                    advance(after_phone_verified(auth.with_untracked(AuthState::role)));
                }
                Err(err) => toaster::error(toasts, err.detail_or("Verification failed")),
            }
            loading.set(false);
        });
    });

    let on_role = Callback::new(move |role: Role| {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            match session::select_role(auth, &config, role).await {
                Ok(_) => {
                    toaster::success(toasts, format!("Welcome as {}!", role.as_str()));
                    destination.set(Some(role.dashboard_path()));
                }
                Err(err) => toaster::error(toasts, err.detail_or("Role selection failed")),
            }
            loading.set(false);
        });
    });

    let client_id = config.with_value(|c| c.google_client_id.clone());

    view! {
        <div class="login-page">
            <div class="login-page__column">
                <div class="login-page__brand">
                    <h1>"SmartPlate"</h1>
                    <p class="login-card__subtitle">"Join the food rescue movement"</p>
                </div>
                {move || match step.get() {
                    AuthStep::Login => {
                        view! {
                            <LoginStep
                                client_id=client_id.clone()
                                on_credential=on_credential
                                on_error=on_google_error
                            />
                        }
                            .into_any()
                    }
                    AuthStep::Phone => {
                        view! {
                            <PhoneStep
                                phone=phone
                                otp=otp
                                otp_sent=otp_sent
                                loading=loading
                                on_send_otp=on_send_otp
                                on_verify=on_verify
                            />
                        }
                            .into_any()
                    }
                    AuthStep::Role => view! { <RoleStep loading=loading on_role=on_role /> }.into_any(),
                }}
                <p class="login-page__trust">"Secure & Verified Platform"</p>
            </div>
        </div>
    }
}

#[component]
fn LoginStep(client_id: String, on_credential: Callback<String>, on_error: Callback<()>) -> impl IntoView {
    view! {
        <div class="login-card">
            <h2>"Welcome"</h2>
            <p class="login-card__subtitle">"Sign in with Google to get started"</p>
            <GoogleSignIn client_id=client_id on_credential=on_credential on_error=on_error />
            <p class="login-card__fine-print">
                "By signing in, you agree to our Terms of Service and Privacy Policy"
            </p>
        </div>
    }
}

#[component]
fn PhoneStep(
    phone: RwSignal<String>,
    otp: RwSignal<String>,
    otp_sent: RwSignal<bool>,
    loading: RwSignal<bool>,
    on_send_otp: Callback<()>,
    on_verify: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="login-card">
            <h2>"Phone Verification"</h2>
            <p class="login-card__subtitle">"Verify your phone number to continue"</p>
            <label class="dialog__label" for="phone">
                "Phone Number"
            </label>
            <div class="login-form__phone">
                <span class="login-form__prefix">"+91"</span>
                <input
                    id="phone"
                    class="login-input"
                    type="tel"
                    placeholder="10-digit number"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(digits_only(&event_target_value(&ev), PHONE_DIGITS))
                />
            </div>
            <Show
                when=move || otp_sent.get()
                fallback=move || {
                    view! {
                        <button class="btn btn--primary login-button" on:click=move |_| on_send_otp.run(())>
                            "Send OTP"
                        </button>
                    }
                }
            >
                <label class="dialog__label" for="otp">
                    "Enter OTP"
                </label>
                <input
                    id="otp"
                    class="login-input"
                    type="text"
                    inputmode="numeric"
                    placeholder="6-digit OTP"
                    prop:value=move || otp.get()
                    on:input=move |ev| otp.set(digits_only(&event_target_value(&ev), OTP_DIGITS))
                />
                <p class="login-card__fine-print">"MVP Mode: Enter any 6-digit code"</p>
                <button
                    class="btn btn--primary login-button"
                    disabled=move || loading.get()
                    on:click=move |_| on_verify.run(())
                >
                    {move || if loading.get() { "Verifying..." } else { "Verify & Continue" }}
                </button>
            </Show>
        </div>
    }
}

#[component]
fn RoleStep(loading: RwSignal<bool>, on_role: Callback<Role>) -> impl IntoView {
    view! {
        <div class="login-roles">
            <h2>"Choose Your Role"</h2>
            <p class="login-card__subtitle">"Select how you want to contribute"</p>
            {Role::SELECTABLE
                .into_iter()
                .map(|role| {
                    view! {
                        <button
                            class="login-roles__option"
                            disabled=move || loading.get()
                            on:click=move |_| on_role.run(role)
                        >
                            <span class="login-roles__title">{role.title()}</span>
                            <span class="login-roles__description">{role.description()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
