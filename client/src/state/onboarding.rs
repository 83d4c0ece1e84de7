//! Auth page step machine: login → phone → role.
//!
//! The page drives these pure transitions and only performs navigation and
//! network calls itself.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use crate::net::types::{Role, User};

pub const PHONE_DIGITS: usize = 10;
pub const OTP_DIGITS: usize = 6;

/// Visible step of the auth page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStep {
    #[default]
    Login,
    Phone,
    Role,
}

/// Where the auth page goes after a successful transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NextStep {
    Show(AuthStep),
    Navigate(String),
}

/// Route a freshly signed-in user.
#[must_use]
pub fn after_login(user: &User) -> NextStep {
    match (user.phone_verified, user.role) {
        (true, Some(role)) => NextStep::Navigate(role.dashboard_path()),
        (true, None) => NextStep::Show(AuthStep::Role),
        (false, _) => NextStep::Show(AuthStep::Phone),
    }
}

/// Route a user whose phone was just verified.
#[must_use]
pub fn after_phone_verified(role: Option<Role>) -> NextStep {
    role.map_or(NextStep::Show(AuthStep::Role), |r| NextStep::Navigate(r.dashboard_path()))
}

/// Keep only ASCII digits, truncated to `max` characters.
#[must_use]
pub fn digits_only(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Check the phone number before an OTP is sent.
///
/// # Errors
///
/// Returns the toast text when the number is not exactly ten digits.
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Please enter a valid 10-digit phone number")
    }
}

/// Check the OTP before verification.
///
/// # Errors
///
/// Returns the toast text when the code is not exactly six digits.
pub fn validate_otp(otp: &str) -> Result<(), &'static str> {
    if otp.len() == OTP_DIGITS && otp.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Please enter a valid 6-digit OTP")
    }
}
