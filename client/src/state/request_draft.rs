//! Create-request form state for NGOs.
//!
//! DESIGN
//! ======
//! The draft holds raw input values; [`RequestDraft::to_payload`] is the only
//! path to a [`CreateRequestPayload`], so an invalid draft can never reach the
//! network.

#[cfg(test)]
#[path = "request_draft_test.rs"]
mod request_draft_test;

use crate::net::types::{CreateRequestPayload, FoodCategory, FoodType, GeoPoint, UrgencyLevel, Verification};
use crate::state::draft::{DraftError, parse_quantity};
use crate::util::datetime::local_input_to_utc_iso;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestDraft {
    pub food_type: Option<FoodType>,
    pub food_category: Option<FoodCategory>,
    pub quantity: String,
    pub urgency_level: UrgencyLevel,
    pub description: String,
    /// Raw latitude input; a location exists only when both coordinates parse.
    pub lat: String,
    pub lng: String,
    pub address: String,
    /// Raw `datetime-local` value; empty means no expiry.
    pub expires_at: String,
}

impl RequestDraft {
    /// Fresh draft prefilled from the NGO's verification metadata.
    #[must_use]
    pub fn for_ngo(verification: Option<&Verification>) -> Self {
        let mut draft = Self {
            address: verification.and_then(Verification::full_address).unwrap_or_default(),
            ..Self::default()
        };
        if let Some(point) = verification.and_then(|v| v.location) {
            draft.set_location(point);
        }
        draft
    }

    /// The picked location, if both coordinates are valid numbers.
    #[must_use]
    pub fn location(&self) -> Option<GeoPoint> {
        let lat = parse_coordinate(&self.lat)?;
        let lng = parse_coordinate(&self.lng)?;
        Some(GeoPoint { lat, lng })
    }

    pub fn set_location(&mut self, point: GeoPoint) {
        self.lat = point.lat.to_string();
        self.lng = point.lng.to_string();
    }

    /// Copy the NGO's verified location and address into the draft.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::LocationUnavailable`] when no verified location exists.
    pub fn use_ngo_location(&mut self, verification: Option<&Verification>) -> Result<(), DraftError> {
        let verification = verification.ok_or(DraftError::LocationUnavailable)?;
        let location = verification.location.ok_or(DraftError::LocationUnavailable)?;
        self.set_location(location);
        if let Some(address) = verification.full_address() {
            self.address = address;
        }
        Ok(())
    }

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] naming the first problem found.
    pub fn to_payload(&self) -> Result<CreateRequestPayload, DraftError> {
        let (Some(food_type), Some(food_category), Some(location)) = (self.food_type, self.food_category, self.location())
        else {
            return Err(DraftError::MissingFields);
        };
        if self.quantity.trim().is_empty() || self.address.trim().is_empty() {
            return Err(DraftError::MissingFields);
        }
        let quantity = parse_quantity(&self.quantity)?;
        let expires_at = if self.expires_at.trim().is_empty() {
            None
        } else {
            Some(local_input_to_utc_iso(&self.expires_at).ok_or(DraftError::InvalidDateTime)?)
        };
        Ok(CreateRequestPayload {
            food_type,
            food_category,
            quantity,
            urgency_level: self.urgency_level,
            description: self.description.trim().to_owned(),
            location,
            address: self.address.trim().to_owned(),
            expires_at,
        })
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
