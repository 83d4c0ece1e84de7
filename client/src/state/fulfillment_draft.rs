//! Fulfill-request form state for donors.

#[cfg(test)]
#[path = "fulfillment_draft_test.rs"]
mod fulfillment_draft_test;

use crate::net::types::{CreateFulfillmentPayload, DeliveryMethod, DonorType, FoodCondition, FoodRequest, GeoPoint};
use crate::state::draft::{DraftError, parse_quantity};
use crate::util::datetime::local_input_to_utc_iso;

/// Toast text for any failed photo upload. Backend detail is logged, not shown.
pub const UPLOAD_FAILED: &str = "Failed to upload photo";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FulfillmentDraft {
    pub donor_type: Option<DonorType>,
    pub quantity: String,
    pub food_condition: Option<FoodCondition>,
    /// Raw `datetime-local` value.
    pub availability_time: String,
    pub delivery_method: Option<DeliveryMethod>,
    /// File id returned by the upload endpoint.
    pub food_photo: Option<String>,
    pub geo_tag: Option<GeoPoint>,
}

impl FulfillmentDraft {
    /// Fresh draft offering the whole remaining quantity.
    #[must_use]
    pub fn for_request(request: &FoodRequest, user_location: Option<GeoPoint>) -> Self {
        let remaining = request.remaining();
        Self {
            quantity: if remaining > 0 { remaining.to_string() } else { String::new() },
            geo_tag: user_location,
            ..Self::default()
        }
    }

    /// Forget the photo after a failed upload and return the toast text.
    pub fn photo_upload_failed(&mut self) -> &'static str {
        self.food_photo = None;
        UPLOAD_FAILED
    }

    /// Validate against `request` and build the fulfillment body.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] naming the first problem found.
    pub fn to_payload(&self, request: &FoodRequest) -> Result<CreateFulfillmentPayload, DraftError> {
        let (Some(donor_type), Some(food_condition), Some(delivery_method)) =
            (self.donor_type, self.food_condition, self.delivery_method)
        else {
            return Err(DraftError::MissingFields);
        };
        if self.quantity.trim().is_empty() || self.availability_time.trim().is_empty() {
            return Err(DraftError::MissingFields);
        }
        let food_photo = self.food_photo.clone().ok_or(DraftError::MissingPhoto)?;
        let quantity = check_quantity(&self.quantity, request.remaining())?;
        let availability_time =
            local_input_to_utc_iso(&self.availability_time).ok_or(DraftError::InvalidDateTime)?;
        Ok(CreateFulfillmentPayload {
            request_id: request.id.clone(),
            donor_type,
            quantity,
            food_condition,
            availability_time,
            delivery_method,
            food_photo,
            geo_tag: self.geo_tag,
        })
    }
}

/// Parse a donation quantity and cap it at the request's remaining servings.
///
/// # Errors
///
/// Returns [`DraftError::InvalidQuantity`] for non-positive or non-numeric
/// input and [`DraftError::ExceedsRemaining`] above the cap.
pub fn check_quantity(raw: &str, remaining: u32) -> Result<u32, DraftError> {
    if remaining == 0 {
        return Err(DraftError::NothingRemaining);
    }
    let quantity = parse_quantity(raw)?;
    if quantity > remaining {
        return Err(DraftError::ExceedsRemaining { remaining });
    }
    Ok(quantity)
}

/// Object URL of the local photo preview.
///
/// Every replacement hands back the previous URL so the caller can revoke it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotoPreview(Option<String>);

impl PhotoPreview {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Swap in `next`, returning the URL that is no longer displayed.
    pub fn replace(&mut self, next: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.0, next)
    }
}
