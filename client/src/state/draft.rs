//! Validation failures shared by the request and fulfillment forms.

/// A draft that cannot be submitted. `Display` is the toast text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Quantity must be a whole number of at least 1")]
    InvalidQuantity,
    #[error("You can donate at most {remaining} servings")]
    ExceedsRemaining { remaining: u32 },
    #[error("This request has already been fully donated")]
    NothingRemaining,
    #[error("Please upload a photo of the food")]
    MissingPhoto,
    #[error("Please enter a valid date and time")]
    InvalidDateTime,
    #[error("NGO location not available")]
    LocationUnavailable,
}

/// Parse a servings count typed into a number input.
pub(crate) fn parse_quantity(raw: &str) -> Result<u32, DraftError> {
    match raw.trim().parse::<u32>() {
        Ok(quantity) if quantity >= 1 => Ok(quantity),
        _ => Err(DraftError::InvalidQuantity),
    }
}
