use super::*;
use crate::net::types::{FoodCategory, FoodType, UrgencyLevel};

// =============================================================
// Helpers
// =============================================================

fn make_request(quantity: u32, fulfilled: u32) -> FoodRequest {
    FoodRequest {
        id: "req-42".to_owned(),
        ngo_name: "Annapurna Trust".to_owned(),
        food_type: FoodType::Cooked,
        food_category: FoodCategory::Mixed,
        quantity,
        fulfilled_quantity: fulfilled,
        urgency_level: UrgencyLevel::Critical,
        description: String::new(),
        location: None,
        address: "Sector 5".to_owned(),
        status: "approved".to_owned(),
        expires_at: None,
    }
}

fn complete_draft(quantity: &str) -> FulfillmentDraft {
    FulfillmentDraft {
        donor_type: Some(DonorType::Restaurant),
        quantity: quantity.to_owned(),
        food_condition: Some(FoodCondition::Fresh),
        availability_time: "2025-05-10T12:00".to_owned(),
        delivery_method: Some(DeliveryMethod::Volunteer),
        food_photo: Some("file-9".to_owned()),
        geo_tag: Some(GeoPoint { lat: 12.97, lng: 77.59 }),
    }
}

// =============================================================
// Prefill
// =============================================================

#[test]
fn for_request_defaults_quantity_to_remaining() {
    let draft = FulfillmentDraft::for_request(&make_request(100, 35), None);
    assert_eq!(draft.quantity, "65");
    assert!(draft.geo_tag.is_none());
}

#[test]
fn for_request_uses_known_user_location() {
    let here = GeoPoint { lat: 1.0, lng: 2.0 };
    let draft = FulfillmentDraft::for_request(&make_request(10, 0), Some(here));
    assert_eq!(draft.geo_tag, Some(here));
}

#[test]
fn for_request_leaves_quantity_blank_when_nothing_remains() {
    let draft = FulfillmentDraft::for_request(&make_request(10, 10), None);
    assert!(draft.quantity.is_empty());
}

// =============================================================
// Quantity cap
// =============================================================

#[test]
fn check_quantity_accepts_up_to_remaining() {
    assert_eq!(check_quantity("30", 30), Ok(30));
    assert_eq!(check_quantity("1", 30), Ok(1));
}

#[test]
fn check_quantity_rejects_values_above_remaining() {
    assert_eq!(check_quantity("31", 30), Err(DraftError::ExceedsRemaining { remaining: 30 }));
}

#[test]
fn check_quantity_rejects_when_request_is_full() {
    assert_eq!(check_quantity("1", 0), Err(DraftError::NothingRemaining));
}

#[test]
fn to_payload_rejects_quantity_above_remaining_before_submission() {
    let request = make_request(50, 45);
    let draft = complete_draft("6");
    assert_eq!(draft.to_payload(&request), Err(DraftError::ExceedsRemaining { remaining: 5 }));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn to_payload_builds_fulfillment_body() {
    let request = make_request(50, 10);
    let payload = complete_draft("40").to_payload(&request).unwrap();
    assert_eq!(payload.request_id, "req-42");
    assert_eq!(payload.quantity, 40);
    assert_eq!(payload.availability_time, "2025-05-10T12:00:00.000Z");
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["delivery_method"], "volunteer");
    assert_eq!(json["donor_type"], "restaurant");
    assert_eq!(json["food_photo"], "file-9");
}

#[test]
fn to_payload_requires_all_fields_before_photo() {
    let request = make_request(50, 0);
    let draft = FulfillmentDraft { delivery_method: None, food_photo: None, ..complete_draft("5") };
    assert_eq!(draft.to_payload(&request), Err(DraftError::MissingFields));
    let draft = FulfillmentDraft { availability_time: String::new(), ..complete_draft("5") };
    assert_eq!(draft.to_payload(&request), Err(DraftError::MissingFields));
}

#[test]
fn to_payload_requires_photo() {
    let request = make_request(50, 0);
    let draft = FulfillmentDraft { food_photo: None, ..complete_draft("5") };
    assert_eq!(draft.to_payload(&request), Err(DraftError::MissingPhoto));
    assert_eq!(DraftError::MissingPhoto.to_string(), "Please upload a photo of the food");
}

#[test]
fn to_payload_allows_missing_geo_tag() {
    let request = make_request(50, 0);
    let draft = FulfillmentDraft { geo_tag: None, ..complete_draft("5") };
    assert_eq!(draft.to_payload(&request).unwrap().geo_tag, None);
}

// =============================================================
// Photo upload + preview
// =============================================================

#[test]
fn photo_upload_failed_clears_photo_with_fixed_text() {
    let mut draft = complete_draft("5");
    assert_eq!(draft.photo_upload_failed(), "Failed to upload photo");
    assert_eq!(draft.food_photo, None);
    assert_eq!(draft.to_payload(&make_request(10, 0)), Err(DraftError::MissingPhoto));
}

#[test]
fn photo_preview_replace_hands_back_stale_url() {
    let mut preview = PhotoPreview::default();
    assert_eq!(preview.replace(Some("blob:first".to_owned())), None);
    assert_eq!(preview.replace(Some("blob:second".to_owned())).as_deref(), Some("blob:first"));
    assert_eq!(preview.url(), Some("blob:second"));
    assert_eq!(preview.replace(None).as_deref(), Some("blob:second"));
    assert_eq!(preview.url(), None);
}
