use super::*;

// =============================================================
// Helpers
// =============================================================

fn verification() -> Verification {
    Verification {
        location: Some(GeoPoint { lat: 19.07, lng: 72.87 }),
        address: Some("4 Marine Drive".to_owned()),
        city: Some("Mumbai".to_owned()),
        status: Some("verified".to_owned()),
    }
}

fn complete_draft() -> RequestDraft {
    RequestDraft {
        food_type: Some(FoodType::Cooked),
        food_category: Some(FoodCategory::Veg),
        quantity: "120".to_owned(),
        lat: "19.07".to_owned(),
        lng: "72.87".to_owned(),
        address: "4 Marine Drive, Mumbai".to_owned(),
        ..RequestDraft::default()
    }
}

// =============================================================
// Prefill
// =============================================================

#[test]
fn for_ngo_prefills_location_and_address() {
    let v = verification();
    let draft = RequestDraft::for_ngo(Some(&v));
    assert_eq!(draft.location(), v.location);
    assert_eq!(draft.address, "4 Marine Drive, Mumbai");
    assert_eq!(draft.urgency_level, UrgencyLevel::Medium);
    assert!(draft.food_type.is_none());
}

#[test]
fn for_ngo_without_verification_is_blank() {
    assert_eq!(RequestDraft::for_ngo(None), RequestDraft::default());
}

#[test]
fn use_ngo_location_copies_location_and_address() {
    let mut draft = RequestDraft::default();
    draft.use_ngo_location(Some(&verification())).unwrap();
    assert_eq!(draft.location(), Some(GeoPoint { lat: 19.07, lng: 72.87 }));
    assert_eq!(draft.address, "4 Marine Drive, Mumbai");
}

#[test]
fn use_ngo_location_without_location_fails() {
    let mut draft = RequestDraft::default();
    let v = Verification { location: None, ..verification() };
    assert_eq!(draft.use_ngo_location(Some(&v)), Err(DraftError::LocationUnavailable));
    assert_eq!(draft.use_ngo_location(None), Err(DraftError::LocationUnavailable));
    assert!(draft.location().is_none());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn to_payload_builds_request_body() {
    let payload = complete_draft().to_payload().unwrap();
    assert_eq!(payload.quantity, 120);
    assert_eq!(payload.urgency_level, UrgencyLevel::Medium);
    assert_eq!(payload.expires_at, None);
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["food_type"], "cooked");
    assert_eq!(json["food_category"], "veg");
    assert_eq!(json["location"], serde_json::json!({ "lat": 19.07, "lng": 72.87 }));
    assert_eq!(json["expires_at"], serde_json::Value::Null);
}

#[test]
fn to_payload_rejects_each_missing_required_field() {
    let cases = [
        RequestDraft { food_type: None, ..complete_draft() },
        RequestDraft { food_category: None, ..complete_draft() },
        RequestDraft { quantity: String::new(), ..complete_draft() },
        RequestDraft { lat: String::new(), lng: String::new(), ..complete_draft() },
        RequestDraft { address: "   ".to_owned(), ..complete_draft() },
    ];
    for draft in cases {
        assert_eq!(draft.to_payload(), Err(DraftError::MissingFields));
    }
}

#[test]
fn to_payload_rejects_half_entered_coordinates() {
    let cases = [
        RequestDraft { lng: String::new(), ..complete_draft() },
        RequestDraft { lat: String::new(), lng: "77.59".to_owned(), ..complete_draft() },
        RequestDraft { lat: "north".to_owned(), ..complete_draft() },
    ];
    for draft in cases {
        assert_eq!(draft.location(), None);
        assert_eq!(draft.to_payload(), Err(DraftError::MissingFields));
    }
}

#[test]
fn typed_coordinates_form_a_location() {
    let draft = RequestDraft { lat: " 12.97 ".to_owned(), lng: "77.59".to_owned(), ..RequestDraft::default() };
    assert_eq!(draft.location(), Some(GeoPoint { lat: 12.97, lng: 77.59 }));
}

#[test]
fn missing_fields_message_matches_toast_text() {
    assert_eq!(DraftError::MissingFields.to_string(), "Please fill in all required fields");
}

#[test]
fn to_payload_rejects_zero_and_non_numeric_quantity() {
    for raw in ["0", "-3", "ten", "2.5"] {
        let draft = RequestDraft { quantity: raw.to_owned(), ..complete_draft() };
        assert_eq!(draft.to_payload(), Err(DraftError::InvalidQuantity), "quantity {raw:?}");
    }
}

#[test]
fn to_payload_converts_expiry_to_utc() {
    let draft = RequestDraft { expires_at: "2025-08-01T20:00".to_owned(), ..complete_draft() };
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.expires_at.as_deref(), Some("2025-08-01T20:00:00.000Z"));
}

#[test]
fn to_payload_rejects_unparseable_expiry() {
    let draft = RequestDraft { expires_at: "someday".to_owned(), ..complete_draft() };
    assert_eq!(draft.to_payload(), Err(DraftError::InvalidDateTime));
}

#[test]
fn to_payload_trims_text_fields() {
    let draft = RequestDraft { description: "  rice and dal  ".to_owned(), ..complete_draft() };
    assert_eq!(draft.to_payload().unwrap().description, "rice and dal");
}
