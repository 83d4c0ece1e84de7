use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_dashboard_path_uses_lowercase_value() {
    assert_eq!(Role::Ngo.dashboard_path(), "/ngo");
    assert_eq!(Role::Donor.dashboard_path(), "/donor");
    assert_eq!(Role::Volunteer.dashboard_path(), "/volunteer");
    assert_eq!(Role::Admin.dashboard_path(), "/admin");
}

#[test]
fn role_selectable_excludes_admin() {
    assert!(!Role::SELECTABLE.contains(&Role::Admin));
    assert_eq!(Role::SELECTABLE.len(), 3);
}

#[test]
fn role_deserializes_from_lowercase() {
    let role: Role = serde_json::from_str("\"volunteer\"").unwrap();
    assert_eq!(role, Role::Volunteer);
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_with_missing_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "u-1" })).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.role, None);
    assert!(!user.phone_verified);
    assert!(user.verification.is_none());
}

#[test]
fn user_deserializes_role_and_verification() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-2",
        "name": "Asha",
        "role": "ngo",
        "phone_verified": true,
        "verification": {
            "location": { "lat": 28.6, "lng": 77.2 },
            "address": "12 Ring Road",
            "city": "Delhi"
        }
    }))
    .unwrap();
    assert_eq!(user.role, Some(Role::Ngo));
    let verification = user.verification.unwrap();
    assert_eq!(verification.location, Some(GeoPoint { lat: 28.6, lng: 77.2 }));
    assert_eq!(verification.full_address().as_deref(), Some("12 Ring Road, Delhi"));
}

#[test]
fn verification_full_address_without_city_is_address_only() {
    let v = Verification { address: Some("12 Ring Road".to_owned()), ..Verification::default() };
    assert_eq!(v.full_address().as_deref(), Some("12 Ring Road"));
}

#[test]
fn verification_full_address_requires_address() {
    let v = Verification { city: Some("Delhi".to_owned()), ..Verification::default() };
    assert_eq!(v.full_address(), None);
}

// =============================================================
// Choices
// =============================================================

#[test]
fn choice_from_value_matches_wire_values() {
    assert_eq!(FoodType::from_value("bio-waste foods"), Some(FoodType::BioWaste));
    assert_eq!(FoodCategory::from_value("non-veg"), Some(FoodCategory::NonVeg));
    assert_eq!(DeliveryMethod::from_value("self"), Some(DeliveryMethod::SelfDelivery));
    assert_eq!(DonorType::from_value("caterer"), None);
    assert_eq!(FoodType::from_value(""), None);
}

#[test]
fn choice_value_matches_serde_encoding() {
    for food_type in FoodType::ALL {
        let json = serde_json::to_value(food_type).unwrap();
        assert_eq!(json, serde_json::Value::String(food_type.value().to_owned()));
    }
    for method in DeliveryMethod::ALL {
        let json = serde_json::to_value(method).unwrap();
        assert_eq!(json, serde_json::Value::String(method.value().to_owned()));
    }
}

#[test]
fn urgency_defaults_to_medium() {
    assert_eq!(UrgencyLevel::default(), UrgencyLevel::Medium);
}

// =============================================================
// FoodRequest
// =============================================================

fn make_request(quantity: u32, fulfilled: u32) -> FoodRequest {
    FoodRequest {
        id: "r-1".to_owned(),
        ngo_name: "Helping Hands".to_owned(),
        food_type: FoodType::Cooked,
        food_category: FoodCategory::Veg,
        quantity,
        fulfilled_quantity: fulfilled,
        urgency_level: UrgencyLevel::High,
        description: String::new(),
        location: None,
        address: "12 Ring Road".to_owned(),
        status: "approved".to_owned(),
        expires_at: None,
    }
}

#[test]
fn food_request_remaining_subtracts_fulfilled() {
    assert_eq!(make_request(50, 20).remaining(), 30);
}

#[test]
fn food_request_remaining_floors_at_zero() {
    assert_eq!(make_request(10, 12).remaining(), 0);
}

#[test]
fn food_request_fulfilled_quantity_defaults_to_zero() {
    let request: FoodRequest = serde_json::from_value(serde_json::json!({
        "id": "r-9",
        "food_type": "packaged",
        "food_category": "vegan",
        "quantity": 40
    }))
    .unwrap();
    assert_eq!(request.fulfilled_quantity, 0);
    assert_eq!(request.remaining(), 40);
}
