//! Wire DTOs for the SmartPlate REST API.
//!
//! DESIGN
//! ======
//! Enumerations that back `<select>` inputs implement [`Choice`] so forms can
//! render options and map raw select values without repeating match arms.
//! Field names mirror the backend JSON so serde stays attribute-light.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A closed set of options rendered as a form select.
pub trait Choice: Copy + Sized + 'static {
    /// Every option in display order.
    const ALL: &'static [Self];

    /// Wire value, also used as the `<option value>`.
    fn value(self) -> &'static str;

    /// Human-readable option text.
    fn label(self) -> &'static str;

    /// Map a raw select value back to an option.
    fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == raw)
    }
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Account role. Each role owns exactly one dashboard route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ngo,
    Donor,
    Volunteer,
    Admin,
}

impl Role {
    /// Roles a user may pick during onboarding. Admins are provisioned by the backend.
    pub const SELECTABLE: [Role; 3] = [Role::Ngo, Role::Donor, Role::Volunteer];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Ngo => "ngo",
            Role::Donor => "donor",
            Role::Volunteer => "volunteer",
            Role::Admin => "admin",
        }
    }

    /// Route of this role's dashboard, e.g. `/donor`.
    #[must_use]
    pub fn dashboard_path(self) -> String {
        format!("/{}", self.as_str())
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Role::Ngo => "NGO",
            Role::Donor => "Donor",
            Role::Volunteer => "Volunteer",
            Role::Admin => "Admin",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Role::Ngo => "Represent communities in need and receive food donations",
            Role::Donor => "Donate surplus food to help reduce waste and hunger",
            Role::Volunteer => "Help with last-mile delivery of food donations",
            Role::Admin => "Approve and moderate platform activity",
        }
    }
}

/// A latitude/longitude pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// NGO verification metadata attached to the user record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Verification {
    pub location: Option<GeoPoint>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub status: Option<String>,
}

impl Verification {
    /// `"{address}, {city}"`, or just the address when no city is recorded.
    #[must_use]
    pub fn full_address(&self) -> Option<String> {
        let address = self.address.as_deref().filter(|a| !a.is_empty())?;
        match self.city.as_deref().filter(|c| !c.is_empty()) {
            Some(city) => Some(format!("{address}, {city}")),
            None => Some(address.to_owned()),
        }
    }
}

/// The signed-in user as returned by `/api/auth/me` and the login endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phone_verified: bool,
    #[serde(default)]
    pub verification: Option<Verification>,
}

/// Body returned by `POST /api/auth/google` and `POST /api/auth/select-role`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// =============================================================================
// FORM CHOICES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodType {
    #[serde(rename = "cooked")]
    Cooked,
    #[serde(rename = "packaged")]
    Packaged,
    #[serde(rename = "raw")]
    Raw,
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(rename = "bio-waste foods")]
    BioWaste,
}

impl Choice for FoodType {
    const ALL: &'static [Self] = &[Self::Cooked, Self::Packaged, Self::Raw, Self::Mixed, Self::BioWaste];

    fn value(self) -> &'static str {
        match self {
            Self::Cooked => "cooked",
            Self::Packaged => "packaged",
            Self::Raw => "raw",
            Self::Mixed => "mixed",
            Self::BioWaste => "bio-waste foods",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Cooked => "Cooked Food",
            Self::Packaged => "Packaged Food",
            Self::Raw => "Raw Ingredients",
            Self::Mixed => "Mixed",
            Self::BioWaste => "Bio-waste Foods",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
    #[serde(rename = "vegan")]
    Vegan,
    #[serde(rename = "bio-waste")]
    BioWaste,
    #[serde(rename = "mixed")]
    Mixed,
}

impl Choice for FoodCategory {
    const ALL: &'static [Self] = &[Self::Veg, Self::NonVeg, Self::Vegan, Self::BioWaste, Self::Mixed];

    fn value(self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
            Self::Vegan => "vegan",
            Self::BioWaste => "bio-waste",
            Self::Mixed => "mixed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Veg => "Vegetarian",
            Self::NonVeg => "Non-Vegetarian",
            Self::Vegan => "Vegan",
            Self::BioWaste => "Bio-waste Foods",
            Self::Mixed => "Mixed (Veg & Non-Veg)",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Choice for UrgencyLevel {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Critical];

    fn value(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low - Within a week",
            Self::Medium => "Medium - Within 2-3 days",
            Self::High => "High - Within 24 hours",
            Self::Critical => "Critical - Immediate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonorType {
    Restaurant,
    Hotel,
    Event,
    Corporate,
    Individual,
}

impl Choice for DonorType {
    const ALL: &'static [Self] = &[Self::Restaurant, Self::Hotel, Self::Event, Self::Corporate, Self::Individual];

    fn value(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Hotel => "hotel",
            Self::Event => "event",
            Self::Corporate => "corporate",
            Self::Individual => "individual",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurants & Cafés",
            Self::Hotel => "Hotels & Catering Services",
            Self::Event => "Marriage Halls & Event Organizers",
            Self::Corporate => "Corporate Offices & College Canteens",
            Self::Individual => "Households / Individuals",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCondition {
    Fresh,
    Cooked,
    Packed,
}

impl Choice for FoodCondition {
    const ALL: &'static [Self] = &[Self::Fresh, Self::Cooked, Self::Packed];

    fn value(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Cooked => "cooked",
            Self::Packed => "packed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Fresh => "Fresh - Just prepared",
            Self::Cooked => "Cooked - Within few hours",
            Self::Packed => "Packed - Sealed packaging",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryMethod {
    #[serde(rename = "self")]
    SelfDelivery,
    #[serde(rename = "volunteer")]
    Volunteer,
}

impl Choice for DeliveryMethod {
    const ALL: &'static [Self] = &[Self::SelfDelivery, Self::Volunteer];

    fn value(self) -> &'static str {
        match self {
            Self::SelfDelivery => "self",
            Self::Volunteer => "volunteer",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::SelfDelivery => "Self Delivery - I will deliver",
            Self::Volunteer => "Volunteer Delivery - Need pickup",
        }
    }
}

// =============================================================================
// RESOURCES
// =============================================================================

/// A food request posted by an NGO.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodRequest {
    pub id: String,
    #[serde(default)]
    pub ngo_name: String,
    pub food_type: FoodType,
    pub food_category: FoodCategory,
    pub quantity: u32,
    #[serde(default)]
    pub fulfilled_quantity: u32,
    #[serde(default)]
    pub urgency_level: UrgencyLevel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl FoodRequest {
    /// Servings still needed: `quantity - fulfilled_quantity`, floored at zero.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.quantity.saturating_sub(self.fulfilled_quantity)
    }
}

/// A donor's commitment against a food request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fulfillment {
    pub id: String,
    pub request_id: String,
    pub donor_type: DonorType,
    pub quantity: u32,
    pub food_condition: FoodCondition,
    pub availability_time: String,
    pub delivery_method: DeliveryMethod,
    #[serde(default)]
    pub food_photo: Option<String>,
    #[serde(default)]
    pub geo_tag: Option<GeoPoint>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub ngo_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Body of `POST /api/requests`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateRequestPayload {
    pub food_type: FoodType,
    pub food_category: FoodCategory,
    pub quantity: u32,
    pub urgency_level: UrgencyLevel,
    pub description: String,
    pub location: GeoPoint,
    pub address: String,
    pub expires_at: Option<String>,
}

/// Body of `POST /api/fulfillments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateFulfillmentPayload {
    pub request_id: String,
    pub donor_type: DonorType,
    pub quantity: u32,
    pub food_condition: FoodCondition,
    pub availability_time: String,
    pub delivery_method: DeliveryMethod,
    pub food_photo: String,
    pub geo_tag: Option<GeoPoint>,
}

/// Body returned by `POST /api/upload`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_id: String,
}
