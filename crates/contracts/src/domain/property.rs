use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::amenity::Amenity;
use crate::domain::city::City;
use crate::domain::common::EntityRecord;
use crate::domain::property_category::PropertyCategory;
use crate::system::users::User;

/// A rental listing: the central record of the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<f64>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub number_of_rooms: Option<i32>,
    pub number_of_bathrooms: Option<i32>,
    pub max_guests: Option<i32>,
    pub property_size: Option<i32>,
    pub availability_start: Option<DateTime<Utc>>,
    pub availability_end: Option<DateTime<Utc>>,
    pub instant_book: bool,
    pub minimum_stay: Option<i32>,
    pub cancellation_policy: Option<String>,
    pub house_rules: Option<String>,
    pub is_active: bool,
    pub host: Option<User>,
    pub city: Option<City>,
    #[serde(deserialize_with = "crate::domain::common::serde_util::null_as_empty")]
    pub amenities: Vec<Amenity>,
    #[serde(deserialize_with = "crate::domain::common::serde_util::null_as_empty")]
    pub categories: Vec<PropertyCategory>,
}

impl EntityRecord for Property {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn api_resource() -> &'static str {
        "properties"
    }

    fn message_key() -> &'static str {
        "property"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        let json = r#"{
            "id": 17,
            "title": "Sea view flat",
            "pricePerNight": 120.5,
            "numberOfRooms": 3,
            "availabilityStart": "2025-06-01T00:00:00Z",
            "instantBook": true,
            "isActive": true,
            "city": {"id": 4, "name": "Lisbon"},
            "amenities": null,
            "categories": [{"id": 2, "name": "Apartment"}]
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, Some(17));
        assert_eq!(property.price_per_night, Some(120.5));
        assert!(property.instant_book);
        assert!(property.amenities.is_empty());
        assert_eq!(property.categories.len(), 1);
        assert_eq!(property.city.as_ref().unwrap().name.as_deref(), Some("Lisbon"));

        let back = serde_json::to_string(&property).unwrap();
        assert!(back.contains("\"pricePerNight\":120.5"));
        assert!(back.contains("\"instantBook\":true"));
    }

    #[test]
    fn test_fresh_instance_defaults() {
        let property = Property::default();
        assert_eq!(property.id, None);
        assert!(!property.instant_book);
        assert!(!property.is_active);
        assert!(property.amenities.is_empty());
        assert!(property.categories.is_empty());
    }
}
