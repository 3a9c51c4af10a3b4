use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;
use crate::domain::property::Property;

/// A feature a property can offer (wifi, parking, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amenity {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub icon_class: Option<String>,
    #[serde(deserialize_with = "crate::domain::common::serde_util::null_as_empty")]
    pub properties: Vec<Property>,
}

impl EntityRecord for Amenity {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn api_resource() -> &'static str {
        "amenities"
    }

    fn message_key() -> &'static str {
        "amenity"
    }
}
