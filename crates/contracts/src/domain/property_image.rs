use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;
use crate::domain::property::Property;

/// One photo attached to a property listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyImage {
    pub id: Option<i64>,
    pub image_url: Option<String>,
    pub is_main: bool,
    pub caption: Option<String>,
    pub property: Option<Property>,
}

impl EntityRecord for PropertyImage {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn api_resource() -> &'static str {
        "property-images"
    }

    fn message_key() -> &'static str {
        "propertyImage"
    }
}
