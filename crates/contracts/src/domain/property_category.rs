use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;
use crate::domain::property::Property;

/// A classification a property can be filed under (villa, loft, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyCategory {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::domain::common::serde_util::null_as_empty")]
    pub properties: Vec<Property>,
}

impl EntityRecord for PropertyCategory {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn api_resource() -> &'static str {
        "property-categories"
    }

    fn message_key() -> &'static str {
        "propertyCategory"
    }
}
