use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;
use crate::domain::country::Country;

/// A city properties are located in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct City {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<Country>,
}

impl EntityRecord for City {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn api_resource() -> &'static str {
        "cities"
    }

    fn message_key() -> &'static str {
        "city"
    }
}
