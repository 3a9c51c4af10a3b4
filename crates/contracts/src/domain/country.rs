use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;

/// A country cities belong to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub phone_code: Option<String>,
}

impl EntityRecord for Country {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn api_resource() -> &'static str {
        "countries"
    }

    fn message_key() -> &'static str {
        "country"
    }
}
