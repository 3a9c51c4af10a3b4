use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;
use crate::domain::property::Property;
use crate::system::users::User;

/// A guest's rating of a property after a stay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    pub id: Option<i64>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub review_date: Option<DateTime<Utc>>,
    pub author: Option<User>,
    pub property: Option<Property>,
}

impl EntityRecord for Review {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn api_resource() -> &'static str {
        "reviews"
    }

    fn message_key() -> &'static str {
        "review"
    }
}
