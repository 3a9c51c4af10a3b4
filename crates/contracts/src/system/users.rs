use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;

/// An account referenced by bookings (guest), properties (host) and
/// reviews (author). Managed elsewhere; only selectable here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<i64>,
    pub login: Option<String>,
}

impl EntityRecord for User {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn api_resource() -> &'static str {
        "users"
    }

    fn message_key() -> &'static str {
        "user"
    }
}
