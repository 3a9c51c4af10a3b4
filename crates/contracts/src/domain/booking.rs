use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;
use crate::domain::property::Property;
use crate::enums::BookingStatus;
use crate::system::users::User;

/// One stay reserved by a guest on a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Booking {
    pub id: Option<i64>,
    pub check_in_date: Option<DateTime<Utc>>,
    pub check_out_date: Option<DateTime<Utc>>,
    pub total_price: Option<f64>,
    pub booking_date: Option<DateTime<Utc>>,
    pub status: Option<BookingStatus>,
    pub special_requests: Option<String>,
    pub guest: Option<User>,
    pub property: Option<Property>,
}

impl EntityRecord for Booking {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn api_resource() -> &'static str {
        "bookings"
    }

    fn message_key() -> &'static str {
        "booking"
    }
}
