pub mod booking_status;
pub mod discount_type;

pub use booking_status::BookingStatus;
pub use discount_type::DiscountType;
