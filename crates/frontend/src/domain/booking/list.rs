use contracts::domain::booking::Booking;

use super::service::{booking_service, BookingService};
use crate::shared::context::AppContext;
use crate::shared::list_controller::ListController;

/// List view-model for the bookings screen.
pub type BookingList = ListController<Booking, BookingService>;

pub fn view_model(ctx: AppContext) -> BookingList {
    ListController::new(booking_service(), ctx)
}
