use contracts::domain::booking::Booking;

use crate::shared::api::entity_service::RestEntityService;

pub type BookingService = RestEntityService<Booking>;

pub fn booking_service() -> BookingService {
    RestEntityService::new()
}
