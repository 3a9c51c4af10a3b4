use contracts::domain::amenity::Amenity;

use crate::shared::api::entity_service::RestEntityService;

pub type AmenityService = RestEntityService<Amenity>;

pub fn amenity_service() -> AmenityService {
    RestEntityService::new()
}
