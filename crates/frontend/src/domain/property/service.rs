use contracts::domain::property::Property;

use crate::shared::api::entity_service::RestEntityService;

pub type PropertyService = RestEntityService<Property>;

pub fn property_service() -> PropertyService {
    RestEntityService::new()
}
