use contracts::domain::property_image::PropertyImage;

use crate::shared::api::entity_service::RestEntityService;

pub type PropertyImageService = RestEntityService<PropertyImage>;

pub fn property_image_service() -> PropertyImageService {
    RestEntityService::new()
}
