use contracts::domain::property_category::PropertyCategory;

use crate::shared::api::entity_service::RestEntityService;

pub type PropertyCategoryService = RestEntityService<PropertyCategory>;

pub fn property_category_service() -> PropertyCategoryService {
    RestEntityService::new()
}
