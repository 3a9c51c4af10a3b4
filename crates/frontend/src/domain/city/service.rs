use contracts::domain::city::City;

use crate::shared::api::entity_service::RestEntityService;

pub type CityService = RestEntityService<City>;

pub fn city_service() -> CityService {
    RestEntityService::new()
}
