use contracts::domain::country::Country;

use crate::shared::api::entity_service::RestEntityService;

pub type CountryService = RestEntityService<Country>;

pub fn country_service() -> CountryService {
    RestEntityService::new()
}
