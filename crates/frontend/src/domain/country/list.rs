use contracts::domain::country::Country;

use super::service::{country_service, CountryService};
use crate::shared::context::AppContext;
use crate::shared::list_controller::ListController;

/// List view-model for the countries screen.
pub type CountryList = ListController<Country, CountryService>;

pub fn view_model(ctx: AppContext) -> CountryList {
    ListController::new(country_service(), ctx)
}
