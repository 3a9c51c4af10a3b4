use contracts::domain::city::City;

use super::service::{city_service, CityService};
use crate::shared::context::AppContext;
use crate::shared::list_controller::ListController;

/// List view-model for the cities screen.
pub type CityList = ListController<City, CityService>;

pub fn view_model(ctx: AppContext) -> CityList {
    ListController::new(city_service(), ctx)
}
