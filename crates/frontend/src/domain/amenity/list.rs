use contracts::domain::amenity::Amenity;

use super::service::{amenity_service, AmenityService};
use crate::shared::context::AppContext;
use crate::shared::list_controller::ListController;

/// List view-model for the amenities screen.
pub type AmenityList = ListController<Amenity, AmenityService>;

pub fn view_model(ctx: AppContext) -> AmenityList {
    ListController::new(amenity_service(), ctx)
}
