use contracts::domain::property::Property;

use super::service::{property_service, PropertyService};
use crate::shared::context::AppContext;
use crate::shared::list_controller::ListController;

/// List view-model for the properties screen.
pub type PropertyList = ListController<Property, PropertyService>;

pub fn view_model(ctx: AppContext) -> PropertyList {
    ListController::new(property_service(), ctx)
}
