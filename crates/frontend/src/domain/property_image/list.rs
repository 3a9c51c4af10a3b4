use contracts::domain::property_image::PropertyImage;

use super::service::{property_image_service, PropertyImageService};
use crate::shared::context::AppContext;
use crate::shared::list_controller::ListController;

/// List view-model for the property images screen.
pub type PropertyImageList = ListController<PropertyImage, PropertyImageService>;

pub fn view_model(ctx: AppContext) -> PropertyImageList {
    ListController::new(property_image_service(), ctx)
}
