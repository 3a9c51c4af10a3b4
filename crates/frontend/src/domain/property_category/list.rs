use contracts::domain::property_category::PropertyCategory;

use super::service::{property_category_service, PropertyCategoryService};
use crate::shared::context::AppContext;
use crate::shared::list_controller::ListController;

/// List view-model for the property categories screen.
pub type PropertyCategoryList = ListController<PropertyCategory, PropertyCategoryService>;

pub fn view_model(ctx: AppContext) -> PropertyCategoryList {
    ListController::new(property_category_service(), ctx)
}
