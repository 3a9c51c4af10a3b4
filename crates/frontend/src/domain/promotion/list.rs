use contracts::domain::promotion::Promotion;

use super::service::{promotion_service, PromotionService};
use crate::shared::context::AppContext;
use crate::shared::list_controller::ListController;

/// List view-model for the promotions screen.
pub type PromotionList = ListController<Promotion, PromotionService>;

pub fn view_model(ctx: AppContext) -> PromotionList {
    ListController::new(promotion_service(), ctx)
}
