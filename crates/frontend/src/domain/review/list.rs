use contracts::domain::review::Review;

use super::service::{review_service, ReviewService};
use crate::shared::context::AppContext;
use crate::shared::list_controller::ListController;

/// List view-model for the reviews screen.
pub type ReviewList = ListController<Review, ReviewService>;

pub fn view_model(ctx: AppContext) -> ReviewList {
    ListController::new(review_service(), ctx)
}
