use contracts::domain::review::Review;

use crate::shared::api::entity_service::RestEntityService;

pub type ReviewService = RestEntityService<Review>;

pub fn review_service() -> ReviewService {
    RestEntityService::new()
}
