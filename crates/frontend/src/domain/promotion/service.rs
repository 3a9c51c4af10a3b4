use contracts::domain::promotion::Promotion;

use crate::shared::api::entity_service::RestEntityService;

pub type PromotionService = RestEntityService<Promotion>;

pub fn promotion_service() -> PromotionService {
    RestEntityService::new()
}
