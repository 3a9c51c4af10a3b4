use contracts::system::users::User;

use crate::shared::api::entity_service::RestEntityService;

/// Users are only read here, to populate host/guest/author selects.
pub type UserService = RestEntityService<User>;

pub fn user_service() -> UserService {
    RestEntityService::new()
}
