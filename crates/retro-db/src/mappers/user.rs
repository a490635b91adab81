//! User entity <-> model mapper

use retro_core::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            preferred_name: model.preferred_name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
