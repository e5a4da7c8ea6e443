use crate::{data::user::UserRepository, error::Error, model::app::AppState};

/// Resolves the acting user from the configured email hash.
///
/// Identity provider integration is pending; until then every request is
/// attributed to the single configured user.
///
/// # Returns
/// - `Ok(`[`entity::user::Model`]`)`: The acting user
/// - `Err(Error::UserNotFound)`: No user exists for the configured email hash
/// - `Err(Error)`: A database-related error
pub async fn get_current_user(state: &AppState) -> Result<entity::user::Model, Error> {
    let user_repository = UserRepository::new(&state.db);

    user_repository
        .get_by_email_hash(&state.config.user_email_hash)
        .await?
        .ok_or_else(|| Error::UserNotFound(state.config.user_email_hash.clone()))
}
