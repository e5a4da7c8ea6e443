use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sha2::{Digest, Sha256};

use crate::{
    data::user::UserRepository,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        user::{CreateUserDto, UserDto},
    },
};

pub static USER_TAG: &str = "user";

/// Create a new user
///
/// The hex SHA-256 of the email address doubles as the user's lookup key until
/// identity provider integration lands.
///
/// # Responses
/// - 201 (Created): The created user
/// - 500 (Internal Server Error): A database-related error, including a duplicate email
#[utoipa::path(
    post,
    path = "/api/v1/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let email_hash = format!("{:x}", Sha256::digest(body.email.as_bytes()));

    let user = user_repository
        .create(body.name, body.email, email_hash, body.license_number)
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}
