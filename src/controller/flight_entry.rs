use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::get_user::get_current_user,
    data::flight_entry::FlightEntryRepository,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        flight_entry::{
            CreateFlightEntryDto, FlightEntryDto, FlightEntryQueryParams, UpdateFlightEntryDto,
        },
    },
};

pub static FLIGHT_ENTRY_TAG: &str = "flight-entry";

/// Fetches the entry and confirms it belongs to `user_id`.
///
/// An entry owned by someone else reports not-found rather than forbidden so
/// the API does not leak which entry ids exist.
async fn get_owned_entry(
    state: &AppState,
    user_id: i32,
    entry_id: i32,
) -> Result<entity::flight_entry::Model, Error> {
    let entry_repository = FlightEntryRepository::new(&state.db);

    entry_repository
        .get_by_id(entry_id)
        .await?
        .filter(|entry| entry.user_id == user_id)
        .ok_or(Error::FlightEntryNotFound(entry_id))
}

/// List the current user's logbook entries, newest date first
///
/// # Responses
/// - 200 (OK): The entries, optionally narrowed to one verified corpus flight
/// - 404 (Not Found): No user exists for the configured email hash
/// - 500 (Internal Server Error): A database-related error
#[utoipa::path(
    get,
    path = "/api/v1/flight_entry",
    tag = FLIGHT_ENTRY_TAG,
    params(FlightEntryQueryParams),
    responses(
        (status = 200, description = "The current user's logbook entries", body = Vec<FlightEntryDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_flight_entries(
    State(state): State<AppState>,
    Query(params): Query<FlightEntryQueryParams>,
) -> Result<impl IntoResponse, Error> {
    let user = get_current_user(&state).await?;

    let entry_repository = FlightEntryRepository::new(&state.db);
    let entries = entry_repository
        .get_many_by_user_id(user.id, params.flight_id)
        .await?;

    let entry_dtos: Vec<FlightEntryDto> = entries.into_iter().map(FlightEntryDto::from).collect();

    Ok((StatusCode::OK, Json(entry_dtos)))
}

/// Create a logbook entry for the current user
///
/// # Responses
/// - 201 (Created): The created entry
/// - 404 (Not Found): No user exists for the configured email hash
/// - 500 (Internal Server Error): A database-related error
#[utoipa::path(
    post,
    path = "/api/v1/flight_entry",
    tag = FLIGHT_ENTRY_TAG,
    request_body = CreateFlightEntryDto,
    responses(
        (status = 201, description = "Logbook entry created", body = FlightEntryDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateFlightEntryDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_current_user(&state).await?;

    let entry_repository = FlightEntryRepository::new(&state.db);
    let entry = entry_repository.create(user.id, body).await?;

    Ok((StatusCode::CREATED, Json(FlightEntryDto::from(entry))))
}

/// Get one of the current user's logbook entries
///
/// # Responses
/// - 200 (OK): The entry
/// - 404 (Not Found): The entry does not exist or belongs to another user
/// - 500 (Internal Server Error): A database-related error
#[utoipa::path(
    get,
    path = "/api/v1/flight_entry/{id}",
    tag = FLIGHT_ENTRY_TAG,
    params(("id" = i32, Path, description = "Logbook entry ID")),
    responses(
        (status = 200, description = "The logbook entry", body = FlightEntryDto),
        (status = 404, description = "Flight entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_current_user(&state).await?;

    let entry = get_owned_entry(&state, user.id, id).await?;

    Ok((StatusCode::OK, Json(FlightEntryDto::from(entry))))
}

/// Partially update one of the current user's logbook entries
///
/// # Responses
/// - 200 (OK): The updated entry
/// - 404 (Not Found): The entry does not exist or belongs to another user
/// - 500 (Internal Server Error): A database-related error
#[utoipa::path(
    patch,
    path = "/api/v1/flight_entry/{id}",
    tag = FLIGHT_ENTRY_TAG,
    params(("id" = i32, Path, description = "Logbook entry ID")),
    request_body = UpdateFlightEntryDto,
    responses(
        (status = 200, description = "Logbook entry updated", body = FlightEntryDto),
        (status = 404, description = "Flight entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateFlightEntryDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_current_user(&state).await?;

    get_owned_entry(&state, user.id, id).await?;

    let entry_repository = FlightEntryRepository::new(&state.db);
    let entry = entry_repository
        .update(id, body)
        .await?
        .ok_or(Error::FlightEntryNotFound(id))?;

    Ok((StatusCode::OK, Json(FlightEntryDto::from(entry))))
}

/// Delete one of the current user's logbook entries
///
/// # Responses
/// - 200 (OK): The deleted entry
/// - 404 (Not Found): The entry does not exist or belongs to another user
/// - 500 (Internal Server Error): A database-related error
#[utoipa::path(
    delete,
    path = "/api/v1/flight_entry/{id}",
    tag = FLIGHT_ENTRY_TAG,
    params(("id" = i32, Path, description = "Logbook entry ID")),
    responses(
        (status = 200, description = "Logbook entry deleted", body = FlightEntryDto),
        (status = 404, description = "Flight entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_current_user(&state).await?;

    let entry = get_owned_entry(&state, user.id, id).await?;

    let entry_repository = FlightEntryRepository::new(&state.db);
    entry_repository.delete(entry.id).await?;

    Ok((StatusCode::OK, Json(FlightEntryDto::from(entry))))
}
