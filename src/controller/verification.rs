use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        flight::{FlightDto, VerifyFlightDto},
    },
    service::verification::VerificationService,
};

pub static VERIFY_TAG: &str = "verify";

/// Verify a reported flight against the authoritative corpus
///
/// Returns the corpus flight that plausibly corresponds to the report, or JSON
/// `null` when nothing matches; no-match is a normal 200 outcome, not an error.
/// When `flightEntryId` is supplied the match is also recorded on that logbook
/// entry, and a previously recorded match is returned directly without
/// re-searching the corpus.
///
/// # Responses
/// - 200 (OK): The matched flight, or null for no match
/// - 404 (Not Found): The referenced flight entry does not exist
/// - 500 (Internal Server Error): A database-related error
#[utoipa::path(
    post,
    path = "/api/v1/verify",
    tag = VERIFY_TAG,
    request_body = VerifyFlightDto,
    responses(
        (status = 200, description = "The matched flight, or null for no match", body = Option<FlightDto>),
        (status = 404, description = "Flight entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_flight(
    State(state): State<AppState>,
    Json(body): Json<VerifyFlightDto>,
) -> Result<impl IntoResponse, Error> {
    let verification_service = VerificationService::from_config(&state.db, &state.config);

    let matched = verification_service.verify(&body).await?;

    Ok((StatusCode::OK, Json(matched.map(FlightDto::from))))
}
