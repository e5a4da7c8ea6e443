use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No user found for email hash {0:?}")]
    UserNotFound(String),
    #[error("Flight entry ID {0} not found in database")]
    FlightEntryNotFound(i32),
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::UserNotFound(hash) => {
                debug!("Request error: {}", Error::UserNotFound(hash));

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Error::FlightEntryNotFound(entry_id) => {
                debug!("Request error: {}", Error::FlightEntryNotFound(entry_id));

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Flight entry not found".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                error!("Internal server error: {}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
