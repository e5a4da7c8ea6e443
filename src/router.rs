//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to serve interactive documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which
/// are collected into a unified OpenAPI document served at
/// `/api/docs/openapi.json`. Handlers sharing a path are registered in one
/// `routes!` call so the method routers merge instead of conflicting.
///
/// # Registered Endpoints
/// - `GET /api/v1/health` - Liveness check
/// - `POST /api/v1/verify` - Verify a reported flight against the corpus
/// - `POST /api/v1/user` - Create a user
/// - `GET /api/v1/flight_entry` - List the current user's logbook entries
/// - `POST /api/v1/flight_entry` - Create a logbook entry
/// - `GET /api/v1/flight_entry/{id}` - Get a logbook entry
/// - `PATCH /api/v1/flight_entry/{id}` - Update a logbook entry
/// - `DELETE /api/v1/flight_entry/{id}` - Delete a logbook entry
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served
/// once application state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pilotlog", description = "Pilotlog API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Health check API routes"),
        (name = controller::verification::VERIFY_TAG, description = "Flight verification API routes"),
        (name = controller::user::USER_TAG, description = "User management API routes"),
        (name = controller::flight_entry::FLIGHT_ENTRY_TAG, description = "Logbook entry API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::get_health))
        .routes(routes!(controller::verification::verify_flight))
        .routes(routes!(controller::user::create_user))
        .routes(routes!(
            controller::flight_entry::list_flight_entries,
            controller::flight_entry::create_flight_entry
        ))
        .routes(routes!(
            controller::flight_entry::get_flight_entry,
            controller::flight_entry::update_flight_entry,
            controller::flight_entry::delete_flight_entry
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
