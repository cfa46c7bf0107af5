use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use super::domain::RegistrationSubmission;
use super::roster::RosterProvider;
use super::service::{RegistrationService, RegistrationServiceError};
use super::store::RegistrationStore;

/// Router exposing the roster, validation, price preview and registration endpoints.
pub fn registration_router<P, S>(service: Arc<RegistrationService<P, S>>) -> Router
where
    P: RosterProvider + 'static,
    S: RegistrationStore + 'static,
{
    Router::new()
        .route("/api/v1/employees", get(employees_handler::<P, S>))
        .route("/api/v1/registrations", post(submit_handler::<P, S>))
        .route(
            "/api/v1/registrations/validate",
            post(validate_handler::<P, S>),
        )
        .route("/api/v1/registrations/quote", post(quote_handler::<P, S>))
        .with_state(service)
}

pub(crate) async fn employees_handler<P, S>(
    State(service): State<Arc<RegistrationService<P, S>>>,
) -> Response
where
    P: RosterProvider + 'static,
    S: RegistrationStore + 'static,
{
    match service.employees() {
        Ok(roster) => {
            let employees: Vec<&str> = roster.employees().collect();
            (StatusCode::OK, axum::Json(json!({ "employees": employees }))).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn validate_handler<P, S>(
    State(service): State<Arc<RegistrationService<P, S>>>,
    payload: Result<axum::Json<RegistrationSubmission>, JsonRejection>,
) -> Response
where
    P: RosterProvider + 'static,
    S: RegistrationStore + 'static,
{
    let axum::Json(submission) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.validate(submission) {
        Ok(()) => {
            let payload = json!({ "message": "Validation successful!" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn quote_handler<P, S>(
    State(service): State<Arc<RegistrationService<P, S>>>,
    payload: Result<axum::Json<RegistrationSubmission>, JsonRejection>,
) -> Response
where
    P: RosterProvider + 'static,
    S: RegistrationStore + 'static,
{
    let axum::Json(submission) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.quote(submission) {
        Ok(quote) => {
            let payload = json!({
                "totalPrice": quote.total_price,
                "components": quote.components,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn submit_handler<P, S>(
    State(service): State<Arc<RegistrationService<P, S>>>,
    payload: Result<axum::Json<RegistrationSubmission>, JsonRejection>,
) -> Response
where
    P: RosterProvider + 'static,
    S: RegistrationStore + 'static,
{
    let axum::Json(submission) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.submit(submission) {
        Ok(record) => {
            let payload = json!({
                "message": "Registration successful!",
                "registrationId": record.id.0,
                "totalPrice": record.registration.total_price,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

/// Malformed bodies are reported like validation failures so clients always get JSON back.
fn rejection_response(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({ "error": rejection.body_text() })),
    )
        .into_response()
}

fn error_response(err: RegistrationServiceError) -> Response {
    let (status, payload) = match err {
        RegistrationServiceError::Validation(reason) => (
            StatusCode::BAD_REQUEST,
            json!({ "error": reason.to_string() }),
        ),
        RegistrationServiceError::Pricing(reason) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "error": "price unavailable",
                "detail": reason.to_string(),
            }),
        ),
        RegistrationServiceError::Store(err) => {
            error!(error = %err, "registration store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Error inserting data into the database" }),
            )
        }
        RegistrationServiceError::Roster(err) => {
            error!(error = %err, "roster provider failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "An unexpected error occurred. Please try again later." }),
            )
        }
    };

    (status, axum::Json(payload)).into_response()
}
