//! HTTP request handlers for the salary statistics API.
//!
//! Both endpoints accept a roster JSON object in the request body:
//!
//! - `POST /salaries` returns monthly salaries per subsidiary plus warnings
//! - `POST /statistics` returns the full [`PayrollReport`]

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_monthly_salaries_with, run_payroll};
use crate::data::RosterLoader;
use crate::models::{PayrollReport, SubsidiaryRoster};

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salaries", post(salaries_handler))
        .route("/statistics", post(statistics_handler))
        .with_state(state)
}

/// Handler for POST /salaries.
async fn salaries_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubsidiaryRoster>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salaries request");

    let roster = match extract_roster(correlation_id, payload) {
        Ok(roster) => roster,
        Err(error) => return error.into_response(),
    };

    match calculate_monthly_salaries_with(&roster, state.rules()) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                subsidiaries = calculation.salaries.len(),
                employees = calculation.employee_count(),
                warnings = calculation.warnings.len(),
                "Salaries calculated"
            );
            json_response(StatusCode::OK, Json(calculation))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Salary calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /statistics.
async fn statistics_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubsidiaryRoster>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statistics request");

    let roster = match extract_roster(correlation_id, payload) {
        Ok(roster) => roster,
        Err(error) => return error.into_response(),
    };

    match run_payroll(&roster, state.rules()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                employees = report.employee_count,
                duration_us = report.duration_us,
                "Statistics computed"
            );
            json_response::<PayrollReport>(StatusCode::OK, Json(report))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Statistics computation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Unwraps the JSON body, mapping extractor rejections to API errors.
fn extract_roster(
    correlation_id: Uuid,
    payload: Result<Json<SubsidiaryRoster>, JsonRejection>,
) -> Result<SubsidiaryRoster, ApiErrorResponse> {
    let roster = match payload {
        Ok(Json(roster)) => roster,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error));
        }
    };

    RosterLoader::validate(&roster).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Roster validation failed");
        ApiErrorResponse::from(err)
    })?;

    Ok(roster)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: Json<T>) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
