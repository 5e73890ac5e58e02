//! HTTP request handlers for the shift board API.
//!
//! This module contains the handler functions for all API endpoints.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, put},
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::board::validate_month;
use crate::error::{BoardError, BoardResult};
use crate::models::Period;
use crate::store::{NewStaff, NewVehicle, RecordStore};

use super::request::{RoleQuery, SaveShiftsRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/unit", get(unit_handler))
        .route("/board/:year/:month", get(board_handler))
        .route("/board/:year/:month/shifts", put(save_shifts_handler))
        .route("/occupancy/:year/:month", get(occupancy_handler))
        .route(
            "/occupancy/:year/:month/:day/:period",
            get(roster_handler),
        )
        .route("/roles", get(list_roles_handler))
        .route(
            "/staff",
            get(list_staff_handler).post(create_staff_handler),
        )
        .route("/staff/:id", delete(delete_staff_handler))
        .route(
            "/vehicles",
            get(list_vehicles_handler).post(create_vehicle_handler),
        )
        .route("/vehicles/:id", delete(delete_vehicle_handler))
        .with_state(state)
}

/// Handler for GET /unit.
async fn unit_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.metadata())
}

/// Handler for GET /board/:year/:month.
///
/// Returns the month's days, week buckets and per-staff hour accounting.
async fn board_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<RoleQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        year,
        month,
        role = ?query.role,
        "Loading month board"
    );

    let result = state
        .service()
        .load_month(year, month, &query.filter())
        .await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for PUT /board/:year/:month/shifts.
///
/// Applies a shift edit and returns the reloaded board.
async fn save_shifts_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<RoleQuery>,
    payload: Result<Json<SaveShiftsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, year, month, "Processing shift save");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let edit = match request.into_edit() {
        Ok(edit) => edit,
        Err(err) => return failure(correlation_id, err),
    };

    let result = state
        .service()
        .save_shifts(year, month, edit, &query.filter())
        .await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /occupancy/:year/:month.
async fn occupancy_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<RoleQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, year, month, "Computing occupancy");

    let result = state
        .service()
        .occupancy(year, month, &query.filter())
        .await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /occupancy/:year/:month/:day/:period.
///
/// Lists who works the given half of the day, heaviest first.
async fn roster_handler(
    State(state): State<AppState>,
    Path((year, month, day, period)): Path<(i32, u32, u32, String)>,
    Query(query): Query<RoleQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        year,
        month,
        day,
        period = %period,
        "Building daily roster"
    );

    let target = match roster_target(year, month, day, &period) {
        Ok(target) => target,
        Err(err) => return failure(correlation_id, err),
    };

    let result = state
        .service()
        .roster(target.0, target.1, &query.filter())
        .await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /roles.
async fn list_roles_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state.service().store().list_roles().await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /staff.
async fn list_staff_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state.service().store().list_staff().await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for POST /staff.
async fn create_staff_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewStaff>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let new_staff = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = state.service().store().create_staff(new_staff).await;
    if let Ok(member) = &result {
        info!(
            correlation_id = %correlation_id,
            staff_id = %member.id,
            weekly_contracted_hours = member.weekly_contracted_hours,
            "Staff member registered"
        );
    }
    respond(correlation_id, StatusCode::CREATED, result)
}

/// Handler for DELETE /staff/:id.
async fn delete_staff_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().store().delete_staff(id).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, staff_id = %id, "Staff member removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => failure(correlation_id, err),
    }
}

/// Handler for GET /vehicles.
async fn list_vehicles_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state.service().store().list_vehicles().await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for POST /vehicles.
async fn create_vehicle_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewVehicle>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let new_vehicle = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = state.service().store().create_vehicle(new_vehicle).await;
    if let Ok(vehicle) = &result {
        info!(
            correlation_id = %correlation_id,
            vehicle_id = %vehicle.id,
            plate = %vehicle.plate,
            "Vehicle registered"
        );
    }
    respond(correlation_id, StatusCode::CREATED, result)
}

/// Handler for DELETE /vehicles/:id.
async fn delete_vehicle_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().store().delete_vehicle(id).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, vehicle_id = %id, "Vehicle removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => failure(correlation_id, err),
    }
}

/// Resolves the roster path segments into a date and period.
fn roster_target(
    year: i32,
    month: u32,
    day: u32,
    period: &str,
) -> BoardResult<(NaiveDate, Period)> {
    validate_month(year, month)?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        BoardError::validation(
            "day",
            format!("day {} does not exist in {}-{:02}", day, year, month),
        )
    })?;
    let period =
        Period::from_str(period).map_err(|message| BoardError::validation("period", message))?;
    Ok((date, period))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn respond<T: Serialize>(
    correlation_id: Uuid,
    status: StatusCode,
    result: BoardResult<T>,
) -> Response {
    match result {
        Ok(body) => json_response(status, body),
        Err(err) => failure(correlation_id, err),
    }
}

fn failure(correlation_id: Uuid, err: BoardError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON body rejection to a 400 with a stable error code.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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
    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use chrono::Datelike;
    use tower::ServiceExt;

    use crate::models::StaffMember;
    use crate::store::InMemoryStore;

    async fn create_test_state() -> (AppState, StaffMember) {
        let store = InMemoryStore::new();
        let role = store.insert_role("Médico").await.unwrap();
        let member = store
            .create_staff(NewStaff {
                full_name: "Beatriz Rocha".to_string(),
                role_id: Some(role.id),
                weekly_contracted_hours: 24,
                ..Default::default()
            })
            .await
            .unwrap();
        let metadata = serde_yaml::from_str("unit_name: Test Unit\n").unwrap();
        (AppState::new(store, metadata), member)
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_board_returns_rows() {
        let (state, member) = create_test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/board/2026/4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["days"].as_array().unwrap().len(), 30);
        assert_eq!(json["rows"][0]["staff"]["id"], member.id.to_string());
        assert_eq!(json["rows"][0]["stats"]["monthly_target"], 96);
    }

    #[tokio::test]
    async fn test_month_thirteen_returns_400() {
        let (state, _) = create_test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/board/2026/13")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_last_representable_december_returns_400() {
        let (state, _) = create_test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/board/{}/12", NaiveDate::MAX.year()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_save_body_returns_400() {
        let (state, _) = create_test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/board/2026/3/shifts")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{ invalid json }"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_save_missing_staff_id_returns_validation_error() {
        let (state, _) = create_test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/board/2026/3/shifts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"date": "2026-03-02", "slots": ["07-13"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_roster_rejects_nonexistent_day() {
        let (state, _) = create_test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/occupancy/2026/2/30/day")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_roster_rejects_unknown_period() {
        let (state, _) = create_test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/occupancy/2026/2/10/evening")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("period"));
    }

    #[tokio::test]
    async fn test_delete_unknown_staff_returns_404() {
        let (state, _) = create_test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/staff/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "STAFF_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unit_metadata() {
        let (state, _) = create_test_state().await;
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/unit").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["unit_name"], "Test Unit");
        assert_eq!(json["default_weekly_hours"], 36);
    }
}
