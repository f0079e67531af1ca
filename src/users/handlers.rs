use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

use super::dto::{User, UserPayload};
use super::validate::validate_payload;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", put(update_user))
        .route("/users/:id", delete(delete_user))
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.registry().list())
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload = decode_payload(payload)?;
    validate_payload(&payload)?;

    let user = state.registry().create(payload).inspect_err(|e| {
        warn!(error = %e, "create rejected");
    })?;

    info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = state.registry().get(id)?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let id = parse_user_id(&id)?;
    let payload = decode_payload(payload)?;
    validate_payload(&payload)?;

    let user = state.registry().update(id, payload)?;
    info!(user_id = user.id, "user updated");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_user_id(&id)?;
    state.registry().delete(id)?;
    info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

// --- helpers ---

fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        warn!(id = %raw, "non-integer user id");
        ApiError::BadRequest("Invalid user ID".into())
    })
}

fn decode_payload(
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<UserPayload, ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "body rejected");
        ApiError::BadRequest("Bad request".into())
    })?;
    Ok(payload)
}
