//! API Routes
//!
//! HTTP endpoint definitions for the squirrel collection.

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Form, Json, Router,
};

use crate::domain::{NewSquirrel, Squirrel, SquirrelForm};
use crate::error::{AppError, AppResult};
use crate::store::SquirrelStore;

// =========================================================================
// API Router
// =========================================================================

/// Create the squirrel router
pub fn create_router() -> Router<SquirrelStore> {
    Router::new()
        .route("/squirrels", get(list_squirrels).post(create_squirrel))
        .route(
            "/squirrels/:id",
            get(get_squirrel).put(update_squirrel).delete(delete_squirrel),
        )
}

/// Parse an id path segment
///
/// Anything that is not an `i64` cannot name a stored squirrel, so it is
/// reported as not found rather than as a malformed request.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| AppError::SquirrelNotFound(raw.to_string()))
}

/// Resolve the `:id` segment, treating undecodable segments as unknown ids
fn path_id(path: Result<Path<String>, PathRejection>) -> AppResult<(i64, String)> {
    let Path(raw) = path.map_err(|rejection| AppError::SquirrelNotFound(rejection.body_text()))?;
    let id = parse_id(&raw)?;
    Ok((id, raw))
}

/// Decode and validate a form body
fn validated(form: Result<Form<SquirrelForm>, FormRejection>) -> AppResult<NewSquirrel> {
    let Form(form) = form.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    Ok(form.validate()?)
}

// =========================================================================
// GET /squirrels
// =========================================================================

/// List every squirrel, oldest first
async fn list_squirrels(State(store): State<SquirrelStore>) -> AppResult<Json<Vec<Squirrel>>> {
    let squirrels = store.list().await?;
    Ok(Json(squirrels))
}

// =========================================================================
// GET /squirrels/:id
// =========================================================================

async fn get_squirrel(
    State(store): State<SquirrelStore>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Squirrel>> {
    let (id, raw_id) = path_id(path)?;

    let squirrel = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::SquirrelNotFound(raw_id))?;

    Ok(Json(squirrel))
}

// =========================================================================
// POST /squirrels
// =========================================================================

/// Create a squirrel from a form body
async fn create_squirrel(
    State(store): State<SquirrelStore>,
    form: Result<Form<SquirrelForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let new_squirrel = validated(form)?;

    let squirrel = store.create(new_squirrel).await?;
    tracing::info!(id = squirrel.id, "Created squirrel");

    let location = format!("/squirrels/{}", squirrel.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(squirrel),
    ))
}

// =========================================================================
// PUT /squirrels/:id
// =========================================================================

/// Replace name and size of an existing squirrel
async fn update_squirrel(
    State(store): State<SquirrelStore>,
    path: Result<Path<String>, PathRejection>,
    form: Result<Form<SquirrelForm>, FormRejection>,
) -> AppResult<StatusCode> {
    let (id, raw_id) = path_id(path)?;
    let new_squirrel = validated(form)?;

    store
        .update_by_id(id, new_squirrel)
        .await?
        .ok_or_else(|| AppError::SquirrelNotFound(raw_id))?;

    tracing::info!(id, "Updated squirrel");

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// DELETE /squirrels/:id
// =========================================================================

/// Permanently remove a squirrel
async fn delete_squirrel(
    State(store): State<SquirrelStore>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let (id, raw_id) = path_id(path)?;

    if !store.delete_by_id(id).await? {
        return Err(AppError::SquirrelNotFound(raw_id));
    }

    tracing::info!(id, "Deleted squirrel");

    Ok(StatusCode::NO_CONTENT)
}
