use api::stages::identification::{
    self, IdentificationFilter, IdentificationPatch, NewIdentification,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use entity::identification::Model;

use crate::http::{AppState, HttpError, HttpResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search).post(create))
        .route("/{id}", get(get_one).put(update).delete(remove))
}

async fn search(
    State(state): State<AppState>,
    Query(filter): Query<IdentificationFilter>,
) -> HttpResult<Json<Vec<Model>>> {
    Ok(Json(identification::search(&state.db, filter).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewIdentification>,
) -> HttpResult<(StatusCode, Json<Model>)> {
    let model = identification::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Model>> {
    identification::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("identification"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<IdentificationPatch>,
) -> HttpResult<Json<Model>> {
    identification::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("identification"))
}

async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> HttpResult<StatusCode> {
    if identification::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("identification"))
    }
}
