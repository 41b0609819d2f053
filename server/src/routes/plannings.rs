use api::stages::planning::{self, NewPlanning, PlanningFilter, PlanningPatch};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use entity::planning::Model;
use sea_orm::prelude::Date;
use serde::Deserialize;

use super::parse_id_list;
use crate::http::{AppState, HttpError, HttpResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search).post(create))
        .route("/{id}", get(get_one).put(update).delete(remove))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    status: Option<String>,
    identification_id: Option<i32>,
    identification_ids: Option<String>,
    title: Option<String>,
    publication_from: Option<Date>,
    publication_to: Option<Date>,
}

impl ListQuery {
    fn into_filter(self) -> Result<PlanningFilter, HttpError> {
        Ok(PlanningFilter {
            status: self.status,
            identification_id: self.identification_id,
            identification_ids: self
                .identification_ids
                .as_deref()
                .map(parse_id_list)
                .transpose()?,
            title: self.title,
            publication_from: self.publication_from,
            publication_to: self.publication_to,
        })
    }
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HttpResult<Json<Vec<Model>>> {
    Ok(Json(planning::search(&state.db, query.into_filter()?).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewPlanning>,
) -> HttpResult<(StatusCode, Json<Model>)> {
    let model = planning::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Model>> {
    planning::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("planning"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<PlanningPatch>,
) -> HttpResult<Json<Model>> {
    planning::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("planning"))
}

async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> HttpResult<StatusCode> {
    if planning::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("planning"))
    }
}
