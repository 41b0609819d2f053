use api::stages::publication::{self, NewPublication, PublicationFilter, PublicationPatch};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use entity::publication::Model;
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
    planning_id: Option<i32>,
    planning_ids: Option<String>,
    title: Option<String>,
    published_from: Option<Date>,
    published_to: Option<Date>,
}

impl ListQuery {
    fn into_filter(self) -> Result<PublicationFilter, HttpError> {
        Ok(PublicationFilter {
            planning_id: self.planning_id,
            planning_ids: self.planning_ids.as_deref().map(parse_id_list).transpose()?,
            title: self.title,
            published_from: self.published_from,
            published_to: self.published_to,
        })
    }
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HttpResult<Json<Vec<Model>>> {
    Ok(Json(
        publication::search(&state.db, query.into_filter()?).await?,
    ))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewPublication>,
) -> HttpResult<(StatusCode, Json<Model>)> {
    let model = publication::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Model>> {
    publication::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("publication"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<PublicationPatch>,
) -> HttpResult<Json<Model>> {
    publication::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("publication"))
}

async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> HttpResult<StatusCode> {
    if publication::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("publication"))
    }
}
