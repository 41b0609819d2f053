use api::stages::publication_tender::{
    self, NewPublicationTender, PublicationTenderFilter, PublicationTenderPatch,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use entity::publication_tender::Model;
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
    publication_id: Option<i32>,
    publication_ids: Option<String>,
    title: Option<String>,
    published_from: Option<Date>,
    published_to: Option<Date>,
}

impl ListQuery {
    fn into_filter(self) -> Result<PublicationTenderFilter, HttpError> {
        Ok(PublicationTenderFilter {
            publication_id: self.publication_id,
            publication_ids: self
                .publication_ids
                .as_deref()
                .map(parse_id_list)
                .transpose()?,
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
        publication_tender::search(&state.db, query.into_filter()?).await?,
    ))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewPublicationTender>,
) -> HttpResult<(StatusCode, Json<Model>)> {
    let model = publication_tender::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Model>> {
    publication_tender::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("publication tender"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<PublicationTenderPatch>,
) -> HttpResult<Json<Model>> {
    publication_tender::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("publication tender"))
}

async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> HttpResult<StatusCode> {
    if publication_tender::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("publication tender"))
    }
}
