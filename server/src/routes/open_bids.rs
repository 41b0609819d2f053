use api::stages::open_bid::{self, NewOpenBid, OpenBidFilter, OpenBidPatch};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use entity::open_bid::Model;
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
    publication_tender_id: Option<i32>,
    publication_tender_ids: Option<String>,
    title: Option<String>,
    opened_from: Option<Date>,
    opened_to: Option<Date>,
}

impl ListQuery {
    fn into_filter(self) -> Result<OpenBidFilter, HttpError> {
        Ok(OpenBidFilter {
            status: self.status,
            publication_tender_id: self.publication_tender_id,
            publication_tender_ids: self
                .publication_tender_ids
                .as_deref()
                .map(parse_id_list)
                .transpose()?,
            title: self.title,
            opened_from: self.opened_from,
            opened_to: self.opened_to,
        })
    }
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HttpResult<Json<Vec<Model>>> {
    Ok(Json(open_bid::search(&state.db, query.into_filter()?).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewOpenBid>,
) -> HttpResult<(StatusCode, Json<Model>)> {
    let model = open_bid::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Model>> {
    open_bid::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("open bid"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<OpenBidPatch>,
) -> HttpResult<Json<Model>> {
    open_bid::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("open bid"))
}

async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> HttpResult<StatusCode> {
    if open_bid::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("open bid"))
    }
}
