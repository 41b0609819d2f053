use api::stages::bid_evaluation::{
    self, BidEvaluationFilter, BidEvaluationPatch, NewBidEvaluation,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use entity::bid_evaluation::Model;
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
    opening_bid_id: Option<i32>,
    opening_bid_ids: Option<String>,
    title: Option<String>,
    evaluated_from: Option<Date>,
    evaluated_to: Option<Date>,
}

impl ListQuery {
    fn into_filter(self) -> Result<BidEvaluationFilter, HttpError> {
        Ok(BidEvaluationFilter {
            status: self.status,
            opening_bid_id: self.opening_bid_id,
            opening_bid_ids: self
                .opening_bid_ids
                .as_deref()
                .map(parse_id_list)
                .transpose()?,
            title: self.title,
            evaluated_from: self.evaluated_from,
            evaluated_to: self.evaluated_to,
        })
    }
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HttpResult<Json<Vec<Model>>> {
    Ok(Json(
        bid_evaluation::search(&state.db, query.into_filter()?).await?,
    ))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewBidEvaluation>,
) -> HttpResult<(StatusCode, Json<Model>)> {
    let model = bid_evaluation::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Model>> {
    bid_evaluation::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("bid evaluation"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<BidEvaluationPatch>,
) -> HttpResult<Json<Model>> {
    bid_evaluation::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("bid evaluation"))
}

async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> HttpResult<StatusCode> {
    if bid_evaluation::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("bid evaluation"))
    }
}
