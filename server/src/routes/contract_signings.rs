use api::stages::contract_signing::{
    self, ContractSigningFilter, ContractSigningPatch, NewContractSigning,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use entity::contract_signing::Model;
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
    bid_evaluation_id: Option<i32>,
    bid_evaluation_ids: Option<String>,
    title: Option<String>,
    signed_from: Option<Date>,
    signed_to: Option<Date>,
}

impl ListQuery {
    fn into_filter(self) -> Result<ContractSigningFilter, HttpError> {
        Ok(ContractSigningFilter {
            status: self.status,
            bid_evaluation_id: self.bid_evaluation_id,
            bid_evaluation_ids: self
                .bid_evaluation_ids
                .as_deref()
                .map(parse_id_list)
                .transpose()?,
            title: self.title,
            signed_from: self.signed_from,
            signed_to: self.signed_to,
        })
    }
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HttpResult<Json<Vec<Model>>> {
    Ok(Json(
        contract_signing::search(&state.db, query.into_filter()?).await?,
    ))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewContractSigning>,
) -> HttpResult<(StatusCode, Json<Model>)> {
    let model = contract_signing::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Model>> {
    contract_signing::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("contract signing"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<ContractSigningPatch>,
) -> HttpResult<Json<Model>> {
    contract_signing::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("contract signing"))
}

async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> HttpResult<StatusCode> {
    if contract_signing::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("contract signing"))
    }
}
