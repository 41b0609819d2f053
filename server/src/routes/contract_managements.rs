use api::stages::contract_management::{
    self, ContractManagementFilter, ContractManagementPatch, NewContractManagement,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use entity::contract_management::Model;
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
    contract_signing_id: Option<i32>,
    contract_signing_ids: Option<String>,
    title: Option<String>,
    execution_from: Option<Date>,
    execution_to: Option<Date>,
}

impl ListQuery {
    fn into_filter(self) -> Result<ContractManagementFilter, HttpError> {
        Ok(ContractManagementFilter {
            status: self.status,
            contract_signing_id: self.contract_signing_id,
            contract_signing_ids: self
                .contract_signing_ids
                .as_deref()
                .map(parse_id_list)
                .transpose()?,
            title: self.title,
            execution_from: self.execution_from,
            execution_to: self.execution_to,
        })
    }
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HttpResult<Json<Vec<Model>>> {
    Ok(Json(
        contract_management::search(&state.db, query.into_filter()?).await?,
    ))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewContractManagement>,
) -> HttpResult<(StatusCode, Json<Model>)> {
    let model = contract_management::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Model>> {
    contract_management::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("contract management"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<ContractManagementPatch>,
) -> HttpResult<Json<Model>> {
    contract_management::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("contract management"))
}

async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> HttpResult<StatusCode> {
    if contract_management::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("contract management"))
    }
}
