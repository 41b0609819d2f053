use api::stages::invoice::{self, InvoiceFilter, InvoicePatch, NewInvoice};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use entity::invoice::Model;
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
    contract_management_id: Option<i32>,
    contract_management_ids: Option<String>,
    title: Option<String>,
    invoiced_from: Option<Date>,
    invoiced_to: Option<Date>,
}

impl ListQuery {
    fn into_filter(self) -> Result<InvoiceFilter, HttpError> {
        Ok(InvoiceFilter {
            status: self.status,
            contract_management_id: self.contract_management_id,
            contract_management_ids: self
                .contract_management_ids
                .as_deref()
                .map(parse_id_list)
                .transpose()?,
            title: self.title,
            invoiced_from: self.invoiced_from,
            invoiced_to: self.invoiced_to,
        })
    }
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HttpResult<Json<Vec<Model>>> {
    Ok(Json(invoice::search(&state.db, query.into_filter()?).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewInvoice>,
) -> HttpResult<(StatusCode, Json<Model>)> {
    let model = invoice::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<Model>> {
    invoice::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("invoice"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<InvoicePatch>,
) -> HttpResult<Json<Model>> {
    invoice::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("invoice"))
}

async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> HttpResult<StatusCode> {
    if invoice::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::not_found("invoice"))
    }
}
