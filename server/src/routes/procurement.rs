use api::{chain, chain::Stage, summary, timeline};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::http::{AppState, HttpError, HttpResult};

#[derive(Debug, Deserialize)]
pub(crate) struct ProcurementQuery {
    action: String,
    id: Option<i32>,
    stage: Option<String>,
    division: Option<String>,
    status: Option<String>,
}

/// Single aggregate endpoint: `GET /api/procurement?action=...`. Each action
/// maps onto one aggregation operation of the `api` crate.
pub async fn dispatch(
    State(state): State<AppState>,
    Query(query): Query<ProcurementQuery>,
) -> HttpResult<Response> {
    match query.action.as_str() {
        "complete-process" => {
            let id = require_id(&query)?;
            let chain = chain::resolve_chain(&state.db, id).await?;
            Ok(Json(chain).into_response())
        }
        "summaries" => {
            let summaries = summary::build_all_summaries(&state.db).await?;
            Ok(Json(summaries).into_response())
        }
        "by-stage" => {
            let stage = require_stage(&query)?;
            let summaries = summary::filter_by_stage(&state.db, stage).await?;
            Ok(Json(summaries).into_response())
        }
        "by-division" => {
            let division = query
                .division
                .as_deref()
                .ok_or_else(|| HttpError::bad_request("missing division parameter"))?;
            let summaries = summary::filter_by_division(&state.db, division).await?;
            Ok(Json(summaries).into_response())
        }
        "by-status" => {
            let status = query
                .status
                .as_deref()
                .ok_or_else(|| HttpError::bad_request("missing status parameter"))?;
            let summaries = summary::filter_by_status(&state.db, status).await?;
            Ok(Json(summaries).into_response())
        }
        "timeline" => {
            let id = require_id(&query)?;
            let chain = chain::resolve_chain(&state.db, id).await?;
            Ok(Json(timeline::build_timeline(&chain)).into_response())
        }
        "statistics" => {
            let stats = summary::compute_statistics(&state.db).await?;
            Ok(Json(stats).into_response())
        }
        _ => Err(HttpError::bad_request("unknown action")),
    }
}

fn require_id(query: &ProcurementQuery) -> Result<i32, HttpError> {
    query
        .id
        .ok_or_else(|| HttpError::bad_request("missing id parameter"))
}

fn require_stage(query: &ProcurementQuery) -> Result<Stage, HttpError> {
    query
        .stage
        .as_deref()
        .and_then(Stage::parse)
        .ok_or_else(|| HttpError::bad_request("missing or unknown stage parameter"))
}
