use std::collections::BTreeMap;

use entity::identification;
use sea_orm::prelude::Date;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::chain::{self, ProcurementChain, Stage};
use crate::error::CoreResult;
use crate::status::RecordStatus;

/// One flattened row per identification, suitable for dashboard listings.
/// Optional fields are omitted from the JSON body when the upstream chain
/// record is absent.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementSummary {
    pub id: i32,
    pub tender_title: String,
    pub division: String,
    pub status: String,
    pub budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planning_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_tender_publication: Option<Date>,
    pub stage: Stage,
    pub progress: u8,
}

impl ProcurementSummary {
    fn from_chain(chain: ProcurementChain) -> Self {
        let stage = chain.stage();
        let progress = chain.progress();
        ProcurementSummary {
            id: chain.identification.id,
            tender_title: chain.identification.tender_title,
            division: chain.identification.division,
            status: chain.identification.status,
            budget: chain.identification.budget,
            estimated_budget: chain.planning.as_ref().map(|p| p.estimated_budget),
            planning_status: chain.planning.map(|p| p.planning_status),
            date_of_tender_publication: chain
                .publication_tender
                .and_then(|t| t.date_of_tender_publication),
            stage,
            progress,
        }
    }
}

/// `NotFound` when the identification is absent, like the resolver.
pub async fn build_summary<C: ConnectionTrait>(
    db: &C,
    identification_id: i32,
) -> CoreResult<ProcurementSummary> {
    let chain = chain::resolve_chain(db, identification_id).await?;
    Ok(ProcurementSummary::from_chain(chain))
}

pub async fn build_all_summaries<C: ConnectionTrait>(db: &C) -> CoreResult<Vec<ProcurementSummary>> {
    let chains = chain::resolve_all_chains(db).await?;
    Ok(chains.into_iter().map(ProcurementSummary::from_chain).collect())
}

pub async fn filter_by_stage<C: ConnectionTrait>(
    db: &C,
    stage: Stage,
) -> CoreResult<Vec<ProcurementSummary>> {
    let mut summaries = build_all_summaries(db).await?;
    summaries.retain(|summary| summary.stage == stage);
    Ok(summaries)
}

pub async fn filter_by_division<C: ConnectionTrait>(
    db: &C,
    division: &str,
) -> CoreResult<Vec<ProcurementSummary>> {
    filter_roots(db, identification::Column::Division.eq(division)).await
}

pub async fn filter_by_status<C: ConnectionTrait>(
    db: &C,
    status: &str,
) -> CoreResult<Vec<ProcurementSummary>> {
    filter_roots(db, identification::Column::Status.eq(status)).await
}

/// Narrows the root set in SQL before paying for chain resolution.
async fn filter_roots<C: ConnectionTrait>(
    db: &C,
    condition: sea_orm::sea_query::SimpleExpr,
) -> CoreResult<Vec<ProcurementSummary>> {
    let roots = identification::Entity::find()
        .filter(condition)
        .order_by_asc(identification::Column::CreatedAt)
        .order_by_asc(identification::Column::Id)
        .all(db)
        .await?;
    let chains = chain::resolve_chains_for(db, roots).await?;
    Ok(chains.into_iter().map(ProcurementSummary::from_chain).collect())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    pub identification: u64,
    pub planning: u64,
    pub publication: u64,
    pub publication_tender: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: u64,
    pub by_stage: StageCounts,
    pub by_division: BTreeMap<String, u64>,
    pub by_status: BTreeMap<String, u64>,
}

/// Corpus-wide counts. Each identification lands in exactly one stage bucket
/// (same precedence as the resolver); blank divisions and statuses collapse
/// into an "Unknown" bucket.
pub async fn compute_statistics<C: ConnectionTrait>(db: &C) -> CoreResult<Statistics> {
    let chains = chain::resolve_all_chains(db).await?;

    let mut by_stage = StageCounts::default();
    let mut by_division: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_status: BTreeMap<String, u64> = BTreeMap::new();
    let total = chains.len() as u64;

    for chain in &chains {
        match chain.stage() {
            Stage::Identification => by_stage.identification += 1,
            Stage::Planning => by_stage.planning += 1,
            Stage::Publication => by_stage.publication += 1,
            Stage::PublicationTender => by_stage.publication_tender += 1,
        }

        let division = chain.identification.division.trim();
        let division_key = if division.is_empty() { "Unknown" } else { division };
        *by_division.entry(division_key.to_owned()).or_insert(0) += 1;

        let status = RecordStatus::parse(&chain.identification.status);
        *by_status.entry(status.bucket().to_owned()).or_insert(0) += 1;
    }

    Ok(Statistics {
        total,
        by_stage,
        by_division,
        by_status,
    })
}
