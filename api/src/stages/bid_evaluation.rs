use entity::bid_evaluation::{ActiveModel, Column, Entity, Model};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{contains, finish, now, require_non_negative, require_text, require_text_if_set};
use crate::error::CoreResult;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBidEvaluation {
    pub tender_title: String,
    #[serde(default)]
    pub bid_evaluation_date: Option<Date>,
    #[serde(default)]
    pub evaluation_committee: Option<String>,
    #[serde(default)]
    pub evaluated_amount: Option<f64>,
    pub evaluation_status: String,
    #[serde(default)]
    pub opening_bid_id: Option<i32>,
}

impl NewBidEvaluation {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "tenderTitle", &self.tender_title);
        require_text(&mut errors, "evaluationStatus", &self.evaluation_status);
        if let Some(amount) = self.evaluated_amount {
            require_non_negative(&mut errors, "evaluatedAmount", amount);
        }
        finish(errors)
    }
}

/// Absent fields stay untouched; set fields overwrite, never clear.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidEvaluationPatch {
    pub tender_title: Option<String>,
    pub bid_evaluation_date: Option<Date>,
    pub evaluation_committee: Option<String>,
    pub evaluated_amount: Option<f64>,
    pub evaluation_status: Option<String>,
    pub opening_bid_id: Option<i32>,
}

impl BidEvaluationPatch {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text_if_set(&mut errors, "tenderTitle", &self.tender_title);
        require_text_if_set(&mut errors, "evaluationStatus", &self.evaluation_status);
        if let Some(amount) = self.evaluated_amount {
            require_non_negative(&mut errors, "evaluatedAmount", amount);
        }
        finish(errors)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidEvaluationFilter {
    pub status: Option<String>,
    pub opening_bid_id: Option<i32>,
    pub opening_bid_ids: Option<Vec<i32>>,
    pub title: Option<String>,
    pub evaluated_from: Option<Date>,
    pub evaluated_to: Option<Date>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewBidEvaluation) -> CoreResult<Model> {
    input.validate()?;
    let now = now();
    let model = ActiveModel {
        id: NotSet,
        tender_title: Set(input.tender_title),
        bid_evaluation_date: Set(input.bid_evaluation_date),
        evaluation_committee: Set(input.evaluation_committee),
        evaluated_amount: Set(input.evaluated_amount),
        evaluation_status: Set(input.evaluation_status),
        opening_bid_id: Set(input.opening_bid_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    Ok(model)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> CoreResult<Option<Model>> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> CoreResult<Vec<Model>> {
    Ok(Entity::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: BidEvaluationPatch,
) -> CoreResult<Option<Model>> {
    patch.validate()?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(v) = patch.tender_title {
        active.tender_title = Set(v);
    }
    if let Some(v) = patch.bid_evaluation_date {
        active.bid_evaluation_date = Set(Some(v));
    }
    if let Some(v) = patch.evaluation_committee {
        active.evaluation_committee = Set(Some(v));
    }
    if let Some(v) = patch.evaluated_amount {
        active.evaluated_amount = Set(Some(v));
    }
    if let Some(v) = patch.evaluation_status {
        active.evaluation_status = Set(v);
    }
    if let Some(v) = patch.opening_bid_id {
        active.opening_bid_id = Set(Some(v));
    }
    active.updated_at = Set(now());
    Ok(Some(active.update(db).await?))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> CoreResult<bool> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn search<C: ConnectionTrait>(
    db: &C,
    filter: BidEvaluationFilter,
) -> CoreResult<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(status) = filter.status {
        query = query.filter(Column::EvaluationStatus.eq(status));
    }
    if let Some(id) = filter.opening_bid_id {
        query = query.filter(Column::OpeningBidId.eq(id));
    }
    if let Some(ids) = filter.opening_bid_ids {
        query = query.filter(Column::OpeningBidId.is_in(ids));
    }
    if let Some(title) = filter.title {
        query = query.filter(contains(Column::TenderTitle, &title));
    }
    if let Some(from) = filter.evaluated_from {
        query = query.filter(Column::BidEvaluationDate.gte(from));
    }
    if let Some(to) = filter.evaluated_to {
        query = query.filter(Column::BidEvaluationDate.lte(to));
    }
    Ok(query
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
