use entity::contract_signing::{ActiveModel, Column, Entity, Model};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{contains, finish, now, require_non_negative, require_text, require_text_if_set};
use crate::error::CoreResult;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContractSigning {
    pub tender_title: String,
    #[serde(default)]
    pub contract_award_date: Option<Date>,
    #[serde(default)]
    pub contract_signing_date: Option<Date>,
    #[serde(default)]
    pub contract_amount: Option<f64>,
    #[serde(default)]
    pub vendor_name: Option<String>,
    pub signing_status: String,
    #[serde(default)]
    pub bid_evaluation_id: Option<i32>,
}

impl NewContractSigning {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "tenderTitle", &self.tender_title);
        require_text(&mut errors, "signingStatus", &self.signing_status);
        if let Some(amount) = self.contract_amount {
            require_non_negative(&mut errors, "contractAmount", amount);
        }
        finish(errors)
    }
}

/// Absent fields stay untouched; set fields overwrite, never clear.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSigningPatch {
    pub tender_title: Option<String>,
    pub contract_award_date: Option<Date>,
    pub contract_signing_date: Option<Date>,
    pub contract_amount: Option<f64>,
    pub vendor_name: Option<String>,
    pub signing_status: Option<String>,
    pub bid_evaluation_id: Option<i32>,
}

impl ContractSigningPatch {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text_if_set(&mut errors, "tenderTitle", &self.tender_title);
        require_text_if_set(&mut errors, "signingStatus", &self.signing_status);
        if let Some(amount) = self.contract_amount {
            require_non_negative(&mut errors, "contractAmount", amount);
        }
        finish(errors)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSigningFilter {
    pub status: Option<String>,
    pub bid_evaluation_id: Option<i32>,
    pub bid_evaluation_ids: Option<Vec<i32>>,
    pub title: Option<String>,
    pub signed_from: Option<Date>,
    pub signed_to: Option<Date>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewContractSigning) -> CoreResult<Model> {
    input.validate()?;
    let now = now();
    let model = ActiveModel {
        id: NotSet,
        tender_title: Set(input.tender_title),
        contract_award_date: Set(input.contract_award_date),
        contract_signing_date: Set(input.contract_signing_date),
        contract_amount: Set(input.contract_amount),
        vendor_name: Set(input.vendor_name),
        signing_status: Set(input.signing_status),
        bid_evaluation_id: Set(input.bid_evaluation_id),
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
    patch: ContractSigningPatch,
) -> CoreResult<Option<Model>> {
    patch.validate()?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(v) = patch.tender_title {
        active.tender_title = Set(v);
    }
    if let Some(v) = patch.contract_award_date {
        active.contract_award_date = Set(Some(v));
    }
    if let Some(v) = patch.contract_signing_date {
        active.contract_signing_date = Set(Some(v));
    }
    if let Some(v) = patch.contract_amount {
        active.contract_amount = Set(Some(v));
    }
    if let Some(v) = patch.vendor_name {
        active.vendor_name = Set(Some(v));
    }
    if let Some(v) = patch.signing_status {
        active.signing_status = Set(v);
    }
    if let Some(v) = patch.bid_evaluation_id {
        active.bid_evaluation_id = Set(Some(v));
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
    filter: ContractSigningFilter,
) -> CoreResult<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(status) = filter.status {
        query = query.filter(Column::SigningStatus.eq(status));
    }
    if let Some(id) = filter.bid_evaluation_id {
        query = query.filter(Column::BidEvaluationId.eq(id));
    }
    if let Some(ids) = filter.bid_evaluation_ids {
        query = query.filter(Column::BidEvaluationId.is_in(ids));
    }
    if let Some(title) = filter.title {
        query = query.filter(contains(Column::TenderTitle, &title));
    }
    if let Some(from) = filter.signed_from {
        query = query.filter(Column::ContractSigningDate.gte(from));
    }
    if let Some(to) = filter.signed_to {
        query = query.filter(Column::ContractSigningDate.lte(to));
    }
    Ok(query
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
