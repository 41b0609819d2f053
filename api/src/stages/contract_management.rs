use entity::contract_management::{ActiveModel, Column, Entity, Model};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{contains, finish, now, require_text, require_text_if_set};
use crate::error::CoreResult;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContractManagement {
    pub tender_title: String,
    #[serde(default)]
    pub tender_execution_start_date: Option<Date>,
    #[serde(default)]
    pub tender_execution_end_date: Option<Date>,
    #[serde(default)]
    pub actual_delivery_date: Option<Date>,
    pub management_status: String,
    #[serde(default)]
    pub contract_signing_id: Option<i32>,
}

impl NewContractManagement {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "tenderTitle", &self.tender_title);
        require_text(&mut errors, "managementStatus", &self.management_status);
        finish(errors)
    }
}

/// Absent fields stay untouched; set fields overwrite, never clear.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractManagementPatch {
    pub tender_title: Option<String>,
    pub tender_execution_start_date: Option<Date>,
    pub tender_execution_end_date: Option<Date>,
    pub actual_delivery_date: Option<Date>,
    pub management_status: Option<String>,
    pub contract_signing_id: Option<i32>,
}

impl ContractManagementPatch {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text_if_set(&mut errors, "tenderTitle", &self.tender_title);
        require_text_if_set(&mut errors, "managementStatus", &self.management_status);
        finish(errors)
    }
}

/// Range filtering pairs the execution start and end columns: a record
/// matches when its execution window overlaps the requested window.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractManagementFilter {
    pub status: Option<String>,
    pub contract_signing_id: Option<i32>,
    pub contract_signing_ids: Option<Vec<i32>>,
    pub title: Option<String>,
    pub execution_from: Option<Date>,
    pub execution_to: Option<Date>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewContractManagement) -> CoreResult<Model> {
    input.validate()?;
    let now = now();
    let model = ActiveModel {
        id: NotSet,
        tender_title: Set(input.tender_title),
        tender_execution_start_date: Set(input.tender_execution_start_date),
        tender_execution_end_date: Set(input.tender_execution_end_date),
        actual_delivery_date: Set(input.actual_delivery_date),
        management_status: Set(input.management_status),
        contract_signing_id: Set(input.contract_signing_id),
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
    patch: ContractManagementPatch,
) -> CoreResult<Option<Model>> {
    patch.validate()?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(v) = patch.tender_title {
        active.tender_title = Set(v);
    }
    if let Some(v) = patch.tender_execution_start_date {
        active.tender_execution_start_date = Set(Some(v));
    }
    if let Some(v) = patch.tender_execution_end_date {
        active.tender_execution_end_date = Set(Some(v));
    }
    if let Some(v) = patch.actual_delivery_date {
        active.actual_delivery_date = Set(Some(v));
    }
    if let Some(v) = patch.management_status {
        active.management_status = Set(v);
    }
    if let Some(v) = patch.contract_signing_id {
        active.contract_signing_id = Set(Some(v));
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
    filter: ContractManagementFilter,
) -> CoreResult<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(status) = filter.status {
        query = query.filter(Column::ManagementStatus.eq(status));
    }
    if let Some(id) = filter.contract_signing_id {
        query = query.filter(Column::ContractSigningId.eq(id));
    }
    if let Some(ids) = filter.contract_signing_ids {
        query = query.filter(Column::ContractSigningId.is_in(ids));
    }
    if let Some(title) = filter.title {
        query = query.filter(contains(Column::TenderTitle, &title));
    }
    if let Some(from) = filter.execution_from {
        query = query.filter(Column::TenderExecutionEndDate.gte(from));
    }
    if let Some(to) = filter.execution_to {
        query = query.filter(Column::TenderExecutionStartDate.lte(to));
    }
    Ok(query
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
