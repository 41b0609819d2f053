use entity::planning::{ActiveModel, Column, Entity, Model};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{contains, finish, now, require_non_negative, require_text, require_text_if_set};
use crate::error::CoreResult;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlanning {
    pub tender_title: String,
    #[serde(default)]
    pub tender_final_given_title: Option<String>,
    pub tender_methods: String,
    pub estimated_budget: f64,
    pub tender_type: String,
    #[serde(default)]
    pub framework_type: Option<String>,
    #[serde(default)]
    pub planned_document_preparation_date: Option<Date>,
    #[serde(default)]
    pub planned_publication_date: Option<Date>,
    #[serde(default)]
    pub planned_bid_opening_date: Option<Date>,
    #[serde(default)]
    pub planned_evaluation_date: Option<Date>,
    #[serde(default)]
    pub planned_notification_date: Option<Date>,
    #[serde(default)]
    pub planned_contract_closure_date: Option<Date>,
    pub planning_status: String,
    #[serde(default)]
    pub identification_id: Option<i32>,
}

impl NewPlanning {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "tenderTitle", &self.tender_title);
        require_text(&mut errors, "tenderMethods", &self.tender_methods);
        require_text(&mut errors, "tenderType", &self.tender_type);
        require_text(&mut errors, "planningStatus", &self.planning_status);
        require_non_negative(&mut errors, "estimatedBudget", self.estimated_budget);
        finish(errors)
    }
}

/// Absent fields stay untouched; set fields overwrite, never clear.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningPatch {
    pub tender_title: Option<String>,
    pub tender_final_given_title: Option<String>,
    pub tender_methods: Option<String>,
    pub estimated_budget: Option<f64>,
    pub tender_type: Option<String>,
    pub framework_type: Option<String>,
    pub planned_document_preparation_date: Option<Date>,
    pub planned_publication_date: Option<Date>,
    pub planned_bid_opening_date: Option<Date>,
    pub planned_evaluation_date: Option<Date>,
    pub planned_notification_date: Option<Date>,
    pub planned_contract_closure_date: Option<Date>,
    pub planning_status: Option<String>,
    pub identification_id: Option<i32>,
}

impl PlanningPatch {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text_if_set(&mut errors, "tenderTitle", &self.tender_title);
        require_text_if_set(&mut errors, "tenderMethods", &self.tender_methods);
        require_text_if_set(&mut errors, "tenderType", &self.tender_type);
        require_text_if_set(&mut errors, "planningStatus", &self.planning_status);
        if let Some(budget) = self.estimated_budget {
            require_non_negative(&mut errors, "estimatedBudget", budget);
        }
        finish(errors)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningFilter {
    pub status: Option<String>,
    pub identification_id: Option<i32>,
    pub identification_ids: Option<Vec<i32>>,
    pub title: Option<String>,
    pub publication_from: Option<Date>,
    pub publication_to: Option<Date>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewPlanning) -> CoreResult<Model> {
    input.validate()?;
    let now = now();
    let model = ActiveModel {
        id: NotSet,
        tender_title: Set(input.tender_title),
        tender_final_given_title: Set(input.tender_final_given_title),
        tender_methods: Set(input.tender_methods),
        estimated_budget: Set(input.estimated_budget),
        tender_type: Set(input.tender_type),
        framework_type: Set(input.framework_type),
        planned_document_preparation_date: Set(input.planned_document_preparation_date),
        planned_publication_date: Set(input.planned_publication_date),
        planned_bid_opening_date: Set(input.planned_bid_opening_date),
        planned_evaluation_date: Set(input.planned_evaluation_date),
        planned_notification_date: Set(input.planned_notification_date),
        planned_contract_closure_date: Set(input.planned_contract_closure_date),
        planning_status: Set(input.planning_status),
        identification_id: Set(input.identification_id),
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
    patch: PlanningPatch,
) -> CoreResult<Option<Model>> {
    patch.validate()?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(v) = patch.tender_title {
        active.tender_title = Set(v);
    }
    if let Some(v) = patch.tender_final_given_title {
        active.tender_final_given_title = Set(Some(v));
    }
    if let Some(v) = patch.tender_methods {
        active.tender_methods = Set(v);
    }
    if let Some(v) = patch.estimated_budget {
        active.estimated_budget = Set(v);
    }
    if let Some(v) = patch.tender_type {
        active.tender_type = Set(v);
    }
    if let Some(v) = patch.framework_type {
        active.framework_type = Set(Some(v));
    }
    if let Some(v) = patch.planned_document_preparation_date {
        active.planned_document_preparation_date = Set(Some(v));
    }
    if let Some(v) = patch.planned_publication_date {
        active.planned_publication_date = Set(Some(v));
    }
    if let Some(v) = patch.planned_bid_opening_date {
        active.planned_bid_opening_date = Set(Some(v));
    }
    if let Some(v) = patch.planned_evaluation_date {
        active.planned_evaluation_date = Set(Some(v));
    }
    if let Some(v) = patch.planned_notification_date {
        active.planned_notification_date = Set(Some(v));
    }
    if let Some(v) = patch.planned_contract_closure_date {
        active.planned_contract_closure_date = Set(Some(v));
    }
    if let Some(v) = patch.planning_status {
        active.planning_status = Set(v);
    }
    if let Some(v) = patch.identification_id {
        active.identification_id = Set(Some(v));
    }
    active.updated_at = Set(now());
    Ok(Some(active.update(db).await?))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> CoreResult<bool> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn search<C: ConnectionTrait>(db: &C, filter: PlanningFilter) -> CoreResult<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(status) = filter.status {
        query = query.filter(Column::PlanningStatus.eq(status));
    }
    if let Some(id) = filter.identification_id {
        query = query.filter(Column::IdentificationId.eq(id));
    }
    if let Some(ids) = filter.identification_ids {
        query = query.filter(Column::IdentificationId.is_in(ids));
    }
    if let Some(title) = filter.title {
        query = query.filter(contains(Column::TenderTitle, &title));
    }
    if let Some(from) = filter.publication_from {
        query = query.filter(Column::PlannedPublicationDate.gte(from));
    }
    if let Some(to) = filter.publication_to {
        query = query.filter(Column::PlannedPublicationDate.lte(to));
    }
    Ok(query
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
