use entity::identification::{ActiveModel, Column, Entity, Model};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{contains, finish, now, require_non_negative, require_non_negative_int, require_text, require_text_if_set};
use crate::error::CoreResult;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdentification {
    pub division: String,
    pub financial_year: String,
    pub manager_name: String,
    #[serde(default)]
    pub manager_email: Option<String>,
    #[serde(default)]
    pub manager_phone: Option<String>,
    #[serde(default)]
    pub contract_manager_name: Option<String>,
    pub tender_title: String,
    pub category: String,
    pub quantity: i32,
    pub budget: f64,
    pub estimated_amount: f64,
    pub technical_specification: String,
    #[serde(default)]
    pub market_survey_report: Option<String>,
    pub timeline_for_delivery: Date,
    pub status: String,
}

impl NewIdentification {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "division", &self.division);
        require_text(&mut errors, "financialYear", &self.financial_year);
        require_text(&mut errors, "managerName", &self.manager_name);
        require_text(&mut errors, "tenderTitle", &self.tender_title);
        require_text(&mut errors, "category", &self.category);
        require_text(&mut errors, "technicalSpecification", &self.technical_specification);
        require_text(&mut errors, "status", &self.status);
        require_non_negative_int(&mut errors, "quantity", self.quantity);
        require_non_negative(&mut errors, "budget", self.budget);
        require_non_negative(&mut errors, "estimatedAmount", self.estimated_amount);
        finish(errors)
    }
}

/// All-optional patch: absent fields are left untouched, supplied values
/// overwrite. A nullable column cannot be cleared back to NULL through a
/// patch, only overwritten.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationPatch {
    pub division: Option<String>,
    pub financial_year: Option<String>,
    pub manager_name: Option<String>,
    pub manager_email: Option<String>,
    pub manager_phone: Option<String>,
    pub contract_manager_name: Option<String>,
    pub tender_title: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub budget: Option<f64>,
    pub estimated_amount: Option<f64>,
    pub technical_specification: Option<String>,
    pub market_survey_report: Option<String>,
    pub timeline_for_delivery: Option<Date>,
    pub status: Option<String>,
}

impl IdentificationPatch {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text_if_set(&mut errors, "division", &self.division);
        require_text_if_set(&mut errors, "financialYear", &self.financial_year);
        require_text_if_set(&mut errors, "managerName", &self.manager_name);
        require_text_if_set(&mut errors, "tenderTitle", &self.tender_title);
        require_text_if_set(&mut errors, "category", &self.category);
        require_text_if_set(&mut errors, "status", &self.status);
        if let Some(quantity) = self.quantity {
            require_non_negative_int(&mut errors, "quantity", quantity);
        }
        if let Some(budget) = self.budget {
            require_non_negative(&mut errors, "budget", budget);
        }
        if let Some(estimated) = self.estimated_amount {
            require_non_negative(&mut errors, "estimatedAmount", estimated);
        }
        finish(errors)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationFilter {
    pub status: Option<String>,
    pub division: Option<String>,
    pub title: Option<String>,
    pub delivery_from: Option<Date>,
    pub delivery_to: Option<Date>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewIdentification) -> CoreResult<Model> {
    input.validate()?;
    let now = now();
    let model = ActiveModel {
        id: NotSet,
        division: Set(input.division),
        financial_year: Set(input.financial_year),
        manager_name: Set(input.manager_name),
        manager_email: Set(input.manager_email),
        manager_phone: Set(input.manager_phone),
        contract_manager_name: Set(input.contract_manager_name),
        tender_title: Set(input.tender_title),
        category: Set(input.category),
        quantity: Set(input.quantity),
        budget: Set(input.budget),
        estimated_amount: Set(input.estimated_amount),
        technical_specification: Set(input.technical_specification),
        market_survey_report: Set(input.market_survey_report),
        timeline_for_delivery: Set(input.timeline_for_delivery),
        status: Set(input.status),
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
    patch: IdentificationPatch,
) -> CoreResult<Option<Model>> {
    patch.validate()?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(v) = patch.division {
        active.division = Set(v);
    }
    if let Some(v) = patch.financial_year {
        active.financial_year = Set(v);
    }
    if let Some(v) = patch.manager_name {
        active.manager_name = Set(v);
    }
    if let Some(v) = patch.manager_email {
        active.manager_email = Set(Some(v));
    }
    if let Some(v) = patch.manager_phone {
        active.manager_phone = Set(Some(v));
    }
    if let Some(v) = patch.contract_manager_name {
        active.contract_manager_name = Set(Some(v));
    }
    if let Some(v) = patch.tender_title {
        active.tender_title = Set(v);
    }
    if let Some(v) = patch.category {
        active.category = Set(v);
    }
    if let Some(v) = patch.quantity {
        active.quantity = Set(v);
    }
    if let Some(v) = patch.budget {
        active.budget = Set(v);
    }
    if let Some(v) = patch.estimated_amount {
        active.estimated_amount = Set(v);
    }
    if let Some(v) = patch.technical_specification {
        active.technical_specification = Set(v);
    }
    if let Some(v) = patch.market_survey_report {
        active.market_survey_report = Set(Some(v));
    }
    if let Some(v) = patch.timeline_for_delivery {
        active.timeline_for_delivery = Set(v);
    }
    if let Some(v) = patch.status {
        active.status = Set(v);
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
    filter: IdentificationFilter,
) -> CoreResult<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(status) = filter.status {
        query = query.filter(Column::Status.eq(status));
    }
    if let Some(division) = filter.division {
        query = query.filter(Column::Division.eq(division));
    }
    if let Some(title) = filter.title {
        query = query.filter(contains(Column::TenderTitle, &title));
    }
    if let Some(from) = filter.delivery_from {
        query = query.filter(Column::TimelineForDelivery.gte(from));
    }
    if let Some(to) = filter.delivery_to {
        query = query.filter(Column::TimelineForDelivery.lte(to));
    }
    Ok(query
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
