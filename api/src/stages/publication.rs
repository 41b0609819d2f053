use entity::publication::{ActiveModel, Column, Entity, Model};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{contains, finish, now, require_non_negative_int, require_text, require_text_if_set};
use crate::error::CoreResult;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPublication {
    pub tender_title: String,
    #[serde(default)]
    pub initial_procurement_plan_publication: Option<Date>,
    #[serde(default)]
    pub quarter_two_procurement_plan: Option<Date>,
    #[serde(default)]
    pub quarter_three_procurement_plan: Option<Date>,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub tat_publication: Option<i32>,
    #[serde(default)]
    pub planning_id: Option<i32>,
}

impl NewPublication {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "tenderTitle", &self.tender_title);
        if let Some(tat) = self.tat_publication {
            require_non_negative_int(&mut errors, "tatPublication", tat);
        }
        finish(errors)
    }
}

/// Absent fields stay untouched; set fields overwrite, never clear.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationPatch {
    pub tender_title: Option<String>,
    pub initial_procurement_plan_publication: Option<Date>,
    pub quarter_two_procurement_plan: Option<Date>,
    pub quarter_three_procurement_plan: Option<Date>,
    pub revision: Option<String>,
    pub tat_publication: Option<i32>,
    pub planning_id: Option<i32>,
}

impl PublicationPatch {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text_if_set(&mut errors, "tenderTitle", &self.tender_title);
        if let Some(tat) = self.tat_publication {
            require_non_negative_int(&mut errors, "tatPublication", tat);
        }
        finish(errors)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationFilter {
    pub planning_id: Option<i32>,
    pub planning_ids: Option<Vec<i32>>,
    pub title: Option<String>,
    pub published_from: Option<Date>,
    pub published_to: Option<Date>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewPublication) -> CoreResult<Model> {
    input.validate()?;
    let now = now();
    let model = ActiveModel {
        id: NotSet,
        tender_title: Set(input.tender_title),
        initial_procurement_plan_publication: Set(input.initial_procurement_plan_publication),
        quarter_two_procurement_plan: Set(input.quarter_two_procurement_plan),
        quarter_three_procurement_plan: Set(input.quarter_three_procurement_plan),
        revision: Set(input.revision),
        tat_publication: Set(input.tat_publication),
        planning_id: Set(input.planning_id),
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
    patch: PublicationPatch,
) -> CoreResult<Option<Model>> {
    patch.validate()?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(v) = patch.tender_title {
        active.tender_title = Set(v);
    }
    if let Some(v) = patch.initial_procurement_plan_publication {
        active.initial_procurement_plan_publication = Set(Some(v));
    }
    if let Some(v) = patch.quarter_two_procurement_plan {
        active.quarter_two_procurement_plan = Set(Some(v));
    }
    if let Some(v) = patch.quarter_three_procurement_plan {
        active.quarter_three_procurement_plan = Set(Some(v));
    }
    if let Some(v) = patch.revision {
        active.revision = Set(Some(v));
    }
    if let Some(v) = patch.tat_publication {
        active.tat_publication = Set(Some(v));
    }
    if let Some(v) = patch.planning_id {
        active.planning_id = Set(Some(v));
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
    filter: PublicationFilter,
) -> CoreResult<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(id) = filter.planning_id {
        query = query.filter(Column::PlanningId.eq(id));
    }
    if let Some(ids) = filter.planning_ids {
        query = query.filter(Column::PlanningId.is_in(ids));
    }
    if let Some(title) = filter.title {
        query = query.filter(contains(Column::TenderTitle, &title));
    }
    if let Some(from) = filter.published_from {
        query = query.filter(Column::InitialProcurementPlanPublication.gte(from));
    }
    if let Some(to) = filter.published_to {
        query = query.filter(Column::InitialProcurementPlanPublication.lte(to));
    }
    Ok(query
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
