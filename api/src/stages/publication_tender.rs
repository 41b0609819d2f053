use entity::publication_tender::{ActiveModel, Column, Entity, Model};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{contains, finish, now, require_text, require_text_if_set};
use crate::error::CoreResult;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPublicationTender {
    pub tender_title: String,
    #[serde(default)]
    pub date_of_preparation_of_bidding_document: Option<Date>,
    #[serde(default)]
    pub date_of_submission_to_committee: Option<Date>,
    #[serde(default)]
    pub date_of_cbm_approval: Option<Date>,
    #[serde(default)]
    pub date_of_tender_publication: Option<Date>,
    #[serde(default)]
    pub publication_id: Option<i32>,
}

impl NewPublicationTender {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "tenderTitle", &self.tender_title);
        finish(errors)
    }
}

/// Absent fields stay untouched; set fields overwrite, never clear.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationTenderPatch {
    pub tender_title: Option<String>,
    pub date_of_preparation_of_bidding_document: Option<Date>,
    pub date_of_submission_to_committee: Option<Date>,
    pub date_of_cbm_approval: Option<Date>,
    pub date_of_tender_publication: Option<Date>,
    pub publication_id: Option<i32>,
}

impl PublicationTenderPatch {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text_if_set(&mut errors, "tenderTitle", &self.tender_title);
        finish(errors)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationTenderFilter {
    pub publication_id: Option<i32>,
    pub publication_ids: Option<Vec<i32>>,
    pub title: Option<String>,
    pub published_from: Option<Date>,
    pub published_to: Option<Date>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewPublicationTender) -> CoreResult<Model> {
    input.validate()?;
    let now = now();
    let model = ActiveModel {
        id: NotSet,
        tender_title: Set(input.tender_title),
        date_of_preparation_of_bidding_document: Set(input.date_of_preparation_of_bidding_document),
        date_of_submission_to_committee: Set(input.date_of_submission_to_committee),
        date_of_cbm_approval: Set(input.date_of_cbm_approval),
        date_of_tender_publication: Set(input.date_of_tender_publication),
        publication_id: Set(input.publication_id),
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
    patch: PublicationTenderPatch,
) -> CoreResult<Option<Model>> {
    patch.validate()?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(v) = patch.tender_title {
        active.tender_title = Set(v);
    }
    if let Some(v) = patch.date_of_preparation_of_bidding_document {
        active.date_of_preparation_of_bidding_document = Set(Some(v));
    }
    if let Some(v) = patch.date_of_submission_to_committee {
        active.date_of_submission_to_committee = Set(Some(v));
    }
    if let Some(v) = patch.date_of_cbm_approval {
        active.date_of_cbm_approval = Set(Some(v));
    }
    if let Some(v) = patch.date_of_tender_publication {
        active.date_of_tender_publication = Set(Some(v));
    }
    if let Some(v) = patch.publication_id {
        active.publication_id = Set(Some(v));
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
    filter: PublicationTenderFilter,
) -> CoreResult<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(id) = filter.publication_id {
        query = query.filter(Column::PublicationId.eq(id));
    }
    if let Some(ids) = filter.publication_ids {
        query = query.filter(Column::PublicationId.is_in(ids));
    }
    if let Some(title) = filter.title {
        query = query.filter(contains(Column::TenderTitle, &title));
    }
    if let Some(from) = filter.published_from {
        query = query.filter(Column::DateOfTenderPublication.gte(from));
    }
    if let Some(to) = filter.published_to {
        query = query.filter(Column::DateOfTenderPublication.lte(to));
    }
    Ok(query
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
