use entity::open_bid::{ActiveModel, Column, Entity, Model};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{contains, finish, now, require_non_negative_int, require_text, require_text_if_set};
use crate::error::CoreResult;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOpenBid {
    pub tender_title: String,
    #[serde(default)]
    pub bid_opening_date: Option<Date>,
    #[serde(default)]
    pub number_of_bids_received: Option<i32>,
    pub bid_opening_status: String,
    #[serde(default)]
    pub publication_tender_id: Option<i32>,
}

impl NewOpenBid {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "tenderTitle", &self.tender_title);
        require_text(&mut errors, "bidOpeningStatus", &self.bid_opening_status);
        if let Some(count) = self.number_of_bids_received {
            require_non_negative_int(&mut errors, "numberOfBidsReceived", count);
        }
        finish(errors)
    }
}

/// Absent fields stay untouched; set fields overwrite, never clear.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenBidPatch {
    pub tender_title: Option<String>,
    pub bid_opening_date: Option<Date>,
    pub number_of_bids_received: Option<i32>,
    pub bid_opening_status: Option<String>,
    pub publication_tender_id: Option<i32>,
}

impl OpenBidPatch {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text_if_set(&mut errors, "tenderTitle", &self.tender_title);
        require_text_if_set(&mut errors, "bidOpeningStatus", &self.bid_opening_status);
        if let Some(count) = self.number_of_bids_received {
            require_non_negative_int(&mut errors, "numberOfBidsReceived", count);
        }
        finish(errors)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenBidFilter {
    pub status: Option<String>,
    pub publication_tender_id: Option<i32>,
    pub publication_tender_ids: Option<Vec<i32>>,
    pub title: Option<String>,
    pub opened_from: Option<Date>,
    pub opened_to: Option<Date>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewOpenBid) -> CoreResult<Model> {
    input.validate()?;
    let now = now();
    let model = ActiveModel {
        id: NotSet,
        tender_title: Set(input.tender_title),
        bid_opening_date: Set(input.bid_opening_date),
        number_of_bids_received: Set(input.number_of_bids_received),
        bid_opening_status: Set(input.bid_opening_status),
        publication_tender_id: Set(input.publication_tender_id),
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
    patch: OpenBidPatch,
) -> CoreResult<Option<Model>> {
    patch.validate()?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(v) = patch.tender_title {
        active.tender_title = Set(v);
    }
    if let Some(v) = patch.bid_opening_date {
        active.bid_opening_date = Set(Some(v));
    }
    if let Some(v) = patch.number_of_bids_received {
        active.number_of_bids_received = Set(Some(v));
    }
    if let Some(v) = patch.bid_opening_status {
        active.bid_opening_status = Set(v);
    }
    if let Some(v) = patch.publication_tender_id {
        active.publication_tender_id = Set(Some(v));
    }
    active.updated_at = Set(now());
    Ok(Some(active.update(db).await?))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> CoreResult<bool> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn search<C: ConnectionTrait>(db: &C, filter: OpenBidFilter) -> CoreResult<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(status) = filter.status {
        query = query.filter(Column::BidOpeningStatus.eq(status));
    }
    if let Some(id) = filter.publication_tender_id {
        query = query.filter(Column::PublicationTenderId.eq(id));
    }
    if let Some(ids) = filter.publication_tender_ids {
        query = query.filter(Column::PublicationTenderId.is_in(ids));
    }
    if let Some(title) = filter.title {
        query = query.filter(contains(Column::TenderTitle, &title));
    }
    if let Some(from) = filter.opened_from {
        query = query.filter(Column::BidOpeningDate.gte(from));
    }
    if let Some(to) = filter.opened_to {
        query = query.filter(Column::BidOpeningDate.lte(to));
    }
    Ok(query
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
