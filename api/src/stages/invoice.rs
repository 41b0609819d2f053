use entity::invoice::{ActiveModel, Column, Entity, Model};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{contains, finish, now, require_non_negative, require_text, require_text_if_set};
use crate::error::CoreResult;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub tender_title: String,
    pub invoice_number: String,
    #[serde(default)]
    pub invoice_date: Option<Date>,
    pub invoice_amount: f64,
    #[serde(default)]
    pub payment_date: Option<Date>,
    pub payment_status: String,
    #[serde(default)]
    pub contract_management_id: Option<i32>,
}

impl NewInvoice {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "tenderTitle", &self.tender_title);
        require_text(&mut errors, "invoiceNumber", &self.invoice_number);
        require_text(&mut errors, "paymentStatus", &self.payment_status);
        require_non_negative(&mut errors, "invoiceAmount", self.invoice_amount);
        finish(errors)
    }
}

/// Absent fields stay untouched; set fields overwrite, never clear.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePatch {
    pub tender_title: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<Date>,
    pub invoice_amount: Option<f64>,
    pub payment_date: Option<Date>,
    pub payment_status: Option<String>,
    pub contract_management_id: Option<i32>,
}

impl InvoicePatch {
    fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        require_text_if_set(&mut errors, "tenderTitle", &self.tender_title);
        require_text_if_set(&mut errors, "invoiceNumber", &self.invoice_number);
        require_text_if_set(&mut errors, "paymentStatus", &self.payment_status);
        if let Some(amount) = self.invoice_amount {
            require_non_negative(&mut errors, "invoiceAmount", amount);
        }
        finish(errors)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFilter {
    pub status: Option<String>,
    pub contract_management_id: Option<i32>,
    pub contract_management_ids: Option<Vec<i32>>,
    pub title: Option<String>,
    pub invoiced_from: Option<Date>,
    pub invoiced_to: Option<Date>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewInvoice) -> CoreResult<Model> {
    input.validate()?;
    let now = now();
    let model = ActiveModel {
        id: NotSet,
        tender_title: Set(input.tender_title),
        invoice_number: Set(input.invoice_number),
        invoice_date: Set(input.invoice_date),
        invoice_amount: Set(input.invoice_amount),
        payment_date: Set(input.payment_date),
        payment_status: Set(input.payment_status),
        contract_management_id: Set(input.contract_management_id),
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
    patch: InvoicePatch,
) -> CoreResult<Option<Model>> {
    patch.validate()?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(v) = patch.tender_title {
        active.tender_title = Set(v);
    }
    if let Some(v) = patch.invoice_number {
        active.invoice_number = Set(v);
    }
    if let Some(v) = patch.invoice_date {
        active.invoice_date = Set(Some(v));
    }
    if let Some(v) = patch.invoice_amount {
        active.invoice_amount = Set(v);
    }
    if let Some(v) = patch.payment_date {
        active.payment_date = Set(Some(v));
    }
    if let Some(v) = patch.payment_status {
        active.payment_status = Set(v);
    }
    if let Some(v) = patch.contract_management_id {
        active.contract_management_id = Set(Some(v));
    }
    active.updated_at = Set(now());
    Ok(Some(active.update(db).await?))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> CoreResult<bool> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn search<C: ConnectionTrait>(db: &C, filter: InvoiceFilter) -> CoreResult<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(status) = filter.status {
        query = query.filter(Column::PaymentStatus.eq(status));
    }
    if let Some(id) = filter.contract_management_id {
        query = query.filter(Column::ContractManagementId.eq(id));
    }
    if let Some(ids) = filter.contract_management_ids {
        query = query.filter(Column::ContractManagementId.is_in(ids));
    }
    if let Some(title) = filter.title {
        query = query.filter(contains(Column::TenderTitle, &title));
    }
    if let Some(from) = filter.invoiced_from {
        query = query.filter(Column::InvoiceDate.gte(from));
    }
    if let Some(to) = filter.invoiced_to {
        query = query.filter(Column::InvoiceDate.lte(to));
    }
    Ok(query
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}
