//! Per-stage CRUD services. One submodule per stage table, each exposing
//! the same surface: `create`, `get`, `list`, `update`, `delete`, `search`.

pub mod bid_evaluation;
pub mod contract_management;
pub mod contract_signing;
pub mod identification;
pub mod invoice;
pub mod open_bid;
pub mod planning;
pub mod publication;
pub mod publication_tender;

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::ColumnTrait;

use crate::error::{CoreError, CoreResult, FieldError};

pub(crate) fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

/// Case-insensitive substring match, portable across Postgres and SQLite.
pub(crate) fn contains<C: ColumnTrait>(column: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", needle.trim().to_lowercase());
    Expr::expr(Func::lower(Expr::col(column))).like(pattern)
}

pub(crate) fn require_text(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

/// Patch fields are optional, but a supplied value still has to be valid.
pub(crate) fn require_text_if_set(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &Option<String>,
) {
    if let Some(value) = value {
        require_text(errors, field, value);
    }
}

pub(crate) fn require_non_negative(errors: &mut Vec<FieldError>, field: &'static str, value: f64) {
    if value < 0.0 {
        errors.push(FieldError::new(field, "must not be negative"));
    }
}

pub(crate) fn require_non_negative_int(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: i32,
) {
    if value < 0 {
        errors.push(FieldError::new(field, "must not be negative"));
    }
}

pub(crate) fn finish(errors: Vec<FieldError>) -> CoreResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(errors))
    }
}
