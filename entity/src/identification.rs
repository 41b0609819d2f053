use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Root of the procurement chain. Has no upstream reference; every other
/// stage eventually traces back here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "identification")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub division: String,
    pub financial_year: String,
    pub manager_name: String,
    pub manager_email: Option<String>,
    pub manager_phone: Option<String>,
    pub contract_manager_name: Option<String>,
    pub tender_title: String,
    pub category: String,
    pub quantity: i32,
    pub budget: f64,
    pub estimated_amount: f64,
    pub technical_specification: String,
    pub market_survey_report: Option<String>,
    pub timeline_for_delivery: Date,
    /// Free text in storage; `{Pending, Approved, Rejected}` are the
    /// canonical values the UI understands.
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planning::Entity")]
    Planning,
}

impl Related<super::planning::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planning.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
