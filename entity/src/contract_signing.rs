use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "contract_signing")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tender_title: String,
    pub contract_award_date: Option<Date>,
    pub contract_signing_date: Option<Date>,
    pub contract_amount: Option<f64>,
    pub vendor_name: Option<String>,
    pub signing_status: String,
    #[sea_orm(indexed)]
    pub bid_evaluation_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bid_evaluation::Entity",
        from = "Column::BidEvaluationId",
        to = "super::bid_evaluation::Column::Id",
        on_delete = "Cascade"
    )]
    BidEvaluation,
    #[sea_orm(has_many = "super::contract_management::Entity")]
    ContractManagement,
}

impl Related<super::bid_evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BidEvaluation.def()
    }
}

impl Related<super::contract_management::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContractManagement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
