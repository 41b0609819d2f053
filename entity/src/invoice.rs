use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Final stage of the chain.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "invoice")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tender_title: String,
    pub invoice_number: String,
    pub invoice_date: Option<Date>,
    pub invoice_amount: f64,
    pub payment_date: Option<Date>,
    pub payment_status: String,
    #[sea_orm(indexed)]
    pub contract_management_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contract_management::Entity",
        from = "Column::ContractManagementId",
        to = "super::contract_management::Column::Id",
        on_delete = "Cascade"
    )]
    ContractManagement,
}

impl Related<super::contract_management::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContractManagement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
