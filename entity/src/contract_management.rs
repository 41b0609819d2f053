use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "contract_management")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tender_title: String,
    pub tender_execution_start_date: Option<Date>,
    pub tender_execution_end_date: Option<Date>,
    pub actual_delivery_date: Option<Date>,
    pub management_status: String,
    #[sea_orm(indexed)]
    pub contract_signing_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contract_signing::Entity",
        from = "Column::ContractSigningId",
        to = "super::contract_signing::Column::Id",
        on_delete = "Cascade"
    )]
    ContractSigning,
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoice,
}

impl Related<super::contract_signing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContractSigning.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
