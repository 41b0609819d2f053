use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "bid_evaluation")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tender_title: String,
    pub bid_evaluation_date: Option<Date>,
    pub evaluation_committee: Option<String>,
    pub evaluated_amount: Option<f64>,
    pub evaluation_status: String,
    #[sea_orm(indexed)]
    pub opening_bid_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::open_bid::Entity",
        from = "Column::OpeningBidId",
        to = "super::open_bid::Column::Id",
        on_delete = "Cascade"
    )]
    OpenBid,
    #[sea_orm(has_many = "super::contract_signing::Entity")]
    ContractSigning,
}

impl Related<super::open_bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OpenBid.def()
    }
}

impl Related<super::contract_signing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContractSigning.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
