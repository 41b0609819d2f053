use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "open_bid")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tender_title: String,
    pub bid_opening_date: Option<Date>,
    pub number_of_bids_received: Option<i32>,
    pub bid_opening_status: String,
    #[sea_orm(indexed)]
    pub publication_tender_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::publication_tender::Entity",
        from = "Column::PublicationTenderId",
        to = "super::publication_tender::Column::Id",
        on_delete = "Cascade"
    )]
    PublicationTender,
    #[sea_orm(has_many = "super::bid_evaluation::Entity")]
    BidEvaluation,
}

impl Related<super::publication_tender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublicationTender.def()
    }
}

impl Related<super::bid_evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BidEvaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
