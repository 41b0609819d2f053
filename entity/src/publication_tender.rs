use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "publication_tender")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tender_title: String,
    pub date_of_preparation_of_bidding_document: Option<Date>,
    pub date_of_submission_to_committee: Option<Date>,
    pub date_of_cbm_approval: Option<Date>,
    pub date_of_tender_publication: Option<Date>,
    #[sea_orm(indexed)]
    pub publication_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::publication::Entity",
        from = "Column::PublicationId",
        to = "super::publication::Column::Id",
        on_delete = "SetNull"
    )]
    Publication,
    #[sea_orm(has_many = "super::open_bid::Entity")]
    OpenBid,
}

impl Related<super::publication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publication.def()
    }
}

impl Related<super::open_bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OpenBid.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
