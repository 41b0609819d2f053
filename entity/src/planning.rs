use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "planning")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tender_title: String,
    pub tender_final_given_title: Option<String>,
    pub tender_methods: String,
    pub estimated_budget: f64,
    pub tender_type: String,
    pub framework_type: Option<String>,
    pub planned_document_preparation_date: Option<Date>,
    pub planned_publication_date: Option<Date>,
    pub planned_bid_opening_date: Option<Date>,
    pub planned_evaluation_date: Option<Date>,
    pub planned_notification_date: Option<Date>,
    pub planned_contract_closure_date: Option<Date>,
    pub planning_status: String,
    #[sea_orm(indexed)]
    pub identification_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::identification::Entity",
        from = "Column::IdentificationId",
        to = "super::identification::Column::Id",
        on_delete = "SetNull"
    )]
    Identification,
    #[sea_orm(has_many = "super::publication::Entity")]
    Publication,
}

impl Related<super::identification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Identification.def()
    }
}

impl Related<super::publication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
