use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "publication")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tender_title: String,
    pub initial_procurement_plan_publication: Option<Date>,
    pub quarter_two_procurement_plan: Option<Date>,
    pub quarter_three_procurement_plan: Option<Date>,
    pub revision: Option<String>,
    pub tat_publication: Option<i32>,
    #[sea_orm(indexed)]
    pub planning_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planning::Entity",
        from = "Column::PlanningId",
        to = "super::planning::Column::Id",
        on_delete = "SetNull"
    )]
    Planning,
    #[sea_orm(has_many = "super::publication_tender::Entity")]
    PublicationTender,
}

impl Related<super::planning::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planning.def()
    }
}

impl Related<super::publication_tender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublicationTender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
