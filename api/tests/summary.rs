mod common;

use api::chain::{self, Stage};
use api::stages::{identification, planning};
use api::summary::{self, ProcurementSummary};
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection};

use common::{date, new_identification, setup_db};

fn basic_planning(title: &str, identification_id: Option<i32>) -> planning::NewPlanning {
    planning::NewPlanning {
        tender_title: title.into(),
        tender_final_given_title: None,
        tender_methods: "Open Tender".into(),
        estimated_budget: 9_500.0,
        tender_type: "National".into(),
        framework_type: None,
        planned_document_preparation_date: None,
        planned_publication_date: None,
        planned_bid_opening_date: None,
        planned_evaluation_date: None,
        planned_notification_date: None,
        planned_contract_closure_date: None,
        planning_status: "In Progress".into(),
        identification_id,
    }
}

async fn insert_legacy_identification(db: &DatabaseConnection, division: &str, status: &str) -> i32 {
    let now = Utc::now().into();
    let model = entity::identification::ActiveModel {
        id: NotSet,
        division: Set(division.into()),
        financial_year: Set("2023-2024".into()),
        manager_name: Set("Archived".into()),
        manager_email: Set(None),
        manager_phone: Set(None),
        contract_manager_name: Set(None),
        tender_title: Set("Legacy Record".into()),
        category: Set("Goods".into()),
        quantity: Set(1),
        budget: Set(1_000.0),
        estimated_amount: Set(900.0),
        technical_specification: Set("From the paper register".into()),
        market_survey_report: Set(None),
        timeline_for_delivery: Set(date(2024, 1, 31)),
        status: Set(status.into()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .unwrap();
    model.id
}

#[tokio::test]
async fn planning_only_chain_surfaces_planning_fields() {
    let db = setup_db().await;
    let root = identification::create(
        &db,
        new_identification("Road Repair", "Infrastructure", "Approved"),
    )
    .await
    .unwrap();
    let plan = planning::create(&db, basic_planning("Road Repair", Some(root.id)))
        .await
        .unwrap();

    let chain = chain::resolve_chain(&db, root.id).await.unwrap();
    assert_eq!(chain.planning.as_ref().unwrap().id, plan.id);
    assert_eq!(chain.stage(), Stage::Planning);

    let summary = summary::build_summary(&db, root.id).await.unwrap();
    assert_eq!(summary.tender_title, "Road Repair");
    assert_eq!(summary.estimated_budget, Some(9_500.0));
    assert_eq!(summary.planning_status.as_deref(), Some("In Progress"));
    assert_eq!(summary.date_of_tender_publication, None);
    assert_eq!(summary.stage, Stage::Planning);
    assert_eq!(summary.progress, 50);
}

#[tokio::test]
async fn absent_upstream_fields_are_omitted_from_json() {
    let db = setup_db().await;
    let root = identification::create(&db, new_identification("Sparse", "Works", "Pending"))
        .await
        .unwrap();

    let summary = summary::build_summary(&db, root.id).await.unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("estimatedBudget"));
    assert!(!object.contains_key("planningStatus"));
    assert!(!object.contains_key("dateOfTenderPublication"));
    assert_eq!(object["stage"], "identification");
}

#[tokio::test]
async fn all_summaries_follow_root_creation_order() {
    let db = setup_db().await;
    let first = identification::create(&db, new_identification("One", "Works", "Pending"))
        .await
        .unwrap();
    let second = identification::create(&db, new_identification("Two", "Works", "Pending"))
        .await
        .unwrap();

    let summaries = summary::build_all_summaries(&db).await.unwrap();
    assert_eq!(
        summaries.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[tokio::test]
async fn stage_and_field_filters_narrow_results() {
    let db = setup_db().await;
    let planned = identification::create(
        &db,
        new_identification("Planned Tender", "Infrastructure", "Approved"),
    )
    .await
    .unwrap();
    planning::create(&db, basic_planning("Planned Tender", Some(planned.id)))
        .await
        .unwrap();
    identification::create(&db, new_identification("Raw Tender", "Health", "Pending"))
        .await
        .unwrap();

    let by_stage = summary::filter_by_stage(&db, Stage::Planning).await.unwrap();
    assert_eq!(ids(&by_stage), vec![planned.id]);

    let by_division = summary::filter_by_division(&db, "Infrastructure")
        .await
        .unwrap();
    assert_eq!(ids(&by_division), vec![planned.id]);

    let by_status = summary::filter_by_status(&db, "Approved").await.unwrap();
    assert_eq!(ids(&by_status), vec![planned.id]);
}

fn ids(summaries: &[ProcurementSummary]) -> Vec<i32> {
    summaries.iter().map(|s| s.id).collect()
}

#[tokio::test]
async fn statistics_bucket_blanks_as_unknown() {
    let db = setup_db().await;
    identification::create(&db, new_identification("A", "Infrastructure", "Pending"))
        .await
        .unwrap();
    identification::create(&db, new_identification("B", "Infrastructure", "approved"))
        .await
        .unwrap();
    insert_legacy_identification(&db, "", "").await;

    let stats = summary::compute_statistics(&db).await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.by_stage.identification, 3);
    assert_eq!(stats.by_division.get("Infrastructure"), Some(&2));
    assert_eq!(stats.by_division.get("Unknown"), Some(&1));
    assert_eq!(stats.by_status.get("Pending"), Some(&1));
    assert_eq!(stats.by_status.get("Approved"), Some(&1));
    assert_eq!(stats.by_status.get("Unknown"), Some(&1));
}

#[tokio::test]
async fn stage_counts_are_exclusive() {
    let db = setup_db().await;
    let planned = identification::create(&db, new_identification("P", "Works", "Pending"))
        .await
        .unwrap();
    planning::create(&db, basic_planning("P", Some(planned.id)))
        .await
        .unwrap();
    identification::create(&db, new_identification("I", "Works", "Pending"))
        .await
        .unwrap();

    let stats = summary::compute_statistics(&db).await.unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.by_stage.identification, 1);
    assert_eq!(stats.by_stage.planning, 1);
    assert_eq!(stats.by_stage.publication, 0);
    assert_eq!(stats.by_stage.publication_tender, 0);
}
