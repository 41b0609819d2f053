mod common;

use api::error::CoreError;
use api::stages::{bid_evaluation, identification, open_bid, planning};

use common::{date, new_identification, setup_db};

fn basic_planning(title: &str, identification_id: Option<i32>) -> planning::NewPlanning {
    planning::NewPlanning {
        tender_title: title.into(),
        tender_final_given_title: None,
        tender_methods: "Open Tender".into(),
        estimated_budget: 5_000.0,
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

#[tokio::test]
async fn create_round_trips_with_server_timestamps() {
    let db = setup_db().await;
    let created = identification::create(&db, new_identification("Round Trip", "Works", "Pending"))
        .await
        .unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let fetched = identification::get(&db, created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let db = setup_db().await;
    let created = identification::create(&db, new_identification("Patch Me", "Works", "Pending"))
        .await
        .unwrap();

    let updated = identification::update(
        &db,
        created.id,
        identification::IdentificationPatch {
            status: Some("Approved".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.status, "Approved");
    assert_eq!(updated.tender_title, "Patch Me");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn patch_never_clears_nullable_fields() {
    let db = setup_db().await;
    let mut input = new_identification("Keep Email", "Works", "Pending");
    input.manager_email = Some("manager@example.org".into());
    let created = identification::create(&db, input).await.unwrap();

    // Omitted patch fields leave nullable columns at their stored values.
    let updated = identification::update(
        &db,
        created.id,
        identification::IdentificationPatch {
            status: Some("Approved".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.manager_email.as_deref(), Some("manager@example.org"));
    assert!(updated.manager_phone.is_none());
}

#[tokio::test]
async fn validation_errors_are_itemized() {
    let db = setup_db().await;
    let mut input = new_identification("", "Works", "Pending");
    input.budget = -1.0;

    let err = identification::create(&db, input).await.unwrap_err();
    let CoreError::Validation(fields) = err else {
        panic!("expected validation error");
    };
    let names: Vec<_> = fields.iter().map(|f| f.field).collect();
    assert!(names.contains(&"tenderTitle"));
    assert!(names.contains(&"budget"));
}

#[tokio::test]
async fn absent_ids_are_not_errors() {
    let db = setup_db().await;
    assert!(identification::get(&db, 42).await.unwrap().is_none());
    assert!(identification::update(&db, 42, Default::default())
        .await
        .unwrap()
        .is_none());
    assert!(!identification::delete(&db, 42).await.unwrap());
}

#[tokio::test]
async fn deleting_a_child_leaves_the_parent() {
    let db = setup_db().await;
    let root = identification::create(&db, new_identification("Parent", "Works", "Pending"))
        .await
        .unwrap();
    let plan = planning::create(&db, basic_planning("Parent", Some(root.id)))
        .await
        .unwrap();

    assert!(planning::delete(&db, plan.id).await.unwrap());
    assert!(identification::get(&db, root.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_the_parent_nulls_the_child_reference() {
    let db = setup_db().await;
    let root = identification::create(&db, new_identification("Detach", "Works", "Pending"))
        .await
        .unwrap();
    let plan = planning::create(&db, basic_planning("Detach", Some(root.id)))
        .await
        .unwrap();

    assert!(identification::delete(&db, root.id).await.unwrap());
    let orphan = planning::get(&db, plan.id).await.unwrap().unwrap();
    assert!(orphan.identification_id.is_none());
}

#[tokio::test]
async fn execution_stages_cascade_on_parent_delete() {
    let db = setup_db().await;
    let bid = open_bid::create(
        &db,
        open_bid::NewOpenBid {
            tender_title: "Cascade".into(),
            bid_opening_date: None,
            number_of_bids_received: Some(3),
            bid_opening_status: "Opened".into(),
            publication_tender_id: None,
        },
    )
    .await
    .unwrap();
    let eval = bid_evaluation::create(
        &db,
        bid_evaluation::NewBidEvaluation {
            tender_title: "Cascade".into(),
            bid_evaluation_date: None,
            evaluation_committee: None,
            evaluated_amount: None,
            evaluation_status: "Pending".into(),
            opening_bid_id: Some(bid.id),
        },
    )
    .await
    .unwrap();

    assert!(open_bid::delete(&db, bid.id).await.unwrap());
    assert!(bid_evaluation::get(&db, eval.id).await.unwrap().is_none());
}

#[tokio::test]
async fn search_combines_filters() {
    let db = setup_db().await;
    let mut wanted = new_identification("Road Repair Phase II", "Infrastructure", "Approved");
    wanted.timeline_for_delivery = date(2026, 3, 1);
    let wanted = identification::create(&db, wanted).await.unwrap();

    let mut other = new_identification("Bridge Painting", "Infrastructure", "Approved");
    other.timeline_for_delivery = date(2026, 3, 1);
    identification::create(&db, other).await.unwrap();

    let mut late = new_identification("Road Repair Phase III", "Infrastructure", "Approved");
    late.timeline_for_delivery = date(2027, 1, 1);
    identification::create(&db, late).await.unwrap();

    let found = identification::search(
        &db,
        identification::IdentificationFilter {
            status: Some("Approved".into()),
            title: Some("road repair".into()),
            delivery_from: Some(date(2026, 1, 1)),
            delivery_to: Some(date(2026, 12, 31)),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(found.iter().map(|m| m.id).collect::<Vec<_>>(), vec![wanted.id]);
}

#[tokio::test]
async fn list_orders_by_creation() {
    let db = setup_db().await;
    let first = identification::create(&db, new_identification("First", "Works", "Pending"))
        .await
        .unwrap();
    let second = identification::create(&db, new_identification("Second", "Works", "Pending"))
        .await
        .unwrap();

    let all = identification::list(&db).await.unwrap();
    assert_eq!(
        all.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}
