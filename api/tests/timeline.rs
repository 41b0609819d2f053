mod common;

use api::chain::{self, Stage};
use api::stages::{identification, planning, publication, publication_tender};
use api::timeline::build_timeline;

use common::{date, new_identification, setup_db};

#[tokio::test]
async fn identification_only_chain_has_single_event() {
    let db = setup_db().await;
    let root = identification::create(&db, new_identification("Solo", "Works", "Approved"))
        .await
        .unwrap();

    let chain = chain::resolve_chain(&db, root.id).await.unwrap();
    let events = build_timeline(&chain);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].stage, Stage::Identification);
    assert_eq!(events[0].title, "Identification Created");
    assert_eq!(events[0].status, "Approved");
    assert_eq!(events[0].date, root.created_at);
}

#[tokio::test]
async fn events_are_sorted_ascending_by_date() {
    let db = setup_db().await;
    let root = identification::create(&db, new_identification("Sorted", "Works", "Pending"))
        .await
        .unwrap();
    planning::create(
        &db,
        planning::NewPlanning {
            tender_title: "Sorted".into(),
            tender_final_given_title: None,
            tender_methods: "Open Tender".into(),
            estimated_budget: 5_000.0,
            tender_type: "National".into(),
            framework_type: None,
            // Deliberately out of order in the record.
            planned_document_preparation_date: Some(date(2025, 3, 1)),
            planned_publication_date: Some(date(2025, 1, 10)),
            planned_bid_opening_date: Some(date(2025, 2, 5)),
            planned_evaluation_date: None,
            planned_notification_date: None,
            planned_contract_closure_date: None,
            planning_status: "In Progress".into(),
            identification_id: Some(root.id),
        },
    )
    .await
    .unwrap();

    let chain = chain::resolve_chain(&db, root.id).await.unwrap();
    let events = build_timeline(&chain);

    let dates: Vec<_> = events.iter().map(|e| e.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);

    // Planned dates predate the creation timestamps, so they come first.
    assert_eq!(events[0].title, "Publication");
    assert_eq!(events[1].title, "Bid Opening");
    assert_eq!(events[2].title, "Document Preparation");
}

#[tokio::test]
async fn same_date_events_keep_chain_order() {
    let db = setup_db().await;
    let shared = date(2025, 4, 1);
    let root = identification::create(&db, new_identification("Ties", "Works", "Pending"))
        .await
        .unwrap();
    let plan = planning::create(
        &db,
        planning::NewPlanning {
            tender_title: "Ties".into(),
            tender_final_given_title: None,
            tender_methods: "Open Tender".into(),
            estimated_budget: 5_000.0,
            tender_type: "National".into(),
            framework_type: None,
            planned_document_preparation_date: None,
            planned_publication_date: Some(shared),
            planned_bid_opening_date: None,
            planned_evaluation_date: None,
            planned_notification_date: None,
            planned_contract_closure_date: None,
            planning_status: "In Progress".into(),
            identification_id: Some(root.id),
        },
    )
    .await
    .unwrap();
    publication::create(
        &db,
        publication::NewPublication {
            tender_title: "Ties".into(),
            initial_procurement_plan_publication: Some(shared),
            quarter_two_procurement_plan: None,
            quarter_three_procurement_plan: None,
            revision: None,
            tat_publication: None,
            planning_id: Some(plan.id),
        },
    )
    .await
    .unwrap();

    let chain = chain::resolve_chain(&db, root.id).await.unwrap();
    let events = build_timeline(&chain);

    let planning_pos = events
        .iter()
        .position(|e| e.stage == Stage::Planning && e.title == "Publication")
        .unwrap();
    let publication_pos = events
        .iter()
        .position(|e| e.title == "Initial Procurement Plan Publication")
        .unwrap();
    assert_eq!(events[planning_pos].date, events[publication_pos].date);
    assert!(planning_pos < publication_pos);
}

#[tokio::test]
async fn statuses_follow_stage_rules() {
    let db = setup_db().await;
    let root = identification::create(&db, new_identification("Statuses", "Works", "Approved"))
        .await
        .unwrap();
    let plan = planning::create(
        &db,
        planning::NewPlanning {
            tender_title: "Statuses".into(),
            tender_final_given_title: None,
            tender_methods: "Open Tender".into(),
            estimated_budget: 5_000.0,
            tender_type: "National".into(),
            framework_type: None,
            planned_document_preparation_date: Some(date(2025, 5, 1)),
            planned_publication_date: None,
            planned_bid_opening_date: None,
            planned_evaluation_date: None,
            planned_notification_date: None,
            planned_contract_closure_date: None,
            planning_status: "In Progress".into(),
            identification_id: Some(root.id),
        },
    )
    .await
    .unwrap();
    let publication = publication::create(
        &db,
        publication::NewPublication {
            tender_title: "Statuses".into(),
            initial_procurement_plan_publication: Some(date(2025, 6, 1)),
            quarter_two_procurement_plan: None,
            quarter_three_procurement_plan: None,
            revision: None,
            tat_publication: None,
            planning_id: Some(plan.id),
        },
    )
    .await
    .unwrap();
    publication_tender::create(
        &db,
        publication_tender::NewPublicationTender {
            tender_title: "Statuses".into(),
            date_of_preparation_of_bidding_document: None,
            date_of_submission_to_committee: None,
            date_of_cbm_approval: None,
            date_of_tender_publication: Some(date(2025, 7, 1)),
            publication_id: Some(publication.id),
        },
    )
    .await
    .unwrap();

    let chain = chain::resolve_chain(&db, root.id).await.unwrap();
    let events = build_timeline(&chain);

    let status_of = |title: &str| {
        events
            .iter()
            .find(|e| e.title == title)
            .map(|e| e.status.clone())
            .unwrap()
    };
    assert_eq!(status_of("Identification Created"), "Approved");
    assert_eq!(status_of("Planning Created"), "In Progress");
    assert_eq!(status_of("Document Preparation"), "planned");
    assert_eq!(status_of("Publication Created"), "active");
    assert_eq!(status_of("Initial Procurement Plan Publication"), "completed");
    assert_eq!(status_of("Publication Tender Created"), "active");
    assert_eq!(status_of("Tender Publication"), "completed");
}
