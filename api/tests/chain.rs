mod common;

use api::chain::{self, Stage};
use api::error::CoreError;
use api::stages::{identification, planning, publication, publication_tender};
use sea_orm::DatabaseConnection;

use common::{new_identification, setup_db};

fn new_planning(title: &str, identification_id: Option<i32>) -> planning::NewPlanning {
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

fn new_publication(title: &str, planning_id: Option<i32>) -> publication::NewPublication {
    publication::NewPublication {
        tender_title: title.into(),
        initial_procurement_plan_publication: None,
        quarter_two_procurement_plan: None,
        quarter_three_procurement_plan: None,
        revision: None,
        tat_publication: None,
        planning_id,
    }
}

fn new_tender(
    title: &str,
    publication_id: Option<i32>,
) -> publication_tender::NewPublicationTender {
    publication_tender::NewPublicationTender {
        tender_title: title.into(),
        date_of_preparation_of_bidding_document: None,
        date_of_submission_to_committee: None,
        date_of_cbm_approval: None,
        date_of_tender_publication: None,
        publication_id,
    }
}

async fn build_chain(db: &DatabaseConnection, title: &str, depth: usize) -> i32 {
    let root = identification::create(db, new_identification(title, "Works", "Pending"))
        .await
        .unwrap();
    if depth < 2 {
        return root.id;
    }
    let planning = planning::create(db, new_planning(title, Some(root.id)))
        .await
        .unwrap();
    if depth < 3 {
        return root.id;
    }
    let publication = publication::create(db, new_publication(title, Some(planning.id)))
        .await
        .unwrap();
    if depth < 4 {
        return root.id;
    }
    publication_tender::create(db, new_tender(title, Some(publication.id)))
        .await
        .unwrap();
    root.id
}

#[tokio::test]
async fn missing_root_is_not_found() {
    let db = setup_db().await;
    let err = chain::resolve_chain(&db, 999).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound("identification")));
}

#[tokio::test]
async fn chain_depth_drives_stage_and_progress() {
    let db = setup_db().await;
    let expectations = [
        (1, Stage::Identification, 25),
        (2, Stage::Planning, 50),
        (3, Stage::Publication, 75),
        (4, Stage::PublicationTender, 100),
    ];
    for (depth, stage, progress) in expectations {
        let id = build_chain(&db, &format!("Depth {depth}"), depth).await;
        let chain = chain::resolve_chain(&db, id).await.unwrap();
        assert_eq!(chain.stage(), stage, "depth {depth}");
        assert_eq!(chain.progress(), progress, "depth {depth}");
    }
}

#[tokio::test]
async fn deepest_stage_wins_over_shallower_ones() {
    let db = setup_db().await;
    let id = build_chain(&db, "Full Prefix", 4).await;
    let chain = chain::resolve_chain(&db, id).await.unwrap();
    assert!(chain.publication.is_some());
    assert!(chain.publication_tender.is_some());
    assert_eq!(chain.stage(), Stage::PublicationTender);
}

#[tokio::test]
async fn newest_sibling_wins_but_all_stay_reachable() {
    let db = setup_db().await;
    let root = identification::create(&db, new_identification("Siblings", "Works", "Pending"))
        .await
        .unwrap();
    let first = planning::create(&db, new_planning("First Plan", Some(root.id)))
        .await
        .unwrap();
    let second = planning::create(&db, new_planning("Second Plan", Some(root.id)))
        .await
        .unwrap();

    let chain = chain::resolve_chain(&db, root.id).await.unwrap();
    assert_eq!(chain.planning.unwrap().id, second.id);

    let all = planning::search(
        &db,
        planning::PlanningFilter {
            identification_id: Some(root.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(
        all.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[tokio::test]
async fn batched_resolution_matches_per_root_resolution() {
    let db = setup_db().await;
    let mut ids = Vec::new();
    for depth in 1..=4 {
        ids.push(build_chain(&db, &format!("Batch {depth}"), depth).await);
    }

    let batched = chain::resolve_all_chains(&db).await.unwrap();
    assert_eq!(batched.len(), ids.len());
    for chain_batched in batched {
        let single = chain::resolve_chain(&db, chain_batched.identification.id)
            .await
            .unwrap();
        assert_eq!(chain_batched, single);
    }
}

#[tokio::test]
async fn unlinked_downstream_records_do_not_count() {
    let db = setup_db().await;
    let root = identification::create(&db, new_identification("Orphans", "Works", "Pending"))
        .await
        .unwrap();
    // A planning without a back-reference belongs to no chain.
    planning::create(&db, new_planning("Floating Plan", None))
        .await
        .unwrap();

    let chain = chain::resolve_chain(&db, root.id).await.unwrap();
    assert_eq!(chain.stage(), Stage::Identification);
    assert!(chain.planning.is_none());
}
