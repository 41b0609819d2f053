use chrono::{NaiveDate, Utc};
use sea_orm::prelude::Date;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ConnectionTrait};

use crate::error::CoreResult;
use crate::stages::{
    bid_evaluation, contract_management, contract_signing, identification, invoice, open_bid,
    planning, publication, publication_tender,
};

fn date(year: i32, month: u32, day: u32) -> Date {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Inserts a small demo corpus: identifications at several chain depths plus
/// one fully executed tender, enough to exercise every dashboard view.
pub async fn seed_demo<C: ConnectionTrait>(db: &C) -> CoreResult<()> {
    // Depth 1: identification only.
    identification::create(
        db,
        identification::NewIdentification {
            division: "Estates".into(),
            financial_year: "2025-2026".into(),
            manager_name: "Karma Dorji".into(),
            manager_email: Some("karma.dorji@example.gov".into()),
            manager_phone: None,
            contract_manager_name: None,
            tender_title: "Office Furniture Replacement".into(),
            category: "Goods".into(),
            quantity: 120,
            budget: 45_000.0,
            estimated_amount: 42_500.0,
            technical_specification: "Ergonomic desks and chairs per annex A".into(),
            market_survey_report: None,
            timeline_for_delivery: date(2026, 3, 31),
            status: "Pending".into(),
        },
    )
    .await?;

    // Depth 2: identification + planning.
    let roads = identification::create(
        db,
        identification::NewIdentification {
            division: "Infrastructure".into(),
            financial_year: "2025-2026".into(),
            manager_name: "Sonam Choden".into(),
            manager_email: Some("sonam.choden@example.gov".into()),
            manager_phone: Some("+975-17-555-012".into()),
            contract_manager_name: Some("Tashi Wangmo".into()),
            tender_title: "Road Repair".into(),
            category: "Works".into(),
            quantity: 1,
            budget: 10_000.0,
            estimated_amount: 9_800.0,
            technical_specification: "Resurfacing of the southern access road".into(),
            market_survey_report: Some("survey-2025-07".into()),
            timeline_for_delivery: date(2026, 6, 30),
            status: "Approved".into(),
        },
    )
    .await?;
    planning::create(
        db,
        planning::NewPlanning {
            tender_title: "Road Repair".into(),
            tender_final_given_title: Some("Southern Access Road Resurfacing".into()),
            tender_methods: "Open Tender".into(),
            estimated_budget: 9_500.0,
            tender_type: "National".into(),
            framework_type: None,
            planned_document_preparation_date: Some(date(2025, 9, 15)),
            planned_publication_date: Some(date(2025, 10, 1)),
            planned_bid_opening_date: Some(date(2025, 11, 1)),
            planned_evaluation_date: Some(date(2025, 11, 15)),
            planned_notification_date: None,
            planned_contract_closure_date: None,
            planning_status: "In Progress".into(),
            identification_id: Some(roads.id),
        },
    )
    .await?;

    // Depth 4 plus execution stages: a tender that ran to payment.
    let lab = identification::create(
        db,
        identification::NewIdentification {
            division: "Health Services".into(),
            financial_year: "2024-2025".into(),
            manager_name: "Pema Lhamo".into(),
            manager_email: None,
            manager_phone: None,
            contract_manager_name: Some("Ugyen Tshering".into()),
            tender_title: "Laboratory Equipment Procurement".into(),
            category: "Goods".into(),
            quantity: 14,
            budget: 250_000.0,
            estimated_amount: 238_000.0,
            technical_specification: "Analyzer units per technical annex B".into(),
            market_survey_report: Some("survey-2024-11".into()),
            timeline_for_delivery: date(2025, 8, 31),
            status: "Approved".into(),
        },
    )
    .await?;
    let lab_planning = planning::create(
        db,
        planning::NewPlanning {
            tender_title: "Laboratory Equipment Procurement".into(),
            tender_final_given_title: None,
            tender_methods: "Open Tender".into(),
            estimated_budget: 238_000.0,
            tender_type: "International".into(),
            framework_type: Some("Single".into()),
            planned_document_preparation_date: Some(date(2024, 12, 1)),
            planned_publication_date: Some(date(2025, 1, 10)),
            planned_bid_opening_date: Some(date(2025, 2, 20)),
            planned_evaluation_date: Some(date(2025, 3, 10)),
            planned_notification_date: Some(date(2025, 3, 25)),
            planned_contract_closure_date: Some(date(2025, 8, 31)),
            planning_status: "Completed".into(),
            identification_id: Some(lab.id),
        },
    )
    .await?;
    let lab_publication = publication::create(
        db,
        publication::NewPublication {
            tender_title: "Laboratory Equipment Procurement".into(),
            initial_procurement_plan_publication: Some(date(2025, 1, 10)),
            quarter_two_procurement_plan: Some(date(2025, 4, 5)),
            quarter_three_procurement_plan: None,
            revision: Some("Rev 1".into()),
            tat_publication: Some(12),
            planning_id: Some(lab_planning.id),
        },
    )
    .await?;
    let lab_tender = publication_tender::create(
        db,
        publication_tender::NewPublicationTender {
            tender_title: "Laboratory Equipment Procurement".into(),
            date_of_preparation_of_bidding_document: Some(date(2025, 1, 20)),
            date_of_submission_to_committee: Some(date(2025, 1, 28)),
            date_of_cbm_approval: Some(date(2025, 2, 3)),
            date_of_tender_publication: Some(date(2025, 2, 10)),
            publication_id: Some(lab_publication.id),
        },
    )
    .await?;
    let lab_bid = open_bid::create(
        db,
        open_bid::NewOpenBid {
            tender_title: "Laboratory Equipment Procurement".into(),
            bid_opening_date: Some(date(2025, 3, 12)),
            number_of_bids_received: Some(5),
            bid_opening_status: "Opened".into(),
            publication_tender_id: Some(lab_tender.id),
        },
    )
    .await?;
    let lab_eval = bid_evaluation::create(
        db,
        bid_evaluation::NewBidEvaluation {
            tender_title: "Laboratory Equipment Procurement".into(),
            bid_evaluation_date: Some(date(2025, 3, 24)),
            evaluation_committee: Some("Technical Evaluation Committee".into()),
            evaluated_amount: Some(231_400.0),
            evaluation_status: "Completed".into(),
            opening_bid_id: Some(lab_bid.id),
        },
    )
    .await?;
    let lab_signing = contract_signing::create(
        db,
        contract_signing::NewContractSigning {
            tender_title: "Laboratory Equipment Procurement".into(),
            contract_award_date: Some(date(2025, 4, 2)),
            contract_signing_date: Some(date(2025, 4, 16)),
            contract_amount: Some(231_400.0),
            vendor_name: Some("MedSupply International".into()),
            signing_status: "Signed".into(),
            bid_evaluation_id: Some(lab_eval.id),
        },
    )
    .await?;
    let lab_mgmt = contract_management::create(
        db,
        contract_management::NewContractManagement {
            tender_title: "Laboratory Equipment Procurement".into(),
            tender_execution_start_date: Some(date(2025, 5, 1)),
            tender_execution_end_date: Some(date(2025, 8, 15)),
            actual_delivery_date: Some(date(2025, 8, 9)),
            management_status: "Delivered".into(),
            contract_signing_id: Some(lab_signing.id),
        },
    )
    .await?;
    invoice::create(
        db,
        invoice::NewInvoice {
            tender_title: "Laboratory Equipment Procurement".into(),
            invoice_number: "INV-2025-0147".into(),
            invoice_date: Some(date(2025, 8, 20)),
            invoice_amount: 231_400.0,
            payment_date: Some(date(2025, 9, 5)),
            payment_status: "Paid".into(),
            contract_management_id: Some(lab_mgmt.id),
        },
    )
    .await?;

    // A record carried over from the paper register: blank division and a
    // non-canonical status. Inserted below the validation boundary, the way
    // such rows actually arrived, so the statistics "Unknown" bucket shows
    // up in demos.
    let now = Utc::now().into();
    entity::identification::ActiveModel {
        id: NotSet,
        division: Set(String::new()),
        financial_year: Set("2023-2024".into()),
        manager_name: Set("Archived".into()),
        manager_email: Set(None),
        manager_phone: Set(None),
        contract_manager_name: Set(None),
        tender_title: Set("Legacy Stationery Supply".into()),
        category: Set("Goods".into()),
        quantity: Set(300),
        budget: Set(3_200.0),
        estimated_amount: Set(3_000.0),
        technical_specification: Set("Carried over from the paper register".into()),
        market_survey_report: Set(None),
        timeline_for_delivery: Set(date(2024, 1, 31)),
        status: Set("On Hold".into()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;

    tracing::info!("seeded demo procurement corpus");
    Ok(())
}
