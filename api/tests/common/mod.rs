use api::stages::identification::NewIdentification;
use chrono::NaiveDate;
use sea_orm::prelude::Date;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    bootstrap_sqlite(&db).await;
    db
}

pub fn date(year: i32, month: u32, day: u32) -> Date {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A valid identification input with the given title; tweak fields per test.
pub fn new_identification(title: &str, division: &str, status: &str) -> NewIdentification {
    NewIdentification {
        division: division.into(),
        financial_year: "2025-2026".into(),
        manager_name: "Test Manager".into(),
        manager_email: None,
        manager_phone: None,
        contract_manager_name: None,
        tender_title: title.into(),
        category: "Works".into(),
        quantity: 1,
        budget: 10_000.0,
        estimated_amount: 9_800.0,
        technical_specification: "Per annex".into(),
        market_survey_report: None,
        timeline_for_delivery: date(2026, 6, 30),
        status: status.into(),
    }
}

async fn bootstrap_sqlite(db: &DatabaseConnection) {
    exec(db, "PRAGMA foreign_keys = ON;").await;

    exec(
        db,
        r#"
        CREATE TABLE identification (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            division TEXT NOT NULL,
            financial_year TEXT NOT NULL,
            manager_name TEXT NOT NULL,
            manager_email TEXT,
            manager_phone TEXT,
            contract_manager_name TEXT,
            tender_title TEXT NOT NULL,
            category TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            budget REAL NOT NULL,
            estimated_amount REAL NOT NULL,
            technical_specification TEXT NOT NULL,
            market_survey_report TEXT,
            timeline_for_delivery TEXT NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await;

    exec(
        db,
        r#"
        CREATE TABLE planning (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tender_title TEXT NOT NULL,
            tender_final_given_title TEXT,
            tender_methods TEXT NOT NULL,
            estimated_budget REAL NOT NULL,
            tender_type TEXT NOT NULL,
            framework_type TEXT,
            planned_document_preparation_date TEXT,
            planned_publication_date TEXT,
            planned_bid_opening_date TEXT,
            planned_evaluation_date TEXT,
            planned_notification_date TEXT,
            planned_contract_closure_date TEXT,
            planning_status TEXT NOT NULL,
            identification_id INTEGER REFERENCES identification (id) ON DELETE SET NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await;

    exec(
        db,
        r#"
        CREATE TABLE publication (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tender_title TEXT NOT NULL,
            initial_procurement_plan_publication TEXT,
            quarter_two_procurement_plan TEXT,
            quarter_three_procurement_plan TEXT,
            revision TEXT,
            tat_publication INTEGER,
            planning_id INTEGER REFERENCES planning (id) ON DELETE SET NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await;

    exec(
        db,
        r#"
        CREATE TABLE publication_tender (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tender_title TEXT NOT NULL,
            date_of_preparation_of_bidding_document TEXT,
            date_of_submission_to_committee TEXT,
            date_of_cbm_approval TEXT,
            date_of_tender_publication TEXT,
            publication_id INTEGER REFERENCES publication (id) ON DELETE SET NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await;

    exec(
        db,
        r#"
        CREATE TABLE open_bid (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tender_title TEXT NOT NULL,
            bid_opening_date TEXT,
            number_of_bids_received INTEGER,
            bid_opening_status TEXT NOT NULL,
            publication_tender_id INTEGER REFERENCES publication_tender (id) ON DELETE CASCADE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await;

    exec(
        db,
        r#"
        CREATE TABLE bid_evaluation (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tender_title TEXT NOT NULL,
            bid_evaluation_date TEXT,
            evaluation_committee TEXT,
            evaluated_amount REAL,
            evaluation_status TEXT NOT NULL,
            opening_bid_id INTEGER REFERENCES open_bid (id) ON DELETE CASCADE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await;

    exec(
        db,
        r#"
        CREATE TABLE contract_signing (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tender_title TEXT NOT NULL,
            contract_award_date TEXT,
            contract_signing_date TEXT,
            contract_amount REAL,
            vendor_name TEXT,
            signing_status TEXT NOT NULL,
            bid_evaluation_id INTEGER REFERENCES bid_evaluation (id) ON DELETE CASCADE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await;

    exec(
        db,
        r#"
        CREATE TABLE contract_management (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tender_title TEXT NOT NULL,
            tender_execution_start_date TEXT,
            tender_execution_end_date TEXT,
            actual_delivery_date TEXT,
            management_status TEXT NOT NULL,
            contract_signing_id INTEGER REFERENCES contract_signing (id) ON DELETE CASCADE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await;

    exec(
        db,
        r#"
        CREATE TABLE invoice (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tender_title TEXT NOT NULL,
            invoice_number TEXT NOT NULL,
            invoice_date TEXT,
            invoice_amount REAL NOT NULL,
            payment_date TEXT,
            payment_status TEXT NOT NULL,
            contract_management_id INTEGER REFERENCES contract_management (id) ON DELETE CASCADE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .await;
}

async fn exec(db: &DatabaseConnection, sql: &str) {
    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        sql.to_string(),
    ))
    .await
    .unwrap();
}
