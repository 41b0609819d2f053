use chrono::NaiveTime;
use sea_orm::prelude::{Date, DateTimeWithTimeZone};
use serde::Serialize;

use crate::chain::{ProcurementChain, Stage};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub stage: Stage,
    pub title: &'static str,
    pub date: DateTimeWithTimeZone,
    pub status: String,
}

/// Date-only milestones land at midnight UTC so they sort alongside the
/// timestamped creation events.
fn at_midnight(date: Date) -> DateTimeWithTimeZone {
    date.and_time(NaiveTime::MIN).and_utc().into()
}

/// Flattens a resolved chain into its milestone events, sorted ascending by
/// date. The sort is stable, so same-date events keep chain order
/// (identification, planning, publication, publication tender).
pub fn build_timeline(chain: &ProcurementChain) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    events.push(TimelineEvent {
        stage: Stage::Identification,
        title: "Identification Created",
        date: chain.identification.created_at,
        status: chain.identification.status.clone(),
    });

    if let Some(planning) = &chain.planning {
        events.push(TimelineEvent {
            stage: Stage::Planning,
            title: "Planning Created",
            date: planning.created_at,
            status: planning.planning_status.clone(),
        });
        let planned: [(&'static str, Option<Date>); 6] = [
            ("Document Preparation", planning.planned_document_preparation_date),
            ("Publication", planning.planned_publication_date),
            ("Bid Opening", planning.planned_bid_opening_date),
            ("Evaluation", planning.planned_evaluation_date),
            ("Notification", planning.planned_notification_date),
            ("Contract Closure", planning.planned_contract_closure_date),
        ];
        for (title, date) in planned {
            if let Some(date) = date {
                events.push(TimelineEvent {
                    stage: Stage::Planning,
                    title,
                    date: at_midnight(date),
                    status: "planned".to_owned(),
                });
            }
        }
    }

    if let Some(publication) = &chain.publication {
        events.push(TimelineEvent {
            stage: Stage::Publication,
            title: "Publication Created",
            date: publication.created_at,
            status: "active".to_owned(),
        });
        let published: [(&'static str, Option<Date>); 3] = [
            (
                "Initial Procurement Plan Publication",
                publication.initial_procurement_plan_publication,
            ),
            ("Quarter Two Procurement Plan", publication.quarter_two_procurement_plan),
            ("Quarter Three Procurement Plan", publication.quarter_three_procurement_plan),
        ];
        for (title, date) in published {
            if let Some(date) = date {
                events.push(TimelineEvent {
                    stage: Stage::Publication,
                    title,
                    date: at_midnight(date),
                    status: "completed".to_owned(),
                });
            }
        }
    }

    if let Some(tender) = &chain.publication_tender {
        events.push(TimelineEvent {
            stage: Stage::PublicationTender,
            title: "Publication Tender Created",
            date: tender.created_at,
            status: "active".to_owned(),
        });
        let milestones: [(&'static str, Option<Date>); 4] = [
            (
                "Preparation of Bidding Document",
                tender.date_of_preparation_of_bidding_document,
            ),
            ("Submission to Committee", tender.date_of_submission_to_committee),
            ("CBM Approval", tender.date_of_cbm_approval),
            ("Tender Publication", tender.date_of_tender_publication),
        ];
        for (title, date) in milestones {
            if let Some(date) = date {
                events.push(TimelineEvent {
                    stage: Stage::PublicationTender,
                    title,
                    date: at_midnight(date),
                    status: "completed".to_owned(),
                });
            }
        }
    }

    events.sort_by_key(|event| event.date);
    events
}
