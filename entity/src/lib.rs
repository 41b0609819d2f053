pub mod bid_evaluation;
pub mod contract_management;
pub mod contract_signing;
pub mod identification;
pub mod invoice;
pub mod open_bid;
pub mod planning;
pub mod publication;
pub mod publication_tender;
