//! REST route modules, one per stage plus the aggregate procurement
//! endpoint. Handlers stay thin: decode, delegate to the `api` crate, map
//! the result onto a status code.

pub mod bid_evaluations;
pub mod contract_managements;
pub mod contract_signings;
pub mod identifications;
pub mod invoices;
pub mod open_bids;
pub mod plannings;
pub mod procurement;
pub mod publication_tenders;
pub mod publications;

use crate::http::HttpError;

/// Foreign-key OR-sets arrive as a comma-separated query parameter,
/// e.g. `identificationIds=3,5,9`.
fn parse_id_list(raw: &str) -> Result<Vec<i32>, HttpError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| HttpError::bad_request("invalid id list"))
        })
        .collect()
}
