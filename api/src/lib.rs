//! Core services for the procurement workflow tracker: per-stage CRUD,
//! chain resolution, timeline aggregation and summary statistics.

pub mod chain;
pub mod error;
pub mod seed;
pub mod stages;
pub mod status;
pub mod summary;
pub mod timeline;
