//! Domain layer types and invariants.

pub mod careers;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod listing;
pub mod tags;
