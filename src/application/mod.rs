//! Application services: cached queries shaped into page views.

pub mod blog;
pub mod careers;
pub mod chrome;
pub mod error;
pub mod listing;
pub mod projects;
pub mod repos;
pub mod scroll;
pub mod site;
