//! SpaceBox Concepts website: a server-rendered front end over the content API.

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod util;
