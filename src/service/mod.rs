//! Service layer: business logic orchestration.
//!
//! [`CatalogService`] answers one-shot catalog queries against an
//! [`crate::source::EventSource`] and starts listing sessions that follow a
//! [`crate::domain::CriteriaBus`].

pub mod catalog_service;

pub use catalog_service::{CatalogService, SearchPage};
