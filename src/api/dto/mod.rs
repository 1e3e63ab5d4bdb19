//! Data Transfer Objects for REST request/response serialization.
//!
//! Domain types stay free of OpenAPI concerns; these mirror them for the
//! wire and carry the schema annotations.

pub mod common_dto;
pub mod event_dto;
pub mod registration_dto;

pub use common_dto::*;
pub use event_dto::*;
pub use registration_dto::*;
