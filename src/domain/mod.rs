//! Domain layer: catalog records, filter criteria, and criteria propagation.
//!
//! This module contains the event model as delivered by the data source,
//! the closed sport enumeration, the services bundled with events,
//! registration inquiries, and the bus that carries criteria from the
//! search controls to listing presenters.

pub mod criteria;
pub mod criteria_bus;
pub mod event;
pub mod event_service;
pub mod registration;
pub mod sport;

pub use criteria::FilterCriteria;
pub use criteria_bus::CriteriaBus;
pub use event::{Event, EventId};
pub use event_service::{EventService, ServiceKind, ServiceListing};
pub use registration::{EventRegistration, RegistrationReceipt, RegistrationRequest};
pub use sport::Sport;
