//! Catalog core: filtering, pagination and the listing presenter.
//!
//! Everything here except [`session`] is synchronous and free of I/O.

pub mod filter;
pub mod pagination;
pub mod presenter;
pub mod session;

pub use filter::{filter_events, matches};
pub use pagination::{PAGE_SIZE, Page, paginate, total_pages};
pub use presenter::{FetchTicket, ListingPhase, ListingPresenter, ListingView};
pub use session::{ListingCommand, ListingHandle, spawn_listing};
