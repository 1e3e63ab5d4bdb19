//! Listing presenter: the owned state behind one events listing.
//!
//! [`ListingPresenter`] holds the authoritative event collection, the
//! current criteria and the current page, and recomputes the derived
//! filtered collection and visible page synchronously on every signal.
//! It performs no I/O; [`super::session`] drives it from async signals.
//!
//! # State machine
//!
//! ```text
//!            fetch completes (ok or failed)
//! Loading ───────────────────────────────────▶ Ready
//!                                              │  ▲
//!            criteria changed / page changed / │  │
//!            refresh completed                 └──┘
//! ```
//!
//! Criteria changes and dataset replacements bump the filter revision and
//! reset the page to 1. Page changes carrying an older revision are stale
//! and ignored, so a criteria change always wins over a page number that
//! was chosen against a previous result set.

use serde::Serialize;

use super::filter::filter_events;
use super::pagination::{PAGE_SIZE, paginate, total_pages};
use crate::domain::{Event, FilterCriteria};
use crate::error::CatalogError;

/// Lifecycle phase of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingPhase {
    /// The first fetch has not completed yet.
    Loading,
    /// A collection (possibly empty or stale) is available.
    Ready,
}

/// Ticket identifying one fetch request. Only the latest ticket's result
/// is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Everything the render surface needs to draw the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    /// Current lifecycle phase.
    pub phase: ListingPhase,
    /// Criteria the view was computed with.
    pub criteria: FilterCriteria,
    /// Events on the current page.
    pub visible: Vec<Event>,
    /// Current 1-based page.
    pub current_page: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Number of events matching the criteria.
    pub total_matches: usize,
    /// Revision of the filtered collection; page changes must quote it.
    pub revision: u64,
    /// Set when the most recent fetch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

impl ListingView {
    /// Returns `true` when the listing is loaded and nothing matches.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.phase == ListingPhase::Ready && self.total_matches == 0
    }
}

/// Owned state of one listing surface.
#[derive(Debug, Clone)]
pub struct ListingPresenter {
    phase: ListingPhase,
    events: Vec<Event>,
    criteria: FilterCriteria,
    filtered: Vec<Event>,
    current_page: usize,
    revision: u64,
    latest_fetch: u64,
    load_error: Option<String>,
}

impl ListingPresenter {
    /// Creates a presenter in the `Loading` phase with the given criteria.
    #[must_use]
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            phase: ListingPhase::Loading,
            events: Vec::new(),
            criteria,
            filtered: Vec::new(),
            current_page: 1,
            revision: 0,
            latest_fetch: 0,
            load_error: None,
        }
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Current filter revision.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a new fetch and returns its ticket. Any ticket issued
    /// earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_fetch = self.latest_fetch.saturating_add(1);
        FetchTicket(self.latest_fetch)
    }

    /// Applies the outcome of a fetch.
    ///
    /// Returns `false` (and changes nothing) if `ticket` is not the most
    /// recently issued one. On success the collection is replaced,
    /// re-filtered and the page reset to 1. On failure the last good
    /// collection is kept and the error is surfaced on the view.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Event>, CatalogError>,
    ) -> bool {
        if ticket.0 != self.latest_fetch {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_fetch,
                "discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(events) => {
                tracing::debug!(count = events.len(), "listing collection replaced");
                self.events = events;
                self.load_error = None;
                self.refilter();
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    retained = self.events.len(),
                    "fetch failed, keeping last good collection"
                );
                self.load_error = Some(err.to_string());
            }
        }
        self.phase = ListingPhase::Ready;
        true
    }

    /// Replaces the criteria, re-filters and resets to page 1.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refilter();
    }

    /// Moves to `page`, clamped to `[1, total_pages]`, without re-filtering.
    ///
    /// `seen_revision` is the revision of the view the page was chosen on;
    /// if it is older than the current revision the request is stale and
    /// ignored. `None` applies the page to the current result set.
    /// Returns whether the page was applied.
    pub fn change_page(&mut self, page: usize, seen_revision: Option<u64>) -> bool {
        if seen_revision.is_some_and(|seen| seen != self.revision) {
            tracing::debug!(
                page,
                seen = seen_revision,
                current = self.revision,
                "ignoring page change for superseded results"
            );
            return false;
        }
        self.current_page = page.clamp(1, self.total_pages());
        true
    }

    /// Computes the view for the render surface.
    #[must_use]
    pub fn view(&self) -> ListingView {
        let page = paginate(&self.filtered, self.current_page, PAGE_SIZE);
        ListingView {
            phase: self.phase,
            criteria: self.criteria.clone(),
            visible: page.visible,
            current_page: self.current_page,
            total_pages: page.total_pages,
            total_matches: self.filtered.len(),
            revision: self.revision,
            load_error: self.load_error.clone(),
        }
    }

    fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), PAGE_SIZE)
    }

    fn refilter(&mut self) {
        self.filtered = filter_events(&self.events, &self.criteria);
        self.current_page = 1;
        self.revision = self.revision.saturating_add(1);
    }
}

impl Default for ListingPresenter {
    fn default() -> Self {
        Self::new(FilterCriteria::default())
    }
}
