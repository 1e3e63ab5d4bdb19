//! Broadcast channel carrying filter criteria.
//!
//! [`CriteriaBus`] wraps a [`tokio::sync::broadcast`] channel. The search
//! controls publish a complete [`FilterCriteria`] on every change and each
//! listing presenter subscribes to receive them. The bus is created by
//! whoever composes the controls and the listing, never held globally.

use tokio::sync::broadcast;

use super::FilterCriteria;
use crate::error::CatalogError;

/// Broadcast bus for [`FilterCriteria`] snapshots.
///
/// Every message is the full criteria value, so a listing that lags behind
/// only needs the most recent snapshot it can still read. Only valid
/// criteria are ever put on the bus.
#[derive(Debug, Clone)]
pub struct CriteriaBus {
    sender: broadcast::Sender<FilterCriteria>,
}

impl CriteriaBus {
    /// Creates a bus holding up to `capacity` unread snapshots per listing.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Validates `criteria` and hands the snapshot to every attached listing.
    ///
    /// Returns how many listings will see the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRequest`] for out-of-range criteria
    /// (nothing is published) and [`CatalogError::Internal`] when no
    /// listing is attached, since the snapshot would be lost.
    pub fn publish(&self, criteria: FilterCriteria) -> Result<usize, CatalogError> {
        criteria.validate()?;
        let year = criteria.selected_year;
        let month = criteria.selected_month;
        let sports = criteria.selected_sports.len();

        let listings = self
            .sender
            .send(criteria)
            .map_err(|_| CatalogError::Internal("no listing attached to criteria bus".into()))?;
        tracing::debug!(listings, year, ?month, sports, "criteria snapshot published");
        Ok(listings)
    }

    /// Attaches a listing: the receiver gets every snapshot published from
    /// now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<FilterCriteria> {
        self.sender.subscribe()
    }

    /// Number of listings currently attached.
    #[must_use]
    pub fn listing_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
