//! Async driver for a [`ListingPresenter`].
//!
//! One task owns the presenter and handles every signal in turn: criteria
//! from the [`crate::domain::CriteriaBus`], page changes and refresh
//! requests from [`ListingHandle`]s, and fetch completions. Fetches run in
//! their own tasks so signals keep flowing while a fetch is in flight. The
//! resulting [`ListingView`] is published on a `watch` channel.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};

use super::presenter::{FetchTicket, ListingPresenter, ListingView};
use crate::domain::{Event, FilterCriteria};
use crate::error::CatalogError;
use crate::source::EventSource;

const COMMAND_CAPACITY: usize = 64;

/// Signals a render surface can send to its listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingCommand {
    /// Navigate to a page of the result set identified by `revision`.
    ChangePage {
        /// Requested 1-based page.
        page: usize,
        /// Revision of the view the page was picked from, if known.
        revision: Option<u64>,
    },
    /// Re-fetch the collection from the data source.
    Refresh,
}

type FetchOutcome = (FetchTicket, Result<Vec<Event>, CatalogError>);

/// Handle to a running listing task.
///
/// Cloning the handle shares the same listing. The task stops once every
/// handle has been dropped.
#[derive(Debug, Clone)]
pub struct ListingHandle {
    commands: mpsc::Sender<ListingCommand>,
    view: watch::Receiver<ListingView>,
}

impl ListingHandle {
    /// Requests a page change.
    ///
    /// Without an explicit `revision` the request is bound to the latest
    /// view this handle has seen, so criteria published after the call
    /// always win over it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Internal`] if the listing task has stopped.
    pub async fn change_page(
        &self,
        page: usize,
        revision: Option<u64>,
    ) -> Result<(), CatalogError> {
        let revision = revision.or_else(|| Some(self.view.borrow().revision));
        self.send(ListingCommand::ChangePage { page, revision }).await
    }

    /// Requests a fresh fetch of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Internal`] if the listing task has stopped.
    pub async fn refresh(&self) -> Result<(), CatalogError> {
        self.send(ListingCommand::Refresh).await
    }

    /// Returns the latest view.
    #[must_use]
    pub fn view(&self) -> ListingView {
        self.view.borrow().clone()
    }

    /// Returns a receiver notified on every view change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ListingView> {
        self.view.clone()
    }

    async fn send(&self, command: ListingCommand) -> Result<(), CatalogError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| CatalogError::Internal("listing task stopped".to_string()))
    }
}

/// Starts a listing task and triggers the initial fetch.
///
/// `criteria_rx` should come from the bus the search controls publish on;
/// `initial` is used until the first criteria arrive.
#[must_use]
pub fn spawn_listing(
    source: Arc<dyn EventSource>,
    criteria_rx: broadcast::Receiver<FilterCriteria>,
    initial: FilterCriteria,
) -> ListingHandle {
    let presenter = ListingPresenter::new(initial);
    let (view_tx, view_rx) = watch::channel(presenter.view());
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CAPACITY);

    tokio::spawn(run_listing(source, presenter, criteria_rx, command_rx, view_tx));

    ListingHandle {
        commands: command_tx,
        view: view_rx,
    }
}

async fn run_listing(
    source: Arc<dyn EventSource>,
    mut presenter: ListingPresenter,
    mut criteria_rx: broadcast::Receiver<FilterCriteria>,
    mut commands: mpsc::Receiver<ListingCommand>,
    view_tx: watch::Sender<ListingView>,
) {
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchOutcome>();
    start_fetch(&mut presenter, &source, &fetch_tx);

    let mut criteria_open = true;
    loop {
        tokio::select! {
            biased;

            received = criteria_rx.recv(), if criteria_open => match received {
                Ok(criteria) => {
                    tracing::debug!(year = criteria.selected_year, "criteria changed");
                    presenter.apply_criteria(criteria);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "listing lagged behind criteria bus");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => {
                    criteria_open = false;
                    continue;
                }
            },

            command = commands.recv() => match command {
                Some(ListingCommand::ChangePage { page, revision }) => {
                    if !presenter.change_page(page, revision) {
                        continue;
                    }
                }
                Some(ListingCommand::Refresh) => {
                    start_fetch(&mut presenter, &source, &fetch_tx);
                    continue;
                }
                None => break,
            },

            Some((ticket, result)) = fetch_rx.recv() => {
                if !presenter.complete_fetch(ticket, result) {
                    continue;
                }
            }
        }

        view_tx.send_replace(presenter.view());
    }

    tracing::debug!("listing task stopped");
}

fn start_fetch(
    presenter: &mut ListingPresenter,
    source: &Arc<dyn EventSource>,
    fetch_tx: &mpsc::UnboundedSender<FetchOutcome>,
) {
    let ticket = presenter.begin_fetch();
    let source = Arc::clone(source);
    let fetch_tx = fetch_tx.clone();
    tokio::spawn(async move {
        let result = source.fetch_all_events().await;
        // The listing may have stopped in the meantime.
        let _ = fetch_tx.send((ticket, result));
    });
}
