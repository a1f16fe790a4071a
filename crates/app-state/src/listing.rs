//! Tour listing view state
//!
//! A [`TourListing`] owns what a results list shows: nothing yet, a loading
//! indicator, the tours of the last request, or a failure. Every call to
//! [`TourListing::load`] takes a new request id; when a response arrives
//! and its id is no longer the latest issued, it is dropped. The view
//! therefore always reflects the last request issued, whatever order the
//! responses resolve in. In-flight requests are never aborted.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use trippo_api::{Organizer, Pagination, TourApi, TourQuery, TourSummary};

/// Remote source of listing data
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TourSource: Send + Sync {
    /// Fetch tours matching a query
    async fn fetch_tours(&self, query: &TourQuery) -> trippo_api::Result<Vec<TourSummary>>;

    /// Fetch a page of organizers
    async fn fetch_organizers(&self, pagination: Pagination) -> trippo_api::Result<Vec<Organizer>>;
}

#[async_trait]
impl TourSource for TourApi {
    async fn fetch_tours(&self, query: &TourQuery) -> trippo_api::Result<Vec<TourSummary>> {
        TourApi::fetch_tours(self, query).await
    }

    async fn fetch_organizers(&self, pagination: Pagination) -> trippo_api::Result<Vec<Organizer>> {
        TourApi::fetch_organizers(self, pagination).await
    }
}

/// What the results list currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListingView {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Tours of the latest request
    Loaded(Vec<TourSummary>),
    /// The latest request failed
    Failed(String),
}

impl ListingView {
    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, ListingView::Loading)
    }

    /// Tours on display, empty unless loaded
    pub fn tours(&self) -> &[TourSummary] {
        match self {
            ListingView::Loaded(tours) => tours,
            _ => &[],
        }
    }
}

/// How a [`TourListing::load`] call ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response applied to the view, with the number of tours shown
    Applied(usize),
    /// Request failed and the failure was applied to the view
    Failed(String),
    /// A newer request was issued meanwhile, response dropped
    Superseded,
}

#[derive(Debug, Default)]
struct ListingState {
    /// Id of the most recently issued request
    latest: u64,
    view: ListingView,
    query: Option<TourQuery>,
}

/// Results list backed by a [`TourSource`]
pub struct TourListing {
    source: Arc<dyn TourSource>,
    category_id: Option<String>,
    state: Mutex<ListingState>,
}

impl TourListing {
    /// Create an idle listing
    pub fn new(source: Arc<dyn TourSource>) -> Self {
        Self {
            source,
            category_id: None,
            state: Mutex::new(ListingState::default()),
        }
    }

    /// Only show tours of one category
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Category the listing is restricted to
    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    /// Issue a request and apply its response if it is still the latest
    pub async fn load(&self, query: TourQuery) -> FetchOutcome {
        let request_id = {
            let mut state = self.state.lock();
            state.latest += 1;
            state.view = ListingView::Loading;
            state.query = Some(query.clone());
            state.latest
        };
        tracing::debug!(request_id, filtered = query.has_filters(), "listing request issued");

        let result = self.source.fetch_tours(&query).await;

        let mut state = self.state.lock();
        if state.latest != request_id {
            tracing::debug!(request_id, latest = state.latest, "dropping stale listing response");
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(tours) => {
                let tours = self.retain_category(tours);
                let count = tours.len();
                state.view = ListingView::Loaded(tours);
                FetchOutcome::Applied(count)
            }
            Err(e) => {
                tracing::debug!(request_id, "listing request failed: {}", e);
                let message = e.to_string();
                state.view = ListingView::Failed(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    fn retain_category(&self, mut tours: Vec<TourSummary>) -> Vec<TourSummary> {
        if let Some(category) = &self.category_id {
            tours.retain(|tour| tour.category_id.as_ref() == Some(category));
        }
        tours
    }

    /// Back to idle; responses still in flight will be dropped
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.latest += 1;
        state.view = ListingView::Idle;
        state.query = None;
    }

    /// Snapshot of the current view
    pub fn view(&self) -> ListingView {
        self.state.lock().view.clone()
    }

    /// Query of the latest issued request
    pub fn current_query(&self) -> Option<TourQuery> {
        self.state.lock().query.clone()
    }

    /// The source this listing fetches from
    pub fn source(&self) -> &Arc<dyn TourSource> {
        &self.source
    }
}
