//! Screen controllers for the two tour listing screens
//!
//! Both screens own a [`FilterState`] and a [`TourListing`] for as long as
//! they are mounted. The full listing screen fetches everything on mount;
//! the search screen stays quiet until the user applies something.

use crate::filters::{DateRange, FilterEvent, FilterState};
use crate::listing::{FetchOutcome, ListingView, TourListing, TourSource};
use crate::query::build_query;
use crate::search::{RecentSearches, SearchDebouncer};
use std::future::Future;
use std::sync::Arc;
use trippo_api::{Pagination, TourQuery};

/// Title of the full listing screen when none is passed in
pub const DEFAULT_ALL_TOURS_TITLE: &str = "All Tours";

/// Full tour listing, optionally restricted to a category
pub struct AllToursScreen {
    title: String,
    filters: FilterState,
    listing: TourListing,
    pagination: Pagination,
}

impl AllToursScreen {
    /// Create the screen from its navigation parameters
    pub fn new(
        source: Arc<dyn TourSource>,
        title: Option<String>,
        category_id: Option<String>,
    ) -> Self {
        let listing = match category_id {
            Some(id) => TourListing::new(source).with_category(id),
            None => TourListing::new(source),
        };
        Self {
            title: title.unwrap_or_else(|| DEFAULT_ALL_TOURS_TITLE.to_string()),
            filters: FilterState::new(),
            listing,
            pagination: Pagination::default(),
        }
    }

    /// Header title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Category the screen was opened for
    pub fn category_id(&self) -> Option<&str> {
        self.listing.category_id()
    }

    /// Issue the unfiltered listing request
    pub async fn mount(&self) -> FetchOutcome {
        self.listing.load(TourQuery::unfiltered(self.pagination)).await
    }

    /// Current filter selection
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Apply a filter sheet event to the selection (no request)
    pub fn handle(&mut self, event: FilterEvent) {
        self.filters.handle(event);
    }

    /// Fetch with the current selection
    pub async fn apply(&self) -> FetchOutcome {
        self.listing.load(build_query(&self.filters, self.pagination)).await
    }

    /// Reset the selection and show the unfiltered list again
    pub async fn clear_all(&mut self) -> FetchOutcome {
        self.filters.clear_all();
        self.mount().await
    }

    /// What the results list shows
    pub fn view(&self) -> ListingView {
        self.listing.view()
    }

    /// Underlying listing
    pub fn listing(&self) -> &TourListing {
        &self.listing
    }
}

/// Search screen: free text, dates and the filter sheet
///
/// Nothing is requested until a search, date pick or filter apply happens.
/// With nothing applied the screen shows the recent searches instead.
///
/// Raw keystrokes go through [`input`](SearchScreen::input); only the text
/// that stays unchanged for the debounce delay reaches
/// [`submit_search`](SearchScreen::submit_search).
pub struct SearchScreen {
    filters: FilterState,
    applied: Option<TourQuery>,
    listing: TourListing,
    recent: RecentSearches,
    pagination: Pagination,
    debouncer: Arc<SearchDebouncer>,
}

impl SearchScreen {
    /// Create an empty search screen
    pub fn new(source: Arc<dyn TourSource>) -> Self {
        Self {
            filters: FilterState::new(),
            applied: None,
            listing: TourListing::new(source),
            recent: RecentSearches::new(),
            pagination: Pagination::default(),
            debouncer: Arc::new(SearchDebouncer::default()),
        }
    }

    /// Feed the current contents of the search box
    ///
    /// Resolves to the trimmed text once it has stayed unchanged for the
    /// debounce delay, or `None` when newer input arrived or it is blank.
    /// The future does not borrow the screen, so every keystroke can be
    /// awaited concurrently.
    pub fn input(
        &self,
        text: impl Into<String>,
    ) -> impl Future<Output = Option<String>> + Send + 'static {
        let debouncer = self.debouncer.clone();
        let text = text.into();
        async move { debouncer.settle(text).await }
    }

    /// Search for whatever input settled, if any
    pub async fn search_settled(&mut self, settled: Option<String>) -> Option<FetchOutcome> {
        match settled {
            Some(text) => self.submit_search(&text).await,
            None => None,
        }
    }

    /// Current filter selection
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Apply a filter sheet event to the selection (no request)
    pub fn handle(&mut self, event: FilterEvent) {
        self.filters.handle(event);
    }

    /// Query currently applied, if any
    pub fn applied(&self) -> Option<&TourQuery> {
        self.applied.as_ref()
    }

    /// Whether anything has been applied
    pub fn has_applied_filters(&self) -> bool {
        self.applied.is_some()
    }

    fn applied_or_unfiltered(&self) -> TourQuery {
        self.applied
            .clone()
            .unwrap_or_else(|| TourQuery::unfiltered(self.pagination))
    }

    async fn run(&mut self, query: TourQuery) -> FetchOutcome {
        self.applied = Some(query.clone());
        self.listing.load(query).await
    }

    /// Search for settled free text right away
    ///
    /// The text is merged into whatever is already applied. Blank text is
    /// ignored.
    pub async fn submit_search(&mut self, text: &str) -> Option<FetchOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.debouncer.cancel();
        self.filters.set_search_text(text);
        self.recent.push(text);

        let mut query = self.applied_or_unfiltered();
        query.search = Some(text.to_string());
        Some(self.run(query).await)
    }

    /// Pick a date window and search right away
    ///
    /// Returns `None` without requesting anything when the window is inverted.
    pub async fn pick_dates(&mut self, range: DateRange) -> Option<FetchOutcome> {
        if !self.filters.set_date_range(range) {
            return None;
        }
        let mut query = self.applied_or_unfiltered();
        query.from_date = range.from;
        query.to_date = range.to;
        Some(self.run(query).await)
    }

    /// Apply the whole selection from the filter sheet
    pub async fn apply(&mut self) -> FetchOutcome {
        let query = build_query(&self.filters, self.pagination);
        self.run(query).await
    }

    /// Reset the selection and go back to showing recent searches
    pub fn clear_all_filters(&mut self) {
        self.debouncer.cancel();
        self.filters.clear_all();
        self.applied = None;
        self.listing.reset();
    }

    /// Like [`clear_all_filters`](Self::clear_all_filters), also forgetting recent searches
    pub fn clear_all(&mut self) {
        self.clear_all_filters();
        self.recent.clear();
    }

    /// Remembered searches, most recent first
    pub fn recent_searches(&self) -> &RecentSearches {
        &self.recent
    }

    /// Forget one remembered search
    pub fn delete_recent_search(&mut self, index: usize) -> Option<String> {
        self.recent.remove(index)
    }

    /// What the results list shows
    pub fn view(&self) -> ListingView {
        self.listing.view()
    }
}
