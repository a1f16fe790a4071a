//! Free-text search input handling
//!
//! Keystrokes are debounced before they turn into a search, and submitted
//! terms are remembered in a short most-recent-first list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// How long the input must stay unchanged before it is searched
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Maximum number of remembered searches
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Debouncer for the search input
///
/// Each call to [`settle`](SearchDebouncer::settle) takes a ticket and waits
/// out the delay; only the call holding the newest ticket at that point
/// yields its input.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    latest: AtomicU64,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl SearchDebouncer {
    /// Create a debouncer with a custom delay
    pub fn new(delay: Duration) -> Self {
        Self { delay, latest: AtomicU64::new(0) }
    }

    /// Configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay and return the trimmed input if it is still the latest
    ///
    /// Returns `None` when newer input arrived meanwhile or the input is blank.
    pub async fn settle(&self, input: impl Into<String>) -> Option<String> {
        let input = input.into();
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.delay).await;

        if self.latest.load(Ordering::SeqCst) != ticket {
            return None;
        }
        let trimmed = input.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Invalidate any pending input
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// Most-recent-first list of submitted search terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    items: Vec<String>,
}

impl RecentSearches {
    /// Empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a term, moving it to the front if already present
    pub fn push(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        self.items.retain(|existing| existing != term);
        self.items.insert(0, term.to_string());
        self.items.truncate(MAX_RECENT_SEARCHES);
    }

    /// Forget the term at `index`
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remembered terms, most recent first
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether nothing is remembered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_settle_returns_trimmed_input() {
        let debouncer = SearchDebouncer::default();
        assert_eq!(debouncer.settle("  tashkent ").await.as_deref(), Some("tashkent"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_never_settles() {
        let debouncer = SearchDebouncer::default();
        assert_eq!(debouncer.settle("   ").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_input_settles() {
        let debouncer = Arc::new(SearchDebouncer::default());

        let first = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.settle("sam").await }
        });
        tokio::time::sleep(Duration::from_millis(200)).await;
        let second = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.settle("samarkand").await }
        });

        assert_eq!(first.await.unwrap(), None);
        assert_eq!(second.await.unwrap().as_deref(), Some("samarkand"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_waits_for_delay() {
        let debouncer = SearchDebouncer::default();
        let start = tokio::time::Instant::now();

        debouncer.settle("khiva").await;
        assert!(start.elapsed() >= SEARCH_DEBOUNCE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_input() {
        let debouncer = Arc::new(SearchDebouncer::default());
        let pending = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.settle("nukus").await }
        });
        tokio::task::yield_now().await;

        debouncer.cancel();
        assert_eq!(pending.await.unwrap(), None);
    }

    #[test]
    fn test_recent_searches_most_recent_first() {
        let mut recent = RecentSearches::new();
        recent.push("bukhara");
        recent.push("khiva");
        recent.push("bukhara");

        assert_eq!(recent.items(), ["bukhara", "khiva"]);
    }

    #[test]
    fn test_recent_searches_capped() {
        let mut recent = RecentSearches::new();
        for i in 0..15 {
            recent.push(&format!("term {}", i));
        }

        assert_eq!(recent.items().len(), MAX_RECENT_SEARCHES);
        assert_eq!(recent.items()[0], "term 14");
    }

    #[test]
    fn test_recent_searches_remove_and_clear() {
        let mut recent = RecentSearches::new();
        recent.push("a");
        recent.push("b");

        assert_eq!(recent.remove(5), None);
        assert_eq!(recent.remove(0).as_deref(), Some("b"));
        assert_eq!(recent.items(), ["a"]);

        recent.push("   ");
        assert_eq!(recent.items().len(), 1);

        recent.clear();
        assert!(recent.is_empty());
    }
}
