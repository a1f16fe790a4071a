//! Filter state for the tour listing and search screens
//!
//! A [`FilterState`] is created with defaults when a screen mounts, mutated
//! only through the discrete operations below (or the equivalent
//! [`FilterEvent`]s reported by the filter sheet), and dropped with the
//! screen. It is never persisted and never triggers a request by itself.

use chrono::NaiveDate;
use trippo_api::{Gender, SortOption};

/// Cheapest price the price slider allows
pub const MIN_PRICE: u64 = 100_000;

/// Most expensive price the price slider allows
pub const MAX_PRICE: u64 = 1_200_000;

/// Inclusive price window, always inside `[MIN_PRICE, MAX_PRICE]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl PriceRange {
    /// The whole allowed domain
    pub const FULL: PriceRange = PriceRange { min: MIN_PRICE, max: MAX_PRICE };

    /// Clamp a window into the allowed domain; `None` when `min > max`
    pub fn clamped(min: u64, max: u64) -> Option<Self> {
        if min > max {
            return None;
        }
        Some(Self {
            min: min.clamp(MIN_PRICE, MAX_PRICE),
            max: max.clamp(MIN_PRICE, MAX_PRICE),
        })
    }

    /// Lower bound
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Whether the window spans the whole domain
    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    /// Whether a price falls inside the window
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min as f64 && price <= self.max as f64
    }
}

/// Optional start-date window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    /// Earliest start date
    pub from: Option<NaiveDate>,
    /// Latest start date
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Create a date window
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Whether neither bound is set
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether the bounds are ordered (or at most one is set)
    pub fn is_valid(&self) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }
}

/// A change reported by the filter sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Add or remove a guide language
    ToggleLanguage(String),
    /// Add or remove an activity
    ToggleActivity(String),
    /// Select (or deselect) a group composition
    SelectGender(Gender),
    /// Select (or deselect) an ordering
    SelectSort(SortOption),
    /// Move the price slider
    SetPriceRange(u64, u64),
    /// Edit the free-text query
    SetSearchText(String),
    /// Pick a date window
    SetDateRange(DateRange),
    /// Reset every dimension
    ClearAll,
}

/// Currently selected search constraints
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    search_text: String,
    date_range: DateRange,
    price_range: PriceRange,
    languages: Vec<String>,
    activities: Vec<String>,
    gender: Option<Gender>,
    sort: Option<SortOption>,
}

/// Add `id` if absent, remove it if present; returns whether it is now selected
fn toggle_member(set: &mut Vec<String>, id: &str) -> bool {
    match set.iter().position(|existing| existing == id) {
        Some(index) => {
            set.remove(index);
            false
        }
        None => {
            set.push(id.to_string());
            true
        }
    }
}

impl FilterState {
    /// Defaults: full price range, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text query as typed
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Start-date window
    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    /// Price window
    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Selected guide languages, in the order they were picked
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Selected activities, in the order they were picked
    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    /// Selected group composition
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Selected ordering
    pub fn sort_option(&self) -> Option<SortOption> {
        self.sort
    }

    /// Toggle a guide language; returns whether it is now selected
    pub fn toggle_language(&mut self, id: &str) -> bool {
        toggle_member(&mut self.languages, id)
    }

    /// Toggle an activity; returns whether it is now selected
    pub fn toggle_activity(&mut self, id: &str) -> bool {
        toggle_member(&mut self.activities, id)
    }

    /// Select a gender; selecting the current one clears it
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = if self.gender == Some(gender) { None } else { Some(gender) };
    }

    /// Select an ordering; selecting the current one clears it
    pub fn set_sort_option(&mut self, sort: SortOption) {
        self.sort = if self.sort == Some(sort) { None } else { Some(sort) };
    }

    /// Set the price window, clamped into the domain
    ///
    /// Returns false and leaves the previous window untouched when `min > max`.
    pub fn set_price_range(&mut self, min: u64, max: u64) -> bool {
        match PriceRange::clamped(min, max) {
            Some(range) => {
                self.price_range = range;
                true
            }
            None => {
                tracing::debug!(min, max, "rejected inverted price range");
                false
            }
        }
    }

    /// Replace the free-text query
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Set the date window; returns false and keeps the old one when inverted
    pub fn set_date_range(&mut self, range: DateRange) -> bool {
        if !range.is_valid() {
            return false;
        }
        self.date_range = range;
        true
    }

    /// Reset every dimension to its default
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Apply an event reported by the filter sheet
    pub fn handle(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::ToggleLanguage(id) => {
                self.toggle_language(&id);
            }
            FilterEvent::ToggleActivity(id) => {
                self.toggle_activity(&id);
            }
            FilterEvent::SelectGender(gender) => self.set_gender(gender),
            FilterEvent::SelectSort(sort) => self.set_sort_option(sort),
            FilterEvent::SetPriceRange(min, max) => {
                self.set_price_range(min, max);
            }
            FilterEvent::SetSearchText(text) => self.set_search_text(text),
            FilterEvent::SetDateRange(range) => {
                self.set_date_range(range);
            }
            FilterEvent::ClearAll => self.clear_all(),
        }
    }

    /// Whether nothing differs from the defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of sheet dimensions that differ from their defaults
    ///
    /// Counts price, languages, activities, gender and sort; the search
    /// text and dates live outside the sheet and are not counted.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.price_range.is_full(),
            !self.languages.is_empty(),
            !self.activities.is_empty(),
            self.gender.is_some(),
            self.sort.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::new();
        assert_eq!(state.search_text(), "");
        assert!(state.date_range().is_empty());
        assert_eq!(state.price_range(), PriceRange::FULL);
        assert!(state.languages().is_empty());
        assert!(state.activities().is_empty());
        assert_eq!(state.gender(), None);
        assert_eq!(state.sort_option(), None);
        assert!(state.is_default());
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn test_toggle_language_is_involution() {
        let mut state = FilterState::new();
        state.toggle_language("ru");
        let before = state.clone();

        assert!(state.toggle_language("en-uk"));
        assert!(!state.toggle_language("en-uk"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_keeps_pick_order() {
        let mut state = FilterState::new();
        state.toggle_activity("museum");
        state.toggle_activity("hiking");
        state.toggle_activity("biking");
        state.toggle_activity("hiking");

        assert_eq!(state.activities(), ["museum", "biking"]);
    }

    #[test]
    fn test_gender_toggle_to_none() {
        let mut state = FilterState::new();

        state.set_gender(Gender::Female);
        assert_eq!(state.gender(), Some(Gender::Female));

        state.set_gender(Gender::Mixed);
        assert_eq!(state.gender(), Some(Gender::Mixed));

        state.set_gender(Gender::Mixed);
        assert_eq!(state.gender(), None);
    }

    #[test]
    fn test_sort_toggle_to_none() {
        let mut state = FilterState::new();

        state.set_sort_option(SortOption::PriceAsc);
        state.set_sort_option(SortOption::PriceAsc);
        assert_eq!(state.sort_option(), None);
    }

    #[test]
    fn test_inverted_price_range_is_noop() {
        let mut state = FilterState::new();
        assert!(state.set_price_range(200_000, 500_000));

        assert!(!state.set_price_range(600_000, 300_000));
        assert_eq!(state.price_range().min(), 200_000);
        assert_eq!(state.price_range().max(), 500_000);
    }

    #[test]
    fn test_price_range_is_clamped() {
        let mut state = FilterState::new();
        state.set_price_range(0, 5_000_000);
        assert_eq!(state.price_range(), PriceRange::FULL);

        state.set_price_range(50_000, 80_000);
        assert_eq!(state.price_range().min(), MIN_PRICE);
        assert_eq!(state.price_range().max(), MIN_PRICE);
    }

    #[test]
    fn test_inverted_date_range_is_noop() {
        let mut state = FilterState::new();
        let may_1 = NaiveDate::from_ymd_opt(2025, 5, 1);
        let may_9 = NaiveDate::from_ymd_opt(2025, 5, 9);

        assert!(state.set_date_range(DateRange::new(may_1, may_9)));
        assert!(!state.set_date_range(DateRange::new(may_9, may_1)));
        assert_eq!(state.date_range(), DateRange::new(may_1, may_9));

        assert!(state.set_date_range(DateRange::new(may_9, None)));
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut state = FilterState::new();
        state.set_search_text("khiva");
        state.toggle_language("fr");
        state.toggle_activity("skiing");
        state.set_gender(Gender::Male);
        state.set_sort_option(SortOption::Latest);
        state.set_price_range(150_000, 250_000);
        state.set_date_range(DateRange::new(NaiveDate::from_ymd_opt(2025, 1, 1), None));
        assert_eq!(state.active_filter_count(), 5);

        state.clear_all();
        assert!(state.is_default());
    }

    #[test]
    fn test_handle_events() {
        let mut state = FilterState::new();
        state.handle(FilterEvent::ToggleLanguage("ja".to_string()));
        state.handle(FilterEvent::SelectSort(SortOption::Popular));
        state.handle(FilterEvent::SetPriceRange(300_000, 200_000));
        state.handle(FilterEvent::SetSearchText("tour".to_string()));

        assert_eq!(state.languages(), ["ja"]);
        assert_eq!(state.sort_option(), Some(SortOption::Popular));
        assert!(state.price_range().is_full());
        assert_eq!(state.search_text(), "tour");

        state.handle(FilterEvent::ClearAll);
        assert!(state.is_default());
    }

    #[test]
    fn test_price_range_contains() {
        let range = PriceRange::clamped(200_000, 500_000).unwrap();
        assert!(range.contains(200_000.0));
        assert!(range.contains(500_000.0));
        assert!(!range.contains(500_001.0));
    }
}
