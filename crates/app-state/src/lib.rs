//! Application state for Trippo
//!
//! This crate holds the client-side logic behind the screens: the filter
//! store, the listing request builder, the results view state with
//! last-issued-wins ordering, the search input helpers, the star rating
//! widget and the home feed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filters;
pub mod home;
pub mod listing;
pub mod options;
pub mod query;
pub mod rating;
pub mod screens;
pub mod search;

pub use filters::{DateRange, FilterEvent, FilterState, PriceRange, MAX_PRICE, MIN_PRICE};
pub use home::{
    load_weather, HomeFeed, HomeSection, LocationError, LocationProvider, WeatherBlock,
    WeatherNotice, WeatherSource,
};
pub use listing::{FetchOutcome, ListingView, TourListing, TourSource};
pub use options::{FilterOption, ACTIVITY_OPTIONS, LANGUAGE_OPTIONS};
pub use query::build_query;
pub use rating::{rating_label, RatingError, RatingPhase, RatingTiming, RatingWidget};
pub use screens::{AllToursScreen, SearchScreen, DEFAULT_ALL_TOURS_TITLE};
pub use search::{RecentSearches, SearchDebouncer, SEARCH_DEBOUNCE};
