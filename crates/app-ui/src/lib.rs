//! User interface layer for Trippo
//!
//! This crate turns application state into what the rendering shell
//! draws, and defines the routes that carry values between screens.
//!
//! # Modules
//!
//! - [`components`] - View models for result lists, cards, the filter sheet and the rating widget
//! - [`navigation`] - Routes, tabs and the navigation stack
//!
//! # Example
//!
//! ```rust
//! use app_state::ListingView;
//! use app_ui::components::{render_results, ResultList};
//!
//! let list = render_results(&ListingView::Loaded(Vec::new()));
//! assert_eq!(list, ResultList::Empty("No tours found"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;

pub use components::{
    add_dots_to_number, format_price_sum, render_results, FilterSheet, OptionRow, OrganizerCard,
    PriceSlider, RatingView, ResultList, TourCard, DEFAULT_CATEGORY_TAG, EMPTY_RESULTS_TEXT,
};
pub use navigation::{tabs_for, NavigationStack, Route, StackEntry, Tab};
