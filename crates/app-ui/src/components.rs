//! View models for the listing screens
//!
//! Components are plain serializable structs handed to the rendering
//! shell. Each one is built from application state and carries exactly
//! what the shell draws; user input goes back as [`FilterEvent`]s or
//! [`Route`]s.
//!
//! # Available Components
//!
//! - [`ResultList`] - loading indicator, tour cards or empty-state text
//! - [`TourCard`] - one tour in a result list
//! - [`FilterSheet`] - the filter bottom sheet
//! - [`RatingView`] - the star rating widget
//! - [`OrganizerCard`] - one guide in the home feed

use crate::navigation::Route;
use app_state::{
    rating_label, FilterEvent, FilterOption, FilterState, ListingView, RatingPhase,
    RatingWidget, ACTIVITY_OPTIONS, LANGUAGE_OPTIONS, MAX_PRICE, MIN_PRICE,
};
use serde::Serialize;
use trippo_api::{Gender, Organizer, SortOption, TourSummary};

/// Text shown when a listing has nothing to show
pub const EMPTY_RESULTS_TEXT: &str = "No tours found";

/// Tag shown on cards of uncategorized tours
pub const DEFAULT_CATEGORY_TAG: &str = "Cultural Tour";

/// Unit appended to card prices
pub const PER_PERSON_SUFFIX: &str = "/person";

// =============================================================================
// Number Formatting
// =============================================================================

fn group_digits(value: f64, separator: char) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Round to a whole number and group thousands with dots ("1.200.000")
pub fn add_dots_to_number(value: f64) -> String {
    group_digits(value, '.')
}

/// Price label used by the filter sheet slider ("1 200 000 sum")
pub fn format_price_sum(price: u64) -> String {
    format!("{} sum", group_digits(price as f64, ' '))
}

// =============================================================================
// Result List
// =============================================================================

/// One tour in a result list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourCard {
    /// Tour identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Formatted price ("450.000")
    pub price: String,
    /// Price unit
    pub price_suffix: &'static str,
    /// Average rating (0 when unrated)
    pub rating: f64,
    /// Number of reviews
    pub reviews_count: u32,
    /// Category tag
    pub category: String,
    /// Background image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Organizer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip)]
    tour: TourSummary,
}

impl TourCard {
    /// Build a card for a tour
    pub fn new(tour: &TourSummary) -> Self {
        Self {
            id: tour.id.clone(),
            title: tour.display_title().to_string(),
            price: add_dots_to_number(tour.price),
            price_suffix: PER_PERSON_SUFFIX,
            rating: tour.rating_or_default(),
            reviews_count: tour.reviews_count,
            category: tour
                .category_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY_TAG.to_string()),
            cover_image: tour.cover_image().map(str::to_string),
            organizer: tour.organizer_title.clone(),
            tour: tour.clone(),
        }
    }

    /// Price with its unit ("450.000 /person")
    pub fn price_label(&self) -> String {
        format!("{} {}", self.price, self.price_suffix)
    }

    /// Route opened when the card is pressed
    pub fn select(&self) -> Route {
        Route::tour_details(&self.tour)
    }
}

/// What a result list draws
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "camelCase")]
pub enum ResultList {
    /// Nothing requested yet
    Hidden,
    /// Loading indicator
    Loading,
    /// Tour cards
    Cards(Vec<TourCard>),
    /// Empty-state text
    Empty(&'static str),
}

impl ResultList {
    /// Whether the empty-state text is shown
    pub fn is_empty_state(&self) -> bool {
        matches!(self, ResultList::Empty(_))
    }
}

/// Render a listing view
///
/// Failures are shown the same way as an empty result.
pub fn render_results(view: &ListingView) -> ResultList {
    match view {
        ListingView::Idle => ResultList::Hidden,
        ListingView::Loading => ResultList::Loading,
        ListingView::Loaded(tours) if !tours.is_empty() => {
            ResultList::Cards(tours.iter().map(TourCard::new).collect())
        }
        ListingView::Loaded(_) | ListingView::Failed(_) => ResultList::Empty(EMPTY_RESULTS_TEXT),
    }
}

/// One guide in the home feed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerCard {
    /// Organizer identifier
    pub id: String,
    /// Display name
    pub title: String,
    /// Logo image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Rating, 4.5 for unrated guides
    pub rating: f64,
    /// Specialty tags joined for display
    pub tags: String,
}

impl OrganizerCard {
    /// Build a card for an organizer
    pub fn new(organizer: &Organizer) -> Self {
        Self {
            id: organizer.id.clone(),
            title: organizer.title.clone(),
            logo: organizer.logo().map(str::to_string),
            rating: organizer.rating_or_placeholder(),
            tags: organizer.tags.join(" • "),
        }
    }

    /// Route opened when the card is pressed
    pub fn select(&self) -> Route {
        Route::GuideDetail { guide_id: self.id.clone() }
    }
}

// =============================================================================
// Filter Sheet
// =============================================================================

/// One selectable row of the filter sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRow {
    /// Option identifier
    pub id: &'static str,
    /// Label
    pub label: &'static str,
    /// Emoji, if the option has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    /// Whether the option is selected
    pub selected: bool,
}

/// Price slider state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSlider {
    /// Slider lower limit
    pub min_allowed: u64,
    /// Slider upper limit
    pub max_allowed: u64,
    /// Selected lower bound
    pub min: u64,
    /// Selected upper bound
    pub max: u64,
    /// Label of the lower bound
    pub min_label: String,
    /// Label of the upper bound
    pub max_label: String,
}

/// The filter bottom sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSheet {
    /// Price slider
    pub price: PriceSlider,
    /// Guide language rows
    pub languages: Vec<OptionRow>,
    /// Activity rows
    pub activities: Vec<OptionRow>,
    /// Group composition rows
    pub genders: Vec<OptionRow>,
    /// Ordering rows
    pub sort_options: Vec<OptionRow>,
    /// Label of the selected gender, shown on the collapsed section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_summary: Option<&'static str>,
    /// Label of the selected ordering, shown on the collapsed section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_summary: Option<&'static str>,
    /// Number of active filters, for the apply button badge
    pub active_count: usize,
}

fn catalog_rows(options: &[FilterOption], selected: &[String]) -> Vec<OptionRow> {
    options
        .iter()
        .map(|option| OptionRow {
            id: option.id,
            label: option.label,
            icon: Some(option.icon),
            selected: selected.iter().any(|id| id == option.id),
        })
        .collect()
}

impl FilterSheet {
    /// Present a filter state
    pub fn present(state: &FilterState) -> Self {
        let price = state.price_range();
        Self {
            price: PriceSlider {
                min_allowed: MIN_PRICE,
                max_allowed: MAX_PRICE,
                min: price.min(),
                max: price.max(),
                min_label: format_price_sum(price.min()),
                max_label: format_price_sum(price.max()),
            },
            languages: catalog_rows(LANGUAGE_OPTIONS, state.languages()),
            activities: catalog_rows(ACTIVITY_OPTIONS, state.activities()),
            genders: Gender::ALL
                .iter()
                .map(|gender| OptionRow {
                    id: gender.id(),
                    label: gender.label(),
                    icon: None,
                    selected: state.gender() == Some(*gender),
                })
                .collect(),
            sort_options: SortOption::ALL
                .iter()
                .map(|sort| OptionRow {
                    id: sort.id(),
                    label: sort.label(),
                    icon: None,
                    selected: state.sort_option() == Some(*sort),
                })
                .collect(),
            gender_summary: state.gender().map(|g| g.label()),
            sort_summary: state.sort_option().map(|s| s.label()),
            active_count: state.active_filter_count(),
        }
    }

    /// Event for a pressed language row
    pub fn press_language(id: &str) -> FilterEvent {
        FilterEvent::ToggleLanguage(id.to_string())
    }

    /// Event for a pressed activity row
    pub fn press_activity(id: &str) -> FilterEvent {
        FilterEvent::ToggleActivity(id.to_string())
    }

    /// Event for a pressed gender row, `None` for an unknown id
    pub fn press_gender(id: &str) -> Option<FilterEvent> {
        Gender::ALL
            .iter()
            .find(|g| g.id() == id)
            .map(|g| FilterEvent::SelectGender(*g))
    }

    /// Event for a pressed ordering row, `None` for an unknown id
    pub fn press_sort(id: &str) -> Option<FilterEvent> {
        SortOption::ALL
            .iter()
            .find(|s| s.id() == id)
            .map(|s| FilterEvent::SelectSort(*s))
    }

    /// Event for a released price slider
    pub fn slide_price(min: u64, max: u64) -> FilterEvent {
        FilterEvent::SetPriceRange(min, max)
    }
}

// =============================================================================
// Rating
// =============================================================================

/// The star rating widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingView {
    /// Filled state of each star, first to last
    pub stars: [bool; 5],
    /// Whether stars accept presses
    pub interactive: bool,
    /// Whether the submit spinner is shown
    pub submitting: bool,
    /// Whether the thank-you panel with "Rate again" is shown
    pub thank_you: bool,
    /// Text under the stars
    pub helper_text: String,
    /// Label of the shown rating, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

impl RatingView {
    /// Present a rating widget
    pub fn present(widget: &RatingWidget) -> Self {
        let filled = widget.filled_stars();
        let phase = widget.phase();
        let mut stars = [false; 5];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = i < filled as usize;
        }
        Self {
            stars,
            interactive: matches!(phase, RatingPhase::Idle { .. }),
            submitting: matches!(phase, RatingPhase::Submitting { .. }),
            thank_you: matches!(phase, RatingPhase::Rated { .. }),
            helper_text: widget.helper_text(),
            label: rating_label(filled),
        }
    }
}
