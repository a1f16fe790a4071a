//! Listing request derivation
//!
//! [`build_query`] is a pure function of the filter state and pagination.
//! Unset or default dimensions are left out of the request entirely, so
//! the default state produces the same body as the plain listing call.

use crate::filters::FilterState;
use trippo_api::{Pagination, TourQuery};

/// Derive the tour listing request for a filter state
///
/// The price window is only sent when it is narrower than the full slider
/// domain, and then both bounds are sent together.
pub fn build_query(filters: &FilterState, pagination: Pagination) -> TourQuery {
    let search = filters.search_text().trim();
    let dates = filters.date_range();
    let price = filters.price_range();
    let (from_price, to_price) = if price.is_full() {
        (None, None)
    } else {
        (Some(price.min()), Some(price.max()))
    };

    TourQuery {
        search: (!search.is_empty()).then(|| search.to_string()),
        from_date: dates.from,
        to_date: dates.to,
        from_price,
        to_price,
        languages: filters.languages().to_vec(),
        activities: filters.activities().to_vec(),
        gender: filters.gender(),
        sort_by: filters.sort_option(),
        ..TourQuery::unfiltered(pagination)
    }
}
