//! Tour listing request payload
//!
//! [`TourQuery`] is the JSON body of `POST tour/list`. Optional fields are
//! omitted from the wire entirely when unset, so an unfiltered query
//! serializes to just `{"offset":0,"limit":10}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default page size for listing calls
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Offset/limit pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of records to skip
    pub offset: u32,
    /// Maximum number of records to return
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { offset: 0, limit: DEFAULT_PAGE_SIZE }
    }
}

impl Pagination {
    /// Create a pagination window
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// The window directly after this one
    pub fn next_page(self) -> Self {
        Self { offset: self.offset.saturating_add(self.limit), ..self }
    }
}

/// Group composition filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Men only
    Male,
    /// Women only
    Female,
    /// Mixed groups
    Mixed,
    /// No preference
    Any,
}

impl Gender {
    /// Every option, in presentation order
    pub const ALL: [Gender; 4] = [Gender::Male, Gender::Female, Gender::Mixed, Gender::Any];

    /// Wire identifier
    pub fn id(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Mixed => "mixed",
            Gender::Any => "any",
        }
    }

    /// English label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Mixed => "Mixed",
            Gender::Any => "Any",
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Best rated first
    RatingDesc,
    /// Newest first
    Latest,
    /// Most booked first
    Popular,
}

impl SortOption {
    /// Every option, in presentation order
    pub const ALL: [SortOption; 5] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
        SortOption::Latest,
        SortOption::Popular,
    ];

    /// Wire identifier
    pub fn id(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::RatingDesc => "rating_desc",
            SortOption::Latest => "latest",
            SortOption::Popular => "popular",
        }
    }

    /// English label
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::RatingDesc => "Rating: High to Low",
            SortOption::Latest => "Latest",
            SortOption::Popular => "Most Popular",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Body of a tour listing request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourQuery {
    /// Number of records to skip
    pub offset: u32,
    /// Page size
    pub limit: u32,

    /// Free-text search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Earliest start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,

    /// Latest start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,

    /// Lower price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_price: Option<u64>,

    /// Upper price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_price: Option<u64>,

    /// Guide languages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,

    /// Activity types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,

    /// Group composition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortOption>,
}

impl Default for TourQuery {
    fn default() -> Self {
        Self::unfiltered(Pagination::default())
    }
}

impl TourQuery {
    /// A query with no filters, equivalent to the plain listing call
    pub fn unfiltered(pagination: Pagination) -> Self {
        Self {
            offset: pagination.offset,
            limit: pagination.limit,
            search: None,
            from_date: None,
            to_date: None,
            from_price: None,
            to_price: None,
            languages: Vec::new(),
            activities: Vec::new(),
            gender: None,
            sort_by: None,
        }
    }

    /// Pagination window of this query
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.offset, self.limit)
    }

    /// Whether any optional field is set
    pub fn has_filters(&self) -> bool {
        *self != Self::unfiltered(self.pagination())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unfiltered_query_wire_shape() {
        let query = TourQuery::default();
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({"offset": 0, "limit": 10}));
        assert!(!query.has_filters());
    }

    #[test]
    fn test_filtered_query_wire_shape() {
        let query = TourQuery {
            search: Some("bukhara".to_string()),
            from_date: NaiveDate::from_ymd_opt(2025, 5, 1),
            languages: vec!["en-uk".to_string(), "ru".to_string()],
            gender: Some(Gender::Mixed),
            sort_by: Some(SortOption::RatingDesc),
            ..TourQuery::default()
        };

        assert!(query.has_filters());
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "offset": 0,
                "limit": 10,
                "search": "bukhara",
                "from_date": "2025-05-01",
                "languages": ["en-uk", "ru"],
                "gender": "mixed",
                "sort_by": "rating_desc"
            })
        );
    }

    #[test]
    fn test_pagination_next_page() {
        let page = Pagination::default().next_page();
        assert_eq!(page, Pagination::new(10, 10));
    }

    #[test]
    fn test_option_ids_match_serde() {
        for gender in Gender::ALL {
            assert_eq!(serde_json::to_value(gender).unwrap(), json!(gender.id()));
        }
        for sort in SortOption::ALL {
            assert_eq!(serde_json::to_value(sort).unwrap(), json!(sort.id()));
        }
    }
}
