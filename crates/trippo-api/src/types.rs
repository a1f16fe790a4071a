//! Wire types for the listing endpoints
//!
//! Records are read-only: the client never mutates a tour or organizer, it
//! only displays them and passes them between screens by value.

use crate::de;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File type marking a tour's card/cover image
pub const COVER_FILE_TYPE: &str = "extra";

/// File type marking an organizer's logo
pub const LOGO_FILE_TYPE: &str = "logo";

/// Rating shown for organizers that have not been rated yet
pub const PLACEHOLDER_ORGANIZER_RATING: f64 = 4.5;

/// Language used when a localized title has no entry for the requested one
pub const FALLBACK_LANGUAGE: &str = "en";

/// Text that is either a plain string or a per-language map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Single untranslated value
    Plain(String),
    /// Language code to translation
    Localized(BTreeMap<String, String>),
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

impl LocalizedText {
    /// Resolve for a language, falling back to English and then to any translation
    pub fn resolve(&self, language: &str) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::Localized(map) => map
                .get(language)
                .or_else(|| map.get(FALLBACK_LANGUAGE))
                .or_else(|| map.values().next())
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }

    /// English rendering (what the listing cards show)
    pub fn display(&self) -> &str {
        self.resolve(FALLBACK_LANGUAGE)
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        LocalizedText::Plain(value.to_string())
    }
}

/// Media attached to a tour or organizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Absolute URL
    #[serde(default, deserialize_with = "de::or_default")]
    pub url: String,
    /// Role of the file ("extra", "logo", "gallery", ...)
    #[serde(rename = "type", default, deserialize_with = "de::or_default")]
    pub kind: String,
}

/// Tour record as returned by the tour listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSummary {
    /// Tour identifier
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    /// Title, plain or localized
    #[serde(default, deserialize_with = "de::or_default")]
    pub title: LocalizedText,

    /// Long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,

    /// Price per person
    #[serde(default, deserialize_with = "de::number")]
    pub price: f64,

    /// Average rating, absent for unrated tours
    #[serde(default, deserialize_with = "de::opt_number")]
    pub rating: Option<f64>,

    /// Number of reviews
    #[serde(default, deserialize_with = "de::or_default")]
    pub reviews_count: u32,

    /// Attached images
    #[serde(default, deserialize_with = "de::or_default")]
    pub files: Vec<MediaFile>,

    /// Organizer identifier
    #[serde(default, deserialize_with = "de::opt_id", skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,

    /// Organizer display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_title: Option<String>,

    /// Organizer logo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_logo: Option<String>,

    /// Organizer contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_phone: Option<String>,

    /// Category label
    #[serde(
        rename = "categoryName",
        alias = "category_name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_name: Option<String>,

    /// Category identifier
    #[serde(
        rename = "categoryId",
        alias = "category_id",
        default,
        deserialize_with = "de::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<String>,

    /// Human readable duration ("3 days")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Where the tour takes place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TourSummary {
    /// Title as displayed on cards
    pub fn display_title(&self) -> &str {
        self.title.display()
    }

    /// Rating, with unrated tours shown as 0
    pub fn rating_or_default(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Card background image
    pub fn cover_image(&self) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.kind == COVER_FILE_TYPE)
            .map(|f| f.url.as_str())
    }

    /// All image URLs, in payload order (the gallery photo list)
    pub fn image_urls(&self) -> Vec<String> {
        self.files.iter().map(|f| f.url.clone()).collect()
    }
}

/// Organizer (guide) record as returned by the organizer listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    /// Organizer identifier
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    /// Display name
    #[serde(default, deserialize_with = "de::or_default")]
    pub title: String,

    /// Attached images (logo, cover)
    #[serde(default, deserialize_with = "de::or_default")]
    pub files: Vec<MediaFile>,

    /// Specialty tags
    #[serde(default, deserialize_with = "de::or_default")]
    pub tags: Vec<String>,

    /// Starting price
    #[serde(default, deserialize_with = "de::opt_number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Average rating
    #[serde(default, deserialize_with = "de::opt_number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Organizer {
    /// Logo image
    pub fn logo(&self) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.kind == LOGO_FILE_TYPE)
            .map(|f| f.url.as_str())
    }

    /// Rating, with unrated organizers shown as the placeholder
    pub fn rating_or_placeholder(&self) -> f64 {
        self.rating.unwrap_or(PLACEHOLDER_ORGANIZER_RATING)
    }
}

/// Listing payload, either wrapped in `{"data": [...]}` or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { data } => data,
            ListEnvelope::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tour_with_localized_title_and_string_price() {
        let tour: TourSummary = serde_json::from_value(json!({
            "id": 17,
            "title": {"en": "Samarkand in a day", "ru": "Самарканд за день"},
            "price": "450000",
            "rating": 4.8,
            "reviews_count": 12,
            "files": [
                {"url": "https://cdn.example/a.jpg", "type": "gallery"},
                {"url": "https://cdn.example/b.jpg", "type": "extra"}
            ],
            "organizer_id": 3,
            "organizer_title": "Silk Road Guides",
            "categoryName": "Historical"
        }))
        .unwrap();

        assert_eq!(tour.id, "17");
        assert_eq!(tour.display_title(), "Samarkand in a day");
        assert_eq!(tour.title.resolve("ru"), "Самарканд за день");
        assert_eq!(tour.price, 450_000.0);
        assert_eq!(tour.rating_or_default(), 4.8);
        assert_eq!(tour.cover_image(), Some("https://cdn.example/b.jpg"));
        assert_eq!(tour.organizer_id.as_deref(), Some("3"));
        assert_eq!(tour.category_name.as_deref(), Some("Historical"));
        assert_eq!(tour.image_urls().len(), 2);
    }

    #[test]
    fn test_tour_missing_optional_fields_default() {
        let tour: TourSummary = serde_json::from_value(json!({
            "id": "abc",
            "title": "Chimgan hike",
            "rating": null
        }))
        .unwrap();

        assert_eq!(tour.display_title(), "Chimgan hike");
        assert_eq!(tour.price, 0.0);
        assert_eq!(tour.rating_or_default(), 0.0);
        assert_eq!(tour.cover_image(), None);
        assert!(tour.organizer_title.is_none());
    }

    #[test]
    fn test_localized_text_fallbacks() {
        let only_uz: LocalizedText =
            serde_json::from_value(json!({"uz": "Buxoro sayohati"})).unwrap();
        assert_eq!(only_uz.resolve("fr"), "Buxoro sayohati");
        assert_eq!(only_uz.display(), "Buxoro sayohati");

        let empty = LocalizedText::Localized(BTreeMap::new());
        assert_eq!(empty.display(), "");
    }

    #[test]
    fn test_organizer_logo_and_placeholder_rating() {
        let organizer: Organizer = serde_json::from_value(json!({
            "id": 5,
            "title": "Nomad Trails",
            "files": [{"url": "https://cdn.example/logo.png", "type": "logo"}],
            "tags": ["Hiking", "Camping"]
        }))
        .unwrap();

        assert_eq!(organizer.logo(), Some("https://cdn.example/logo.png"));
        assert_eq!(organizer.rating_or_placeholder(), PLACEHOLDER_ORGANIZER_RATING);
        assert_eq!(organizer.tags, vec!["Hiking", "Camping"]);
    }

    #[test]
    fn test_tour_null_fields_default() {
        let tour: TourSummary = serde_json::from_value(json!({
            "id": 1,
            "title": null,
            "price": 300000,
            "reviews_count": null,
            "files": null
        }))
        .unwrap();

        assert_eq!(tour.display_title(), "");
        assert_eq!(tour.reviews_count, 0);
        assert!(tour.files.is_empty());
        assert_eq!(tour.cover_image(), None);
        assert_eq!(tour.price, 300_000.0);
    }

    #[test]
    fn test_organizer_null_fields_default() {
        let organizer: Organizer = serde_json::from_value(json!({
            "id": 1,
            "title": null,
            "files": [{"url": "https://cdn.example/logo.png", "type": null}],
            "tags": null
        }))
        .unwrap();

        assert_eq!(organizer.title, "");
        assert!(organizer.tags.is_empty());
        assert_eq!(organizer.files[0].kind, "");
        assert_eq!(organizer.logo(), None);
    }

    #[test]
    fn test_list_keeps_records_with_nulls() {
        let list: ListEnvelope<TourSummary> = serde_json::from_value(json!({"data": [
            {"id": 1, "title": "Khiva", "price": 300000, "files": null},
            {"id": 2, "title": "Bukhara", "price": 250000, "tags": null, "reviews_count": null},
            {"id": 3, "title": "Nukus", "price": 200000}
        ]}))
        .unwrap();

        let tours = list.into_items();
        assert_eq!(tours.len(), 3);
        assert_eq!(tours[0].display_title(), "Khiva");
        assert!(tours[0].files.is_empty());
    }

    #[test]
    fn test_list_envelope_shapes() {
        let wrapped: ListEnvelope<Organizer> =
            serde_json::from_value(json!({"data": [{"id": 1, "title": "A"}]})).unwrap();
        assert_eq!(wrapped.into_items().len(), 1);

        let bare: ListEnvelope<Organizer> =
            serde_json::from_value(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(bare.into_items().len(), 2);
    }
}
