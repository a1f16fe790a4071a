//! Selectable values offered by the filter sheet

/// A selectable filter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    /// Identifier sent on the wire
    pub id: &'static str,
    /// English label
    pub label: &'static str,
    /// Emoji shown before the label
    pub icon: &'static str,
}

impl FilterOption {
    const fn new(id: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { id, label, icon }
    }
}

/// Guide languages, in presentation order
pub const LANGUAGE_OPTIONS: &[FilterOption] = &[
    FilterOption::new("en-uk", "English / United Kingdom", "🇬🇧"),
    FilterOption::new("en-us", "English / United States", "🇺🇸"),
    FilterOption::new("ru", "Russian / Russia", "🇷🇺"),
    FilterOption::new("uz", "Uzbek / Uzbekistan", "🇺🇿"),
    FilterOption::new("de", "Deutsch / Deutschland", "🇩🇪"),
    FilterOption::new("fr", "Français / France", "🇫🇷"),
    FilterOption::new("ja", "Japanese / Japan", "🇯🇵"),
    FilterOption::new("zh", "Chinese / China", "🇨🇳"),
];

/// Activity types, in presentation order
pub const ACTIVITY_OPTIONS: &[FilterOption] = &[
    FilterOption::new("hiking", "Hiking", "🚶"),
    FilterOption::new("biking", "Biking", "🚲"),
    FilterOption::new("skiing", "Skiing", "⛷️"),
    FilterOption::new("swimming", "Swimming", "🏊"),
    FilterOption::new("foodtour", "Food Tour", "🍽️"),
    FilterOption::new("citytour", "City Tour", "🏙️"),
    FilterOption::new("museum", "Museum", "🏛️"),
    FilterOption::new("concert", "Concert", "🎵"),
];

/// Label of a language option, if the id is known
pub fn language_label(id: &str) -> Option<&'static str> {
    LANGUAGE_OPTIONS.iter().find(|o| o.id == id).map(|o| o.label)
}

/// Label of an activity option, if the id is known
pub fn activity_label(id: &str) -> Option<&'static str> {
    ACTIVITY_OPTIONS.iter().find(|o| o.id == id).map(|o| o.label)
}
