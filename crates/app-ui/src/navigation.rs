//! Navigation for Trippo
//!
//! Screens receive their parameters by value inside the [`Route`] that
//! opens them: the selected tour travels whole to the details screen, the
//! photo list travels to the gallery, and so on. Which tabs exist depends
//! on the [`AppMode`] resolved at startup.

use serde::{Deserialize, Serialize};
use storage::AppMode;
use trippo_api::TourSummary;

// =============================================================================
// Route Definitions
// =============================================================================

/// All screens of the application, with their parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Launch screen
    #[default]
    Splash,
    /// First-run walkthrough
    Onboarding,
    /// Root of a tab
    Tab(Tab),
    /// Tour details
    TourDetails {
        /// The selected tour
        tour: Box<TourSummary>,
    },
    /// Full-screen photo carousel
    GalleryCarousel {
        /// Photo URLs in display order
        photos: Vec<String>,
        /// Photo to open on
        #[serde(default)]
        start_index: usize,
    },
    /// Search screen
    Search,
    /// Full tour listing
    AllTours {
        /// Header title, "All Tours" when absent
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Category to restrict the listing to
        #[serde(skip_serializing_if = "Option::is_none")]
        category_id: Option<String>,
    },
    /// Guide (organizer) profile
    GuideDetail {
        /// Organizer id
        guide_id: String,
    },
}

impl Route {
    /// Details screen for a tour
    pub fn tour_details(tour: &TourSummary) -> Self {
        Route::TourDetails { tour: Box::new(tour.clone()) }
    }

    /// Gallery for a tour's photos
    pub fn gallery(tour: &TourSummary, start_index: usize) -> Self {
        Route::GalleryCarousel { photos: tour.image_urls(), start_index }
    }

    /// Guide profile for a tour's organizer, if it has one
    pub fn guide_for(tour: &TourSummary) -> Option<Self> {
        tour.organizer_id
            .clone()
            .map(|guide_id| Route::GuideDetail { guide_id })
    }

    /// Screen title
    pub fn title(&self) -> &str {
        match self {
            Route::Splash | Route::Onboarding => "",
            Route::Tab(tab) => tab.label(),
            Route::TourDetails { tour } => tour.display_title(),
            Route::GalleryCarousel { .. } => "Gallery",
            Route::Search => "Search",
            Route::AllTours { title, .. } => title
                .as_deref()
                .unwrap_or(app_state::DEFAULT_ALL_TOURS_TITLE),
            Route::GuideDetail { .. } => "Guide",
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Bottom tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Home feed
    #[default]
    Home,
    /// Profile
    Profile,
    /// Settings
    Settings,
}

impl Tab {
    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Profile => "user",
            Tab::Settings => "settings",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Profile => "Profile",
            Tab::Settings => "Settings",
        }
    }
}

/// Tabs shown for an application mode, in order
pub fn tabs_for(mode: AppMode) -> &'static [Tab] {
    match mode {
        AppMode::Client => &[Tab::Home, Tab::Profile, Tab::Settings],
        AppMode::Admin => &[Tab::Profile, Tab::Settings],
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Stack of screens above a root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    root: StackEntry,
    /// Entries above the root (bottom to top)
    pushed: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            root: StackEntry::new(root),
            pushed: Vec::new(),
        }
    }

    /// Root stack for an application mode: its first tab
    pub fn for_mode(mode: AppMode) -> Self {
        let first = tabs_for(mode).first().copied().unwrap_or_default();
        Self::new(Route::Tab(first))
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        tracing::debug!(title = route.title(), "navigate");
        self.pushed.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.pushed.pop().is_some()
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.root = StackEntry::new(route);
        self.pushed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tour() -> TourSummary {
        serde_json::from_value(json!({
            "id": 42,
            "title": "Nuratau homestay",
            "organizer_id": 9,
            "files": [
                {"url": "https://cdn.example/1.jpg", "type": "extra"},
                {"url": "https://cdn.example/2.jpg", "type": "gallery"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_tabs_per_mode() {
        assert_eq!(tabs_for(AppMode::Client), [Tab::Home, Tab::Profile, Tab::Settings]);
        assert_eq!(tabs_for(AppMode::Admin), [Tab::Profile, Tab::Settings]);
    }

    #[test]
    fn test_stack_root_per_mode() {
        assert_eq!(NavigationStack::for_mode(AppMode::Client).current(), &Route::Tab(Tab::Home));
        assert_eq!(NavigationStack::for_mode(AppMode::Admin).current(), &Route::Tab(Tab::Profile));
    }

    #[test]
    fn test_routes_carry_values() {
        let tour = tour();

        match Route::tour_details(&tour) {
            Route::TourDetails { tour: carried } => assert_eq!(*carried, tour),
            other => panic!("unexpected route {:?}", other),
        }
        assert_eq!(
            Route::gallery(&tour, 1),
            Route::GalleryCarousel {
                photos: vec![
                    "https://cdn.example/1.jpg".to_string(),
                    "https://cdn.example/2.jpg".to_string()
                ],
                start_index: 1,
            }
        );
        assert_eq!(
            Route::guide_for(&tour),
            Some(Route::GuideDetail { guide_id: "9".to_string() })
        );
    }

    #[test]
    fn test_all_tours_title() {
        let default = Route::AllTours { title: None, category_id: Some("3".to_string()) };
        assert_eq!(default.title(), "All Tours");

        let titled = Route::AllTours { title: Some("Hiking".to_string()), category_id: None };
        assert_eq!(titled.title(), "Hiking");
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Tab(Tab::Home));
        assert!(!stack.can_go_back());
        assert!(!stack.pop());

        stack.push(Route::Search);
        stack.push(Route::tour_details(&tour()));
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.current().title(), "Nuratau homestay");

        assert!(stack.pop());
        assert_eq!(stack.current(), &Route::Search);

        stack.reset(Route::Tab(Tab::Settings));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_route_serialization() {
        let route = Route::GuideDetail { guide_id: "5".to_string() };
        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            json!({"route": "GuideDetail", "params": {"guide_id": "5"}})
        );
    }
}
