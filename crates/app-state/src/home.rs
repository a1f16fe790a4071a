//! Home screen feed
//!
//! The home screen shows a tour carousel, an organizer row and a tour grid,
//! plus an optional weather block for the device location. Every part is
//! fetched independently; a part that fails to load is simply left out.

use crate::listing::TourSource;
use async_trait::async_trait;
use thiserror::Error;
use trippo_api::{Coordinates, CurrentWeather, Organizer, Pagination, TourQuery, TourSummary, WeatherClient};

/// Device location failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user refused location access
    #[error("Location permission denied")]
    PermissionDenied,

    /// Permission granted but no position could be obtained
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// Device location provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Ask for permission if needed and return the current position
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Current weather lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Weather at a position
    async fn current(&self, position: Coordinates) -> trippo_api::Result<CurrentWeather>;
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn current(&self, position: Coordinates) -> trippo_api::Result<CurrentWeather> {
        WeatherClient::current(self, position).await
    }
}

/// Why the weather block is hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherNotice {
    /// Location access refused
    PermissionDenied,
    /// No position could be obtained
    LocationFailed,
    /// The weather lookup failed
    FetchFailed,
}

impl WeatherNotice {
    /// Message shown at the top of the feed
    pub fn message(&self) -> &'static str {
        match self {
            WeatherNotice::PermissionDenied => "Location permission denied",
            WeatherNotice::LocationFailed => "Failed to get location",
            WeatherNotice::FetchFailed => "Failed to fetch weather data",
        }
    }
}

impl From<&LocationError> for WeatherNotice {
    fn from(err: &LocationError) -> Self {
        match err {
            LocationError::PermissionDenied => WeatherNotice::PermissionDenied,
            LocationError::Unavailable(_) => WeatherNotice::LocationFailed,
        }
    }
}

/// Weather block state
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherBlock {
    /// Current weather for the device location
    Shown(CurrentWeather),
    /// Block hidden, with the reason
    Hidden(WeatherNotice),
}

impl WeatherBlock {
    /// Notice to show, if the block is hidden
    pub fn notice(&self) -> Option<WeatherNotice> {
        match self {
            WeatherBlock::Hidden(notice) => Some(*notice),
            WeatherBlock::Shown(_) => None,
        }
    }
}

/// Resolve the device location and look up its weather
pub async fn load_weather(
    location: &dyn LocationProvider,
    weather: &dyn WeatherSource,
) -> WeatherBlock {
    let position = match location.current_position().await {
        Ok(position) => position,
        Err(e) => {
            tracing::warn!("Failed to get location: {}", e);
            return WeatherBlock::Hidden(WeatherNotice::from(&e));
        }
    };

    match weather.current(position).await {
        Ok(current) => WeatherBlock::Shown(current),
        Err(e) => {
            tracing::warn!("Failed to fetch weather data: {}", e);
            WeatherBlock::Hidden(WeatherNotice::FetchFailed)
        }
    }
}

/// One section of the home feed, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum HomeSection {
    /// Weather notice banner
    Notice(WeatherNotice),
    /// Horizontal tour carousel
    Tours(Vec<TourSummary>),
    /// Organizer row
    Organizers(Vec<Organizer>),
    /// Tour grid
    ToursGrid(Vec<TourSummary>),
}

/// Everything the home screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct HomeFeed {
    /// Weather block state
    pub weather: WeatherBlock,
    /// Tours, absent if the listing failed
    pub tours: Option<Vec<TourSummary>>,
    /// Organizers, absent if the listing failed
    pub organizers: Option<Vec<Organizer>>,
}

impl HomeFeed {
    /// Fetch every part of the feed concurrently
    pub async fn load(
        tours: &dyn TourSource,
        location: &dyn LocationProvider,
        weather: &dyn WeatherSource,
    ) -> Self {
        let unfiltered = TourQuery::default();
        let (weather, tour_list, organizer_list) = tokio::join!(
            load_weather(location, weather),
            tours.fetch_tours(&unfiltered),
            tours.fetch_organizers(Pagination::default()),
        );

        Self {
            weather,
            tours: tour_list.ok(),
            organizers: organizer_list.ok(),
        }
    }

    /// Sections to render, in order
    pub fn sections(&self) -> Vec<HomeSection> {
        let mut sections = Vec::new();
        if let Some(notice) = self.weather.notice() {
            sections.push(HomeSection::Notice(notice));
        }
        if let Some(tours) = &self.tours {
            sections.push(HomeSection::Tours(tours.clone()));
        }
        if let Some(organizers) = &self.organizers {
            sections.push(HomeSection::Organizers(organizers.clone()));
        }
        if let Some(tours) = &self.tours {
            sections.push(HomeSection::ToursGrid(tours.clone()));
        }
        sections
    }
}
