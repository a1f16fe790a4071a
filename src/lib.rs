//! Trippo client core
//!
//! Wires the member crates together: opens the settings store, resolves
//! the application mode and UI language once at startup, and builds the
//! API clients every screen shares.
//!
//! # Example
//!
//! ```no_run
//! use trippo::{AppConfig, AppContext};
//!
//! # async fn example() -> anyhow::Result<()> {
//! trippo::init_tracing();
//!
//! let config = AppConfig::default()
//!     .with_kv_path("/tmp/trippo.db")
//!     .with_device_locale("ru-RU");
//! let context = AppContext::bootstrap(config)?;
//!
//! let screen = context.all_tours_screen(None, None);
//! screen.mount().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use anyhow::Context;
use app_state::{AllToursScreen, SearchScreen, TourSource};
use app_ui::{tabs_for, NavigationStack, Tab};
use std::path::PathBuf;
use std::sync::Arc;
use storage::{AppMode, KvConfig, KvStore, SettingsStore};
use trippo_api::{ApiClient, ApiClientConfig, TourApi, WeatherClient, WeatherConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use app_state;
pub use app_ui;
pub use i18n;
pub use storage;
pub use trippo_api;

/// Install the global tracing subscriber
///
/// Honors `RUST_LOG`, defaulting to `info`. Calling it again is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Startup configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend client settings; the language is filled in at bootstrap
    pub api: ApiClientConfig,
    /// Weather lookup settings
    pub weather: WeatherConfig,
    /// Settings store location and tuning
    pub kv: KvConfig,
    /// Device locale, used when no language was picked yet
    pub device_locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiClientConfig::default(),
            weather: WeatherConfig::default(),
            kv: KvConfig::default(),
            device_locale: i18n::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AppConfig {
    /// Override the backend client settings
    pub fn with_api(mut self, api: ApiClientConfig) -> Self {
        self.api = api;
        self
    }

    /// Override the weather lookup settings
    pub fn with_weather(mut self, weather: WeatherConfig) -> Self {
        self.weather = weather;
        self
    }

    /// Store settings at a different path
    pub fn with_kv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.kv = KvConfig::new(path);
        self
    }

    /// Override the settings store config
    pub fn with_kv(mut self, kv: KvConfig) -> Self {
        self.kv = kv;
        self
    }

    /// Set the device locale ("en-US", "uz_UZ", ...)
    pub fn with_device_locale(mut self, locale: impl Into<String>) -> Self {
        self.device_locale = locale.into();
        self
    }
}

/// Everything resolved at startup and shared by the screens
#[derive(Clone)]
pub struct AppContext {
    mode: AppMode,
    language: &'static str,
    settings: SettingsStore,
    tours: Arc<TourApi>,
    weather: Arc<WeatherClient>,
}

impl AppContext {
    /// Open the settings store and build the clients
    pub fn bootstrap(config: AppConfig) -> anyhow::Result<Self> {
        let kv = KvStore::new(config.kv.clone())
            .with_context(|| format!("opening settings store at {}", config.kv.path.display()))?;
        let settings = SettingsStore::new(kv);

        let mode = settings.app_mode().context("reading admin flag")?;
        let saved = settings.language().context("reading UI language")?;
        let language = i18n::resolve_startup_language(saved.as_deref(), &config.device_locale);

        let api = ApiClient::new(config.api.with_language(language))
            .context("building API client")?;
        let weather = WeatherClient::new(config.weather).context("building weather client")?;

        tracing::info!(?mode, language, "application context ready");

        Ok(Self {
            mode,
            language,
            settings,
            tours: Arc::new(TourApi::new(api)),
            weather: Arc::new(weather),
        })
    }

    /// Mode resolved at startup
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// UI language resolved at startup, also sent as `X-Lang`
    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Tabs for the resolved mode
    pub fn tabs(&self) -> &'static [Tab] {
        tabs_for(self.mode)
    }

    /// Navigation stack rooted at the first tab of the resolved mode
    pub fn navigation(&self) -> NavigationStack {
        NavigationStack::for_mode(self.mode)
    }

    /// Persisted settings
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Tour and organizer listing calls
    pub fn tours(&self) -> Arc<TourApi> {
        self.tours.clone()
    }

    /// Weather lookup
    pub fn weather(&self) -> Arc<WeatherClient> {
        self.weather.clone()
    }

    fn tour_source(&self) -> Arc<dyn TourSource> {
        self.tours.clone()
    }

    /// Full listing screen for its navigation parameters
    pub fn all_tours_screen(
        &self,
        title: Option<String>,
        category_id: Option<String>,
    ) -> AllToursScreen {
        AllToursScreen::new(self.tour_source(), title, category_id)
    }

    /// Fresh search screen
    pub fn search_screen(&self) -> SearchScreen {
        SearchScreen::new(self.tour_source())
    }
}
