//! Tour and organizer listing calls

use crate::http::{ApiClient, ApiRequest};
use crate::query::{Pagination, TourQuery};
use crate::types::{ListEnvelope, Organizer, TourSummary};
use crate::Result;

/// Tour listing endpoint, relative to the base URL
pub const TOUR_LIST_PATH: &str = "tour/list";

/// Organizer listing endpoint, relative to the base URL
pub const ORGANIZER_LIST_PATH: &str = "organizer/list";

/// Listing calls against the Trippo backend
///
/// # Example
///
/// ```no_run
/// # use trippo_api::{ApiClient, ApiClientConfig, TourApi, TourQuery};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api = TourApi::new(ApiClient::new(ApiClientConfig::default())?);
/// let tours = api.fetch_tours(&TourQuery::default()).await?;
/// for tour in tours {
///     println!("{}: {}", tour.id, tour.display_title());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TourApi {
    client: ApiClient,
}

impl TourApi {
    /// Create a new listing API over a configured client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of tours matching a query
    pub async fn fetch_tours(&self, query: &TourQuery) -> Result<Vec<TourSummary>> {
        let request = ApiRequest::post(TOUR_LIST_PATH).json_body(query)?;

        match self.client.send::<ListEnvelope<TourSummary>>(request).await {
            Ok(response) => {
                let tours = response.data.into_items();
                tracing::debug!(count = tours.len(), offset = query.offset, "tours fetched");
                Ok(tours)
            }
            Err(err) => {
                tracing::warn!("Failed to fetch tours: {}", err);
                Err(err)
            }
        }
    }

    /// Fetch one page of organizers
    pub async fn fetch_organizers(&self, pagination: Pagination) -> Result<Vec<Organizer>> {
        let request = ApiRequest::post(ORGANIZER_LIST_PATH).json_body(&pagination)?;

        match self.client.send::<ListEnvelope<Organizer>>(request).await {
            Ok(response) => {
                let organizers = response.data.into_items();
                tracing::debug!(count = organizers.len(), "organizers fetched");
                Ok(organizers)
            }
            Err(err) => {
                tracing::warn!("Failed to fetch organizers: {}", err);
                Err(err)
            }
        }
    }

    /// Underlying HTTP client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
