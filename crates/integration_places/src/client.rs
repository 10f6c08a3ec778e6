//! Google Places web service client
//!
//! Every operation issues exactly one GET request. Query parameters are merged
//! in a fixed order, later sources overriding earlier ones:
//!
//! 1. the configured default language
//! 2. the required input of the operation (`query`, `input`, `place_id`)
//! 3. the search area
//! 4. the caller's optional parameters
//! 5. the API key

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, instrument, warn};

use crate::config::PlacesConfig;
use crate::endpoint::Endpoint;
use crate::error::PlacesError;
use crate::models::{Place, Prediction};
use crate::params::{AutocompleteParameters, Geometry, QueryMap, QueryParameters, SearchParameters};
use crate::response::{PlacesPage, ResponseEnvelope};

/// Trait for Places service clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Places within a search area
    async fn nearby_search(
        &self,
        geometry: &Geometry,
        parameters: Option<&SearchParameters>,
    ) -> Result<Vec<Place>, PlacesError>;

    /// Places matching a free-text query, optionally biased to an area
    async fn text_search(
        &self,
        query: &str,
        geometry: Option<&Geometry>,
        parameters: Option<&SearchParameters>,
    ) -> Result<Vec<Place>, PlacesError>;

    /// Places within a search area from the radar endpoint
    async fn radar_search(
        &self,
        geometry: &Geometry,
        parameters: Option<&SearchParameters>,
    ) -> Result<Vec<Place>, PlacesError>;

    /// Place predictions for partially typed input
    async fn autocomplete(
        &self,
        input: &str,
        parameters: Option<&AutocompleteParameters>,
    ) -> Result<Vec<Prediction>, PlacesError>;

    /// Query predictions for partially typed input
    async fn query_autocomplete(
        &self,
        input: &str,
        parameters: Option<&AutocompleteParameters>,
    ) -> Result<Vec<Prediction>, PlacesError>;

    /// Details of a single place
    async fn place_details(&self, place_id: &str) -> Result<Place, PlacesError>;
}

/// HTTP client for the Google Places web service
#[derive(Debug)]
pub struct GooglePlacesClient {
    client: Client,
    config: PlacesConfig,
}

impl GooglePlacesClient {
    /// Create a new Places client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::Configuration)?;

        if !config.has_api_key() {
            warn!("No Places API key configured, requests will be denied by the provider");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| PlacesError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a shareable client wrapped in Arc
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new_shared(config: PlacesConfig) -> Result<Arc<Self>, PlacesError> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// The client's configuration
    #[must_use]
    pub const fn config(&self) -> &PlacesConfig {
        &self.config
    }

    /// Full request URL of an endpoint
    #[must_use]
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        endpoint.url(self.config.normalized_base_url())
    }

    /// Merge the parts of a request into the final query map
    fn compose_query(
        &self,
        required: QueryMap,
        geometry: Option<&Geometry>,
        parameters: Option<&dyn QueryParameters>,
    ) -> QueryMap {
        let mut query = QueryMap::new();
        query.insert_opt("language", self.config.language.as_deref());
        query.merge(required);
        if let Some(geometry) = geometry {
            query.merge(geometry.to_query_map());
        }
        if let Some(parameters) = parameters {
            query.merge(parameters.to_query_map());
        }
        match self.config.api_key.as_ref() {
            Some(key) => query.insert("key", key.expose_secret()),
            None => {
                query.remove("key");
            },
        }
        query
    }

    /// Issue one GET request and decode the envelope
    async fn fetch(
        &self,
        endpoint: Endpoint,
        query: &QueryMap,
    ) -> Result<ResponseEnvelope, PlacesError> {
        let url = self.endpoint_url(endpoint);

        debug!(%endpoint, params = query.len(), "Sending Places request");

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let envelope = ResponseEnvelope::decode(&body)?;

        debug!(%endpoint, status = %envelope.status, "Places response decoded");
        Ok(envelope)
    }

    fn search_query(
        &self,
        geometry: &Geometry,
        parameters: Option<&SearchParameters>,
    ) -> QueryMap {
        self.compose_query(
            QueryMap::new(),
            Some(geometry),
            parameters.map(|p| p as &dyn QueryParameters),
        )
    }

    fn text_query(
        &self,
        query: &str,
        geometry: Option<&Geometry>,
        parameters: Option<&SearchParameters>,
    ) -> QueryMap {
        self.compose_query(
            [("query", query)].into_iter().collect(),
            geometry,
            parameters.map(|p| p as &dyn QueryParameters),
        )
    }

    fn autocomplete_query(
        &self,
        input: &str,
        parameters: Option<&AutocompleteParameters>,
    ) -> QueryMap {
        self.compose_query(
            [("input", input)].into_iter().collect(),
            None,
            parameters.map(|p| p as &dyn QueryParameters),
        )
    }

    /// Nearby search returning the page token and attributions as well
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::nearby_search`].
    #[instrument(skip(self, parameters), fields(radius = geometry.radius()))]
    pub async fn nearby_search_page(
        &self,
        geometry: &Geometry,
        parameters: Option<&SearchParameters>,
    ) -> Result<PlacesPage, PlacesError> {
        let query = self.search_query(geometry, parameters);
        let page = self.fetch(Endpoint::NearbySearch, &query).await?.into_page()?;
        debug!(count = page.places.len(), "Nearby search finished");
        Ok(page)
    }

    /// Text search returning the page token and attributions as well
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::text_search`].
    #[instrument(skip(self, geometry, parameters))]
    pub async fn text_search_page(
        &self,
        query: &str,
        geometry: Option<&Geometry>,
        parameters: Option<&SearchParameters>,
    ) -> Result<PlacesPage, PlacesError> {
        let query = self.text_query(query, geometry, parameters);
        let page = self.fetch(Endpoint::TextSearch, &query).await?.into_page()?;
        debug!(count = page.places.len(), "Text search finished");
        Ok(page)
    }

    /// Radar search returning the page token and attributions as well
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::radar_search`].
    #[instrument(skip(self, parameters), fields(radius = geometry.radius()))]
    pub async fn radar_search_page(
        &self,
        geometry: &Geometry,
        parameters: Option<&SearchParameters>,
    ) -> Result<PlacesPage, PlacesError> {
        let query = self.search_query(geometry, parameters);
        let page = self.fetch(Endpoint::RadarSearch, &query).await?.into_page()?;
        debug!(count = page.places.len(), "Radar search finished");
        Ok(page)
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    async fn nearby_search(
        &self,
        geometry: &Geometry,
        parameters: Option<&SearchParameters>,
    ) -> Result<Vec<Place>, PlacesError> {
        Ok(self.nearby_search_page(geometry, parameters).await?.places)
    }

    async fn text_search(
        &self,
        query: &str,
        geometry: Option<&Geometry>,
        parameters: Option<&SearchParameters>,
    ) -> Result<Vec<Place>, PlacesError> {
        Ok(self.text_search_page(query, geometry, parameters).await?.places)
    }

    async fn radar_search(
        &self,
        geometry: &Geometry,
        parameters: Option<&SearchParameters>,
    ) -> Result<Vec<Place>, PlacesError> {
        Ok(self.radar_search_page(geometry, parameters).await?.places)
    }

    #[instrument(skip(self, parameters), fields(input_len = input.len()))]
    async fn autocomplete(
        &self,
        input: &str,
        parameters: Option<&AutocompleteParameters>,
    ) -> Result<Vec<Prediction>, PlacesError> {
        let query = self.autocomplete_query(input, parameters);
        let predictions = self
            .fetch(Endpoint::Autocomplete, &query)
            .await?
            .into_predictions()?;
        debug!(count = predictions.len(), "Autocomplete finished");
        Ok(predictions)
    }

    #[instrument(skip(self, parameters), fields(input_len = input.len()))]
    async fn query_autocomplete(
        &self,
        input: &str,
        parameters: Option<&AutocompleteParameters>,
    ) -> Result<Vec<Prediction>, PlacesError> {
        let query = self.autocomplete_query(input, parameters);
        let predictions = self
            .fetch(Endpoint::QueryAutocomplete, &query)
            .await?
            .into_predictions()?;
        debug!(count = predictions.len(), "Query autocomplete finished");
        Ok(predictions)
    }

    #[instrument(skip(self))]
    async fn place_details(&self, place_id: &str) -> Result<Place, PlacesError> {
        let query = self.compose_query([("place_id", place_id)].into_iter().collect(), None, None);
        self.fetch(Endpoint::Details, &query).await?.into_place()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::models::Coordinate;

    fn geometry() -> impl Strategy<Value = Geometry> {
        (-90.0f64..=90.0f64, -180.0f64..=180.0f64, 1.0f64..50_000.0f64).prop_map(
            |(lat, lng, radius)| {
                Geometry::new(Coordinate::new_unchecked(lat, lng), radius).unwrap()
            },
        )
    }

    fn text() -> impl Strategy<Value = Option<String>> {
        proptest::option::of("[a-z]{1,12}")
    }

    fn search_parameters() -> impl Strategy<Value = SearchParameters> {
        (text(), text(), proptest::option::of(any::<bool>()), text(), text()).prop_map(
            |(keyword, language, open_now, place_type, name)| SearchParameters {
                keyword,
                language,
                open_now,
                place_type,
                name,
                page_token: None,
            },
        )
    }

    proptest! {
        #[test]
        fn configured_key_wins_over_every_source(
            geometry in geometry(),
            params in search_parameters(),
            smuggled in "[a-z]{1,10}",
            api_key in "[A-Za-z0-9_-]{10,40}",
        ) {
            let client = GooglePlacesClient::new(PlacesConfig::new(api_key.clone())).unwrap();
            let required: QueryMap = [("key", smuggled.as_str())].into_iter().collect();

            let query = client.compose_query(
                required,
                Some(&geometry),
                Some(&params as &dyn QueryParameters),
            );

            prop_assert_eq!(query.get("key"), Some(api_key.as_str()));
        }

        #[test]
        fn parameters_override_geometry_and_default_language(
            geometry in geometry(),
            params in search_parameters(),
            default_language in "[a-z]{2}",
        ) {
            let config = PlacesConfig::new("k").with_language(default_language.clone());
            let client = GooglePlacesClient::new(config).unwrap();

            let query = client.search_query(&geometry, Some(&params));

            let expected_language = params.language.clone().unwrap_or(default_language);
            prop_assert_eq!(query.get("language"), Some(expected_language.as_str()));
            for (key, value) in params.to_query_map().iter() {
                prop_assert_eq!(query.get(key), Some(value));
            }
            for (key, value) in geometry.to_query_map().iter() {
                prop_assert_eq!(query.get(key), Some(value));
            }
            prop_assert_eq!(query.get("key"), Some("k"));
        }
    }
}
