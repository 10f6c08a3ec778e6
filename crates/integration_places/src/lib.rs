#![forbid(unsafe_code)]
//! Google Places integration
//!
//! Client for the Google Places web service
//! (<https://developers.google.com/maps/documentation/places/web-service>):
//! nearby, text and radar search, autocomplete, query autocomplete and place
//! details.
//!
//! # Architecture
//!
//! [`PlacesClient`] defines the six operations and is implemented by
//! [`GooglePlacesClient`]. Optional request parameters are typed records
//! ([`SearchParameters`], [`AutocompleteParameters`], [`Geometry`]) that
//! turn into a [`QueryMap`]. Every response is decoded into a
//! [`ResponseEnvelope`] whose [`Status`] decides between the payload and a
//! [`PlacesError::Api`]. `ZERO_RESULTS` yields an empty list.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{
//!     Coordinate, Geometry, GooglePlacesClient, PlacesClient, PlacesConfig, SearchParameters,
//! };
//!
//! let client = GooglePlacesClient::new(PlacesConfig::new("API_KEY"))?;
//!
//! let area = Geometry::new(Coordinate::new(52.52, 13.405)?, 500.0)?;
//! let params = SearchParameters::new().with_type("cafe").with_open_now(true);
//!
//! for place in client.nearby_search(&area, Some(&params)).await? {
//!     println!("{} ({})", place.name.unwrap_or_default(), place.place_id);
//! }
//! ```

mod client;
mod config;
mod endpoint;
mod error;
mod models;
mod params;
mod response;

pub use client::{GooglePlacesClient, PlacesClient};
pub use config::PlacesConfig;
pub use endpoint::{DEFAULT_BASE_URL, Endpoint};
pub use error::{ErrorKind, PlacesError};
pub use models::{
    Coordinate, MatchedSubstring, Place, PlaceGeometry, Prediction, StructuredFormatting, Term,
};
pub use params::{AutocompleteParameters, Geometry, QueryMap, QueryParameters, SearchParameters};
pub use response::{PlacesPage, ResponseEnvelope, Status};
