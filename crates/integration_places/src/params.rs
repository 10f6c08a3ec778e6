//! Request parameters
//!
//! Typed option records for the search and autocomplete endpoints. Each one
//! turns into a flat [`QueryMap`]; fields that are not set contribute no key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::PlacesError;
use crate::models::Coordinate;

/// Flat string-keyed set of query parameters
///
/// Merging is last-writer-wins on key collision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryMap(BTreeMap<String, String>);

impl QueryMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Set a key only if a non-empty value is present
    pub fn insert_opt(&mut self, key: &str, value: Option<impl ToString>) {
        let Some(value) = value.map(|v| v.to_string()) else {
            return;
        };
        if !value.is_empty() {
            self.insert(key, value);
        }
    }

    /// Remove a key
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Apply every entry of `other` on top of this map
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Value of a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check whether a key is set
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Anything that can be sent as query parameters
pub trait QueryParameters {
    /// Build the query map for this value
    fn to_query_map(&self) -> QueryMap;
}

/// Render degrees so whole numbers keep their decimal point ("1.0", "52.52")
fn format_degrees(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// A search area: a center coordinate and a radius in meters
///
/// Sent as `location=<lat>,<lng>` and `radius=<meters>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    location: Coordinate,
    radius: f64,
}

impl Geometry {
    /// Create a search area
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the radius is not a positive finite number.
    pub fn new(location: Coordinate, radius: f64) -> Result<Self, PlacesError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PlacesError::InvalidParameter(format!(
                "radius must be a positive number of meters, got {radius}"
            )));
        }
        Ok(Self { location, radius })
    }

    /// Center of the area
    #[must_use]
    pub const fn location(&self) -> Coordinate {
        self.location
    }

    /// Radius in meters
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl QueryParameters for Geometry {
    fn to_query_map(&self) -> QueryMap {
        let mut query = QueryMap::new();
        query.insert(
            "location",
            format!(
                "{},{}",
                format_degrees(self.location.lat),
                format_degrees(self.location.lng)
            ),
        );
        query.insert("radius", self.radius.to_string());
        query
    }
}

/// Optional parameters of the nearby, text and radar search endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    /// Term matched against all indexed content (`keyword`)
    pub keyword: Option<String>,
    /// Result language (`language`)
    pub language: Option<String>,
    /// Only places open right now (`opennow`)
    pub open_now: Option<bool>,
    /// Restrict to one place type (`type`)
    pub place_type: Option<String>,
    /// Term matched against place names (`name`)
    pub name: Option<String>,
    /// Next-page token from an earlier response (`pagetoken`)
    pub page_token: Option<String>,
}

impl SearchParameters {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Set the result language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Only return places that are open now
    #[must_use]
    pub const fn with_open_now(mut self, open_now: bool) -> Self {
        self.open_now = Some(open_now);
        self
    }

    /// Restrict to a place type
    #[must_use]
    pub fn with_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }

    /// Set the name filter
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Request the page named by a `next_page_token`
    #[must_use]
    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }
}

impl QueryParameters for SearchParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut query = QueryMap::new();
        query.insert_opt("keyword", self.keyword.as_deref());
        query.insert_opt("language", self.language.as_deref());
        query.insert_opt("opennow", self.open_now);
        query.insert_opt("type", self.place_type.as_deref());
        query.insert_opt("name", self.name.as_deref());
        query.insert_opt("pagetoken", self.page_token.as_deref());
        query
    }
}

/// Optional parameters of the autocomplete and query-autocomplete endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutocompleteParameters {
    /// Position of the last input character the service uses (`offset`)
    pub offset: Option<u32>,
    /// Area to bias (or, with `strict_bounds`, restrict) results to
    pub geometry: Option<Geometry>,
    /// Result language (`language`)
    pub language: Option<String>,
    /// Type collection filter, e.g. "geocode" or "establishment" (`types`)
    pub types: Option<String>,
    /// Component filter, e.g. "country:fr" (`components`)
    pub components: Option<String>,
    /// Only return results inside `geometry` (`strictbounds`, sent only when set)
    pub strict_bounds: bool,
}

impl AutocompleteParameters {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input offset
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Bias results to an area
    #[must_use]
    pub const fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Set the result language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the type collection filter
    #[must_use]
    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Set the component filter
    #[must_use]
    pub fn with_components(mut self, components: impl Into<String>) -> Self {
        self.components = Some(components.into());
        self
    }

    /// Restrict results to the configured geometry
    #[must_use]
    pub const fn with_strict_bounds(mut self) -> Self {
        self.strict_bounds = true;
        self
    }
}

impl QueryParameters for AutocompleteParameters {
    fn to_query_map(&self) -> QueryMap {
        let mut query = QueryMap::new();
        query.insert_opt("offset", self.offset);
        if let Some(geometry) = &self.geometry {
            query.merge(geometry.to_query_map());
        }
        query.insert_opt("language", self.language.as_deref());
        query.insert_opt("types", self.types.as_deref());
        query.insert_opt("components", self.components.as_deref());
        if self.strict_bounds {
            query.insert("strictbounds", "true");
        }
        query
    }
}
