//! Places data models
//!
//! Typed representations of places and autocomplete predictions as returned
//! by the Places web service. Field names follow the wire format; the
//! `opening_hours`, `photos` and `alt_ids` members are not mapped.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::PlacesError;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate with range validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, PlacesError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(PlacesError::InvalidParameter(format!(
                "coordinate ({lat}, {lng}) out of range: latitude must be -90 to 90, \
                 longitude must be -180 to 180"
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Create a coordinate without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Geometry of a place as decoded from a response: `{ "location": { "lat", "lng" } }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceGeometry {
    /// Position of the place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
}

/// A point of interest returned by the search and details endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Stable place identifier (empty if the provider omitted it)
    #[serde(default)]
    pub place_id: String,
    /// Geometry of the place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PlaceGeometry>,
    /// URL of a suggested icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Legacy reference token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category types, e.g. `["cafe", "food"]`
    #[serde(default)]
    pub types: Vec<String>,
    /// Scope of the place id ("GOOGLE" or "APP")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Simplified address of the place's vicinity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
}

impl Place {
    /// Position of the place, if the response carried one
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.geometry.and_then(|g| g.location)
    }

    /// Check whether the place has the given category type
    #[must_use]
    pub fn has_type(&self, place_type: &str) -> bool {
        self.types.iter().any(|t| t == place_type)
    }
}

/// A span of matched input within a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedSubstring {
    /// Start offset of the match
    #[serde(default)]
    pub offset: usize,
    /// Length of the match
    #[serde(default)]
    pub length: usize,
}

impl MatchedSubstring {
    /// The matched span as a range
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.length)
    }
}

/// Prediction text split into a main part and secondary details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredFormatting {
    /// Main text, usually the place name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_text: Option<String>,
    /// Secondary text, usually the locality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
    /// Matched spans within `main_text`
    #[serde(default)]
    pub main_text_matched_substrings: Vec<MatchedSubstring>,
}

/// One term of a prediction's description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Start offset within the description
    #[serde(default)]
    pub offset: usize,
    /// Term text
    #[serde(default)]
    pub value: String,
}

/// A candidate result returned by the autocomplete endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Place identifier (query predictions may have none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Legacy place id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Legacy reference token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Full human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Matched spans within `description`
    #[serde(default)]
    pub matched_substrings: Vec<MatchedSubstring>,
    /// Structured main/secondary text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_formatting: Option<StructuredFormatting>,
    /// Terms of the description, in order
    #[serde(default)]
    pub terms: Vec<Term>,
    /// Category types
    #[serde(default)]
    pub types: Vec<String>,
}

impl Prediction {
    /// Main text, falling back to the full description
    #[must_use]
    pub fn main_text(&self) -> Option<&str> {
        self.structured_formatting
            .as_ref()
            .and_then(|f| f.main_text.as_deref())
            .or(self.description.as_deref())
    }

    /// Matched parts of the description
    #[must_use]
    pub fn matched_parts(&self) -> Vec<&str> {
        let Some(description) = self.description.as_deref() else {
            return Vec::new();
        };
        self.matched_substrings
            .iter()
            .filter_map(|m| description.get(m.range()))
            .collect()
    }
}
