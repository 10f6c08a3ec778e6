//! Response envelope shared by every Places endpoint

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlacesError;
use crate::models::{Place, Prediction};

/// Status reported by the Places web service
///
/// Unknown values fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The request succeeded
    Ok,
    /// The request succeeded but matched nothing
    ZeroResults,
    /// The quota of the API key is exhausted
    OverQueryLimit,
    /// The request was rejected, usually because of the API key
    RequestDenied,
    /// A required parameter is missing or malformed
    InvalidRequest,
}

impl Status {
    /// Wire representation of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
        }
    }

    /// Returns true for provider-side failures (anything but `OK` and `ZERO_RESULTS`)
    #[must_use]
    pub const fn is_failure(self) -> bool {
        !matches!(self, Self::Ok | Self::ZeroResults)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded body of any Places response
///
/// Depending on the endpoint, at most one of `results`, `predictions` and
/// `result` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Places from the search endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Place>>,
    /// Predictions from the autocomplete endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<Prediction>>,
    /// Single place from the details endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Place>,
    /// Attributions that must be displayed with the results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_attributions: Option<Vec<String>>,
    /// Outcome of the request
    pub status: Status,
    /// Provider explanation for failure statuses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Token naming the next page of search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacesPage {
    /// Places on this page, in provider order
    pub places: Vec<Place>,
    /// Token naming the next page, if there is one
    pub next_page_token: Option<String>,
    /// Attributions that must be displayed with the places
    pub html_attributions: Vec<String>,
}

impl ResponseEnvelope {
    /// Decode a response body
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the body is not JSON, lacks `status`, or carries
    /// an unknown status value.
    pub fn decode(body: &[u8]) -> Result<Self, PlacesError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The provider failure carried by this envelope, if any
    #[must_use]
    pub fn error(&self) -> Option<PlacesError> {
        self.status.is_failure().then(|| PlacesError::Api {
            status: self.status,
            message: self
                .error_message
                .clone()
                .unwrap_or_else(|| self.status.as_str().to_string()),
        })
    }

    fn check(&self) -> Result<(), PlacesError> {
        self.error().map_or(Ok(()), Err)
    }

    /// Places of a search response (empty for `ZERO_RESULTS`)
    ///
    /// # Errors
    ///
    /// Returns `Api` for failure statuses.
    pub fn into_places(self) -> Result<Vec<Place>, PlacesError> {
        self.check()?;
        Ok(self.results.unwrap_or_default())
    }

    /// Places of a search response together with paging data
    ///
    /// # Errors
    ///
    /// Returns `Api` for failure statuses.
    pub fn into_page(self) -> Result<PlacesPage, PlacesError> {
        self.check()?;
        Ok(PlacesPage {
            places: self.results.unwrap_or_default(),
            next_page_token: self.next_page_token,
            html_attributions: self.html_attributions.unwrap_or_default(),
        })
    }

    /// Predictions of an autocomplete response (empty for `ZERO_RESULTS`)
    ///
    /// # Errors
    ///
    /// Returns `Api` for failure statuses.
    pub fn into_predictions(self) -> Result<Vec<Prediction>, PlacesError> {
        self.check()?;
        Ok(self.predictions.unwrap_or_default())
    }

    /// The place of a details response
    ///
    /// `ZERO_RESULTS` is a failure here since there is no empty single place.
    ///
    /// # Errors
    ///
    /// Returns `Api` for any status other than `OK` and `MissingResult` if
    /// the envelope has no `result`.
    pub fn into_place(self) -> Result<Place, PlacesError> {
        if self.status == Status::ZeroResults {
            return Err(PlacesError::Api {
                status: self.status,
                message: self
                    .error_message
                    .unwrap_or_else(|| self.status.as_str().to_string()),
            });
        }
        self.check()?;
        self.result.ok_or(PlacesError::MissingResult)
    }
}
