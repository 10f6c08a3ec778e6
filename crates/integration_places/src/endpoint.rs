//! Places web service endpoints

use std::fmt;

/// Base URL of the Places web service
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// A Places web service operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Places within a radius of a location
    NearbySearch,
    /// Places matching a free-text query
    TextSearch,
    /// Place ids within a radius of a location
    RadarSearch,
    /// Place predictions for partially typed input
    Autocomplete,
    /// Query predictions for partially typed input
    QueryAutocomplete,
    /// Details of a single place
    Details,
}

impl Endpoint {
    /// All endpoints, in declaration order
    pub const ALL: [Self; 6] = [
        Self::NearbySearch,
        Self::TextSearch,
        Self::RadarSearch,
        Self::Autocomplete,
        Self::QueryAutocomplete,
        Self::Details,
    ];

    /// Path segment under the base URL
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::NearbySearch => "nearbysearch",
            Self::TextSearch => "textsearch",
            Self::RadarSearch => "radarsearch",
            Self::Autocomplete => "autocomplete",
            Self::QueryAutocomplete => "queryautocomplete",
            Self::Details => "details",
        }
    }

    /// Full JSON request URL below `base_url`
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}/{}/json", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_nearby_search_url() {
        assert_eq!(
            Endpoint::NearbySearch.url(DEFAULT_BASE_URL),
            "https://maps.googleapis.com/maps/api/place/nearbysearch/json"
        );
    }

    #[test]
    fn test_details_url() {
        assert_eq!(
            Endpoint::Details.url(DEFAULT_BASE_URL),
            "https://maps.googleapis.com/maps/api/place/details/json"
        );
    }

    #[test]
    fn test_all_paths() {
        let expected = [
            (Endpoint::NearbySearch, "nearbysearch"),
            (Endpoint::TextSearch, "textsearch"),
            (Endpoint::RadarSearch, "radarsearch"),
            (Endpoint::Autocomplete, "autocomplete"),
            (Endpoint::QueryAutocomplete, "queryautocomplete"),
            (Endpoint::Details, "details"),
        ];
        for (endpoint, path) in expected {
            assert_eq!(endpoint.path(), path);
            assert_eq!(endpoint.to_string(), path);
        }
    }

    #[test]
    fn test_urls_are_distinct() {
        let urls: HashSet<String> = Endpoint::ALL
            .iter()
            .map(|e| e.url(DEFAULT_BASE_URL))
            .collect();
        assert_eq!(urls.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        assert_eq!(
            Endpoint::TextSearch.url("http://localhost:1234/"),
            "http://localhost:1234/textsearch/json"
        );
    }
}
