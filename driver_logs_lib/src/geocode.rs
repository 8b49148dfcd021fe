use serde::Deserialize;
use thiserror::Error;

/// A resolved latitude/longitude pair. Transient, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeocodeError {
    /// The provider returned an empty result set for the query.
    #[error("no result for query")]
    NotFound,
    /// Transport failure or a response that did not parse.
    #[error("geocoding service error")]
    Service,
}

/// One entry of the nominatim `/search` response. `lat`/`lon` arrive as
/// strings on the wire.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchResult {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

/// The nominatim `/reverse` response.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReverseResult {
    pub display_name: String,
}

impl SearchResult {
    pub fn coordinate(&self) -> Result<Coordinate, GeocodeError> {
        let lat = self.lat.parse().map_err(|_| GeocodeError::Service)?;
        let lon = self.lon.parse().map_err(|_| GeocodeError::Service)?;
        Ok(Coordinate { lat, lon })
    }
}

/// First result wins, as with the original lookup. Empty set is `NotFound`.
pub fn first_coordinate(results: &[SearchResult]) -> Result<Coordinate, GeocodeError> {
    results
        .first()
        .ok_or(GeocodeError::NotFound)?
        .coordinate()
}

/// Every result's display name, in provider order.
pub fn display_names(results: Vec<SearchResult>) -> Vec<String> {
    results.into_iter().map(|r| r.display_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, lat: &str, lon: &str) -> SearchResult {
        SearchResult {
            display_name: name.to_owned(),
            lat: lat.to_owned(),
            lon: lon.to_owned(),
        }
    }

    #[test]
    fn first_result_is_picked() {
        let results = vec![result("A", "10", "10"), result("B", "20", "20")];
        assert_eq!(
            first_coordinate(&results).unwrap(),
            Coordinate { lat: 10.0, lon: 10.0 }
        );
    }

    #[test]
    fn empty_result_set_is_not_found() {
        assert_eq!(first_coordinate(&[]), Err(GeocodeError::NotFound));
    }

    #[test]
    fn malformed_latitude_is_a_service_error() {
        let results = vec![result("A", "north", "10")];
        assert_eq!(first_coordinate(&results), Err(GeocodeError::Service));
    }

    #[test]
    fn display_names_keep_provider_order() {
        let results = vec![result("A", "1", "1"), result("B", "2", "2")];
        assert_eq!(display_names(results), vec!["A", "B"]);
    }

    #[test]
    fn search_result_parses_wire_shape() {
        let json = r#"[{"display_name":"Aarhus, Denmark","lat":"56.15","lon":"10.2"}]"#;
        let results: Vec<SearchResult> = serde_json::from_str(json).unwrap();
        let coord = first_coordinate(&results).unwrap();
        assert!((coord.lat - 56.15).abs() < 1e-9);
    }
}
