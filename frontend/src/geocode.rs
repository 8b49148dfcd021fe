use driver_logs_lib::geocode::{
    Coordinate, GeocodeError, ReverseResult, SearchResult, display_names, first_coordinate,
};
use gloo_net::http::Request;
use web_sys::js_sys;

const NOMINATIM_BASE: &str = "https://nominatim.openstreetmap.org";

async fn search(query: &str) -> Result<Vec<SearchResult>, GeocodeError> {
    let encoded = String::from(js_sys::encode_uri_component(query));
    let response = Request::get(&format!("{NOMINATIM_BASE}/search?format=json&q={encoded}"))
        .send()
        .await
        .map_err(|_| GeocodeError::Service)?;

    response
        .json::<Vec<SearchResult>>()
        .await
        .map_err(|_| GeocodeError::Service)
}

/// Resolve an address to coordinates, first provider result wins.
pub async fn forward(query: &str) -> Result<Coordinate, GeocodeError> {
    first_coordinate(&search(query).await?)
}

/// Display names for every match. Empty input yields no request at all.
pub async fn suggestions(query: &str) -> Result<Vec<String>, GeocodeError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    Ok(display_names(search(query).await?))
}

/// Resolve coordinates back to a display address.
pub async fn reverse(lat: f64, lon: f64) -> Result<String, GeocodeError> {
    let response = Request::get(&format!(
        "{NOMINATIM_BASE}/reverse?format=json&lat={lat}&lon={lon}"
    ))
    .send()
    .await
    .map_err(|_| GeocodeError::Service)?;

    let result = response
        .json::<ReverseResult>()
        .await
        .map_err(|_| GeocodeError::Service)?;

    Ok(result.display_name)
}
