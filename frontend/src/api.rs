use driver_logs_lib::log_entry::{LogEntry, LogPayload};
use driver_logs_lib::trip::{Trip, TripPayload};
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

const API_BASE: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error")]
    Network,
    #[error("not found")]
    NotFound,
    /// The server rejected the request. Carries the server's `message` field
    /// verbatim when one was present, otherwise an empty string.
    #[error("request rejected: {0}")]
    Rejected(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status() == 404 {
        return Err(ApiError::NotFound);
    }
    if !response.ok() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message.unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(ApiError::Rejected(message));
    }
    Ok(response)
}

async fn get_json<T>(path: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let response = Request::get(&format!("{API_BASE}{path}"))
        .send()
        .await
        .map_err(|_| ApiError::Network)?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|_| ApiError::Network)
}

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let response = Request::post(&format!("{API_BASE}{path}"))
        .json(body)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|_| ApiError::Network)
}

pub async fn list_trips() -> Result<Vec<Trip>, ApiError> {
    get_json("/trips/").await
}

pub async fn create_trip(payload: &TripPayload) -> Result<Trip, ApiError> {
    post_json("/trips/", payload).await
}

pub async fn get_trip(trip_id: i64) -> Result<Trip, ApiError> {
    get_json(&format!("/trips/{trip_id}/")).await
}

pub async fn delete_trip(trip_id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&format!("{API_BASE}/trips/{trip_id}/delete/"))
        .send()
        .await
        .map_err(|_| ApiError::Network)?;

    check(response).await?;
    Ok(())
}

pub async fn list_logs(trip_id: i64) -> Result<Vec<LogEntry>, ApiError> {
    get_json(&format!("/trips/{trip_id}/logs/")).await
}

pub async fn create_log(trip_id: i64, payload: &LogPayload) -> Result<LogEntry, ApiError> {
    post_json(&format!("/trips/{trip_id}/logs/"), payload).await
}
