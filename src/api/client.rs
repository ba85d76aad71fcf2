//! HTTP API Client
//!
//! Functions for communicating with the LeakSense REST API.

use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

use crate::series::ChartSeries;
use crate::state::global::{SensorReading, SensorStats};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("leaksense_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("leaksense_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============ API Functions ============

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/health", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the most recent sensor reading
pub async fn fetch_latest() -> Result<SensorReading, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/sensors/latest", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "No sensor data available".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch min/avg/max statistics over the last `hours` hours
pub async fn fetch_statistics(hours: u32) -> Result<SensorStats, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/api/sensors/statistics?hours={}",
        api_base, hours
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the label/value series for the chart window
pub async fn fetch_chart_data(hours: u32) -> Result<ChartSeries, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/api/sensors/chart-data?hours={}",
        api_base, hours
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// GET with linear backoff between attempts (1s, then 2s, ...).
///
/// The polling loops never call this; their next scheduled tick is the
/// retry mechanism. The settings page uses it for its connection test.
pub async fn fetch_with_retry(url: &str, retries: u32) -> Result<Response, String> {
    let mut last_error = "Request failed".to_string();

    for attempt in 0..retries {
        match Request::get(url).send().await {
            Ok(response) if response.ok() => return Ok(response),
            Ok(response) => {
                last_error = format!("HTTP {}", response.status());
            }
            Err(e) => {
                last_error = format!("Network error: {}", e);
            }
        }

        if attempt + 1 < retries {
            TimeoutFuture::new(1_000 * (attempt + 1)).await;
        }
    }

    Err(last_error)
}

/// Health check against an explicit base URL, with retries. Lets the
/// settings page probe a candidate URL before it is saved.
pub async fn check_health_with_retry(base: &str, retries: u32) -> Result<HealthResponse, String> {
    let url = format!("{}/api/health", base.trim_end_matches('/'));
    let response = fetch_with_retry(&url, retries).await?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
