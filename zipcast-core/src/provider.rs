use crate::{
    Config, ForecastDay, Location, LookupError,
    provider::{forecast::ForecastClient, geo::GeoClient},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt::Debug;

pub mod forecast;
pub mod geo;

/// Resolves a postal code to a city and its coordinates.
#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    async fn resolve_location(&self, postal_code: &str) -> Result<Location, LookupError>;
}

/// Fetches the daily forecast for a point on a given `MM/DD/YYYY` date.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        date: &str,
    ) -> Result<Vec<ForecastDay>, LookupError>;
}

/// Construct both HTTP sources from the configured endpoints, sharing one client.
pub fn sources_from_config(config: &Config) -> (Box<dyn LocationSource>, Box<dyn ForecastSource>) {
    let http = Client::new();
    (
        Box::new(GeoClient::with_client(config.geo_url.clone(), http.clone())),
        Box::new(ForecastClient::with_client(config.forecast_url.clone(), http)),
    )
}

/// Issue a single GET and return the status with the raw body.
///
/// No retry and no timeout; transport and body read failures surface as
/// [`LookupError::Request`].
pub(crate) async fn get_body(
    http: &Client,
    service: &'static str,
    url: &str,
    query: &[(&str, &str)],
) -> Result<(StatusCode, String), LookupError> {
    tracing::debug!(service, url, ?query, "sending request");

    let res = http
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|source| LookupError::Request { service, source })?;

    let status = res.status();
    let body = res.text().await.map_err(|source| LookupError::Request { service, source })?;

    tracing::debug!(service, %status, bytes = body.len(), "response received");
    Ok((status, body))
}

pub(crate) fn status_error(service: &'static str, status: StatusCode, body: &str) -> LookupError {
    LookupError::Status { service, status, body: truncate_body(body) }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
