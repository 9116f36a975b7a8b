use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{ForecastDay, LookupError};

use super::{ForecastSource, get_body, status_error};

const SERVICE: &str = "forecast";

/// Forecast endpoint client:
/// `GET <base_url>?latitude=<lat>&longitude=<long>&date=<MM/DD/YYYY>`.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    base_url: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), http }
    }
}

#[derive(Debug, Deserialize)]
struct FcDaily {
    data: Vec<ForecastDay>,
}

#[derive(Debug, Deserialize)]
struct FcResponse {
    daily: FcDaily,
}

/// The service signals failure with a truthy `error` field.
fn reports_error(parsed: &Value) -> bool {
    match parsed.get("error") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

#[async_trait]
impl ForecastSource for ForecastClient {
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        date: &str,
    ) -> Result<Vec<ForecastDay>, LookupError> {
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();

        let (status, body) = get_body(
            &self.http,
            SERVICE,
            &self.base_url,
            &[("latitude", latitude.as_str()), ("longitude", longitude.as_str()), ("date", date)],
        )
        .await?;

        let parsed: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(_) if !status.is_success() => return Err(status_error(SERVICE, status, &body)),
            Err(source) => return Err(LookupError::Malformed { service: SERVICE, source }),
        };

        if reports_error(&parsed) {
            tracing::warn!(
                %latitude,
                %longitude,
                date,
                error = %parsed["error"],
                "forecast service reported an error"
            );
            return Err(LookupError::ForecastNotFound);
        }

        if !status.is_success() {
            return Err(status_error(SERVICE, status, &body));
        }

        let parsed: FcResponse = serde_json::from_value(parsed)
            .map_err(|source| LookupError::Malformed { service: SERVICE, source })?;

        Ok(parsed.daily.data)
    }
}
