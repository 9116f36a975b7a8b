use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::{Location, LookupError};

use super::{LocationSource, get_body, status_error};

const SERVICE: &str = "geocoding";

/// Geocoding endpoint client: `GET <base_url>?zip_code=<postal code>`.
#[derive(Debug, Clone)]
pub struct GeoClient {
    base_url: String,
    http: Client,
}

impl GeoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), http }
    }
}

#[async_trait]
impl LocationSource for GeoClient {
    async fn resolve_location(&self, postal_code: &str) -> Result<Location, LookupError> {
        let (status, body) =
            get_body(&self.http, SERVICE, &self.base_url, &[("zip_code", postal_code)]).await?;

        let parsed: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(_) if !status.is_success() => return Err(status_error(SERVICE, status, &body)),
            Err(source) => return Err(LookupError::Malformed { service: SERVICE, source }),
        };

        // the service answers an unknown code with `{}`
        if parsed.as_object().is_some_and(|o| o.is_empty()) {
            tracing::warn!(postal_code, "no location found");
            return Err(LookupError::LocationNotFound);
        }

        if !status.is_success() {
            return Err(status_error(SERVICE, status, &body));
        }

        let location: Location = serde_json::from_value(parsed)
            .map_err(|source| LookupError::Malformed { service: SERVICE, source })?;

        tracing::debug!(postal_code, city = %location.city, "location resolved");
        Ok(location)
    }
}
