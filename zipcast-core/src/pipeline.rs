//! Form submission: validate, resolve, fetch, render.

use tokio::sync::Mutex;

use crate::{
    Config, Forecast, LookupError, Page,
    date::current_date,
    provider::{ForecastSource, LocationSource, sources_from_config},
    validate::is_valid_postal_code,
};

/// Result of one form submission.
#[derive(Debug)]
pub enum Submission {
    /// A forecast was rendered into the page.
    Rendered,
    /// The page now shows this error.
    Failed(LookupError),
    /// Another submission was still in flight; nothing was done.
    Busy,
}

#[derive(Debug)]
pub struct Pipeline {
    geo: Box<dyn LocationSource>,
    forecast: Box<dyn ForecastSource>,
    page: Mutex<Page>,
    /// Held for the whole of a submission.
    in_flight: Mutex<()>,
}

impl Pipeline {
    pub fn new(geo: Box<dyn LocationSource>, forecast: Box<dyn ForecastSource>) -> Self {
        Self { geo, forecast, page: Mutex::new(Page::default()), in_flight: Mutex::new(()) }
    }

    pub fn from_config(config: &Config) -> Self {
        let (geo, forecast) = sources_from_config(config);
        Self::new(geo, forecast)
    }

    /// Snapshot of the current display state.
    pub async fn page(&self) -> Page {
        self.page.lock().await.clone()
    }

    /// Run one submission of `input` and render its outcome into the page.
    ///
    /// A submission arriving while another is pending is ignored and reported
    /// as [`Submission::Busy`]. The page itself is only locked while it is
    /// written, so reading it never makes a submission busy.
    pub async fn submit(&self, input: &str) -> Submission {
        let Ok(_in_flight) = self.in_flight.try_lock() else {
            tracing::debug!(input, "submission ignored, another one is in flight");
            return Submission::Busy;
        };

        let result = self.run(input, Some(&self.page)).await;

        let mut page = self.page.lock().await;
        match result {
            Ok(forecast) => {
                page.render_forecast(&forecast.city, &forecast.days);
                tracing::info!(city = %forecast.city, days = forecast.days.len(), "forecast rendered");
                Submission::Rendered
            }
            Err(err) => {
                page.render_error(&err.to_string());
                Submission::Failed(err)
            }
        }
    }

    /// Resolve `input` to a forecast without touching the page.
    pub async fn lookup(&self, input: &str) -> Result<Forecast, LookupError> {
        self.run(input, None).await
    }

    async fn run(&self, input: &str, page: Option<&Mutex<Page>>) -> Result<Forecast, LookupError> {
        if !is_valid_postal_code(input) {
            return Err(LookupError::InvalidInput);
        }

        let location = self.geo.resolve_location(input).await?;
        if let Some(page) = page {
            page.lock().await.hide_error();
        }

        let date = current_date();
        let days = self
            .forecast
            .fetch_forecast(location.latitude, location.longitude, &date)
            .await?;

        Ok(Forecast { city: location.city, days })
    }
}
