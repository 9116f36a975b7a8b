//! Core library for the `zipcast` forecast form.
//!
//! This crate defines:
//! - Postal code validation and date display formatting
//! - Clients for the geocoding and forecast services, behind async traits
//! - The submission pipeline and the page it renders into
//! - Configuration of the service endpoints
//!
//! It is used by `zipcast-cli`, but the pipeline works with any
//! [`LocationSource`] / [`ForecastSource`] pair.

pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod render;
pub mod validate;

pub use config::Config;
pub use error::{ErrorKind, LookupError};
pub use model::{Forecast, ForecastDay, Icon, Location};
pub use pipeline::{Pipeline, Submission};
pub use provider::{ForecastSource, LocationSource};
pub use render::Page;
