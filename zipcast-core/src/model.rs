use serde::{Deserialize, Serialize};

/// A resolved postal code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Weather category reported for a forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Cloudy,
    Rain,
    Snow,
    Sunny,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Cloudy => "cloudy",
            Icon::Rain => "rain",
            Icon::Snow => "snow",
            Icon::Sunny => "sunny",
        }
    }

    /// Path of the bundled image for this icon.
    pub fn image(&self) -> &'static str {
        match self {
            Icon::Cloudy => "img/cloudy.png",
            Icon::Rain => "img/rain.png",
            Icon::Snow => "img/snow.png",
            Icon::Sunny => "img/sunny.png",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Icon::Sunny => "Clear",
            Icon::Rain => "Rainy",
            Icon::Snow => "Snowy",
            Icon::Cloudy => "Cloudy",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One daily record of the forecast payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Unix timestamp, seconds.
    pub time: i64,
    pub icon: Icon,
    pub temperature_high: f64,
    pub temperature_low: f64,
}

/// A successful lookup: the city name travels with its days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub city: String,
    pub days: Vec<ForecastDay>,
}
