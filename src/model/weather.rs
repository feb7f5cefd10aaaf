use serde::{Deserialize, Serialize};

/// A fetched weather observation for a single location.
///
/// Produced at the fetch boundary by whatever provider the UI talks to and
/// carried through the store unchanged. Absence of data is represented as
/// `Option<WeatherData>::None`, not as a sentinel value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Resolved location name, e.g. `"London"`.
    pub city: String,
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Short condition text, e.g. `"light rain"`.
    pub condition: String,
    /// Relative humidity in percent, when the provider reports it.
    #[serde(default)]
    pub humidity: Option<u8>,
    /// Wind speed in km/h, when the provider reports it.
    #[serde(default)]
    pub wind_kph: Option<f64>,
}
