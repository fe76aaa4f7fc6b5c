use serde::Deserialize;

/// Daily forecast as parallel arrays indexed by day offset, index 0 is today.
/// Absent arrays deserialize to empty rather than failing the whole document.
#[derive(Deserialize, Clone)]
pub struct DailyForecast {
    #[serde(default)]
    pub weather_code: Vec<u32>,
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub apparent_temperature_max: Vec<f64>,
    #[serde(default)]
    pub wind_speed_10m_max: Vec<f64>,
}

/// Hourly forecast as parallel arrays indexed by hour of the covered window
#[derive(Deserialize, Clone)]
pub struct HourlyForecast {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
    #[serde(default)]
    pub weather_code: Vec<u32>,
}

#[derive(Deserialize)]
pub struct DailyDocument {
    pub daily: DailyForecast,
}

#[derive(Deserialize)]
pub struct HourlyDocument {
    pub hourly: HourlyForecast,
}
