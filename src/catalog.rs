use std::collections::HashMap;
use std::fs;
use serde_json::Value;
use crate::errors::CatalogError;
use crate::models::fixture::{DailyDocument, DailyForecast, HourlyDocument, HourlyForecast};

/// Supported cities in display order
const CITY_LIST: [(&str, &str); 9] = [
    ("berlin", "Berlin"),
    ("cork", "Cork"),
    ("copenhagen", "Copenhagen"),
    ("paris", "Paris"),
    ("waterford", "Waterford"),
    ("amsterdam", "Amsterdam"),
    ("new_york", "New York"),
    ("san_francisco", "San Francisco"),
    ("tromso", "Tromsø"),
];

/// One catalog entry, immutable after construction from the fixture
pub struct CityEntry {
    pub id: String,
    pub label: String,
    pub daily: Option<DailyForecast>,
    pub hourly: Option<HourlyForecast>,
}

/// Today's headline values, each field independently absent when the
/// underlying forecast array is missing or empty
pub struct TodaySummary {
    pub weather_code: Option<u32>,
    pub temp_max: Option<f64>,
    pub feel_max: Option<f64>,
    pub wind_max: Option<f64>,
}

/// Static catalog of cities and their forecast data
pub struct CityCatalog {
    entries: Vec<CityEntry>,
}

impl CityCatalog {
    /// Loads the catalog from the keyed fixture file.
    /// Cities missing from the fixture keep their catalog slot with no data.
    ///
    /// # Arguments
    ///
    /// * 'fixture_file' - path to the weather data fixture file
    pub fn load(fixture_file: &str) -> Result<CityCatalog, CatalogError> {
        let json = fs::read_to_string(fixture_file)?;
        let data: HashMap<String, Value> = serde_json::from_str(&json)?;

        Ok(Self::from_fixture(&data))
    }

    /// Builds the catalog from an in-memory fixture object keyed
    /// "<city>_daily" / "<city>_hourly"
    ///
    /// # Arguments
    ///
    /// * 'data' - the fixture object
    pub fn from_fixture(data: &HashMap<String, Value>) -> CityCatalog {
        let entries = CITY_LIST
            .iter()
            .map(|(id, label)| {
                let daily = data
                    .get(&format!("{}_daily", id))
                    .and_then(|v| serde_json::from_value::<DailyDocument>(v.clone()).ok())
                    .map(|d| d.daily);
                let hourly = data
                    .get(&format!("{}_hourly", id))
                    .and_then(|v| serde_json::from_value::<HourlyDocument>(v.clone()).ok())
                    .map(|h| h.hourly);

                CityEntry {
                    id: id.to_string(),
                    label: label.to_string(),
                    daily,
                    hourly,
                }
            })
            .collect();

        CityCatalog { entries }
    }

    /// Returns all entries in catalog order
    pub fn list(&self) -> &[CityEntry] {
        &self.entries
    }

    /// Returns the full entry for a city, or None for an unknown id
    ///
    /// # Arguments
    ///
    /// * 'city' - the city id
    pub fn get_by_city(&self, city: &str) -> Option<&CityEntry> {
        self.entries.iter().find(|entry| entry.id == city)
    }

    /// Returns the daily forecast for a city
    ///
    /// # Arguments
    ///
    /// * 'city' - the city id
    pub fn get_daily(&self, city: &str) -> Option<&DailyForecast> {
        self.get_by_city(city)?.daily.as_ref()
    }

    /// Returns the hourly forecast for a city
    ///
    /// # Arguments
    ///
    /// * 'city' - the city id
    pub fn get_hourly(&self, city: &str) -> Option<&HourlyForecast> {
        self.get_by_city(city)?.hourly.as_ref()
    }

    /// Returns today's summary values for a city, or None when the city is
    /// unknown or has no daily data at all
    ///
    /// # Arguments
    ///
    /// * 'city' - the city id
    pub fn get_today_summary(&self, city: &str) -> Option<TodaySummary> {
        let daily = self.get_daily(city)?;

        Some(TodaySummary {
            weather_code: daily.weather_code.first().copied(),
            temp_max: daily.temperature_2m_max.first().copied(),
            feel_max: daily.apparent_temperature_max.first().copied(),
            wind_max: daily.wind_speed_10m_max.first().copied(),
        })
    }
}
