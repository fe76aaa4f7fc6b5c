use chrono::{DateTime, Local, TimeDelta, Timelike};
use crate::catalog::CityCatalog;
use crate::codes::CodeLookup;
use crate::models::fixture::{DailyForecast, HourlyForecast};
use crate::preferences::Preferences;

/// Display values for today's weather summary
pub struct SummaryView {
    pub city_label: String,
    pub temperature: i64,
    pub real_feel: i64,
    pub description: String,
    pub icon: String,
    pub wind_kmh: i64,
}

/// One block of the six hour preview
pub struct HourSlot {
    pub hour: u32,
    pub temperature: i64,
    pub icon: String,
}

/// One block of the seven day forecast
pub struct DaySlot {
    pub label: String,
    pub temp_max: i64,
    pub temp_min: i64,
    pub icon: String,
}

/// One dashboard tile for a favourite city
pub struct TileView {
    pub city: String,
    pub label: String,
    pub temperature: i64,
    pub icon: String,
    pub href: String,
}

/// Builds today's summary for a city. Returns None, and thereby causes no
/// page writes, when the city is unknown or any of the index 0 values is
/// missing. Temperatures are converted per the units preference, wind stays
/// in km/h.
///
/// # Arguments
///
/// * 'city' - the city id
/// * 'catalog' - the city catalog
/// * 'codes' - the weather code lookup
/// * 'prefs' - resolved user preferences
pub fn build_summary(
    city: &str,
    catalog: &CityCatalog,
    codes: &CodeLookup,
    prefs: &Preferences,
) -> Option<SummaryView> {
    let summary = catalog.get_today_summary(city)?;

    let city_label = catalog
        .get_by_city(city)
        .map_or_else(|| city.to_uppercase(), |c| c.label.to_uppercase());

    let code = summary.weather_code?;
    let temp_c = summary.temp_max?.round() as i64;
    let feel_c = summary.feel_max?.round() as i64;
    let wind_kmh = summary.wind_max?.round() as i64;

    Some(SummaryView {
        city_label,
        temperature: prefs.units.display(temp_c),
        real_feel: prefs.units.display(feel_c),
        description: codes.description(code).to_string(),
        icon: codes.icon(code).to_string(),
        wind_kmh,
    })
}

/// Builds the next six hours of forecast slots. The forecast index is the
/// wall-clock hour plus the offset, deliberately not wrapped past the end of
/// the day's data window. Hours past the end of the arrays are skipped.
///
/// # Arguments
///
/// * 'hourly' - the hourly forecast arrays
/// * 'codes' - the weather code lookup
/// * 'prefs' - resolved user preferences
/// * 'now' - the current wall-clock time
pub fn build_hourly(
    hourly: &HourlyForecast,
    codes: &CodeLookup,
    prefs: &Preferences,
    now: DateTime<Local>,
) -> Vec<HourSlot> {
    let current_hour = now.hour() as usize;
    let mut slots = Vec::with_capacity(6);

    for i in 0..6 {
        let index = current_hour + i;
        let hour = (now + TimeDelta::hours(i as i64)).hour();

        let (Some(temp), Some(code)) =
            (hourly.temperature_2m.get(index), hourly.weather_code.get(index))
        else {
            continue;
        };

        slots.push(HourSlot {
            hour,
            temperature: prefs.units.display(temp.round() as i64),
            icon: codes.icon(*code).to_string(),
        });
    }

    slots
}

/// Builds the seven day forecast slots labelled Today, Tomorrow and then
/// weekday names. Days missing from the arrays are skipped silently.
///
/// # Arguments
///
/// * 'daily' - the daily forecast arrays
/// * 'codes' - the weather code lookup
/// * 'prefs' - resolved user preferences
/// * 'now' - the current wall-clock time
pub fn build_seven_day(
    daily: &DailyForecast,
    codes: &CodeLookup,
    prefs: &Preferences,
    now: DateTime<Local>,
) -> Vec<DaySlot> {
    let mut slots = Vec::with_capacity(7);

    for i in 0..=6 {
        let label = match i {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => (now + TimeDelta::days(i as i64)).format("%A").to_string(),
        };

        let (Some(max), Some(min), Some(code)) = (
            daily.temperature_2m_max.get(i),
            daily.temperature_2m_min.get(i),
            daily.weather_code.get(i),
        ) else {
            continue;
        };

        slots.push(DaySlot {
            label,
            temp_max: prefs.units.display(max.round() as i64),
            temp_min: prefs.units.display(min.round() as i64),
            icon: codes.icon(*code).to_string(),
        });
    }

    slots
}

/// Builds one tile per favourite city with today's high and icon.
/// Favourites without catalog data are skipped.
///
/// # Arguments
///
/// * 'catalog' - the city catalog
/// * 'codes' - the weather code lookup
/// * 'prefs' - resolved user preferences
pub fn build_city_tiles(
    catalog: &CityCatalog,
    codes: &CodeLookup,
    prefs: &Preferences,
) -> Vec<TileView> {
    prefs
        .favourites
        .iter()
        .filter_map(|city| {
            let entry = catalog.get_by_city(city)?;
            let summary = catalog.get_today_summary(city)?;

            let code = summary.weather_code?;
            let temp_c = summary.temp_max?.round() as i64;

            Some(TileView {
                city: city.clone(),
                label: entry.label.to_uppercase(),
                temperature: prefs.units.display(temp_c),
                icon: codes.icon(code).to_string(),
                href: format!("/city/?name={}", city),
            })
        })
        .collect()
}
