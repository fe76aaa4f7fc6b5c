use crate::catalog::CityCatalog;
use crate::store::PrefStore;

/// City shown on the dashboard when no preference is stored
pub const DEFAULT_CITY: &str = "waterford";

/// Favourite cities pre-checked on first load
pub const DEFAULT_FAVOURITES: [&str; 6] = [
    "cork",
    "berlin",
    "copenhagen",
    "paris",
    "new_york",
    "amsterdam",
];

/// Temperature unit selected by the user
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Parses a stored preference value, anything but "fahrenheit" reads as celsius
    ///
    /// # Arguments
    ///
    /// * 'value' - the stored preference value
    pub fn from_pref(value: &str) -> Unit {
        if value == "fahrenheit" {
            Unit::Fahrenheit
        } else {
            Unit::Celsius
        }
    }

    pub fn as_pref(&self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    /// Converts an already rounded celsius reading into the display unit
    ///
    /// # Arguments
    ///
    /// * 'celsius' - whole degree celsius value
    pub fn display(&self, celsius: i64) -> i64 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => to_fahrenheit(celsius as f64),
        }
    }
}

/// Page theme selected by the user
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parses a stored preference value, anything but "dark" reads as light
    ///
    /// # Arguments
    ///
    /// * 'value' - the stored preference value
    pub fn from_pref(value: &str) -> Theme {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_pref(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the body class carrying the theme on every page
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "is-light-mode",
            Theme::Dark => "is-dark-mode",
        }
    }
}

/// Resolved user preferences, read fresh from the store for every render pass
#[derive(Clone)]
pub struct Preferences {
    pub mode: Theme,
    pub units: Unit,
    pub default_city: String,
    pub favourites: Vec<String>,
}

/// Converts celsius to fahrenheit, rounded to a whole degree at conversion time.
/// Converting back and forth is therefore not guaranteed to be the identity.
///
/// # Arguments
///
/// * 'celsius' - temperature in celsius
pub fn to_fahrenheit(celsius: f64) -> i64 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i64
}

/// Converts fahrenheit to celsius, rounded to a whole degree at conversion time
///
/// # Arguments
///
/// * 'fahrenheit' - temperature in fahrenheit
pub fn to_celsius(fahrenheit: f64) -> i64 {
    ((fahrenheit - 32.0) * 5.0 / 9.0).round() as i64
}

/// Returns the preferences used when nothing is saved yet
pub fn default_prefs() -> Preferences {
    Preferences {
        mode: Theme::Light,
        units: Unit::Celsius,
        default_city: DEFAULT_CITY.to_string(),
        favourites: DEFAULT_FAVOURITES.iter().map(|c| c.to_string()).collect(),
    }
}

/// Resolves the current user preferences against the store, falling back to
/// defaults per key. The favourites list is derived from the per city
/// 'fave-<city>' flags, kept in catalog order.
///
/// # Arguments
///
/// * 'store' - the preference store
/// * 'catalog' - the city catalog supplying the full city id list
pub fn get_user_preferences(store: &PrefStore, catalog: &CityCatalog) -> Preferences {
    let favourites = catalog
        .list()
        .iter()
        .filter(|c| store.get(&format!("fave-{}", c.id)).is_some_and(|v| v == "true"))
        .map(|c| c.id.clone())
        .collect();

    Preferences {
        mode: store.get("theme").map_or(Theme::Light, Theme::from_pref),
        units: store.get("units").map_or(Unit::Celsius, Unit::from_pref),
        default_city: store.get("defaultCity").unwrap_or(DEFAULT_CITY).to_string(),
        favourites,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn conversion_fixed_points() {
        assert_eq!(to_fahrenheit(0.0), 32);
        assert_eq!(to_fahrenheit(100.0), 212);
        assert_eq!(to_celsius(32.0), 0);
    }

    #[test]
    fn conversion_rounds_to_whole_degrees() {
        assert_eq!(to_fahrenheit(12.0), 54);
        assert_eq!(to_celsius(54.0), 12);
        // known lossy round trip, 33F -> 1C -> 34F
        assert_eq!(to_celsius(33.0), 1);
        assert_eq!(to_fahrenheit(1.0), 34);
    }

    #[test]
    fn unit_display_converts_only_fahrenheit() {
        assert_eq!(Unit::Celsius.display(21), 21);
        assert_eq!(Unit::Fahrenheit.display(21), 70);
    }

    #[test]
    fn pref_parsing_falls_back() {
        assert!(Unit::from_pref("fahrenheit") == Unit::Fahrenheit);
        assert!(Unit::from_pref("kelvin") == Unit::Celsius);
        assert!(Theme::from_pref("dark") == Theme::Dark);
        assert!(Theme::from_pref("sepia") == Theme::Light);
        assert_eq!(Theme::Dark.body_class(), "is-dark-mode");
    }

    #[test]
    fn preferences_default_when_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(dir.path().join("p.json").to_str().unwrap()).unwrap();
        let catalog = CityCatalog::from_fixture(&HashMap::new());

        let prefs = get_user_preferences(&store, &catalog);
        assert!(prefs.mode == Theme::Light);
        assert!(prefs.units == Unit::Celsius);
        assert_eq!(prefs.default_city, "waterford");
        assert!(prefs.favourites.is_empty());
    }

    #[test]
    fn favourites_derived_from_flags_in_catalog_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PrefStore::open(dir.path().join("p.json").to_str().unwrap()).unwrap();
        let catalog = CityCatalog::from_fixture(&HashMap::new());

        store.set("fave-paris", "true").unwrap();
        store.set("fave-berlin", "true").unwrap();
        store.set("fave-cork", "false").unwrap();

        let prefs = get_user_preferences(&store, &catalog);
        assert_eq!(prefs.favourites, vec!["berlin".to_string(), "paris".to_string()]);
    }

    #[test]
    fn units_round_trip_through_reopened_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json").to_str().unwrap().to_string();
        let catalog = CityCatalog::from_fixture(&HashMap::new());

        let mut store = PrefStore::open(&path).unwrap();
        store.set("units", "fahrenheit").unwrap();
        drop(store);

        let store = PrefStore::open(&path).unwrap();
        let prefs = get_user_preferences(&store, &catalog);
        assert!(prefs.units == Unit::Fahrenheit);
    }
}
