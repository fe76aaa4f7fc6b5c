use anyhow::Result;
use crate::catalog::CityCatalog;
use crate::errors::SettingsError;
use crate::preferences::{DEFAULT_CITY, DEFAULT_FAVOURITES, Theme, Unit};
use crate::store::PrefStore;

/// Maximum number of favourite cities allowed
pub const MAX_FAVOURITES: usize = 6;

/// One favourite checkbox, in catalog order
pub struct CityOption {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

/// Whether the favourites cap is exceeded, re-evaluated on every change
pub struct FaveLimit {
    pub too_many: bool,
}

impl FaveLimit {
    pub fn save_enabled(&self) -> bool {
        !self.too_many
    }

    pub fn warning_visible(&self) -> bool {
        self.too_many
    }
}

/// Editable model of the settings form, persisted on submit
pub struct SettingsForm {
    pub theme: Theme,
    pub units: Unit,
    pub default_city: String,
    pub cities: Vec<CityOption>,
}

impl SettingsForm {
    /// Builds the form from stored preferences. Cities with no stored flag
    /// fall back to membership in the default favourites list.
    ///
    /// # Arguments
    ///
    /// * 'catalog' - the city catalog
    /// * 'store' - the preference store
    pub fn from_store(catalog: &CityCatalog, store: &PrefStore) -> SettingsForm {
        let cities = catalog
            .list()
            .iter()
            .map(|c| {
                let checked = match store.get(&format!("fave-{}", c.id)) {
                    Some(v) => v == "true",
                    None => DEFAULT_FAVOURITES.contains(&c.id.as_str()),
                };
                CityOption { id: c.id.clone(), label: c.label.clone(), checked }
            })
            .collect();

        SettingsForm {
            theme: store.get("theme").map_or(Theme::Light, Theme::from_pref),
            units: store.get("units").map_or(Unit::Celsius, Unit::from_pref),
            default_city: store.get("defaultCity").unwrap_or(DEFAULT_CITY).to_string(),
            cities,
        }
    }

    /// Checks or unchecks the favourite box for a city
    ///
    /// # Arguments
    ///
    /// * 'city' - the city id
    /// * 'checked' - the new checkbox state
    pub fn set_favourite(&mut self, city: &str, checked: bool) {
        if let Some(option) = self.cities.iter_mut().find(|c| c.id == city) {
            option.checked = checked;
        }
    }

    /// Returns the checked favourite ids in catalog order
    pub fn favourites(&self) -> Vec<&str> {
        self.cities.iter().filter(|c| c.checked).map(|c| c.id.as_str()).collect()
    }

    /// Returns the favourites cap state driving the warning and save control
    pub fn limit_status(&self) -> FaveLimit {
        let checked = self.cities.iter().filter(|c| c.checked).count();
        FaveLimit { too_many: checked > MAX_FAVOURITES }
    }

    /// Persists theme, units, default city and one flag per city.
    /// Refused while more favourites than allowed are checked.
    ///
    /// # Arguments
    ///
    /// * 'store' - the preference store
    pub fn submit(&self, store: &mut PrefStore) -> Result<(), SettingsError> {
        if self.limit_status().too_many {
            return Err(SettingsError::TooManyFavourites(self.favourites().len()));
        }

        store.set("theme", self.theme.as_pref())?;
        store.set("units", self.units.as_pref())?;
        store.set("defaultCity", &self.default_city)?;

        for city in &self.cities {
            store.set(
                &format!("fave-{}", city.id),
                if city.checked { "true" } else { "false" },
            )?;
        }

        Ok(())
    }

    /// Writes the static default value for every preference key, including
    /// one flag per catalog city
    ///
    /// # Arguments
    ///
    /// * 'catalog' - the city catalog
    /// * 'store' - the preference store
    pub fn reset(catalog: &CityCatalog, store: &mut PrefStore) -> Result<(), SettingsError> {
        store.set("theme", Theme::Light.as_pref())?;
        store.set("units", Unit::Celsius.as_pref())?;
        store.set("defaultCity", DEFAULT_CITY)?;

        for city in catalog.list() {
            let is_default = DEFAULT_FAVOURITES.contains(&city.id.as_str());
            store.set(
                &format!("fave-{}", city.id),
                if is_default { "true" } else { "false" },
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::preferences::get_user_preferences;

    fn catalog() -> CityCatalog {
        CityCatalog::from_fixture(&HashMap::new())
    }

    fn open_store(dir: &tempfile::TempDir) -> PrefStore {
        PrefStore::open(dir.path().join("p.json").to_str().unwrap()).unwrap()
    }

    #[test]
    fn fresh_form_pre_checks_default_favourites() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let form = SettingsForm::from_store(&catalog(), &store);
        assert_eq!(form.favourites().len(), 6);
        assert!(form.favourites().contains(&"cork"));
        assert!(!form.favourites().contains(&"tromso"));
    }

    #[test]
    fn stored_flags_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);
        store.set("fave-cork", "false").unwrap();
        store.set("fave-tromso", "true").unwrap();

        let form = SettingsForm::from_store(&catalog(), &store);
        assert!(!form.favourites().contains(&"cork"));
        assert!(form.favourites().contains(&"tromso"));
    }

    #[test]
    fn limit_clears_at_six_and_trips_at_seven() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let mut form = SettingsForm::from_store(&catalog(), &store);

        let status = form.limit_status();
        assert!(status.save_enabled());
        assert!(!status.warning_visible());

        form.set_favourite("tromso", true);
        let status = form.limit_status();
        assert!(!status.save_enabled());
        assert!(status.warning_visible());

        form.set_favourite("cork", false);
        let status = form.limit_status();
        assert!(status.save_enabled());
        assert!(!status.warning_visible());
    }

    #[test]
    fn submit_refuses_over_the_cap() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);
        let mut form = SettingsForm::from_store(&catalog(), &store);
        form.set_favourite("tromso", true);

        assert!(form.submit(&mut store).is_err());
        // nothing was persisted
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn submit_persists_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);
        let mut form = SettingsForm::from_store(&catalog(), &store);
        form.theme = Theme::Dark;
        form.units = Unit::Fahrenheit;
        form.default_city = "berlin".to_string();
        form.set_favourite("cork", false);

        form.submit(&mut store).unwrap();

        assert_eq!(store.get("theme"), Some("dark"));
        assert_eq!(store.get("units"), Some("fahrenheit"));
        assert_eq!(store.get("defaultCity"), Some("berlin"));
        assert_eq!(store.get("fave-cork"), Some("false"));
        assert_eq!(store.get("fave-berlin"), Some("true"));

        let prefs = get_user_preferences(&store, &catalog());
        assert!(prefs.units == Unit::Fahrenheit);
        assert!(!prefs.favourites.contains(&"cork".to_string()));
    }

    #[test]
    fn reset_writes_defaults_for_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);
        store.set("theme", "dark").unwrap();
        store.set("fave-tromso", "true").unwrap();

        SettingsForm::reset(&catalog(), &mut store).unwrap();

        assert_eq!(store.get("theme"), Some("light"));
        assert_eq!(store.get("units"), Some("celsius"));
        assert_eq!(store.get("defaultCity"), Some("waterford"));
        assert_eq!(store.get("fave-tromso"), Some("false"));
        assert_eq!(store.get("fave-cork"), Some("true"));
    }
}
