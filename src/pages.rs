use chrono::{DateTime, Local};
use log::error;
use crate::catalog::CityCatalog;
use crate::codes::CodeLookup;
use crate::html::{
    apply_city_tiles, apply_hourly, apply_seven_day, apply_summary, city_shell,
    dashboard_shell, settings_shell, Document,
};
use crate::preferences::get_user_preferences;
use crate::settings::SettingsForm;
use crate::store::PrefStore;
use crate::views::{build_city_tiles, build_hourly, build_seven_day, build_summary};

/// Extracts the city id from a "name=<cityId>" query string
///
/// # Arguments
///
/// * 'query' - the raw query string, if any
pub fn city_from_query(query: Option<&str>) -> Option<String> {
    query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "name" && !value.is_empty()).then(|| value.to_string())
    })
}

/// Renders the dashboard page for the preferred city. When the city has no
/// daily or hourly data the shell is emitted with no content at all.
///
/// # Arguments
///
/// * 'catalog' - the city catalog
/// * 'codes' - the weather code lookup
/// * 'store' - the preference store
/// * 'now' - the current wall-clock time
/// * 'images_path' - URL prefix for icon images
pub fn render_dashboard(
    catalog: &CityCatalog,
    codes: &CodeLookup,
    store: &PrefStore,
    now: DateTime<Local>,
    images_path: &str,
) -> String {
    let prefs = get_user_preferences(store, catalog);
    let city = prefs.default_city.clone();
    let mut doc = dashboard_shell(&prefs);

    if let (Some(daily), Some(hourly)) = (catalog.get_daily(&city), catalog.get_hourly(&city)) {
        if let Some(summary) = build_summary(&city, catalog, codes, &prefs) {
            apply_summary(&mut doc, &summary, &prefs, images_path);
        }

        let hour_slots = build_hourly(hourly, codes, &prefs, now);
        apply_hourly(&mut doc, "hourly-forecast", &hour_slots, &prefs, images_path);

        let day_slots = build_seven_day(daily, codes, &prefs, now);
        apply_seven_day(&mut doc, "seven-day-forecast", &day_slots, &prefs, images_path);

        let tiles = build_city_tiles(catalog, codes, &prefs);
        apply_city_tiles(&mut doc, "city-tiles", &tiles, &prefs, images_path);
    }

    doc.to_html()
}

/// Renders the city detail page. The city comes from the "?name=" query
/// parameter, falling back to the default city preference. An unknown city
/// gets a developer log line and the bare shell.
///
/// # Arguments
///
/// * 'query' - the raw query string, if any
/// * 'catalog' - the city catalog
/// * 'codes' - the weather code lookup
/// * 'store' - the preference store
/// * 'now' - the current wall-clock time
/// * 'images_path' - URL prefix for icon images
pub fn render_city(
    query: Option<&str>,
    catalog: &CityCatalog,
    codes: &CodeLookup,
    store: &PrefStore,
    now: DateTime<Local>,
    images_path: &str,
) -> String {
    let prefs = get_user_preferences(store, catalog);
    let city = city_from_query(query).unwrap_or_else(|| prefs.default_city.clone());
    let mut doc = city_shell(&prefs);

    match (catalog.get_daily(&city), catalog.get_hourly(&city)) {
        (Some(daily), Some(hourly)) => {
            if let Some(summary) = build_summary(&city, catalog, codes, &prefs) {
                apply_summary(&mut doc, &summary, &prefs, images_path);
            }

            let hour_slots = build_hourly(hourly, codes, &prefs, now);
            apply_hourly(&mut doc, "hourly-forecast", &hour_slots, &prefs, images_path);

            let day_slots = build_seven_day(daily, codes, &prefs, now);
            apply_seven_day(&mut doc, "seven-day-forecast", &day_slots, &prefs, images_path);
        }
        _ => error!("city data not found: {}", city),
    }

    doc.to_html()
}

/// Renders the settings page with the form prefilled from the store
///
/// # Arguments
///
/// * 'catalog' - the city catalog
/// * 'store' - the preference store
pub fn render_settings(catalog: &CityCatalog, store: &PrefStore) -> String {
    let prefs = get_user_preferences(store, catalog);
    let form = SettingsForm::from_store(catalog, store);
    let mut doc = settings_shell(&prefs);

    apply_settings_form(&mut doc, &form);

    doc.to_html()
}

fn apply_settings_form(doc: &mut Document, form: &SettingsForm) {
    doc.clear("theme-options");
    for theme in ["light", "dark"] {
        let checked = if form.theme.as_pref() == theme { " checked" } else { "" };
        doc.append_block(
            "theme-options",
            format!(
                "<label class=\"radio\">\
                 <input type=\"radio\" name=\"theme\" value=\"{}\"{}> {}</label>",
                theme, checked, capitalize(theme)
            ),
        );
    }

    doc.clear("units-options");
    for units in ["celsius", "fahrenheit"] {
        let checked = if form.units.as_pref() == units { " checked" } else { "" };
        doc.append_block(
            "units-options",
            format!(
                "<label class=\"radio\">\
                 <input type=\"radio\" name=\"units\" value=\"{}\"{}> {}</label>",
                units, checked, capitalize(units)
            ),
        );
    }

    doc.clear("default-city");
    for city in &form.cities {
        let selected = if form.default_city == city.id { " selected" } else { "" };
        doc.append_block(
            "default-city",
            format!(
                "<option value=\"{}\"{}>{}</option>",
                city.id, selected, city.label.to_uppercase()
            ),
        );
    }

    doc.clear("favourite-city-list");
    for city in &form.cities {
        let checked = if city.checked { " checked" } else { "" };
        doc.append_block(
            "favourite-city-list",
            format!(
                "<div class=\"control\"><label class=\"checkbox has-text-white\">\
                 <input type=\"checkbox\" name=\"favourites\" value=\"{}\"{}> {}</label></div>",
                city.id, checked, city.label
            ),
        );
    }

    let limit = form.limit_status();
    if limit.warning_visible() {
        doc.set_text(
            "fave-warning",
            "You can pick at most 6 favourite cities.",
        );
    }

    doc.clear("save-btn");
    doc.append_block(
        "save-btn",
        format!(
            "<button type=\"submit\" class=\"button is-primary\"{}>Save</button>",
            if limit.save_enabled() { "" } else { " disabled" }
        ),
    );
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
