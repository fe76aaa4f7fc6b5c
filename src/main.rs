use std::{env, fs};
use std::path::Path;
use anyhow::Result;
use chrono::Local;
use log::{error, info};
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::catalog::CityCatalog;
use crate::codes::CodeLookup;
use crate::config::{load_config, Config};
use crate::errors::{PageError, WeatherDashError};
use crate::pages::{render_city, render_dashboard, render_settings};
use crate::preferences::{Theme, Unit};
use crate::settings::SettingsForm;
use crate::store::PrefStore;

mod catalog;
mod codes;
mod config;
mod errors;
mod html;
mod models;
mod pages;
mod preferences;
mod settings;
mod store;
mod views;

fn main() {
    let config_path = env::var("WEATHERDASH_CONFIG").unwrap_or("weatherdash.toml".to_string());

    let config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            println!("Error loading configuration: {}", e);
            return;
        }
    };

    if let Err(e) = setup_logger(&config) {
        println!("Error setting up logging: {}", e);
        return;
    }

    info!("weatherdash version: {}", env!("CARGO_PKG_VERSION"));

    let args = env::args().skip(1).collect::<Vec<String>>();
    if let Err(e) = run(&config, &args) {
        error!("{}", e);
    }
}

/// Applies any preference subcommand and renders the full site
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'args' - command line arguments after the binary name
fn run(config: &Config, args: &[String]) -> Result<(), WeatherDashError> {
    let catalog = CityCatalog::load(&config.files.fixture_file)?;
    let codes = CodeLookup::new();
    let mut store = PrefStore::open(&config.files.store_file)?;

    match args.first().map(|a| a.as_str()) {
        Some("prefs") => {
            apply_prefs(&args[1..], &catalog, &mut store)?;
            info!("preferences saved");
        }
        Some("reset") => {
            SettingsForm::reset(&catalog, &mut store)?;
            info!("preferences reset to defaults");
        }
        Some("render") | None => {}
        Some(other) => {
            return Err(WeatherDashError(format!("unknown command: {}", other)));
        }
    }

    render_site(config, &catalog, &codes, &store)?;

    Ok(())
}

/// Applies key=value preference edits through the settings form and submits
///
/// # Arguments
///
/// * 'pairs' - edits as "theme=dark", "units=celsius", "defaultCity=<id>"
///   or "fave-<id>=true|false"
/// * 'catalog' - the city catalog
/// * 'store' - the preference store
fn apply_prefs(
    pairs: &[String],
    catalog: &CityCatalog,
    store: &mut PrefStore,
) -> Result<(), WeatherDashError> {
    let mut form = SettingsForm::from_store(catalog, store);

    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(WeatherDashError(format!("malformed preference: {}", pair)));
        };

        match key {
            "theme" => form.theme = Theme::from_pref(value),
            "units" => form.units = Unit::from_pref(value),
            "defaultCity" => form.default_city = value.to_string(),
            _ => {
                if let Some(city) = key.strip_prefix("fave-") {
                    form.set_favourite(city, value == "true");
                } else {
                    return Err(WeatherDashError(format!("unknown preference: {}", key)));
                }
            }
        }
    }

    form.submit(store)?;

    Ok(())
}

/// Writes the dashboard, settings and one page per catalog city
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'catalog' - the city catalog
/// * 'codes' - the weather code lookup
/// * 'store' - the preference store
fn render_site(
    config: &Config,
    catalog: &CityCatalog,
    codes: &CodeLookup,
    store: &PrefStore,
) -> Result<(), PageError> {
    let now = Local::now();
    let images = &config.files.images_path;
    let out = Path::new(&config.files.output_dir);
    fs::create_dir_all(out.join("city"))?;

    fs::write(
        out.join("index.html"),
        render_dashboard(catalog, codes, store, now, images),
    )?;
    fs::write(out.join("settings.html"), render_settings(catalog, store))?;

    for entry in catalog.list() {
        let query = format!("name={}", entry.id);
        let html = render_city(Some(&query), catalog, codes, store, now, images);
        fs::write(out.join("city").join(format!("{}.html", entry.id)), html)?;
    }

    info!(
        "rendered {} pages to {}",
        catalog.list().len() + 2,
        config.files.output_dir
    );

    Ok(())
}

/// Sets up the log4rs logger from the general configuration
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn setup_logger(config: &Config) -> Result<()> {
    let pattern = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build(&config.general.log_path)?;

    let mut builder = log4rs::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if config.general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(pattern)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = builder.build(root.build(config.general.log_level))?;
    log4rs::init_config(log_config)?;

    Ok(())
}
