use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct Files {
    pub fixture_file: String,
    pub store_file: String,
    pub output_dir: String,
    #[serde(default = "default_images_path")]
    pub images_path: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub files: Files,
    pub general: General,
}

fn default_images_path() -> String {
    "/images".to_string()
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    if config.files.output_dir.is_empty() {
        return Err(ConfigError::from("output_dir must not be empty"))
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_full_config() {
        let toml = r#"
            [files]
            fixture_file = "weather_data.json"
            store_file = "prefs.json"
            output_dir = "site"

            [general]
            log_path = "weatherdash.log"
            log_level = "info"
            log_to_stdout = true
        "#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.files.fixture_file, "weather_data.json");
        assert_eq!(config.files.images_path, "/images");
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(config.general.log_to_stdout);
    }

    #[test]
    fn rejects_empty_output_dir() {
        let toml = r#"
            [files]
            fixture_file = "weather_data.json"
            store_file = "prefs.json"
            output_dir = ""

            [general]
            log_path = "weatherdash.log"
            log_level = "warn"
            log_to_stdout = false
        "#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        assert!(load_config(file.path().to_str().unwrap()).is_err());
    }
}
