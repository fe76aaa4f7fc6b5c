use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;

#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Document(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "StoreError::Io: {}", e),
            StoreError::Document(e) => write!(f, "StoreError::Document: {}", e),
        }
    }
}
impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}
impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Document(e.to_string())
    }
}

#[derive(Error, Debug)]
#[error("error loading city weather fixtures: {0}")]
pub struct CatalogError(pub String);
impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> CatalogError {
        CatalogError(format!("fixture file error: {}", e))
    }
}
impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> CatalogError {
        CatalogError(format!("fixture document error: {}", e))
    }
}

#[derive(Debug)]
pub enum SettingsError {
    TooManyFavourites(usize),
    Store(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::TooManyFavourites(n) => {
                write!(f, "SettingsError::TooManyFavourites: {} cities checked", n)
            }
            SettingsError::Store(e) => write!(f, "SettingsError::Store: {}", e),
        }
    }
}
impl From<StoreError> for SettingsError {
    fn from(e: StoreError) -> Self {
        SettingsError::Store(e.to_string())
    }
}

pub struct PageError(pub String);

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PageError: {}", self.0)
    }
}
impl From<std::io::Error> for PageError {
    fn from(e: std::io::Error) -> Self {
        PageError(e.to_string())
    }
}

pub struct WeatherDashError(pub String);

impl fmt::Display for WeatherDashError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WeatherDashError: {}", self.0)
    }
}
impl From<CatalogError> for WeatherDashError {
    fn from(e: CatalogError) -> Self {
        WeatherDashError(e.to_string())
    }
}
impl From<StoreError> for WeatherDashError {
    fn from(e: StoreError) -> Self {
        WeatherDashError(e.to_string())
    }
}
impl From<SettingsError> for WeatherDashError {
    fn from(e: SettingsError) -> Self {
        WeatherDashError(e.to_string())
    }
}
impl From<PageError> for WeatherDashError {
    fn from(e: PageError) -> Self {
        WeatherDashError(e.to_string())
    }
}
