// Import necessary libraries and modules for file I/O and serialization.
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{
    api::DEFAULT_API_URL,
    encounter::NgLevel,
    error::{AppError, Result},
};

/// Environment variable that overrides the configured service URL.
pub const API_URL_ENV: &str = "ELDEN_SCOUT_API_URL";

// Application settings, persisted as JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,       // Root URL of the encounter data service.
    pub default_ng_level: NgLevel,  // NG level selected when the app starts.
    pub debug_mode: bool,           // Debug logging and the debug status line.
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_base_url: DEFAULT_API_URL.to_string(),
            default_ng_level: NgLevel::Ng,
            debug_mode: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the settings file from the data directory, falling back to defaults
    /// when it is missing or unreadable. The environment override is applied last.
    /// The load error is handed back so it can be logged once the logger is up.
    pub fn load() -> (Self, Option<AppError>) {
        let (mut settings, load_error) = Self::load_or_default(settings_path());
        if let Ok(url) = std::env::var(API_URL_ENV) {
            settings.apply_url_override(&url);
        }
        (settings, load_error)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> (Self, Option<AppError>) {
        match Self::load_settings_from_file(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    // Save current settings to the default file path.
    pub fn save(&self) -> Result<()> {
        self.save_to_file(settings_path())
    }

    pub fn apply_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.api_base_url = url.to_string();
        }
    }

    // Load settings from a specified file path.
    pub fn load_settings_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?; // Read settings from file.
        let settings = serde_json::from_str(&data)?; // Deserialize JSON data into settings.
        Ok(settings)
    }

    // Save current settings to a specified file path.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?; // Serialize settings as pretty JSON.
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?; // Create the directory if it doesn't exist.
        }
        let mut file = fs::File::create(path)?; // Create or overwrite the file.
        file.write_all(data.as_bytes())?; // Write the serialized data to the file.
        Ok(())
    }
}

/// `~/elden_scout/data`, or `./data` when no home directory is known.
pub fn get_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join("elden_scout").join("data"),
        None => PathBuf::from("data"),
    }
}

pub fn settings_path() -> PathBuf {
    get_data_dir().join("settings.json")
}
