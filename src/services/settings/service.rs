use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Location of `config.toml` in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "ClinicSchedule", "ClinicSchedule")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings service backed by the platform config directory.
    pub fn from_default_location() -> Result<Self> {
        let path = default_config_path()
            .ok_or_else(|| anyhow!("Could not determine a configuration directory"))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, writing the defaults out when no file exists yet.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            let settings = Settings::default();
            self.save(&settings)?;
            log::info!("Created default settings at {:?}", self.path);
            return Ok(settings);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {:?}", self.path))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {:?}: {}", self.path, e))?;

        log::debug!("Loaded settings from {:?}", self.path);
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings: {:#}", err);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {:?}", self.path))?;

        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }
}
