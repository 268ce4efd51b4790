//! Configuration loading for the contact directory.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at `~/.config/contact-directory/config.toml`
//! (platform equivalent via `directories`).

use config::{Config, Environment, File};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ContactsError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// JSON file of contacts loaded into the store at startup
    #[serde(default = "default_seed_path")]
    pub seed_path: String,

    /// Print contacts as JSON instead of one line per contact
    #[serde(default)]
    pub json_output: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed_path() -> String {
    ProjectDirs::from("", "", "contact-directory")
        .map(|p| p.data_local_dir().join("contacts.json"))
        .unwrap_or_else(|| PathBuf::from("./contacts.json"))
        .to_string_lossy()
        .to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            seed_path: default_seed_path(),
            json_output: false,
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/contact-directory/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (CONTACTS_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, ContactsError> {
        let config_dir = ProjectDirs::from("", "", "contact-directory")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        Self::load_layers(&config_dir.join("config"), cli_config_path, None)
    }

    /// Build settings from an explicit default config path.
    ///
    /// `env` replaces the process environment when given.
    fn load_layers(
        default_config_path: &Path,
        cli_config_path: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ContactsError> {
        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())?
            .set_default("seed_path", default_seed_path())?
            .set_default("json_output", false)?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // CONTACTS_LOG_LEVEL, CONTACTS_SEED_PATH, CONTACTS_JSON_OUTPUT
        builder = builder.add_source(
            Environment::with_prefix("CONTACTS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that cannot be used.
    pub fn validate(&self) -> Result<(), ContactsError> {
        if self.log_level.trim().is_empty() {
            return Err(ContactsError::InvalidSetting(
                "log_level must not be empty".to_string(),
            ));
        }
        if self.seed_path.trim().is_empty() {
            return Err(ContactsError::InvalidSetting(
                "seed_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Expand `~/` in seed_path to the home directory
    pub fn expanded_seed_path(&self) -> PathBuf {
        if let Some(rest) = self.seed_path.strip_prefix("~/") {
            if let Some(dirs) = BaseDirs::new() {
                return dirs.home_dir().join(rest);
            }
        }
        PathBuf::from(&self.seed_path)
    }
}
