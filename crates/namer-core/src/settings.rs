use crate::error::{NamerError, Result};
use crate::generator::{DEFAULT_MAX_SYLLABLES, MIN_MAX_SYLLABLES};
use crate::theme::ThemeVariant;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "NAMER_";

/// Read-only startup settings. Nothing is ever written back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemeVariant,
    /// Fixed seed for a reproducible feed; random when unset.
    pub seed: Option<u64>,
    pub max_syllables: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            seed: None,
            max_syllables: DEFAULT_MAX_SYLLABLES,
        }
    }
}

impl Settings {
    /// Defaults, then the user's config file, then `NAMER_*` variables.
    pub fn new() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).only(&["theme", "seed", "max_syllables"]))
            .extract()
            .map_err(Box::new)?;
        settings.is_valid()?;
        Ok(settings)
    }

    pub fn is_valid(&self) -> Result<()> {
        if self.max_syllables < MIN_MAX_SYLLABLES {
            return Err(NamerError::InvalidSetting {
                key: "max_syllables",
                reason: format!(
                    "{} is below {}, no word pair can be that short",
                    self.max_syllables, MIN_MAX_SYLLABLES
                ),
            });
        }
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "namer")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}
