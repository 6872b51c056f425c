use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Spacing rule file; built-in rules are used when unset.
    pub rules_file: Option<PathBuf>,

    /// Always print the fully corrected text after the report.
    #[serde(default)]
    pub show_corrected: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_rules: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".textchk.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(rules) = cli_rules {
            config.rules_file = Some(rules);
        }

        // A rules.txt dropped in the user config directory wins over the
        // built-in rules when nothing else named one.
        if config.rules_file.is_none() {
            if let Some(path) = Self::default_rules_path() {
                if path.exists() {
                    config.rules_file = Some(path);
                }
            }
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.rules_file.is_some() {
            self.rules_file = other.rules_file;
        }
        if other.show_corrected {
            self.show_corrected = true;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "textchk").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_rules_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "textchk").map(|dirs| dirs.config_dir().join("rules.txt"))
    }
}
