//! Configuration module for linepick
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. an optional TOML file at `<config dir>/linepick/config.toml`
//! 2. `LINEPICK_*` environment variables (`LINEPICK_SELECT_ONE=true`)
//! 3. command-line flags
//!
//! The file is never created automatically. Missing keys take defaults.

use crate::cli::Cli;
use crate::matcher::{Delimiter, MatchMode, MatchOptions, MatcherError, Tokenizer};
use crate::session::SessionOptions;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "LINEPICK";

/// Effective picker settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PickerSettings {
    /// Text shown before the query
    pub prompt: String,

    /// Select automatically once exactly one line matches
    pub select_one: bool,

    /// Contains or word-boundary matching
    pub match_mode: MatchMode,

    /// Order matches by edit distance
    pub ranked: bool,

    /// Single character separating query tokens
    pub delimiter: String,

    /// Regex separating query tokens, takes precedence over `delimiter`
    pub delimiter_regex: Option<String>,

    /// File that receives logs; no logging without one
    pub log_file: Option<PathBuf>,

    /// Log level filter
    pub log_level: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            select_one: false,
            match_mode: MatchMode::default(),
            ranked: false,
            delimiter: " ".to_string(),
            delimiter_regex: None,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl PickerSettings {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("linepick").join("config.toml"))
    }

    /// Load settings from the default config file and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from `path` (if it exists) and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an environment value cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env.try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Apply command-line overrides
    pub fn merge_cli(&mut self, cli: &Cli) {
        if let Some(prompt) = &cli.prompt {
            self.prompt.clone_from(prompt);
        }
        if cli.select_one {
            self.select_one = true;
        }
        if cli.word_boundary {
            self.match_mode = MatchMode::Word;
        }
        if cli.rank {
            self.ranked = true;
        }
        if let Some(delimiter) = &cli.delimiter {
            self.delimiter.clone_from(delimiter);
            self.delimiter_regex = None;
        }
        if let Some(pattern) = &cli.delimiter_regex {
            self.delimiter_regex = Some(pattern.clone());
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log_level.clone_from(level);
        }
    }

    /// Build the match options these settings describe
    ///
    /// # Errors
    ///
    /// Returns `MatcherError` if the delimiter is not a single character or
    /// the delimiter regex is invalid or can match the empty string.
    pub fn match_options(&self) -> Result<MatchOptions, MatcherError> {
        let delimiter = match &self.delimiter_regex {
            Some(pattern) => Delimiter::pattern(pattern)?,
            None => Delimiter::literal(&self.delimiter)?,
        };

        Ok(MatchOptions::default()
            .with_mode(self.match_mode)
            .with_ranked(self.ranked)
            .with_tokenizer(Tokenizer::new(delimiter)))
    }

    /// Build session options from these settings
    ///
    /// # Errors
    ///
    /// Returns `MatcherError` if the delimiter configuration is invalid.
    pub fn session_options(&self) -> Result<SessionOptions, MatcherError> {
        Ok(SessionOptions::default()
            .with_match_options(self.match_options()?)
            .with_select_one(self.select_one))
    }

    /// Serialize to TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
