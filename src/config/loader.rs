//! Configuration File Loading
//!
//! Finds and loads the launch configuration from the usual locations,
//! in TOML or JSON, falling back to the built-in defaults.
//!
//! Lookup order: `$STAGGER_CONFIG`, then `<config dir>/stagger/config`,
//! `~/.stagger` and `./stagger`, each tried as `.toml` then `.json`.

use super::Config;
use crate::error::{Error, Result};
use crate::platform::Platform;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "STAGGER_CONFIG";

/// On-disk configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    /// Format implied by a file extension; TOML when there is none
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") | None => Some(ConfigFormat::Toml),
            Some("json") => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }

    fn parse(&self, content: &str) -> Result<Config> {
        let config: Config = match self {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    fn render(&self, config: &Config) -> Result<String> {
        let rendered = match self {
            ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
        };
        rendered.map_err(|reason| Error::ConfigSerializationFailed {
            format: self.name().to_string(),
            reason,
        })
    }
}

/// How a loaded configuration is treated
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Run [`Config::validate`] on the result
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { validate: true }
    }
}

/// Locates, reads and writes configuration files
pub struct ConfigLoader {
    /// Candidate files, without extension, in priority order
    search_paths: Vec<PathBuf>,
    /// Formats tried for each candidate, in priority order
    supported_formats: Vec<ConfigFormat>,
    /// File the last successful load came from
    current_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load and validate configuration from the default locations
    pub fn load() -> Result<Config> {
        Self::new().load_with_options(LoadOptions::default())
    }

    /// Load configuration, honouring `$STAGGER_CONFIG` before the search paths
    pub fn load_with_options(&mut self, options: LoadOptions) -> Result<Config> {
        let explicit = env::var(CONFIG_ENV_VAR).unwrap_or_default();
        if !explicit.trim().is_empty() {
            debug!("Using configuration from ${}", CONFIG_ENV_VAR);
            return self.load_from_path(Path::new(&explicit), &options);
        }

        let config = match self.find_and_load_config()? {
            Some((path, config)) => {
                info!("Configuration loaded from {}", path.display());
                self.current_path = Some(path);
                config
            }
            None => {
                debug!("No configuration file found, using built-in defaults");
                Config::default()
            }
        };

        if options.validate {
            config.validate()?;
        }
        Ok(config)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from_path(&mut self, path: &Path, options: &LoadOptions) -> Result<Config> {
        if !path.is_file() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            });
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: "unsupported file extension (expected .toml or .json)".to_string(),
        })?;

        let config = Self::load_config_file(path, format)?;
        if options.validate {
            config.validate()?;
        }

        info!("Configuration loaded from {}", path.display());
        self.current_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Write `config` to `path`, in TOML unless the extension says JSON
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)?,
            _ => {}
        }

        let content = ConfigFormat::from_path(path)
            .unwrap_or(ConfigFormat::Toml)
            .render(config)?;

        fs::write(path, content).map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// First candidate file that exists and parses.
    ///
    /// A file that fails to parse is logged and skipped.
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        let candidates = self.search_paths.iter().flat_map(|base| {
            self.supported_formats
                .iter()
                .map(move |format| (base.with_extension(format.extension()), *format))
        });

        for (path, format) in candidates {
            if !path.is_file() {
                continue;
            }
            match Self::load_config_file(&path, format) {
                Ok(config) => return Ok(Some((path, config))),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        Ok(None)
    }

    fn load_config_file(path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        format.parse(&content)
    }

    fn get_search_paths() -> Vec<PathBuf> {
        let config_dir = Platform::paths()
            .config_dir()
            .ok()
            .map(|dir| dir.join("stagger").join("config"));
        let home = dirs::home_dir().map(|home| home.join(".stagger"));
        let cwd = env::current_dir().ok().map(|cwd| cwd.join("stagger"));

        [config_dir, home, cwd].into_iter().flatten().collect()
    }

    /// File the last successful load came from, if any
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
