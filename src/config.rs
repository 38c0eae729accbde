use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editor behavior settings (tab width, vertical motion)
    #[serde(default)]
    pub editor: EditorSettings,

    /// Path to the diagnostics log file (default: data dir)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

/// How the cursor column behaves when moving up or down onto another line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalMotion {
    /// Keep the column, clamped to the target line's length
    #[default]
    PreserveColumn,
    /// Jump to the end of the target line
    LineEnd,
}

/// Editor behavior configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Number of spaces inserted by the Tab key
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Column policy for Up/Down
    #[serde(default)]
    pub vertical_motion: VerticalMotion,
}

fn default_tab_width() -> usize {
    4
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            vertical_motion: VerticalMotion::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load the user config from the config directory, falling back to defaults.
    ///
    /// A missing file is not an error. A broken one is logged and ignored so a
    /// typo in the config never keeps the editor from starting.
    pub fn load_or_default(dir_context: &DirectoryContext) -> Self {
        let path = dir_context.config_path();
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Pretty-printed JSON of the effective configuration
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.editor.tab_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "editor.tab_width",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

/// Why a config file could not be used
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The JSON is well formed but a field holds a value the editor cannot use
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
    /// Only reachable from `--dump-config`
    Serialize(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "{} is not a valid config: {source}", path.display())
            }
            ConfigError::InvalidValue { field, reason } => write!(f, "{field} {reason}"),
            ConfigError::Serialize(source) => write!(f, "cannot serialize config: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Serialize(source) => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Directory paths for editor configuration and diagnostics
///
/// Only the top-level `main` function should use `dirs::*` to construct this;
/// all other code receives it by parameter passing so tests can point it at
/// temp directories.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// Data directory for the log file
    /// e.g., ~/.local/share/linepad on Linux
    pub data_dir: PathBuf,

    /// Config directory for user configuration
    /// e.g., ~/.config/linepad on Linux
    pub config_dir: PathBuf,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories
    /// This should ONLY be called from main()
    #[cfg(feature = "runtime")]
    pub fn from_system() -> std::io::Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine data directory",
                )
            })?
            .join("linepad");

        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?
            .join("linepad");

        Ok(Self {
            data_dir,
            config_dir,
        })
    }

    /// Create a DirectoryContext for testing with a temp directory
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            data_dir: temp_dir.join("data"),
            config_dir: temp_dir.join("config"),
        }
    }

    /// Path of the user config file
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Default diagnostics log path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("linepad.log")
    }
}
