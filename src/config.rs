//! Configuration management for quartzfmt.
//!
//! The formatting style itself is fixed by contract (tab indentation, spaced
//! binary operators and commas) and has no knobs. [`Config`] carries only
//! operational settings for the CLI:
//! - glob patterns to exclude
//! - extra file extensions treated as Quartz sources
//! - the parallel job count
//! - whether the naming lint runs
//!
//! Settings load from `quartzfmt.toml` files, auto-discovered by searching
//! parent directories from the file being formatted up to the filesystem
//! root, plus the user's home directory. CLI arguments override file
//! settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["quartzfmt.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME first (Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

/// Operational configuration for the quartzfmt CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Glob patterns for files and directories to skip
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Extra file extensions treated as Quartz sources (besides `qrz`)
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Worker threads for parallel formatting (None = rayon default)
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Run the identifier-naming lint instead of formatting
    #[serde(default)]
    pub lint: bool,
}

/// Partial configuration for TOML parsing
///
/// Scalar fields are `Option<T>` so merging can distinguish "explicitly set"
/// from "not specified"; list fields merge additively.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
    pub jobs: Option<usize>,
    pub lint: Option<bool>,
}

impl Config {
    /// Maximum reasonable parallel job count
    const MAX_JOBS: usize = 512;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if let Some(jobs) = self.jobs {
            if jobs > Self::MAX_JOBS {
                return Some(format!(
                    "jobs {jobs} exceeds maximum of {}",
                    Self::MAX_JOBS
                ));
            }
        }
        for pattern in &self.exclude {
            if glob::Pattern::new(pattern).is_err() {
                return Some(format!("invalid exclude pattern: {pattern}"));
            }
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config: scalars override, lists merge
    fn apply_partial(&mut self, partial: &PartialConfig) {
        for pattern in &partial.exclude {
            if !self.exclude.contains(pattern) {
                self.exclude.push(pattern.clone());
            }
        }
        for extension in &partial.extensions {
            if !self.extensions.contains(extension) {
                self.extensions.push(extension.clone());
            }
        }
        if let Some(v) = partial.jobs {
            self.jobs = Some(v);
        }
        if let Some(v) = partial.lint {
            self.lint = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the file's directory up to the root, then adds the home
    /// directory config. Returns paths in order of priority (least specific
    /// first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Root to current, so more specific configs override
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones. Returns default config if no files
    /// are found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let config_files = Self::discover_config_files(start_path);

        if config_files.is_empty() {
            return Self::default();
        }

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}
