//! Locating and reading the configuration file from disk.
//!
//! The config lives in the project directory under one of a few well-known
//! names, checked in this order:
//!
//! 1. `tailwind.config.toml`
//! 2. `tailwind.config.json`
//! 3. `twconf.toml`
//!
//! An explicit path (`--config` / `TWCONF_CONFIG`) skips discovery.  The
//! source format is chosen from the file extension.
//!
//! Unlike an application settings file, a missing build config is an error:
//! there is no sensible default set of templates to scan.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use twconf_core::{decode_theme, load, ConfigDescriptor, MalformedConfig, SourceFormat, ThemeDefaults};

/// File names searched by [`discover_config`], in priority order.
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    "tailwind.config.toml",
    "tailwind.config.json",
    "twconf.toml",
];

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// None of [`CONFIG_FILE_NAMES`] exists in the searched directory.
    #[error("no config file found in {} (looked for {})", .dir.display(), CONFIG_FILE_NAMES.join(", "))]
    NotFound { dir: PathBuf },

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is not a valid configuration.
    #[error("malformed config {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: MalformedConfig,
    },
}

impl ConfigError {
    /// The underlying validation error, if this is a malformed config.
    pub fn as_malformed(&self) -> Option<&MalformedConfig> {
        match self {
            Self::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Finds the config file in `dir`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when none of the candidate names exists.
pub fn discover_config(dir: &Path) -> Result<PathBuf, ConfigError> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| ConfigError::NotFound {
            dir: dir.to_path_buf(),
        })
}

/// Returns `explicit` if given, otherwise discovers the config in `dir`.
///
/// # Errors
///
/// See [`discover_config`].
pub fn resolve_config_path(explicit: Option<&Path>, dir: &Path) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => discover_config(dir),
    }
}

/// Reads and validates the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, and
/// [`ConfigError::Malformed`] if the extension is unsupported or the content
/// fails to load.
pub fn load_config_file(path: &Path) -> Result<ConfigDescriptor, ConfigError> {
    let (format, content) = read_source(path)?;
    let descriptor = load(&content, format).map_err(|source| malformed(path, source))?;
    info!("loaded config {}: {}", path.display(), descriptor.summary());
    Ok(descriptor)
}

/// Reads a standalone theme file to use as the merge base.
///
/// # Errors
///
/// Same as [`load_config_file`].
pub fn load_theme_file(path: &Path) -> Result<ThemeDefaults, ConfigError> {
    let (format, content) = read_source(path)?;
    let theme = decode_theme(&content, format).map_err(|source| malformed(path, source))?;
    info!(
        "loaded base theme {}: {} categories, {} tokens",
        path.display(),
        theme.category_count(),
        theme.token_count()
    );
    Ok(theme)
}

fn read_source(path: &Path) -> Result<(SourceFormat, String), ConfigError> {
    let format = SourceFormat::from_path(path).map_err(|source| malformed(path, source))?;
    debug!("reading {} as {}", path.display(), format.label());
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((format, content))
}

fn malformed(path: &Path, source: MalformedConfig) -> ConfigError {
    ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
