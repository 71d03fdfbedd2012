//! Supported source formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::error::MalformedConfig;

/// The structured-data format a config source is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 2] = [Self::Toml, Self::Json];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
        }
    }

    /// Picks the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`MalformedConfig::UnsupportedFormat`] when the path has no
    /// extension or an unrecognised one.
    pub fn from_path(path: &Path) -> Result<Self, MalformedConfig> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.to_ascii_lowercase().parse().ok())
            .ok_or_else(|| MalformedConfig::UnsupportedFormat(path.display().to_string()))
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for SourceFormat {
    type Err = MalformedConfig;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(MalformedConfig::UnsupportedFormat(other.to_string())),
        }
    }
}
