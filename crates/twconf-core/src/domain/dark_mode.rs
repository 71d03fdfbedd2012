//! Dark-mode activation strategy.
//!
//! The generation engine emits `dark:` variants in one of three ways:
//!
//! | Strategy   | Variant activates when…                                  |
//! |------------|----------------------------------------------------------|
//! | `media`    | the OS reports `prefers-color-scheme: dark`              |
//! | `class`    | an ancestor element carries the `dark` class             |
//! | `selector` | an ancestor matches the selector (`.dark` by default)    |
//!
//! `class` and `selector` may carry a custom selector via the array form
//! `["class", ".night"]`.

use std::fmt;
use std::str::FromStr;

use super::error::MalformedConfig;

/// Selector used by `class` and `selector` when none is configured.
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

/// Media query used by the `media` strategy.
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// The recognised strategy names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DarkModeStrategy {
    #[default]
    Media,
    Class,
    Selector,
}

impl DarkModeStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [DarkModeStrategy; 3] = [Self::Media, Self::Class, Self::Selector];

    /// The name as written in a config source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Class => "class",
            Self::Selector => "selector",
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DarkModeStrategy {
    type Err = MalformedConfig;

    /// Matching is exact: `"Class"` or `" class"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media" => Ok(Self::Media),
            "class" => Ok(Self::Class),
            "selector" => Ok(Self::Selector),
            other => Err(MalformedConfig::UnknownDarkMode(other.to_string())),
        }
    }
}

/// A validated `darkMode` setting: the strategy plus an optional custom
/// selector for the class-based strategies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DarkMode {
    strategy: DarkModeStrategy,
    custom_selector: Option<String>,
}

impl DarkMode {
    /// A strategy with no custom selector.
    pub fn new(strategy: DarkModeStrategy) -> Self {
        Self {
            strategy,
            custom_selector: None,
        }
    }

    /// Parses the plain string form, e.g. `"class"`.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedConfig::UnknownDarkMode`] for any unrecognised name.
    pub fn parse(name: &str) -> Result<Self, MalformedConfig> {
        Ok(Self::new(name.parse()?))
    }

    /// Parses the array form `[strategy, selector]`.
    ///
    /// A single-element array is treated like the plain string form.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedConfig::UnknownDarkMode`] if the strategy is not
    /// recognised, and [`MalformedConfig::InvalidDarkModeSelector`] if the
    /// array has the wrong length, the selector is blank, or a selector is
    /// attached to `media`.
    pub fn parse_parts(parts: &[String]) -> Result<Self, MalformedConfig> {
        match parts {
            [name] => Self::parse(name),
            [name, selector] => {
                let strategy: DarkModeStrategy = name.parse()?;
                if strategy == DarkModeStrategy::Media {
                    return Err(MalformedConfig::InvalidDarkModeSelector(
                        "the media strategy does not take a selector".to_string(),
                    ));
                }
                let selector = selector.trim();
                if selector.is_empty() {
                    return Err(MalformedConfig::InvalidDarkModeSelector(format!(
                        "selector for '{strategy}' must not be empty"
                    )));
                }
                Ok(Self {
                    strategy,
                    custom_selector: Some(selector.to_string()),
                })
            }
            _ => Err(MalformedConfig::InvalidDarkModeSelector(format!(
                "expected [strategy, selector], got {} element(s)",
                parts.len()
            ))),
        }
    }

    pub fn strategy(&self) -> DarkModeStrategy {
        self.strategy
    }

    /// The selector exactly as configured, if any.
    pub fn custom_selector(&self) -> Option<&str> {
        self.custom_selector.as_deref()
    }

    /// The selector that activates dark variants, or `None` for `media`.
    pub fn activation_selector(&self) -> Option<&str> {
        match self.strategy {
            DarkModeStrategy::Media => None,
            DarkModeStrategy::Class | DarkModeStrategy::Selector => {
                Some(self.custom_selector().unwrap_or(DEFAULT_DARK_SELECTOR))
            }
        }
    }

    /// The media query that activates dark variants, or `None` for the
    /// class-based strategies.
    pub fn activation_media_query(&self) -> Option<&'static str> {
        match self.strategy {
            DarkModeStrategy::Media => Some(DARK_MEDIA_QUERY),
            DarkModeStrategy::Class | DarkModeStrategy::Selector => None,
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.custom_selector {
            Some(selector) => write!(f, "{} ({selector})", self.strategy),
            None => write!(f, "{}", self.strategy),
        }
    }
}
