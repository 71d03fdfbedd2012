//! The single load-time error kind.

use thiserror::Error;

/// Raised synchronously while loading a configuration source.
///
/// Every variant is fatal: the caller surfaces the message verbatim to the
/// operator and no build work starts.  The variants only exist so tests and
/// callers can tell causes apart; they are all the same kind of failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedConfig {
    /// The text is not well-formed structured data for its format, or its
    /// shape does not match the configuration schema.
    #[error("could not parse {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// The source format could not be determined (e.g. unknown extension).
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// `darkMode` names a strategy other than `media`, `class` or `selector`.
    #[error("unrecognised darkMode strategy '{0}' (expected one of: media, class, selector)")]
    UnknownDarkMode(String),

    /// The array form of `darkMode` is not `[strategy, selector]` with a
    /// non-empty selector, or it attaches a selector to `media`.
    #[error("invalid darkMode selector form: {0}")]
    InvalidDarkModeSelector(String),

    /// A `content` entry is not a compilable glob pattern.
    #[error("invalid content glob '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// A theme key is not one of the recognised categories.
    #[error("unknown theme category '{0}'")]
    UnknownThemeCategory(String),

    /// A `plugins` entry is empty or whitespace.
    #[error("plugin reference at index {0} is empty")]
    EmptyPlugin(usize),

    /// `important` was given as an empty selector string.
    #[error("important selector must not be empty")]
    EmptyImportantSelector,
}
