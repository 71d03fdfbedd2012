//! Serde schema mirroring the configuration file layout.
//!
//! Field names follow the file's camelCase keys.  Several fields accept more
//! than one shape (`darkMode` as a string or a pair, `content` as a list or
//! an object, token values as a string, list, or nested table), modelled as
//! `#[serde(untagged)]` enums.
//!
//! Example (TOML):
//!
//! ```toml
//! darkMode = "class"
//! content = ["./templates/**/*.html"]
//! plugins = []
//!
//! [theme.extend.colors]
//! primary = "#6366f1"
//!
//! [theme.extend.fontFamily]
//! sans = ["Inter", "sans-serif"]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::theme::TokenValue;

/// Category key to token table, before category names are validated.
pub type RawCategories = BTreeMap<String, BTreeMap<String, RawToken>>;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<RawDarkMode>,
    #[serde(default)]
    pub content: RawContent,
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<RawImportant>,
    #[serde(default)]
    pub theme: RawTheme,
}

/// `darkMode = "class"` or `darkMode = ["class", ".night"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDarkMode {
    Strategy(String),
    WithSelector(Vec<String>),
}

/// `content = [...]` or `content = { files = [...], relative = true }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    Files(Vec<String>),
    Object(RawContentObject),
}

/// The table form of `content`.  Unknown keys are rejected, as at the top
/// level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawContentObject {
    pub files: Vec<String>,
    #[serde(default)]
    pub relative: bool,
}

impl Default for RawContent {
    fn default() -> Self {
        Self::Files(Vec::new())
    }
}

/// `important = true` or `important = "#app"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawImportant {
    Flag(bool),
    Selector(String),
}

/// The `theme` table: `extend` plus any number of override categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTheme {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extend: RawCategories,
    #[serde(flatten)]
    pub overrides: RawCategories,
}

/// One token value in any of its accepted shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawToken {
    Value(String),
    /// A bare number such as a `zIndex` or `fontWeight`; kept as its text.
    Number(serde_json::Number),
    List(Vec<String>),
    Scale(BTreeMap<String, RawToken>),
}

impl From<RawToken> for TokenValue {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Value(v) => TokenValue::Value(v),
            RawToken::Number(n) => TokenValue::Value(n.to_string()),
            RawToken::List(items) => TokenValue::List(items),
            RawToken::Scale(map) => {
                TokenValue::Scale(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&TokenValue> for RawToken {
    fn from(value: &TokenValue) -> Self {
        match value {
            TokenValue::Value(v) => RawToken::Value(v.clone()),
            TokenValue::List(items) => RawToken::List(items.clone()),
            TokenValue::Scale(map) => {
                RawToken::Scale(map.iter().map(|(k, v)| (k.clone(), v.into())).collect())
            }
        }
    }
}
