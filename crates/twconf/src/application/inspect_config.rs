//! InspectConfigUseCase: load a config, resolve its theme, summarise it.
//!
//! This is what every CLI command starts with.  Loading happens exactly
//! once; the resulting descriptor is only read afterwards.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::info;
use twconf_core::{
    builtin_theme, ConfigDescriptor, DescriptorSummary, EffectiveTheme, Theme, ThemeCategory,
    TokenValue,
};

use crate::infrastructure::storage::config::{load_config_file, load_theme_file, ConfigError};

/// Everything a command needs to know about one loaded config.
#[derive(Debug, Clone)]
pub struct ConfigReport {
    /// The file the config was read from.
    pub path: PathBuf,
    pub descriptor: ConfigDescriptor,
    /// The base theme with the config's overrides and extensions applied.
    pub effective_theme: EffectiveTheme,
    pub summary: DescriptorSummary,
}

/// Loads the config at `path` and resolves its theme against `base_theme`
/// (a theme file) or the built-in defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] if either file cannot be read or is malformed.
pub fn inspect_config(path: &Path, base_theme: Option<&Path>) -> Result<ConfigReport, ConfigError> {
    let descriptor = load_config_file(path)?;
    let base = match base_theme {
        Some(theme_path) => load_theme_file(theme_path)?,
        None => builtin_theme(),
    };

    let effective_theme = descriptor.effective_theme(&base);
    info!(
        "effective theme: {} categories, {} tokens",
        effective_theme.category_count(),
        effective_theme.token_count()
    );

    Ok(ConfigReport {
        path: path.to_path_buf(),
        summary: descriptor.summary(),
        descriptor,
        effective_theme,
    })
}

/// Renders a theme as a JSON object, optionally restricted to one category.
///
/// Categories and token names come out in stable order.
pub fn render_theme(theme: &Theme, only: Option<ThemeCategory>) -> Value {
    let categories = theme
        .categories()
        .filter(|(category, _)| only.map_or(true, |wanted| wanted == *category))
        .map(|(category, tokens)| {
            let tokens: Map<String, Value> = tokens
                .iter()
                .map(|(name, value)| (name.clone(), token_to_json(value)))
                .collect();
            (category.as_str().to_string(), Value::Object(tokens))
        })
        .collect::<Map<_, _>>();
    Value::Object(categories)
}

fn token_to_json(value: &TokenValue) -> Value {
    match value {
        TokenValue::Value(v) => Value::String(v.clone()),
        TokenValue::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
        TokenValue::Scale(map) => Value::Object(
            map.iter()
                .map(|(name, nested)| (name.clone(), token_to_json(nested)))
                .collect(),
        ),
    }
}
