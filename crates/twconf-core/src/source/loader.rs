//! Decoding and validation of configuration sources.
//!
//! The entry point is [`load`].  Parsing is delegated to `toml` or
//! `serde_json`; every structural or semantic problem comes back as a
//! [`MalformedConfig`] before any build work can begin.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::format::SourceFormat;
use super::raw::{
    RawCategories, RawConfig, RawContent, RawContentObject, RawDarkMode, RawImportant, RawTheme,
    RawToken,
};
use crate::domain::content::ContentSources;
use crate::domain::dark_mode::DarkMode;
use crate::domain::descriptor::{ConfigDescriptor, ImportantMode};
use crate::domain::error::MalformedConfig;
use crate::domain::plugin::PluginRef;
use crate::domain::theme::{Theme, ThemeCategory, ThemeConfig, TokenValue};

/// Parses `source` and validates it into a [`ConfigDescriptor`].
///
/// # Errors
///
/// Returns [`MalformedConfig`] if the text is not well-formed `format` data,
/// if it does not match the configuration schema, or if any field fails
/// validation (unknown dark-mode strategy, uncompilable glob, unknown theme
/// category, empty plugin name).
pub fn load(source: &str, format: SourceFormat) -> Result<ConfigDescriptor, MalformedConfig> {
    debug!("decoding {} config ({} bytes)", format.label(), source.len());
    let raw = decode(source, format)?;
    let descriptor = validate(raw)?;
    debug!("config validated: {}", descriptor.summary());
    Ok(descriptor)
}

/// Parses `source` into the raw schema without validating field values.
///
/// # Errors
///
/// Returns [`MalformedConfig::Parse`] on any syntax or schema error.
pub fn decode(source: &str, format: SourceFormat) -> Result<RawConfig, MalformedConfig> {
    parse_document(source, format)
}

/// Validates a decoded document.
///
/// # Errors
///
/// See [`load`].
pub fn validate(raw: RawConfig) -> Result<ConfigDescriptor, MalformedConfig> {
    let dark_mode = match raw.dark_mode {
        None => DarkMode::default(),
        Some(RawDarkMode::Strategy(name)) => DarkMode::parse(&name)?,
        Some(RawDarkMode::WithSelector(parts)) => DarkMode::parse_parts(&parts)?,
    };

    let content = match raw.content {
        RawContent::Files(files) => ContentSources::parse(&files, false)?,
        RawContent::Object(RawContentObject { files, relative }) => {
            ContentSources::parse(&files, relative)?
        }
    };
    if content.is_empty() {
        warn!("content is empty: no template files will be scanned for classes");
    }

    let theme = validate_theme(raw.theme)?;

    let plugins = raw
        .plugins
        .iter()
        .enumerate()
        .map(|(index, name)| PluginRef::parse(index, name))
        .collect::<Result<Vec<_>, _>>()?;

    let prefix = raw.prefix.filter(|p| !p.is_empty());

    let important = match raw.important {
        None | Some(RawImportant::Flag(false)) => ImportantMode::Off,
        Some(RawImportant::Flag(true)) => ImportantMode::On,
        Some(RawImportant::Selector(selector)) => {
            let selector = selector.trim();
            if selector.is_empty() {
                return Err(MalformedConfig::EmptyImportantSelector);
            }
            ImportantMode::Selector(selector.to_string())
        }
    };

    Ok(ConfigDescriptor::from_parts(
        dark_mode, content, theme, plugins, prefix, important,
    ))
}

/// Parses a standalone theme document, a table of categories to tokens, for
/// use as a merge base.
///
/// ```toml
/// [colors]
/// black = "#000"
///
/// [screens]
/// md = "768px"
/// ```
///
/// # Errors
///
/// Returns [`MalformedConfig::Parse`] on syntax errors and
/// [`MalformedConfig::UnknownThemeCategory`] for unrecognised categories.
pub fn decode_theme(source: &str, format: SourceFormat) -> Result<Theme, MalformedConfig> {
    let raw: RawCategories = parse_document(source, format)?;
    categories_from_raw(raw)
}

/// Converts a descriptor back into the file schema, e.g. for printing a
/// normalised copy.  Loading the result yields an equal descriptor.
pub fn to_raw(descriptor: &ConfigDescriptor) -> RawConfig {
    let dark_mode = descriptor.dark_mode();
    let dark_mode = match dark_mode.custom_selector() {
        Some(selector) => RawDarkMode::WithSelector(vec![
            dark_mode.strategy().as_str().to_string(),
            selector.to_string(),
        ]),
        None => RawDarkMode::Strategy(dark_mode.strategy().as_str().to_string()),
    };

    let files = descriptor.content().to_source_strings();
    let content = if descriptor.content().is_relative() {
        RawContent::Object(RawContentObject {
            files,
            relative: true,
        })
    } else {
        RawContent::Files(files)
    };

    let important = match descriptor.important() {
        ImportantMode::Off => None,
        ImportantMode::On => Some(RawImportant::Flag(true)),
        ImportantMode::Selector(selector) => Some(RawImportant::Selector(selector.clone())),
    };

    RawConfig {
        dark_mode: Some(dark_mode),
        content,
        plugins: descriptor
            .plugins()
            .iter()
            .map(|p| p.name().to_string())
            .collect(),
        prefix: descriptor.prefix().map(str::to_string),
        important,
        theme: RawTheme {
            extend: categories_to_raw(descriptor.theme().extend()),
            overrides: categories_to_raw(descriptor.theme().overrides()),
        },
    }
}

fn parse_document<T>(source: &str, format: SourceFormat) -> Result<T, MalformedConfig>
where
    T: serde::de::DeserializeOwned,
{
    let parsed = match format {
        SourceFormat::Toml => toml::from_str(source).map_err(|e| e.to_string()),
        SourceFormat::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| MalformedConfig::Parse {
        format: format.label(),
        message: message.trim_end().to_string(),
    })
}

fn validate_theme(raw: RawTheme) -> Result<ThemeConfig, MalformedConfig> {
    let overrides = categories_from_raw(raw.overrides)?;
    let extend = categories_from_raw(raw.extend)?;
    Ok(ThemeConfig::new(overrides, extend))
}

fn categories_from_raw(raw: RawCategories) -> Result<Theme, MalformedConfig> {
    let mut theme = Theme::new();
    for (key, tokens) in raw {
        let category: ThemeCategory = key.parse()?;
        theme.set_category(
            category,
            tokens
                .into_iter()
                .map(|(name, value)| (name, TokenValue::from(value)))
                .collect(),
        );
    }
    Ok(theme)
}

fn categories_to_raw(theme: &Theme) -> RawCategories {
    theme
        .categories()
        .map(|(category, tokens)| {
            (
                category.as_str().to_string(),
                tokens
                    .iter()
                    .map(|(name, value)| (name.clone(), RawToken::from(value)))
                    .collect::<BTreeMap<_, _>>(),
            )
        })
        .collect()
}
