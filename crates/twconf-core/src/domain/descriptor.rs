//! The configuration descriptor.
//!
//! [`ConfigDescriptor`] is produced once by [`crate::source::loader::load`]
//! and then only read.  There is no public constructor and no setter: every
//! descriptor in existence has passed validation.

use std::fmt;

use super::content::ContentSources;
use super::dark_mode::DarkMode;
use super::plugin::PluginRef;
use super::theme::{EffectiveTheme, ThemeConfig, ThemeDefaults};

/// How utilities are marked `!important`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImportantMode {
    /// Declarations are emitted as-is.
    #[default]
    Off,
    /// Every declaration gets `!important`.
    On,
    /// Utilities are nested under this selector to raise specificity.
    Selector(String),
}

/// The validated configuration of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDescriptor {
    dark_mode: DarkMode,
    content: ContentSources,
    theme: ThemeConfig,
    plugins: Vec<PluginRef>,
    prefix: Option<String>,
    important: ImportantMode,
}

impl ConfigDescriptor {
    pub(crate) fn from_parts(
        dark_mode: DarkMode,
        content: ContentSources,
        theme: ThemeConfig,
        plugins: Vec<PluginRef>,
        prefix: Option<String>,
        important: ImportantMode,
    ) -> Self {
        Self {
            dark_mode,
            content,
            theme,
            plugins,
            prefix,
            important,
        }
    }

    pub fn dark_mode(&self) -> &DarkMode {
        &self.dark_mode
    }

    /// Content globs in declaration order.
    pub fn content(&self) -> &ContentSources {
        &self.content
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Plugin handles in declaration order.
    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    /// Class-name prefix, e.g. `tw-`.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn important(&self) -> &ImportantMode {
        &self.important
    }

    /// The theme the generation engine uses: `base` with this descriptor's
    /// overrides applied, then its extensions merged on top.
    pub fn effective_theme(&self, base: &ThemeDefaults) -> EffectiveTheme {
        self.theme.resolve(base)
    }

    pub fn summary(&self) -> DescriptorSummary {
        DescriptorSummary {
            dark_mode: self.dark_mode.to_string(),
            content_globs: self.content.len(),
            excluded_globs: self.content.excludes().count(),
            extended_categories: self.theme.extend().category_count(),
            extended_tokens: self.theme.extend().token_count(),
            overridden_categories: self.theme.overrides().category_count(),
            plugins: self.plugins.len(),
        }
    }
}

/// Counts per configuration section, for logs and the `check` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSummary {
    pub dark_mode: String,
    pub content_globs: usize,
    pub excluded_globs: usize,
    pub extended_categories: usize,
    pub extended_tokens: usize,
    pub overridden_categories: usize,
    pub plugins: usize,
}

impl fmt::Display for DescriptorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "darkMode={} content={} (excluded {}) extend={} categories/{} tokens overrides={} plugins={}",
            self.dark_mode,
            self.content_globs,
            self.excluded_globs,
            self.extended_categories,
            self.extended_tokens,
            self.overridden_categories,
            self.plugins,
        )
    }
}
