//! Plugin references.

use std::fmt;

use super::error::MalformedConfig;

/// A handle naming a plugin the generation engine should load, e.g.
/// `@tailwindcss/forms`.  The descriptor never resolves or loads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginRef(String);

impl PluginRef {
    /// Validates the entry at `index` of the `plugins` list.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedConfig::EmptyPlugin`] for an empty or blank name.
    pub fn parse(index: usize, name: &str) -> Result<Self, MalformedConfig> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MalformedConfig::EmptyPlugin(index));
        }
        Ok(Self(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_name_is_trimmed() {
        let plugin = PluginRef::parse(0, "  @tailwindcss/typography ").unwrap();
        assert_eq!(plugin.name(), "@tailwindcss/typography");
    }

    #[test]
    fn test_blank_plugin_reports_its_index() {
        assert_eq!(PluginRef::parse(2, " "), Err(MalformedConfig::EmptyPlugin(2)));
    }
}
