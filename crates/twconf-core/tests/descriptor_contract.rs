//! Integration tests for the configuration descriptor contract.
//!
//! These tests go through the public API only: load a source, inspect the
//! descriptor, merge its theme onto a base.

use twconf_core::{
    builtin_theme, load, merge, DarkModeStrategy, MalformedConfig, SourceFormat, Theme,
    ThemeCategory, TokenValue,
};

/// The portfolio project's configuration, expressed as TOML.
const PORTFOLIO_TOML: &str = r##"
darkMode = "class"
content = [
    "./apps/portfolio/templates/**/*.html",
    "./apps/blog/templates/**/*.html",
    "./templates/**/*.html",
]
plugins = []

[theme.extend.colors]
primary = "#6366f1"
secondary = "#a855f7"
accent = "#10b981"
darkBg = "#020617"

[theme.extend.fontFamily]
sans = ["Inter", "sans-serif"]
mono = ["Fira Code", "monospace"]
"##;

/// The same configuration, expressed as JSON.
const PORTFOLIO_JSON: &str = r##"{
  "darkMode": "class",
  "content": [
    "./apps/portfolio/templates/**/*.html",
    "./apps/blog/templates/**/*.html",
    "./templates/**/*.html"
  ],
  "theme": {
    "extend": {
      "colors": {
        "primary": "#6366f1",
        "secondary": "#a855f7",
        "accent": "#10b981",
        "darkBg": "#020617"
      },
      "fontFamily": {
        "sans": ["Inter", "sans-serif"],
        "mono": ["Fira Code", "monospace"]
      }
    }
  },
  "plugins": []
}"##;

// ── Dark mode ─────────────────────────────────────────────────────────────────

#[test]
fn test_every_recognised_dark_mode_loads() {
    for strategy in DarkModeStrategy::ALL {
        // Arrange
        let source = format!("darkMode = \"{strategy}\"");

        // Act
        let descriptor = load(&source, SourceFormat::Toml).expect("recognised strategy must load");

        // Assert
        assert_eq!(descriptor.dark_mode().strategy(), strategy);
    }
}

#[test]
fn test_any_other_dark_mode_fails_with_malformed_config() {
    for bad in ["dark", "MEDIA", "prefers", "class ", "none"] {
        let json = format!(r#"{{ "darkMode": "{bad}" }}"#);
        let result = load(&json, SourceFormat::Json);
        assert_eq!(
            result,
            Err(MalformedConfig::UnknownDarkMode(bad.to_string())),
            "'{bad}' must not load"
        );
    }
}

// ── Theme merge ───────────────────────────────────────────────────────────────

#[test]
fn test_extension_adds_primary_to_base_without_it() {
    // Arrange
    let descriptor = load(PORTFOLIO_TOML, SourceFormat::Toml).unwrap();
    let base = builtin_theme();
    assert!(base.token(ThemeCategory::Colors, "primary").is_none());

    // Act
    let effective = merge(&base, descriptor.theme().extend());

    // Assert: primary added, every base colour untouched
    assert_eq!(
        effective.token(ThemeCategory::Colors, "primary"),
        Some(&TokenValue::value("#6366f1"))
    );
    for (name, value) in base.category(ThemeCategory::Colors).unwrap() {
        assert_eq!(effective.token(ThemeCategory::Colors, name), Some(value));
    }
}

#[test]
fn test_extension_wins_over_base_primary() {
    let base = Theme::new().with(ThemeCategory::Colors, "primary", TokenValue::value("#000000"));
    let descriptor = load(PORTFOLIO_TOML, SourceFormat::Toml).unwrap();

    let effective = descriptor.effective_theme(&base);

    assert_eq!(
        effective.token(ThemeCategory::Colors, "primary"),
        Some(&TokenValue::value("#6366f1"))
    );
}

#[test]
fn test_font_family_extension_replaces_builtin_stack() {
    let descriptor = load(PORTFOLIO_TOML, SourceFormat::Toml).unwrap();

    let effective = descriptor.effective_theme(&builtin_theme());

    assert_eq!(
        effective.token(ThemeCategory::FontFamily, "sans"),
        Some(&TokenValue::list(["Inter", "sans-serif"]))
    );
    // `serif` is not extended, so the built-in stack survives.
    assert!(effective.token(ThemeCategory::FontFamily, "serif").is_some());
}

// ── Content ───────────────────────────────────────────────────────────────────

#[test]
fn test_content_order_is_preserved() {
    let source = r#"content = ["./c/**/*.html", "./a/**/*.html", "./b/**/*.html"]"#;

    let descriptor = load(source, SourceFormat::Toml).unwrap();

    assert_eq!(
        descriptor.content().to_source_strings(),
        ["./c/**/*.html", "./a/**/*.html", "./b/**/*.html"]
    );
}

// ── Literal example ───────────────────────────────────────────────────────────

fn assert_matches_portfolio(source: &str, format: SourceFormat) {
    let descriptor = load(source, format).expect("portfolio config must load");

    // darkMode
    assert_eq!(descriptor.dark_mode().strategy(), DarkModeStrategy::Class);
    assert_eq!(descriptor.dark_mode().custom_selector(), None);

    // content: exactly three globs, in order
    assert_eq!(
        descriptor.content().to_source_strings(),
        [
            "./apps/portfolio/templates/**/*.html",
            "./apps/blog/templates/**/*.html",
            "./templates/**/*.html",
        ]
    );

    // theme.extend: exactly colors and fontFamily
    let extend = descriptor.theme().extend();
    assert_eq!(extend.category_count(), 2);

    let colors = extend.category(ThemeCategory::Colors).unwrap();
    assert_eq!(colors.len(), 4);
    assert_eq!(colors["primary"], TokenValue::value("#6366f1"));
    assert_eq!(colors["secondary"], TokenValue::value("#a855f7"));
    assert_eq!(colors["accent"], TokenValue::value("#10b981"));
    assert_eq!(colors["darkBg"], TokenValue::value("#020617"));

    let fonts = extend.category(ThemeCategory::FontFamily).unwrap();
    assert_eq!(fonts.len(), 2);
    assert_eq!(fonts["sans"], TokenValue::list(["Inter", "sans-serif"]));
    assert_eq!(fonts["mono"], TokenValue::list(["Fira Code", "monospace"]));

    // nothing else
    assert!(descriptor.theme().overrides().is_empty());
    assert!(descriptor.plugins().is_empty());
    assert_eq!(descriptor.prefix(), None);
}

#[test]
fn test_portfolio_config_loads_exactly_from_toml() {
    assert_matches_portfolio(PORTFOLIO_TOML, SourceFormat::Toml);
}

#[test]
fn test_portfolio_config_loads_exactly_from_json() {
    assert_matches_portfolio(PORTFOLIO_JSON, SourceFormat::Json);
}

#[test]
fn test_toml_and_json_sources_produce_equal_descriptors() {
    let from_toml = load(PORTFOLIO_TOML, SourceFormat::Toml).unwrap();
    let from_json = load(PORTFOLIO_JSON, SourceFormat::Json).unwrap();
    assert_eq!(from_toml, from_json);
}
