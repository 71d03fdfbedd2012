//! Theme categories, token values, and the theme merge.
//!
//! A theme is a two-level map: category (`colors`, `fontFamily`, …) to token
//! name to token value.  The generation engine owns a default theme; a
//! configuration adjusts it in two ways:
//!
//! - `theme.<category>` **overrides** replace the whole default category;
//! - `theme.extend.<category>` **extensions** are overlaid on top: new names
//!   are added, same names win over the base.
//!
//! Overrides are applied first, then extensions, so an extension always has
//! the last word.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::MalformedConfig;

macro_rules! theme_categories {
    ($($variant:ident => $name:literal,)+) => {
        /// A recognised theme category key.
        ///
        /// Ordering follows declaration order, which keeps merged themes and
        /// printed output stable.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ThemeCategory {
            $($variant,)+
        }

        impl ThemeCategory {
            /// Every recognised category.
            pub const ALL: &'static [ThemeCategory] = &[$(ThemeCategory::$variant,)+];

            /// The key as written in a config source.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ThemeCategory::$variant => $name,)+
                }
            }
        }

        impl FromStr for ThemeCategory {
            type Err = MalformedConfig;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(ThemeCategory::$variant),)+
                    other => Err(MalformedConfig::UnknownThemeCategory(other.to_string())),
                }
            }
        }
    };
}

theme_categories! {
    Screens => "screens",
    Supports => "supports",
    Colors => "colors",
    Spacing => "spacing",
    Animation => "animation",
    AspectRatio => "aspectRatio",
    BackgroundColor => "backgroundColor",
    BackgroundImage => "backgroundImage",
    BackgroundPosition => "backgroundPosition",
    BackgroundSize => "backgroundSize",
    Blur => "blur",
    BorderColor => "borderColor",
    BorderRadius => "borderRadius",
    BorderWidth => "borderWidth",
    BoxShadow => "boxShadow",
    Brightness => "brightness",
    Columns => "columns",
    Container => "container",
    Content => "content",
    Cursor => "cursor",
    Fill => "fill",
    Flex => "flex",
    FontFamily => "fontFamily",
    FontSize => "fontSize",
    FontWeight => "fontWeight",
    Gap => "gap",
    GradientColorStops => "gradientColorStops",
    GridTemplateColumns => "gridTemplateColumns",
    GridTemplateRows => "gridTemplateRows",
    Height => "height",
    Inset => "inset",
    Keyframes => "keyframes",
    LetterSpacing => "letterSpacing",
    LineHeight => "lineHeight",
    ListStyleType => "listStyleType",
    Margin => "margin",
    MaxHeight => "maxHeight",
    MaxWidth => "maxWidth",
    MinHeight => "minHeight",
    MinWidth => "minWidth",
    Opacity => "opacity",
    OutlineWidth => "outlineWidth",
    Padding => "padding",
    RingColor => "ringColor",
    RingWidth => "ringWidth",
    Rotate => "rotate",
    Scale => "scale",
    Stroke => "stroke",
    StrokeWidth => "strokeWidth",
    TextColor => "textColor",
    TransitionDuration => "transitionDuration",
    TransitionProperty => "transitionProperty",
    TransitionTimingFunction => "transitionTimingFunction",
    Width => "width",
    ZIndex => "zIndex",
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token name to value within one category.
pub type TokenMap = BTreeMap<String, TokenValue>;

/// The value of one theme token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// A single CSS value, e.g. `"#6366f1"` or `"0.25rem"`.
    Value(String),
    /// An ordered list, e.g. a font stack `["Inter", "sans-serif"]`.
    List(Vec<String>),
    /// A nested scale, e.g. a colour palette `{ 500 = "#6366f1" }`.
    Scale(TokenMap),
}

impl TokenValue {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a scale from `(name, value)` pairs of single values.
    pub fn scale<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::Scale(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), TokenValue::value(v)))
                .collect(),
        )
    }

    /// Overlays `other` on `self`.  Two scales merge key by key; in every
    /// other combination `other` replaces `self`.
    fn overlay(&mut self, other: &TokenValue) {
        match (self, other) {
            (TokenValue::Scale(base), TokenValue::Scale(ext)) => overlay_tokens(base, ext),
            (slot, other) => *slot = other.clone(),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(v),
            Self::List(items) => f.write_str(&items.join(", ")),
            Self::Scale(map) => write!(f, "<scale of {}>", map.len()),
        }
    }
}

fn overlay_tokens(base: &mut TokenMap, ext: &TokenMap) {
    for (name, value) in ext {
        match base.get_mut(name) {
            Some(existing) => existing.overlay(value),
            None => {
                base.insert(name.clone(), value.clone());
            }
        }
    }
}

/// Category to token map.  Used for the engine's defaults, for a
/// configuration's extensions and overrides, and for the merged result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Theme {
    categories: BTreeMap<ThemeCategory, TokenMap>,
}

/// The generation engine's built-in theme, the base of every merge.
pub type ThemeDefaults = Theme;
/// The `theme.extend` section of a configuration.
pub type ThemeExtensions = Theme;
/// The theme the generation engine actually uses after merging.
pub type EffectiveTheme = Theme;

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one token.  Later inserts of the same name win.
    pub fn insert(&mut self, category: ThemeCategory, name: impl Into<String>, value: TokenValue) {
        self.categories
            .entry(category)
            .or_default()
            .insert(name.into(), value);
    }

    /// Builder form of [`Theme::insert`].
    pub fn with(mut self, category: ThemeCategory, name: impl Into<String>, value: TokenValue) -> Self {
        self.insert(category, name, value);
        self
    }

    /// Replaces a whole category.
    pub fn set_category(&mut self, category: ThemeCategory, tokens: TokenMap) {
        self.categories.insert(category, tokens);
    }

    pub fn category(&self, category: ThemeCategory) -> Option<&TokenMap> {
        self.categories.get(&category)
    }

    pub fn token(&self, category: ThemeCategory, name: &str) -> Option<&TokenValue> {
        self.categories.get(&category)?.get(name)
    }

    /// Categories in stable order.
    pub fn categories(&self) -> impl Iterator<Item = (ThemeCategory, &TokenMap)> {
        self.categories.iter().map(|(c, t)| (*c, t))
    }

    /// Number of categories present.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of top-level tokens across all categories.
    pub fn token_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns a copy of `self` where every category present in `overrides`
    /// has been replaced wholesale.
    pub fn with_overrides(&self, overrides: &Theme) -> Theme {
        let mut replaced = self.clone();
        for (category, tokens) in overrides.categories() {
            replaced.set_category(category, tokens.clone());
        }
        replaced
    }
}

/// Overlays `extensions` on `base`.
///
/// For each category the result holds the union of base and extension
/// tokens; on a name collision the extension's value wins (two nested scales
/// are overlaid key by key).  Base tokens the extension does not name are
/// carried through unchanged, as are categories only one side has.
pub fn merge(base: &ThemeDefaults, extensions: &ThemeExtensions) -> EffectiveTheme {
    let mut merged = base.clone();
    for (category, tokens) in extensions.categories() {
        let slot = merged.categories.entry(category).or_default();
        overlay_tokens(slot, tokens);
    }
    merged
}

/// The `theme` section of a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeConfig {
    overrides: Theme,
    extend: ThemeExtensions,
}

impl ThemeConfig {
    pub fn new(overrides: Theme, extend: ThemeExtensions) -> Self {
        Self { overrides, extend }
    }

    /// Categories that replace the defaults (`theme.<category>`).
    pub fn overrides(&self) -> &Theme {
        &self.overrides
    }

    /// Categories that are overlaid on the defaults (`theme.extend`).
    pub fn extend(&self) -> &ThemeExtensions {
        &self.extend
    }

    /// Applies overrides to `base`, then merges the extensions.
    pub fn resolve(&self, base: &ThemeDefaults) -> EffectiveTheme {
        merge(&base.with_overrides(&self.overrides), &self.extend)
    }
}
