use super::theme::{Theme, ThemeCategory, ThemeDefaults, TokenMap, TokenValue};

const SLATE: &[(&str, &str)] = &[
    ("50", "#f8fafc"),
    ("100", "#f1f5f9"),
    ("200", "#e2e8f0"),
    ("300", "#cbd5e1"),
    ("400", "#94a3b8"),
    ("500", "#64748b"),
    ("600", "#475569"),
    ("700", "#334155"),
    ("800", "#1e293b"),
    ("900", "#0f172a"),
    ("950", "#020617"),
];

const INDIGO: &[(&str, &str)] = &[
    ("50", "#eef2ff"),
    ("100", "#e0e7ff"),
    ("200", "#c7d2fe"),
    ("300", "#a5b4fc"),
    ("400", "#818cf8"),
    ("500", "#6366f1"),
    ("600", "#4f46e5"),
    ("700", "#4338ca"),
    ("800", "#3730a3"),
    ("900", "#312e81"),
    ("950", "#1e1b4b"),
];

const PURPLE: &[(&str, &str)] = &[
    ("50", "#faf5ff"),
    ("100", "#f3e8ff"),
    ("200", "#e9d5ff"),
    ("300", "#d8b4fe"),
    ("400", "#c084fc"),
    ("500", "#a855f7"),
    ("600", "#9333ea"),
    ("700", "#7e22ce"),
    ("800", "#6b21a8"),
    ("900", "#581c87"),
    ("950", "#3b0764"),
];

const EMERALD: &[(&str, &str)] = &[
    ("50", "#ecfdf5"),
    ("100", "#d1fae5"),
    ("200", "#a7f3d0"),
    ("300", "#6ee7b7"),
    ("400", "#34d399"),
    ("500", "#10b981"),
    ("600", "#059669"),
    ("700", "#047857"),
    ("800", "#065f46"),
    ("900", "#064e3b"),
    ("950", "#022c22"),
];

const FLAT_COLORS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000"),
    ("white", "#fff"),
];

const FONT_SANS: &[&str] = &[
    "ui-sans-serif",
    "system-ui",
    "sans-serif",
    "\"Apple Color Emoji\"",
    "\"Segoe UI Emoji\"",
    "\"Segoe UI Symbol\"",
    "\"Noto Color Emoji\"",
];

const FONT_SERIF: &[&str] = &[
    "ui-serif",
    "Georgia",
    "Cambria",
    "\"Times New Roman\"",
    "Times",
    "serif",
];

const FONT_MONO: &[&str] = &[
    "ui-monospace",
    "SFMono-Regular",
    "Menlo",
    "Monaco",
    "Consolas",
    "\"Liberation Mono\"",
    "\"Courier New\"",
    "monospace",
];

const SCREENS: &[(&str, &str)] = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];

const FONT_WEIGHT: &[(&str, &str)] = &[
    ("thin", "100"),
    ("extralight", "200"),
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
    ("extrabold", "800"),
    ("black", "900"),
];

const BORDER_RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

fn flat(entries: &[(&str, &str)]) -> TokenMap {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), TokenValue::value(*value)))
        .collect()
}

/// The built-in default theme.
///
/// A representative subset of the generation engine's defaults: the flat
/// colour keywords, four palettes, the three font stacks, breakpoints, font
/// weights and border radii.  Use a base theme file for a complete set.
pub fn builtin_theme() -> ThemeDefaults {
    let mut colors = flat(FLAT_COLORS);
    for (name, scale) in [
        ("slate", SLATE),
        ("indigo", INDIGO),
        ("purple", PURPLE),
        ("emerald", EMERALD),
    ] {
        colors.insert(name.to_string(), TokenValue::scale(scale.iter().copied()));
    }

    let fonts = [("sans", FONT_SANS), ("serif", FONT_SERIF), ("mono", FONT_MONO)]
        .into_iter()
        .map(|(name, stack)| (name.to_string(), TokenValue::list(stack.iter().copied())))
        .collect();

    let mut theme = Theme::new();
    theme.set_category(ThemeCategory::Colors, colors);
    theme.set_category(ThemeCategory::FontFamily, fonts);
    theme.set_category(ThemeCategory::Screens, flat(SCREENS));
    theme.set_category(ThemeCategory::FontWeight, flat(FONT_WEIGHT));
    theme.set_category(ThemeCategory::BorderRadius, flat(BORDER_RADIUS));
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_expected_categories() {
        let theme = builtin_theme();
        let names: Vec<_> = theme.categories().map(|(c, _)| c.as_str()).collect();
        assert_eq!(
            names,
            ["screens", "colors", "borderRadius", "fontFamily", "fontWeight"]
        );
    }

    #[test]
    fn test_builtin_has_no_primary_color() {
        // Configurations commonly add `primary`; the base must not pre-empt it.
        let theme = builtin_theme();
        assert!(theme.token(ThemeCategory::Colors, "primary").is_none());
    }

    #[test]
    fn test_builtin_indigo_500_matches_palette() {
        let theme = builtin_theme();
        let TokenValue::Scale(indigo) = theme.token(ThemeCategory::Colors, "indigo").unwrap() else {
            panic!("indigo must be a scale");
        };
        assert_eq!(indigo.get("500"), Some(&TokenValue::value("#6366f1")));
        assert_eq!(indigo.len(), 11);
    }

    #[test]
    fn test_builtin_font_stacks_are_ordered() {
        let theme = builtin_theme();
        let mono = theme.token(ThemeCategory::FontFamily, "mono").unwrap();
        let TokenValue::List(stack) = mono else {
            panic!("font family must be a list");
        };
        assert_eq!(stack.first().map(String::as_str), Some("ui-monospace"));
        assert_eq!(stack.last().map(String::as_str), Some("monospace"));
    }
}
