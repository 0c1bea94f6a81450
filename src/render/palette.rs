//! Named color palettes keyed by element category.
//!
//! Multiple palettes coexist so hosts can offer a display choice. Lookups
//! never fail: an unknown palette name falls back to the default palette and
//! an unknown category falls back to a fixed sentinel color.

use image::Rgb;

/// Name of the palette used when an unknown palette name is requested.
pub const DEFAULT_SCHEME: &str = "Default";

/// Color used for categories that a palette does not know about.
pub const FALLBACK_COLOR: Rgb<u8> = Rgb([255, 100, 100]);

/// A named mapping from category label to display color.
#[derive(Debug)]
pub struct ColorScheme {
    name: &'static str,
    colors: &'static [(&'static str, Rgb<u8>)],
}

static DEFAULT_COLORS: &[(&str, Rgb<u8>)] = &[
    ("Title", Rgb([255, 0, 0])),
    ("NarrativeText", Rgb([0, 255, 0])),
    ("ListItem", Rgb([0, 0, 255])),
    ("Table", Rgb([255, 165, 0])),
    ("Image", Rgb([255, 0, 255])),
    ("Header", Rgb([255, 255, 0])),
    ("Footer", Rgb([0, 255, 255])),
    ("PageBreak", Rgb([128, 128, 128])),
    ("UncategorizedText", Rgb([128, 0, 128])),
];

static HIGH_CONTRAST_COLORS: &[(&str, Rgb<u8>)] = &[
    ("Title", Rgb([255, 0, 0])),
    ("NarrativeText", Rgb([0, 255, 0])),
    ("ListItem", Rgb([0, 0, 255])),
    ("Table", Rgb([255, 255, 0])),
    ("Image", Rgb([255, 0, 255])),
    ("Header", Rgb([0, 255, 255])),
    ("Footer", Rgb([255, 128, 0])),
    ("PageBreak", Rgb([255, 255, 255])),
    ("UncategorizedText", Rgb([128, 255, 128])),
];

static PASTEL_COLORS: &[(&str, Rgb<u8>)] = &[
    ("Title", Rgb([255, 182, 193])),
    ("NarrativeText", Rgb([173, 216, 230])),
    ("ListItem", Rgb([221, 160, 221])),
    ("Table", Rgb([255, 218, 185])),
    ("Image", Rgb([216, 191, 216])),
    ("Header", Rgb([255, 250, 205])),
    ("Footer", Rgb([176, 224, 230])),
    ("PageBreak", Rgb([211, 211, 211])),
    ("UncategorizedText", Rgb([255, 228, 196])),
];

static MONOCHROME_COLORS: &[(&str, Rgb<u8>)] = &[
    ("Title", Rgb([255, 255, 255])),
    ("NarrativeText", Rgb([220, 220, 220])),
    ("ListItem", Rgb([180, 180, 180])),
    ("Table", Rgb([140, 140, 140])),
    ("Image", Rgb([100, 100, 100])),
    ("Header", Rgb([255, 255, 255])),
    ("Footer", Rgb([200, 200, 200])),
    ("PageBreak", Rgb([160, 160, 160])),
    ("UncategorizedText", Rgb([120, 120, 120])),
];

static SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        name: DEFAULT_SCHEME,
        colors: DEFAULT_COLORS,
    },
    ColorScheme {
        name: "High Contrast",
        colors: HIGH_CONTRAST_COLORS,
    },
    ColorScheme {
        name: "Pastel",
        colors: PASTEL_COLORS,
    },
    ColorScheme {
        name: "Monochrome",
        colors: MONOCHROME_COLORS,
    },
];

impl ColorScheme {
    /// Looks up a palette by name, falling back to the default palette when
    /// the name is unknown.
    pub fn named(name: &str) -> &'static ColorScheme {
        SCHEMES
            .iter()
            .find(|scheme| scheme.name == name)
            .unwrap_or(&SCHEMES[0])
    }

    /// The palette's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the color for a category, falling back to
    /// [`FALLBACK_COLOR`] for categories the palette does not know about.
    pub fn color_for(&self, category: &str) -> Rgb<u8> {
        self.colors
            .iter()
            .find(|(label, _)| *label == category)
            .map(|(_, color)| *color)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Iterates the palette's `(category, color)` entries, e.g. for a legend.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Rgb<u8>)> + '_ {
        self.colors.iter().copied()
    }

    /// Names of all available palettes.
    pub fn available() -> impl Iterator<Item = &'static str> {
        SCHEMES.iter().map(|scheme| scheme.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lookup_and_fallback() {
        assert_eq!(ColorScheme::named("Pastel").name(), "Pastel");
        assert_eq!(ColorScheme::named("Nonexistent").name(), DEFAULT_SCHEME);
    }

    #[test]
    fn test_color_for_known_category() {
        let scheme = ColorScheme::named("Default");
        assert_eq!(scheme.color_for("Title"), Rgb([255, 0, 0]));
        assert_eq!(scheme.color_for("Table"), Rgb([255, 165, 0]));
    }

    #[test]
    fn test_color_for_unknown_category_uses_sentinel() {
        let scheme = ColorScheme::named("High Contrast");
        assert_eq!(scheme.color_for("Sidebar"), FALLBACK_COLOR);
    }

    #[test]
    fn test_all_palettes_cover_the_same_categories() {
        let default_labels: Vec<_> = ColorScheme::named("Default")
            .entries()
            .map(|(label, _)| label)
            .collect();
        for name in ColorScheme::available() {
            let labels: Vec<_> = ColorScheme::named(name)
                .entries()
                .map(|(label, _)| label)
                .collect();
            assert_eq!(labels, default_labels, "palette {name}");
        }
    }
}
