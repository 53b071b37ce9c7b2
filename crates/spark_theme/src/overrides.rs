//! Token overrides
//!
//! Overrides replace individual token values on top of a theme without
//! touching the theme itself. They can be built in code or read from TOML:
//!
//! ```toml
//! [colors]
//! primary = "#ff5500"
//!
//! [spacing]
//! space-4 = 20
//!
//! [radii]
//! md = 8
//! ```

use crate::error::{Result, ThemeError};
use crate::theme::{Theme, ThemeBundle};
use crate::tokens::*;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeOverrides {
    colors: FxHashMap<ColorToken, Color>,
    spacing: FxHashMap<SpacingToken, f32>,
    radii: FxHashMap<RadiusToken, f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OverridesFile {
    colors: IndexMap<String, String>,
    spacing: IndexMap<String, f32>,
    radii: IndexMap<String, f32>,
}

impl ThemeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, token: ColorToken, color: Color) -> Self {
        self.colors.insert(token, color);
        self
    }

    pub fn spacing(mut self, token: SpacingToken, value: f32) -> Self {
        self.spacing.insert(token, value);
        self
    }

    pub fn radius(mut self, token: RadiusToken, value: f32) -> Self {
        self.radii.insert(token, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.spacing.is_empty() && self.radii.is_empty()
    }

    /// Parse overrides from TOML. Unknown token names and malformed colors
    /// are errors.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Self::from_file(toml::from_str(input)?)
    }

    /// Same as [`ThemeOverrides::from_toml_str`] for an already parsed table
    pub fn from_toml_table(table: toml::Table) -> Result<Self> {
        Self::from_file(toml::Value::Table(table).try_into()?)
    }

    fn from_file(file: OverridesFile) -> Result<Self> {
        let mut overrides = Self::new();

        for (name, value) in file.colors {
            let token = ColorToken::from_name(&name).ok_or_else(|| ThemeError::UnknownToken {
                kind: "color",
                name: name.clone(),
            })?;
            let color = Color::parse_hex(&value).ok_or(ThemeError::InvalidColor(value))?;
            overrides.colors.insert(token, color);
        }
        for (name, value) in file.spacing {
            let token = SpacingToken::from_name(&name).ok_or_else(|| ThemeError::UnknownToken {
                kind: "spacing",
                name: name.clone(),
            })?;
            overrides.spacing.insert(token, value);
        }
        for (name, value) in file.radii {
            let token = RadiusToken::from_name(&name).ok_or_else(|| ThemeError::UnknownToken {
                kind: "radius",
                name: name.clone(),
            })?;
            overrides.radii.insert(token, value);
        }

        Ok(overrides)
    }

    /// Copy of `theme` with the overrides applied
    pub fn apply(&self, theme: &Theme) -> Theme {
        let mut theme = theme.clone();
        for (token, color) in &self.colors {
            theme.colors.set(*token, *color);
        }
        for (token, value) in &self.spacing {
            theme.spacing.set(*token, *value);
        }
        for (token, value) in &self.radii {
            theme.radii.set(*token, *value);
        }
        theme
    }

    /// Apply to both modes of a bundle
    pub fn apply_bundle(&self, bundle: &ThemeBundle) -> ThemeBundle {
        tracing::debug!(
            bundle = %bundle.name,
            colors = self.colors.len(),
            spacing = self.spacing.len(),
            radii = self.radii.len(),
            "applying theme overrides"
        );
        ThemeBundle::new(
            bundle.name.clone(),
            self.apply(bundle.light()),
            self.apply(bundle.dark()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::SparkTheme;

    #[test]
    fn test_apply_leaves_source_untouched() {
        let theme = SparkTheme::light();
        let overrides = ThemeOverrides::new()
            .color(ColorToken::Primary, Color::from_hex(0xFF5500))
            .spacing(SpacingToken::Space4, 20.0);

        let patched = overrides.apply(&theme);

        assert_eq!(patched.colors.primary, Color::from_hex(0xFF5500));
        assert_eq!(patched.spacing.space_4, 20.0);
        assert_eq!(theme.colors.primary, SparkTheme::light().colors.primary);
    }

    #[test]
    fn test_from_toml() {
        let overrides = ThemeOverrides::from_toml_str(
            r##"
            [colors]
            primary = "#ff5500"
            tooltip-bg = "#000"

            [radii]
            md = 8
            "##,
        )
        .unwrap();

        let theme = overrides.apply(&SparkTheme::dark());
        assert_eq!(theme.colors.primary, Color::rgb(255, 85, 0));
        assert_eq!(theme.colors.tooltip_bg, Color::BLACK);
        assert_eq!(theme.radii.md, 8.0);
    }

    #[test]
    fn test_from_toml_rejects_unknown_token() {
        let err = ThemeOverrides::from_toml_str("[colors]\nbrand = \"#ffffff\"").unwrap_err();
        assert!(matches!(
            err,
            ThemeError::UnknownToken { kind: "color", ref name } if name == "brand"
        ));
    }

    #[test]
    fn test_from_toml_table() {
        let table: toml::Table = toml::from_str("[spacing]\nspace-1 = 2").unwrap();
        let overrides = ThemeOverrides::from_toml_table(table).unwrap();
        assert_eq!(
            overrides,
            ThemeOverrides::new().spacing(SpacingToken::Space1, 2.0)
        );
        assert!(ThemeOverrides::from_toml_table(toml::Table::new()).unwrap().is_empty());
    }

    #[test]
    fn test_from_toml_rejects_bad_color() {
        let err = ThemeOverrides::from_toml_str("[colors]\nprimary = \"blue\"").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor(ref v) if v == "blue"));
    }
}
