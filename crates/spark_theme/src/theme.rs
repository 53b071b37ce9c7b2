//! Themes, theme modes and light/dark pairs

use crate::error::ThemeError;
use crate::tokens::*;
use serde::{Deserialize, Serialize};
use spark_core::{style_map, Config, ConfigPatch, StyleMap, StyleTree};
use std::fmt;
use std::str::FromStr;

/// Light or dark rendering mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeError::UnknownMode(s.to_string())),
        }
    }
}

/// A value per theme mode
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenPair<T> {
    pub light: T,
    pub dark: T,
}

impl<T> TokenPair<T> {
    pub fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    pub fn for_mode(&self, mode: ThemeMode) -> &T {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn for_mode_mut(&mut self, mode: ThemeMode) -> &mut T {
        match mode {
            ThemeMode::Light => &mut self.light,
            ThemeMode::Dark => &mut self.dark,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> TokenPair<U> {
        TokenPair {
            light: f(&self.light),
            dark: f(&self.dark),
        }
    }
}

/// Every token value for one mode
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub typography: TypographyTokens,
    pub shadows: ShadowTokens,
}

impl Theme {
    /// Token values as a style description, grouped by kind
    pub fn to_style_map(&self) -> StyleMap {
        let colors: StyleMap = ColorToken::ALL
            .into_iter()
            .map(|token| (token.name().to_string(), self.colors.get(token).to_css().into()))
            .collect();

        style_map! {
            "color" => colors,
            "spacing" => self.spacing.to_style_map(),
            "radius" => self.radii.to_style_map(),
            "typography" => self.typography.to_style_map(),
            "shadow" => self.shadows.to_style_map(),
        }
    }
}

/// Named light/dark theme pair
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    pub name: String,
    pub themes: TokenPair<Theme>,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: Theme, dark: Theme) -> Self {
        Self {
            name: name.into(),
            themes: TokenPair::new(light, dark),
        }
    }

    pub fn for_mode(&self, mode: ThemeMode) -> &Theme {
        self.themes.for_mode(mode)
    }

    pub fn light(&self) -> &Theme {
        &self.themes.light
    }

    pub fn dark(&self) -> &Theme {
        &self.themes.dark
    }

    pub fn to_style_map(&self, mode: ThemeMode) -> StyleMap {
        self.for_mode(mode).to_style_map()
    }

    /// Token tree for one mode, every token a custom property
    pub fn style_tree(&self, mode: ThemeMode, config: &Config) -> StyleTree {
        StyleTree::new(self.to_style_map(mode), config)
    }

    /// Token declarations for both modes: light under `:root`, dark under
    /// `[data-theme="dark"]`.
    pub fn stylesheet(&self, config: &Config) -> String {
        [ThemeMode::Light, ThemeMode::Dark]
            .into_iter()
            .map(|mode| {
                let selector = match mode {
                    ThemeMode::Light => ":root",
                    ThemeMode::Dark => "[data-theme=\"dark\"]",
                };
                self.style_tree(mode, config)
                    .css(&ConfigPatch::new().selector(selector))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
