//! Default Spark theme
//!
//! One neutral gray ramp plus blue, violet, green, amber, red and sky
//! accents. Light mode uses the 600 shades for brand colors, dark mode the
//! 400 shades so contrast holds on the dark surfaces.

use crate::theme::{Theme, ThemeBundle, ThemeMode};
use crate::tokens::*;

/// Spark base palette
pub mod palette {
    use crate::tokens::Color;

    pub const GRAY_50: Color = Color::from_hex(0xF8FAFC);
    pub const GRAY_100: Color = Color::from_hex(0xF1F5F9);
    pub const GRAY_200: Color = Color::from_hex(0xE2E8F0);
    pub const GRAY_300: Color = Color::from_hex(0xCBD5E1);
    pub const GRAY_400: Color = Color::from_hex(0x94A3B8);
    pub const GRAY_500: Color = Color::from_hex(0x64748B);
    pub const GRAY_600: Color = Color::from_hex(0x475569);
    pub const GRAY_700: Color = Color::from_hex(0x334155);
    pub const GRAY_800: Color = Color::from_hex(0x1E293B);
    pub const GRAY_900: Color = Color::from_hex(0x0F172A);
    pub const GRAY_950: Color = Color::from_hex(0x020617);

    pub const BLUE_300: Color = Color::from_hex(0x93C5FD);
    pub const BLUE_400: Color = Color::from_hex(0x60A5FA);
    pub const BLUE_500: Color = Color::from_hex(0x3B82F6);
    pub const BLUE_600: Color = Color::from_hex(0x2563EB);
    pub const BLUE_700: Color = Color::from_hex(0x1D4ED8);
    pub const BLUE_800: Color = Color::from_hex(0x1E40AF);

    pub const VIOLET_400: Color = Color::from_hex(0xA78BFA);
    pub const VIOLET_300: Color = Color::from_hex(0xC4B5FD);
    pub const VIOLET_600: Color = Color::from_hex(0x7C3AED);
    pub const VIOLET_700: Color = Color::from_hex(0x6D28D9);

    pub const GREEN_400: Color = Color::from_hex(0x4ADE80);
    pub const GREEN_600: Color = Color::from_hex(0x16A34A);
    pub const AMBER_400: Color = Color::from_hex(0xFBBF24);
    pub const AMBER_600: Color = Color::from_hex(0xD97706);
    pub const RED_400: Color = Color::from_hex(0xF87171);
    pub const RED_600: Color = Color::from_hex(0xDC2626);
    pub const SKY_400: Color = Color::from_hex(0x38BDF8);
    pub const SKY_600: Color = Color::from_hex(0x0284C7);
}

/// Default Spark theme
pub struct SparkTheme;

impl SparkTheme {
    pub const NAME: &'static str = "Spark";

    pub fn light() -> Theme {
        use palette::*;

        Theme {
            mode: ThemeMode::Light,
            colors: ColorTokens {
                primary: BLUE_600,
                primary_hover: BLUE_700,
                primary_active: BLUE_800,
                secondary: VIOLET_600,
                secondary_hover: VIOLET_700,
                success: GREEN_600,
                warning: AMBER_600,
                error: RED_600,
                info: SKY_600,
                background: GRAY_50,
                surface: Color::WHITE,
                surface_elevated: Color::WHITE,
                text_primary: GRAY_900,
                text_secondary: GRAY_600,
                text_inverse: Color::WHITE,
                border: GRAY_200,
                border_focus: BLUE_500,
                // Tooltip (inverted for light theme)
                tooltip_bg: GRAY_900,
                tooltip_text: GRAY_50,
            },
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            typography: TypographyTokens::default(),
            shadows: ShadowTokens::light(),
        }
    }

    pub fn dark() -> Theme {
        use palette::*;

        Theme {
            mode: ThemeMode::Dark,
            colors: ColorTokens {
                primary: BLUE_400,
                primary_hover: BLUE_300,
                primary_active: BLUE_500,
                secondary: VIOLET_400,
                secondary_hover: VIOLET_300,
                success: GREEN_400,
                warning: AMBER_400,
                error: RED_400,
                info: SKY_400,
                background: GRAY_950,
                surface: GRAY_900,
                surface_elevated: GRAY_800,
                text_primary: GRAY_50,
                text_secondary: GRAY_400,
                text_inverse: GRAY_950,
                border: GRAY_700,
                border_focus: BLUE_400,
                // Tooltip (inverted for dark theme)
                tooltip_bg: GRAY_100,
                tooltip_text: GRAY_900,
            },
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            typography: TypographyTokens::default(),
            shadows: ShadowTokens::dark(),
        }
    }

    /// Create a theme bundle with light and dark variants
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new(Self::NAME, Self::light(), Self::dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_are_tagged() {
        let bundle = SparkTheme::bundle();
        assert_eq!(bundle.light().mode, ThemeMode::Light);
        assert_eq!(bundle.dark().mode, ThemeMode::Dark);
        assert_eq!(bundle.name, "Spark");
    }

    #[test]
    fn test_primary_differs_between_modes() {
        let bundle = SparkTheme::bundle();
        assert_ne!(
            bundle.light().colors.get(ColorToken::Primary),
            bundle.dark().colors.get(ColorToken::Primary)
        );
    }

    #[test]
    fn test_tooltip_is_inverted() {
        let light = SparkTheme::light();
        assert_eq!(light.colors.tooltip_bg, light.colors.text_primary);
    }
}
