//! Color tokens for theming

use std::fmt;

/// An sRGB color with straight alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn parse_hex(input: &str) -> Option<Self> {
        let digits = input.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&expanded, 16).ok().map(Self::from_hex)
            }
            _ => None,
        }
    }

    /// CSS color text: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        if self.a < 1.0 {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    SecondaryHover,

    // Semantic colors
    Success,
    Warning,
    Error,
    Info,

    // Surface colors
    Background,
    Surface,
    SurfaceElevated,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextInverse,

    // Border colors
    Border,
    BorderFocus,

    // Tooltip colors (inverted colors)
    TooltipBackground,
    TooltipText,
}

impl ColorToken {
    pub const ALL: [ColorToken; 19] = [
        ColorToken::Primary,
        ColorToken::PrimaryHover,
        ColorToken::PrimaryActive,
        ColorToken::Secondary,
        ColorToken::SecondaryHover,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Error,
        ColorToken::Info,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::SurfaceElevated,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextInverse,
        ColorToken::Border,
        ColorToken::BorderFocus,
        ColorToken::TooltipBackground,
        ColorToken::TooltipText,
    ];

    /// Dash-case name used for custom properties and override files
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryHover => "primary-hover",
            ColorToken::PrimaryActive => "primary-active",
            ColorToken::Secondary => "secondary",
            ColorToken::SecondaryHover => "secondary-hover",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Error => "error",
            ColorToken::Info => "info",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::SurfaceElevated => "surface-elevated",
            ColorToken::TextPrimary => "text-primary",
            ColorToken::TextSecondary => "text-secondary",
            ColorToken::TextInverse => "text-inverse",
            ColorToken::Border => "border",
            ColorToken::BorderFocus => "border-focus",
            ColorToken::TooltipBackground => "tooltip-bg",
            ColorToken::TooltipText => "tooltip-text",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub secondary: Color,
    pub secondary_hover: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_inverse: Color,

    pub border: Color,
    pub border_focus: Color,

    pub tooltip_bg: Color,
    pub tooltip_text: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::PrimaryActive => self.primary_active,
            ColorToken::Secondary => self.secondary,
            ColorToken::SecondaryHover => self.secondary_hover,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::Info => self.info,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceElevated => self.surface_elevated,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::Border => self.border,
            ColorToken::BorderFocus => self.border_focus,
            ColorToken::TooltipBackground => self.tooltip_bg,
            ColorToken::TooltipText => self.tooltip_text,
        }
    }

    /// Replace a single color
    pub fn set(&mut self, token: ColorToken, color: Color) {
        let slot = match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryHover => &mut self.primary_hover,
            ColorToken::PrimaryActive => &mut self.primary_active,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::SecondaryHover => &mut self.secondary_hover,
            ColorToken::Success => &mut self.success,
            ColorToken::Warning => &mut self.warning,
            ColorToken::Error => &mut self.error,
            ColorToken::Info => &mut self.info,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::SurfaceElevated => &mut self.surface_elevated,
            ColorToken::TextPrimary => &mut self.text_primary,
            ColorToken::TextSecondary => &mut self.text_secondary,
            ColorToken::TextInverse => &mut self.text_inverse,
            ColorToken::Border => &mut self.border,
            ColorToken::BorderFocus => &mut self.border_focus,
            ColorToken::TooltipBackground => &mut self.tooltip_bg,
            ColorToken::TooltipText => &mut self.tooltip_text,
        };
        *slot = color;
    }
}
