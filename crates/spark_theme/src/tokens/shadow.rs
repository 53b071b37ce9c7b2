//! Shadow tokens for theming

use super::color::Color;
use spark_core::StyleMap;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
}

impl ShadowToken {
    pub const ALL: [ShadowToken; 3] = [ShadowToken::Sm, ShadowToken::Md, ShadowToken::Lg];

    pub fn name(self) -> &'static str {
        match self {
            ShadowToken::Sm => "sm",
            ShadowToken::Md => "md",
            ShadowToken::Lg => "lg",
        }
    }
}

/// A box shadow definition
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    /// `box-shadow` value
    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} {} {}",
            super::px(self.offset_x),
            super::px(self.offset_y),
            super::px(self.blur),
            super::px(self.spread),
            self.color.to_css()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
}

impl ShadowTokens {
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
        }
    }

    /// Soft shadows for light surfaces
    pub fn light() -> Self {
        let ink = Color::BLACK;
        Self {
            sm: Shadow::new(0.0, 1.0, 2.0, 0.0, ink.with_alpha(0.05)),
            md: Shadow::new(0.0, 4.0, 6.0, -1.0, ink.with_alpha(0.1)),
            lg: Shadow::new(0.0, 10.0, 15.0, -3.0, ink.with_alpha(0.1)),
        }
    }

    /// Denser shadows so elevation still reads on dark surfaces
    pub fn dark() -> Self {
        let ink = Color::BLACK;
        Self {
            sm: Shadow::new(0.0, 1.0, 2.0, 0.0, ink.with_alpha(0.3)),
            md: Shadow::new(0.0, 4.0, 6.0, -1.0, ink.with_alpha(0.4)),
            lg: Shadow::new(0.0, 10.0, 15.0, -3.0, ink.with_alpha(0.5)),
        }
    }

    pub fn to_style_map(&self) -> StyleMap {
        ShadowToken::ALL
            .into_iter()
            .map(|token| (token.name().to_string(), self.get(token).to_css().into()))
            .collect()
    }
}
