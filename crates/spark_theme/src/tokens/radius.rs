//! Border radius tokens

use spark_core::StyleMap;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Sm,
    Md,
    Lg,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 5] = [
        RadiusToken::None,
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Full,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RadiusToken::None => "none",
            RadiusToken::Sm => "sm",
            RadiusToken::Md => "md",
            RadiusToken::Lg => "lg",
            RadiusToken::Full => "full",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub none: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub full: f32,
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Full => self.full,
        }
    }

    pub fn set(&mut self, token: RadiusToken, value: f32) {
        match token {
            RadiusToken::None => self.none = value,
            RadiusToken::Sm => self.sm = value,
            RadiusToken::Md => self.md = value,
            RadiusToken::Lg => self.lg = value,
            RadiusToken::Full => self.full = value,
        }
    }

    pub fn css(&self, token: RadiusToken) -> String {
        super::px(self.get(token))
    }

    pub fn to_style_map(&self) -> StyleMap {
        RadiusToken::ALL
            .into_iter()
            .map(|token| (token.name().to_string(), self.css(token).into()))
            .collect()
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            sm: 4.0,
            md: 6.0,
            lg: 10.0,
            full: 9999.0,
        }
    }
}
