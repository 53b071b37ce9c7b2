//! Spacing tokens (4px-based scale)

use spark_core::StyleMap;

/// Spacing scale token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Space1,
    Space2,
    Space3,
    Space4,
    Space6,
    Space8,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 6] = [
        SpacingToken::Space1,
        SpacingToken::Space2,
        SpacingToken::Space3,
        SpacingToken::Space4,
        SpacingToken::Space6,
        SpacingToken::Space8,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpacingToken::Space1 => "space-1",
            SpacingToken::Space2 => "space-2",
            SpacingToken::Space3 => "space-3",
            SpacingToken::Space4 => "space-4",
            SpacingToken::Space6 => "space-6",
            SpacingToken::Space8 => "space-8",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Spacing values in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub space_1: f32,
    pub space_2: f32,
    pub space_3: f32,
    pub space_4: f32,
    pub space_6: f32,
    pub space_8: f32,
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Space1 => self.space_1,
            SpacingToken::Space2 => self.space_2,
            SpacingToken::Space3 => self.space_3,
            SpacingToken::Space4 => self.space_4,
            SpacingToken::Space6 => self.space_6,
            SpacingToken::Space8 => self.space_8,
        }
    }

    pub fn set(&mut self, token: SpacingToken, value: f32) {
        match token {
            SpacingToken::Space1 => self.space_1 = value,
            SpacingToken::Space2 => self.space_2 = value,
            SpacingToken::Space3 => self.space_3 = value,
            SpacingToken::Space4 => self.space_4 = value,
            SpacingToken::Space6 => self.space_6 = value,
            SpacingToken::Space8 => self.space_8 = value,
        }
    }

    /// CSS length for a token, e.g. `8px`
    pub fn css(&self, token: SpacingToken) -> String {
        super::px(self.get(token))
    }

    pub fn to_style_map(&self) -> StyleMap {
        SpacingToken::ALL
            .into_iter()
            .map(|token| (token.name().to_string(), self.css(token).into()))
            .collect()
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            space_1: 4.0,
            space_2: 8.0,
            space_3: 12.0,
            space_4: 16.0,
            space_6: 24.0,
            space_8: 32.0,
        }
    }
}
