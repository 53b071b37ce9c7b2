//! Typography tokens

use spark_core::{style_map, StyleMap};

/// Font size scale
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontSizeToken {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
}

impl FontSizeToken {
    pub const ALL: [FontSizeToken; 5] = [
        FontSizeToken::Xs,
        FontSizeToken::Sm,
        FontSizeToken::Base,
        FontSizeToken::Lg,
        FontSizeToken::Xl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontSizeToken::Xs => "xs",
            FontSizeToken::Sm => "sm",
            FontSizeToken::Base => "base",
            FontSizeToken::Lg => "lg",
            FontSizeToken::Xl => "xl",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub font_sans: String,
    pub font_mono: String,
    pub text_xs: f32,
    pub text_sm: f32,
    pub text_base: f32,
    pub text_lg: f32,
    pub text_xl: f32,
    pub weight_normal: u16,
    pub weight_medium: u16,
    pub weight_semibold: u16,
    pub line_height: f32,
}

impl TypographyTokens {
    pub fn size(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::Xs => self.text_xs,
            FontSizeToken::Sm => self.text_sm,
            FontSizeToken::Base => self.text_base,
            FontSizeToken::Lg => self.text_lg,
            FontSizeToken::Xl => self.text_xl,
        }
    }

    pub fn size_css(&self, token: FontSizeToken) -> String {
        super::px(self.size(token))
    }

    pub fn to_style_map(&self) -> StyleMap {
        let sizes: StyleMap = FontSizeToken::ALL
            .into_iter()
            .map(|token| (token.name().to_string(), self.size_css(token).into()))
            .collect();

        style_map! {
            "fontSans" => self.font_sans.clone(),
            "fontMono" => self.font_mono.clone(),
            "size" => sizes,
            "weight" => style_map! {
                "normal" => f64::from(self.weight_normal),
                "medium" => f64::from(self.weight_medium),
                "semibold" => f64::from(self.weight_semibold),
            },
            "lineHeight" => f64::from(self.line_height),
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_sans: "Inter, system-ui, sans-serif".to_string(),
            font_mono: "\"JetBrains Mono\", ui-monospace, monospace".to_string(),
            text_xs: 12.0,
            text_sm: 14.0,
            text_base: 16.0,
            text_lg: 18.0,
            text_xl: 20.0,
            weight_normal: 400,
            weight_medium: 500,
            weight_semibold: 600,
            line_height: 1.5,
        }
    }
}
