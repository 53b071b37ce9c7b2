//! Button tokens

use crate::theme::{Theme, ThemeBundle, ThemeMode};
use crate::tokens::*;
use crate::tree::TokenTree;
use spark_core::{style_map, StyleMap};

pub fn button_tokens(bundle: &ThemeBundle) -> TokenTree {
    let theme = bundle.light();
    let spacing = &theme.spacing;
    let typography = &theme.typography;

    let size = |block: SpacingToken, inline: SpacingToken, font: FontSizeToken| {
        style_map! {
            "paddingBlock" => spacing.css(block),
            "paddingInline" => spacing.css(inline),
            "fontSize" => typography.size_css(font),
        }
    };

    TokenTree::new("button")
        .with_properties(style_map! {
            "radius" => theme.radii.css(RadiusToken::Md),
            "fontFamily" => typography.font_sans.clone(),
            "fontWeight" => f64::from(typography.weight_medium),
            "transition" => "background-color 150ms ease, transform 100ms ease",
        })
        .with_component(style_map! {
            "sizes" => style_map! {
                "sm" => size(SpacingToken::Space1, SpacingToken::Space2, FontSizeToken::Xs),
                "md" => size(SpacingToken::Space2, SpacingToken::Space3, FontSizeToken::Sm),
                "lg" => size(SpacingToken::Space3, SpacingToken::Space4, FontSizeToken::Base),
            },
        })
        .with_variant(ThemeMode::Light, variants(bundle.light()))
        .with_variant(ThemeMode::Dark, variants(bundle.dark()))
        .with_keyframes(
            "pressed",
            style_map! {
                "0%" => style_map! { "transform" => "scale(1)" },
                "50%" => style_map! { "transform" => "scale(0.97)" },
                "100%" => style_map! { "transform" => "scale(1)" },
            },
        )
        .with_media(
            "(max-width: 640px)",
            style_map! {
                "sizes" => style_map! {
                    "lg" => style_map! { "paddingInline" => spacing.css(SpacingToken::Space3) },
                },
            },
        )
}

/// Color variants for one mode
fn variants(theme: &Theme) -> StyleMap {
    let colors = &theme.colors;

    style_map! {
        "variants" => style_map! {
            "primary" => style_map! {
                "backgroundColor" => colors.primary.to_css(),
                "color" => colors.text_inverse.to_css(),
                "&:hover" => style_map! { "backgroundColor" => colors.primary_hover.to_css() },
                "&:active" => style_map! { "backgroundColor" => colors.primary_active.to_css() },
            },
            "secondary" => style_map! {
                "backgroundColor" => colors.secondary.to_css(),
                "color" => colors.text_inverse.to_css(),
                "&:hover" => style_map! { "backgroundColor" => colors.secondary_hover.to_css() },
            },
            "ghost" => style_map! {
                "backgroundColor" => Color::TRANSPARENT.to_css(),
                "color" => colors.text_primary.to_css(),
                "borderColor" => colors.border.to_css(),
                "&:hover" => style_map! { "backgroundColor" => colors.surface_elevated.to_css() },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::SparkTheme;
    use spark_core::ConfigPatch;

    #[test]
    fn test_button_selectors() {
        let tree = button_tokens(&SparkTheme::bundle());
        let component = tree.component(ThemeMode::Light);

        assert_eq!(component.selector(&[]), Some("spark-button"));
        assert_eq!(component.selector(&["sizes", "lg"]), Some("spark-button-sizes-lg"));
        assert_eq!(
            component.selector(&["variants", "primary"]),
            Some("spark-button-variants-primary")
        );
    }

    #[test]
    fn test_button_css_per_mode() {
        let tree = button_tokens(&SparkTheme::bundle());

        let light = tree.css(ThemeMode::Light, &ConfigPatch::default());
        let dark = tree.css(ThemeMode::Dark, &ConfigPatch::default());

        assert!(light.starts_with(".spark-button {\n  --spark-button-radius: 6px;\n"));
        assert!(light.contains("--spark-button-primary-background-color: #2563eb;"));
        assert!(light.contains("--spark-button-primary-hover-background-color: #1d4ed8;"));
        assert!(dark.contains("--spark-button-primary-background-color: #60a5fa;"));
        assert!(light.contains("@keyframes spark-button-pressed {"));
        assert!(light.contains(
            "@media (max-width: 640px) {\n  .spark-button {\n    --spark-button-sizes-lg-padding-inline: 12px;\n  }\n}"
        ));
    }
}
