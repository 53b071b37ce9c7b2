//! Tooltip tokens
//!
//! Tooltips use inverted surface colors: dark on a light theme and light on
//! a dark one.

use crate::theme::{Theme, ThemeBundle, ThemeMode};
use crate::tokens::*;
use crate::tree::TokenTree;
use spark_core::{style_map, StyleMap};

pub fn tooltip_tokens(bundle: &ThemeBundle) -> TokenTree {
    let theme = bundle.light();

    TokenTree::new("tooltip")
        .with_properties(style_map! {
            "maxWidth" => "240px",
            "offset" => theme.spacing.css(SpacingToken::Space2),
            "zIndex" => 50,
        })
        .with_component(style_map! {
            "surface" => style_map! {
                "paddingBlock" => theme.spacing.css(SpacingToken::Space1),
                "paddingInline" => theme.spacing.css(SpacingToken::Space2),
                "borderRadius" => theme.radii.css(RadiusToken::Sm),
                "fontSize" => theme.typography.size_css(FontSizeToken::Xs),
                "animation" => "spark-tooltip-fade-in 120ms ease-out",
            },
            "arrow" => style_map! { "size" => "6px" },
        })
        .with_variant(ThemeMode::Light, colors(bundle.light()))
        .with_variant(ThemeMode::Dark, colors(bundle.dark()))
        .with_keyframes(
            "fadeIn",
            style_map! {
                "from" => style_map! { "opacity" => 0, "transform" => "translateY(2px)" },
                "to" => style_map! { "opacity" => 1, "transform" => "translateY(0)" },
            },
        )
        .with_supports(
            "(backdrop-filter: blur(4px))",
            style_map! {
                "surface" => style_map! { "backdropFilter" => "blur(4px)" },
            },
        )
}

fn colors(theme: &Theme) -> StyleMap {
    style_map! {
        "surface" => style_map! {
            "backgroundColor" => theme.colors.tooltip_bg.to_css(),
            "color" => theme.colors.tooltip_text.to_css(),
            "boxShadow" => theme.shadows.get(ShadowToken::Md).to_css(),
        },
        "arrow" => style_map! { "color" => theme.colors.tooltip_bg.to_css() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::SparkTheme;
    use pretty_assertions::assert_eq;
    use spark_core::ConfigPatch;

    #[test]
    fn test_tooltip_colors_invert() {
        let tree = tooltip_tokens(&SparkTheme::bundle());

        let light = tree.to_js(ThemeMode::Light);
        assert_eq!(
            light["component"]["surface"]["backgroundColor"],
            "var(--spark-tooltip-surface-background-color)"
        );

        let light = tree.css(ThemeMode::Light, &ConfigPatch::default());
        let dark = tree.css(ThemeMode::Dark, &ConfigPatch::default());
        assert!(light.contains("--spark-tooltip-surface-background-color: #0f172a;"));
        assert!(dark.contains("--spark-tooltip-surface-background-color: #f1f5f9;"));
    }

    #[test]
    fn test_tooltip_animation_matches_keyframes() {
        let tree = tooltip_tokens(&SparkTheme::bundle());
        let css = tree.css(ThemeMode::Light, &ConfigPatch::default());

        let name = tree.keyframe_name("fadeIn");
        assert_eq!(name, "spark-tooltip-fade-in");
        assert!(css.contains(&format!("@keyframes {name} {{")));
        assert!(css.contains(&format!("--spark-tooltip-surface-animation: {name} 120ms ease-out;")));
        assert!(css.contains("@supports (backdrop-filter: blur(4px)) {"));
    }
}
