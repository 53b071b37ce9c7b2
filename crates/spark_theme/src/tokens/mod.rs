//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Spacing (margins, padding)
//! - Border radii
//! - Typography (fonts, sizes, weights)
//! - Shadows

mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;

/// Pixel length without a trailing `.0`
pub(crate) fn px(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px() {
        assert_eq!(px(0.0), "0");
        assert_eq!(px(8.0), "8px");
        assert_eq!(px(-1.0), "-1px");
        assert_eq!(px(1.5), "1.5px");
    }

    #[test]
    fn test_shadow_css() {
        let shadow = Shadow::new(0.0, 1.0, 2.0, 0.0, Color::BLACK.with_alpha(0.05));
        assert_eq!(shadow.to_css(), "0 1px 2px 0 rgba(0,0,0,0.05)");
    }

    #[test]
    fn test_spacing_style_map_order() {
        let map = SpacingTokens::default().to_style_map();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["space-1", "space-2", "space-3", "space-4", "space-6", "space-8"]);
    }
}
