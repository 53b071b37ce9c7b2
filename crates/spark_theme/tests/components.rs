use pretty_assertions::assert_eq;
use spark_core::{style_map, ConfigPatch};
use spark_theme::{
    Color, ColorToken, Component, SparkTheme, ThemeMode, ThemeOverrides, TokenTree,
};

#[test]
fn component_catalog_contains_expected_components() {
    let mut ids: Vec<&str> = Component::all().iter().map(|c| c.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["button", "tooltip"]);
}

#[test]
fn every_component_renders_both_modes() {
    let bundle = SparkTheme::bundle();
    for component in Component::all() {
        let tree = component.tokens(&bundle);
        let light = tree.css(ThemeMode::Light, &ConfigPatch::default());
        let dark = tree.css(ThemeMode::Dark, &ConfigPatch::default());

        let class = format!(".spark-{} {{\n", component.id());
        assert!(light.starts_with(&class), "component {component}: {light}");
        assert!(dark.starts_with(&class), "component {component}: {dark}");
        assert_ne!(light, dark, "component {component} should differ by mode");
    }
}

#[test]
fn overrides_flow_into_component_tokens() {
    let overrides = ThemeOverrides::new().color(ColorToken::Primary, Color::from_hex(0xFF5500));
    let bundle = overrides.apply_bundle(&SparkTheme::bundle());

    let css = Component::Button
        .tokens(&bundle)
        .css(ThemeMode::Dark, &ConfigPatch::default());

    assert!(css.contains("--spark-button-primary-background-color: #ff5500;"));
}

#[test]
fn component_css_respects_call_site_selector() {
    let tree = Component::Tooltip.tokens(&SparkTheme::bundle());
    let css = tree.css(ThemeMode::Light, &ConfigPatch::new().selector("[data-tooltip]"));

    assert!(css.starts_with("[data-tooltip] {\n"));
    assert!(css.contains("@supports (backdrop-filter: blur(4px)) {\n  [data-tooltip] {\n"));
}

#[test]
fn forked_button_keeps_original_sizes() {
    let tree = Component::Button.tokens(&SparkTheme::bundle());
    let forked = tree
        .fork(&style_map! {
            "sizes" => style_map! {
                "sm" => style_map! { "fontSize" => "11px" },
            },
        })
        .unwrap();

    let original = tree.css(ThemeMode::Light, &ConfigPatch::default());
    let derived = forked.css(ThemeMode::Light, &ConfigPatch::default());

    assert!(original.contains("--spark-button-sizes-sm-font-size: 12px;"));
    assert!(derived.contains("--spark-button-sizes-sm-font-size: 11px;"));
    assert!(derived.contains("--spark-button-sizes-sm-padding-block: 4px;"));
}

#[test]
fn token_tree_from_toml_renders_like_builder() {
    let parsed = TokenTree::from_toml_str(
        "badge",
        r##"
        [properties]
        radius = "9999px"

        [component.dot]
        size = 6

        [dark.dot]
        color = "#f87171"

        [keyframes.pulse.from]
        opacity = 1

        [keyframes.pulse.to]
        opacity = 0.4
        "##,
    )
    .unwrap();

    assert_eq!(
        parsed.css(ThemeMode::Dark, &ConfigPatch::default()),
        ".spark-badge {\n  \
         --spark-badge-radius: 9999px;\n  \
         --spark-badge-dot-size: 6;\n  \
         --spark-badge-dot-color: #f87171;\n}\n\n\
         @keyframes spark-badge-pulse {\n  from {\n    opacity: 1;\n  }\n  to {\n    opacity: 0.4;\n  }\n}"
    );
}
