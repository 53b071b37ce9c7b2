//! Wrapping plain style descriptions into style trees

use crate::config::Config;
use crate::custom_property::CustomProperty;
use crate::node::{plain, Primitive, StyleMap, StyleNode};
use crate::selector::dash_case;
use crate::tree::StyleTree;
use std::fmt::Debug;
use std::sync::Arc;

/// Decides what a plain leaf becomes inside a wrapped tree.
///
/// Only called for non-object leaves, and only when the active
/// configuration has `custom_properties` enabled.
pub trait WrapHandler: Debug + Send + Sync {
    fn leaf(&self, path: &[String], value: Primitive, config: &Config) -> StyleNode;
}

/// Turns every leaf into a [`CustomProperty`] keyed by its path
#[derive(Clone, Copy, Debug, Default)]
pub struct CustomPropertyHandler;

impl WrapHandler for CustomPropertyHandler {
    fn leaf(&self, path: &[String], value: Primitive, config: &Config) -> StyleNode {
        StyleNode::Custom(CustomProperty::new(
            custom_property_key(path),
            value,
            config.clone(),
        ))
    }
}

/// Generated custom property key for a leaf path.
///
/// Each segment keeps only characters allowed in a CSS custom property name
/// (so whitespace, `&` and `:` go), loses the word `variants`, then gets
/// dash-cased. Segments left empty are dropped.
pub fn custom_property_key(path: &[String]) -> String {
    path.iter()
        .map(|segment| {
            let stripped: String = segment.chars().filter(|c| is_name_char(*c)).collect();
            dash_case(&stripped.replace("variants", ""))
        })
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || (!c.is_ascii() && !c.is_whitespace())
}

/// Wrap `source` under `config`, using `handler` for leaves
pub fn wrap(source: StyleMap, handler: Arc<dyn WrapHandler>, config: &Config) -> StyleTree {
    let defaults = plain(&source);
    let mut root = defaults.clone();
    wrap_in_place(&mut root, Vec::new(), handler.as_ref(), config);
    StyleTree::from_parts(defaults, root, handler, config.clone())
}

/// Depth-first pass over `root` with an explicit stack, converting leaves in
/// place. `base` is the path of `root` inside the full tree.
pub(crate) fn wrap_in_place(
    root: &mut StyleMap,
    base: Vec<String>,
    handler: &dyn WrapHandler,
    config: &Config,
) {
    let mut stack: Vec<(Vec<String>, &mut StyleMap)> = vec![(base, root)];

    while let Some((path, map)) = stack.pop() {
        if config.custom_properties {
            for (key, node) in map.iter_mut() {
                if let StyleNode::Leaf(value) = &*node {
                    let leaf_path = child_path(&path, key);
                    *node = handler.leaf(&leaf_path, value.clone(), config);
                }
            }
        }

        for (key, node) in map.iter_mut() {
            if let StyleNode::Object(child) = node {
                stack.push((child_path(&path, key), child));
            }
        }
    }
}

fn child_path(path: &[String], key: &str) -> Vec<String> {
    let mut child = Vec::with_capacity(path.len() + 1);
    child.extend_from_slice(path);
    child.push(key.to_string());
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigPatch;
    use crate::node::map_from_json;
    use serde_json::json;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_custom_property_key_strips_segments() {
        assert_eq!(
            custom_property_key(&path(&["button", "variants", "primary", "backgroundColor"])),
            "button-primary-background-color"
        );
        assert_eq!(
            custom_property_key(&path(&["card", "& .title", "fontSize"])),
            "card-title-font-size"
        );
        assert_eq!(
            custom_property_key(&path(&["button", "primary", "&:hover", "color"])),
            "button-primary-hover-color"
        );
        assert_eq!(custom_property_key(&path(&["&::after", "content"])), "after-content");
        assert_eq!(custom_property_key(&path(&["variants", "ghost"])), "ghost");
    }

    #[test]
    fn test_wrap_handles_deep_descriptions() {
        let mut source = crate::style_map! { "color" => "red" };
        for _ in 0..200 {
            source = crate::style_map! { "a" => source };
        }

        let tree = wrap(source, Arc::new(CustomPropertyHandler), &Config::default());

        let mut leaf = vec!["a"; 200];
        leaf.push("color");
        let StyleNode::Custom(prop) = tree.get(&leaf).unwrap() else {
            panic!("expected custom property");
        };
        assert_eq!(prop.name(), format!("--spark{}-color", "-a".repeat(200)));
        assert_eq!(
            tree.selector(&leaf[..200]),
            Some(format!("spark{}", "-a".repeat(200)).as_str())
        );
    }

    #[test]
    fn test_wrap_converts_leaves_to_custom_properties() {
        let source = map_from_json(json!({
            "button": { "color": "red", "sizes": { "sm": { "height": 24 } } }
        }))
        .unwrap();

        let tree = wrap(source, Arc::new(CustomPropertyHandler), &Config::default());

        let StyleNode::Custom(prop) = tree.get(&["button", "sizes", "sm", "height"]).unwrap() else {
            panic!("expected custom property");
        };
        assert_eq!(prop.name(), "--spark-button-sizes-sm-height");
        assert_eq!(prop.value(), &Primitive::Number(24.0));
    }

    #[test]
    fn test_wrap_keeps_leaves_when_disabled() {
        let source = map_from_json(json!({ "button": { "color": "red" } })).unwrap();
        let config = Config::default().fork(&ConfigPatch::new().custom_properties(false));

        let tree = wrap(source, Arc::new(CustomPropertyHandler), &config);

        assert_eq!(
            tree.get(&["button", "color"]),
            Some(&StyleNode::Leaf(Primitive::Str("red".into())))
        );
    }

    #[derive(Debug)]
    struct UppercaseHandler;

    impl WrapHandler for UppercaseHandler {
        fn leaf(&self, _path: &[String], value: Primitive, _config: &Config) -> StyleNode {
            match value {
                Primitive::Str(s) => StyleNode::Leaf(Primitive::Str(s.to_uppercase())),
                other => StyleNode::Leaf(other),
            }
        }
    }

    #[test]
    fn test_wrap_uses_custom_handler() {
        let source = map_from_json(json!({ "a": { "b": "red" } })).unwrap();
        let tree = wrap(source, Arc::new(UppercaseHandler), &Config::default());
        assert_eq!(tree.get(&["a", "b"]), Some(&StyleNode::from("RED")));
    }
}
