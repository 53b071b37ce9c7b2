//! Selector paths for style trees
//!
//! Every object in a style description gets a class-name path built from its
//! dash-cased keys. Objects whose children are all objects are namespaces and
//! are descended into; any other object is a rule and only receives its own
//! selector.

use crate::node::{StyleMap, StyleNode};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Reserved key holding a node's selector
pub const SELECTOR_KEY: &str = "$";

/// Keys that can never be stored, overwritten or deleted in a style tree
pub const CONTROL_KEYS: [&str; 4] = [SELECTOR_KEY, "css", "fork", "toJS"];

pub fn is_control_key(key: &str) -> bool {
    CONTROL_KEYS.contains(&key)
}

/// Convert a camelCase / snake_case / spaced key to dash-case.
///
/// Acronyms stay together: `HTMLElement` becomes `html-element`.
pub fn dash_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }

        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary && !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// A map counts as nested only if it has at least one key and every value
/// under it is an object.
pub fn is_nested(map: &StyleMap) -> bool {
    !map.is_empty() && map.values().all(StyleNode::is_object)
}

/// Selector labels for a style description
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorTree {
    pub selector: String,
    pub children: IndexMap<String, SelectorTree>,
}

impl SelectorTree {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            children: IndexMap::new(),
        }
    }

    /// Node at `path`, the root for an empty path
    pub fn get(&self, path: &[&str]) -> Option<&SelectorTree> {
        let mut node = self;
        for segment in path {
            node = node.children.get(*segment)?;
        }
        Some(node)
    }

    fn get_mut(&mut self, path: &[&str]) -> Option<&mut SelectorTree> {
        let mut node = self;
        for segment in path {
            node = node.children.get_mut(*segment)?;
        }
        Some(node)
    }

    /// Selector at `path`
    pub fn selector_at(&self, path: &[&str]) -> Option<&str> {
        self.get(path).map(|node| node.selector.as_str())
    }

    /// JSON form with the selector under `$` next to the children
    pub fn to_json(&self) -> Value {
        let mut out = Map::with_capacity(self.children.len() + 1);
        out.insert(SELECTOR_KEY.to_string(), Value::String(self.selector.clone()));
        for (key, child) in &self.children {
            out.insert(key.clone(), child.to_json());
        }
        Value::Object(out)
    }
}

/// Label every object in `style` with a selector rooted at `prefix`
pub fn append_selector(style: &StyleMap, prefix: &str) -> SelectorTree {
    let mut tree = SelectorTree::new(prefix);
    let mut stack: Vec<(Vec<&str>, &StyleMap)> = vec![(Vec::new(), style)];

    while let Some((path, map)) = stack.pop() {
        let Some(parent) = tree.get_mut(&path) else {
            continue;
        };
        let base = parent.selector.clone();
        for (key, node) in map {
            let StyleNode::Object(child) = node else {
                continue;
            };
            let selector = join_selector(&base, &dash_case(key));
            parent.children.insert(key.clone(), SelectorTree::new(selector));
            if is_nested(child) {
                let mut child_path = path.clone();
                child_path.push(key.as_str());
                stack.push((child_path, child));
            }
        }
    }

    tree
}

fn join_selector(prefix: &str, segment: &str) -> String {
    match (prefix.is_empty(), segment.is_empty()) {
        (true, _) => segment.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}-{segment}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::map_from_json;
    use serde_json::json;

    #[test]
    fn test_dash_case() {
        assert_eq!(dash_case("backgroundColor"), "background-color");
        assert_eq!(dash_case("HTMLElement"), "html-element");
        assert_eq!(dash_case("font_size"), "font-size");
        assert_eq!(dash_case("primary"), "primary");
        assert_eq!(dash_case("size2Xl"), "size2-xl");
        assert_eq!(dash_case("already-dashed"), "already-dashed");
        assert_eq!(dash_case("two  words"), "two-words");
        assert_eq!(dash_case("&:hover"), "&:hover");
    }

    #[test]
    fn test_is_nested() {
        let nested = map_from_json(json!({ "a": {}, "b": { "c": 1 } })).unwrap();
        let mixed = map_from_json(json!({ "a": {}, "b": 1 })).unwrap();
        assert!(is_nested(&nested));
        assert!(!is_nested(&mixed));
        assert!(!is_nested(&StyleMap::new()));
    }

    #[test]
    fn test_rule_blocks_are_not_descended() {
        let style = map_from_json(json!({
            "button": {
                "primary": { "color": "red", "&:hover": { "color": "blue" } }
            }
        }))
        .unwrap();

        let tree = append_selector(&style, "spark");
        assert_eq!(tree.selector_at(&["button"]), Some("spark-button"));
        assert_eq!(tree.selector_at(&["button", "primary"]), Some("spark-button-primary"));
        assert_eq!(tree.selector_at(&["button", "primary", "&:hover"]), None);
    }

    #[test]
    fn test_leaf_keys_get_no_selector() {
        let style = map_from_json(json!({ "color": "red", "icon": { "size": 4 } })).unwrap();
        let tree = append_selector(&style, "card");
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.selector_at(&["icon"]), Some("card-icon"));
    }

    #[test]
    fn test_to_json_shape() {
        let style = map_from_json(json!({ "sizes": { "smallSize": { "height": 1 } } })).unwrap();
        let tree = append_selector(&style, "x");
        assert_eq!(
            tree.to_json(),
            json!({
                "$": "x",
                "sizes": { "$": "x-sizes", "smallSize": { "$": "x-sizes-small-size" } }
            })
        );
    }
}
