//! Tagged style tree nodes
//!
//! A style description is an insertion-ordered map of keys to nodes. A node
//! is either a primitive leaf, a custom property (a leaf that resolves
//! against a configuration snapshot), or a nested map.

use crate::custom_property::CustomProperty;
use crate::error::{Result, StyleError};
use crate::selector::is_control_key;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;

/// Insertion-ordered style map
pub type StyleMap = IndexMap<String, StyleNode>;

/// A raw style value
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Number(f64),
    Str(String),
}

impl Primitive {
    /// Plain JSON form of the value.
    ///
    /// Whole numbers are emitted as JSON integers so that `4` read from a
    /// description comes back out as `4`.
    pub fn to_json(&self) -> Value {
        match self {
            Primitive::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => Value::from(*n as i64),
            Primitive::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Primitive::Str(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                write!(f, "{}", *n as i64)
            }
            Primitive::Number(n) => write!(f, "{n}"),
            Primitive::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::Str(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::Str(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Number(value as f64)
    }
}

/// One node of a style tree
#[derive(Clone, Debug, PartialEq)]
pub enum StyleNode {
    Leaf(Primitive),
    Custom(CustomProperty),
    Object(StyleMap),
}

impl StyleNode {
    pub fn is_object(&self) -> bool {
        matches!(self, StyleNode::Object(_))
    }

    pub fn as_object(&self) -> Option<&StyleMap> {
        match self {
            StyleNode::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut StyleMap> {
        match self {
            StyleNode::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Current primitive value of a leaf or custom property
    pub fn value(&self) -> Option<&Primitive> {
        match self {
            StyleNode::Leaf(value) => Some(value),
            StyleNode::Custom(prop) => Some(prop.value()),
            StyleNode::Object(_) => None,
        }
    }

    /// Build a node from a JSON value.
    ///
    /// Objects become nested maps, strings and numbers become leaves.
    /// Everything else is rejected.
    pub fn from_json(value: Value) -> Result<Self> {
        node_from_json(value, "")
    }

    /// Plain JSON form with every custom property replaced by its value
    pub fn to_plain_json(&self) -> Value {
        match self {
            StyleNode::Leaf(value) => value.to_json(),
            StyleNode::Custom(prop) => prop.value().to_json(),
            StyleNode::Object(map) => map_to_plain_json(map),
        }
    }
}

impl From<Primitive> for StyleNode {
    fn from(value: Primitive) -> Self {
        StyleNode::Leaf(value)
    }
}

impl From<&str> for StyleNode {
    fn from(value: &str) -> Self {
        StyleNode::Leaf(value.into())
    }
}

impl From<String> for StyleNode {
    fn from(value: String) -> Self {
        StyleNode::Leaf(value.into())
    }
}

impl From<f64> for StyleNode {
    fn from(value: f64) -> Self {
        StyleNode::Leaf(value.into())
    }
}

impl From<i32> for StyleNode {
    fn from(value: i32) -> Self {
        StyleNode::Leaf(value.into())
    }
}

impl From<StyleMap> for StyleNode {
    fn from(value: StyleMap) -> Self {
        StyleNode::Object(value)
    }
}

impl From<CustomProperty> for StyleNode {
    fn from(value: CustomProperty) -> Self {
        StyleNode::Custom(value)
    }
}

/// Build a style map from a JSON object
pub fn map_from_json(value: Value) -> Result<StyleMap> {
    match node_from_json(value, "")? {
        StyleNode::Object(map) => Ok(map),
        _ => Err(StyleError::NotAnObject(String::new())),
    }
}

fn node_from_json(value: Value, path: &str) -> Result<StyleNode> {
    match value {
        Value::String(s) => Ok(StyleNode::Leaf(Primitive::Str(s))),
        Value::Number(n) => match n.as_f64() {
            Some(n) => Ok(StyleNode::Leaf(Primitive::Number(n))),
            None => Err(unsupported(path, "number")),
        },
        Value::Object(entries) => {
            let mut map = StyleMap::with_capacity(entries.len());
            for (key, child) in entries {
                let child_path = join_path(path, &key);
                if is_control_key(&key) {
                    return Err(StyleError::ProtectedProperty(child_path));
                }
                let node = node_from_json(child, &child_path)?;
                map.insert(key, node);
            }
            Ok(StyleNode::Object(map))
        }
        Value::Array(_) => Err(unsupported(path, "array")),
        Value::Bool(_) => Err(unsupported(path, "boolean")),
        Value::Null => Err(unsupported(path, "null")),
    }
}

fn unsupported(path: &str, kind: &'static str) -> StyleError {
    StyleError::UnsupportedValue {
        path: path.to_string(),
        kind,
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Plain JSON object for a style map
pub fn map_to_plain_json(map: &StyleMap) -> Value {
    let mut out = Map::with_capacity(map.len());
    for (key, node) in map {
        out.insert(key.clone(), node.to_plain_json());
    }
    Value::Object(out)
}

/// Copy of `map` with every custom property collapsed back to a plain leaf
/// holding its current value. Control keys are left out.
pub fn plain(map: &StyleMap) -> StyleMap {
    let mut out = map.clone();
    let mut stack = vec![&mut out];
    while let Some(map) = stack.pop() {
        map.retain(|key, _| !is_control_key(key));
        for node in map.values_mut() {
            if let StyleNode::Custom(prop) = &*node {
                *node = StyleNode::Leaf(prop.value().clone());
            }
        }
        for node in map.values_mut() {
            if let StyleNode::Object(child) = node {
                stack.push(child);
            }
        }
    }
    out
}

/// Fail with [`StyleError::ProtectedProperty`] if any key at any depth of
/// `map` is a control key. The error carries the dotted path of the key.
pub fn check_keys(map: &StyleMap) -> Result<()> {
    let mut stack = vec![(String::new(), map)];
    while let Some((path, map)) = stack.pop() {
        for (key, node) in map {
            let key_path = join_path(&path, key);
            if is_control_key(key) {
                return Err(StyleError::ProtectedProperty(key_path));
            }
            if let StyleNode::Object(child) = node {
                stack.push((key_path, child));
            }
        }
    }
    Ok(())
}

/// Deep-merge `overrides` into `base`.
///
/// Nested maps merge key by key; on any other conflict the override wins.
/// Custom properties in `overrides` are merged as their plain values.
pub fn deep_merge(base: &mut StyleMap, overrides: &StyleMap) {
    for (key, incoming) in overrides {
        match (base.get_mut(key), incoming) {
            (Some(StyleNode::Object(existing)), StyleNode::Object(child)) => {
                deep_merge(existing, child);
            }
            (_, StyleNode::Object(child)) => {
                base.insert(key.clone(), StyleNode::Object(plain(child)));
            }
            (_, StyleNode::Custom(prop)) => {
                base.insert(key.clone(), StyleNode::Leaf(prop.value().clone()));
            }
            (_, StyleNode::Leaf(value)) => {
                base.insert(key.clone(), StyleNode::Leaf(value.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_insertion_order() {
        let map = map_from_json(json!({ "z": 1, "a": "x", "m": { "b": 2 } })).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_from_json_rejects_arrays_with_path() {
        let err = map_from_json(json!({ "button": { "margin": [1, 2] } })).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnsupportedValue {
                path: "button.margin".to_string(),
                kind: "array",
            }
        );
    }

    #[test]
    fn test_map_from_json_requires_object() {
        assert!(matches!(
            map_from_json(json!("red")),
            Err(StyleError::NotAnObject(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_control_keys() {
        assert_eq!(
            map_from_json(json!({ "$": { "color": "red" } })),
            Err(StyleError::ProtectedProperty("$".to_string()))
        );
        assert_eq!(
            map_from_json(json!({ "button": { "css": "blue" } })),
            Err(StyleError::ProtectedProperty("button.css".to_string()))
        );
    }

    #[test]
    fn test_check_keys_walks_every_level() {
        let clean = map_from_json(json!({ "a": { "b": { "c": 1 } } })).unwrap();
        assert_eq!(check_keys(&clean), Ok(()));

        let dirty = crate::style_map! {
            "a" => crate::style_map! {
                "b" => crate::style_map! { "c" => 1, "toJS" => 1 },
            },
        };
        assert_eq!(
            check_keys(&dirty),
            Err(StyleError::ProtectedProperty("a.b.toJS".to_string()))
        );
        assert_eq!(plain(&dirty), clean);
    }

    #[test]
    fn test_whole_numbers_stay_integers() {
        assert_eq!(Primitive::Number(4.0).to_json(), json!(4));
        assert_eq!(Primitive::Number(0.5).to_json(), json!(0.5));
        assert_eq!(Primitive::Number(-2.0).to_string(), "-2");
        assert_eq!(Primitive::Number(1.25).to_string(), "1.25");
    }

    #[test]
    fn test_deep_merge_override_wins_on_leaves() {
        let mut base = map_from_json(json!({
            "button": { "color": "red", "padding": "4px" }
        }))
        .unwrap();
        let overrides = map_from_json(json!({
            "button": { "color": "blue", "margin": 0 }
        }))
        .unwrap();

        deep_merge(&mut base, &overrides);

        assert_eq!(
            map_to_plain_json(&base),
            json!({ "button": { "color": "blue", "padding": "4px", "margin": 0 } })
        );
    }

    #[test]
    fn test_deep_merge_object_replaces_leaf() {
        let mut base = map_from_json(json!({ "border": "none" })).unwrap();
        let overrides = map_from_json(json!({ "border": { "width": "1px" } })).unwrap();

        deep_merge(&mut base, &overrides);

        assert_eq!(map_to_plain_json(&base), json!({ "border": { "width": "1px" } }));
    }
}
