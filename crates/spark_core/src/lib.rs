//! Spark Style Engine
//!
//! Builds nested, themeable style trees from plain style descriptions and
//! extracts them as CSS custom property declarations or plain value
//! snapshots.
//!
//! # Overview
//!
//! - **Style nodes**: a tagged tree of primitive leaves, custom properties
//!   and nested maps ([`StyleNode`])
//! - **Configuration**: copy-on-write options forked per call ([`Config`])
//! - **Custom properties**: leaves that resolve to `var(--…)` references
//!   ([`CustomProperty`])
//! - **Selectors**: dash-cased class paths for every rule ([`SelectorTree`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use serde_json::json;
//! use spark_core::{map_from_json, Config, ConfigPatch, StyleTree};
//!
//! let source = map_from_json(json!({
//!     "button": { "primary": { "backgroundColor": "blue" } }
//! }))?;
//! let tree = StyleTree::new(source, &Config::default());
//!
//! // Class name for markup
//! assert_eq!(tree.selector(&["button", "primary"]), Some("spark-button-primary"));
//!
//! // Declarations for a stylesheet
//! let css = tree.css(&ConfigPatch::new().selector(":root"));
//!
//! // Derived tree, the original is untouched
//! let dark = tree.fork(&map_from_json(json!({
//!     "button": { "primary": { "backgroundColor": "navy" } }
//! }))?, &ConfigPatch::default())?;
//! ```
//!
//! # Protected keys
//!
//! `$`, `css`, `fork` and `toJS` are control keys. They never appear in a
//! tree. Parsing, setting, removing or forking with one fails with
//! [`StyleError::ProtectedProperty`]; maps built in code have them dropped.

mod config;
mod custom_property;
mod error;
mod node;
mod selector;
mod tree;
mod wrap;

pub use config::{Config, ConfigPatch, DEFAULT_PREFIX};
pub use custom_property::CustomProperty;
pub use error::{Result, StyleError};
pub use node::{
    check_keys, deep_merge, map_from_json, map_to_plain_json, plain, Primitive, StyleMap,
    StyleNode,
};
pub use selector::{
    append_selector, dash_case, is_control_key, is_nested, SelectorTree, CONTROL_KEYS,
    SELECTOR_KEY,
};
pub use tree::{format_declarations, StyleTree};
pub use wrap::{custom_property_key, wrap, CustomPropertyHandler, WrapHandler};

/// Build a [`StyleMap`] from `key => value` pairs.
///
/// Values go through `StyleNode::from`, so strings, numbers, nested maps and
/// custom properties can be mixed freely.
///
/// ```rust,ignore
/// let button = style_map! {
///     "padding" => "4px 8px",
///     "primary" => style_map! { "backgroundColor" => "blue" },
/// };
/// ```
#[macro_export]
macro_rules! style_map {
    () => {
        $crate::StyleMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::StyleMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::StyleNode::from($value));
        )+
        map
    }};
}
