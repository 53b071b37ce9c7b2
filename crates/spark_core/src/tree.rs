//! Wrapped style trees
//!
//! A [`StyleTree`] keeps two maps: the plain defaults it was built from and
//! the live tree whose leaves have been turned into custom properties.
//! `set` and `remove` edit the live tree only, `fork` always starts again
//! from the defaults. Serialization (`css`, `to_js`) re-resolves the live tree
//! against the configuration forked for that call.

use crate::config::{Config, ConfigPatch};
use crate::error::{Result, StyleError};
use crate::node::{check_keys, deep_merge, plain, StyleMap, StyleNode};
use crate::selector::{append_selector, is_control_key, SelectorTree};
use crate::wrap::{wrap, wrap_in_place, CustomPropertyHandler, WrapHandler};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct StyleTree {
    defaults: StyleMap,
    root: StyleMap,
    selectors: SelectorTree,
    handler: Arc<dyn WrapHandler>,
    config: Config,
}

impl PartialEq for StyleTree {
    fn eq(&self, other: &Self) -> bool {
        self.defaults == other.defaults && self.root == other.root && self.config == other.config
    }
}

impl StyleTree {
    /// Wrap `source` with the default [`CustomPropertyHandler`]
    pub fn new(source: StyleMap, config: &Config) -> Self {
        wrap(source, Arc::new(CustomPropertyHandler), config)
    }

    pub(crate) fn from_parts(
        defaults: StyleMap,
        root: StyleMap,
        handler: Arc<dyn WrapHandler>,
        config: Config,
    ) -> Self {
        let selectors = append_selector(&root, config.selector_prefix());
        Self {
            defaults,
            root,
            selectors,
            handler,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Live tree
    pub fn root(&self) -> &StyleMap {
        &self.root
    }

    /// Plain description the tree was built from
    pub fn defaults(&self) -> &StyleMap {
        &self.defaults
    }

    pub fn selectors(&self) -> &SelectorTree {
        &self.selectors
    }

    /// Selector for the object at `path`; the root selector for `&[]`
    pub fn selector(&self, path: &[&str]) -> Option<&str> {
        self.selectors.selector_at(path)
    }

    /// Top-level keys, in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn get(&self, path: &[&str]) -> Option<&StyleNode> {
        let (last, parents) = path.split_last()?;
        let mut map = &self.root;
        for segment in parents {
            map = map.get(*segment)?.as_object()?;
        }
        map.get(*last)
    }

    /// Assign `node` at `path`.
    ///
    /// Objects are wrapped before being stored. Assigning a plain value over
    /// an existing custom property updates that property and keeps its
    /// default.
    pub fn set(&mut self, path: &[&str], node: impl Into<StyleNode>) -> Result<()> {
        let node = node.into();
        let (last, parents) = split_path(path)?;
        if let StyleNode::Object(map) = &node {
            check_keys(map).map_err(|err| under(path, err))?;
        }
        let full_path: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        let parent = parent_mut(&mut self.root, parents)?;

        let node = match node {
            StyleNode::Leaf(value) => {
                if let Some(StyleNode::Custom(prop)) = parent.get_mut(last) {
                    prop.set_value(value);
                    return Ok(());
                }
                if self.config.custom_properties {
                    self.handler.leaf(&full_path, value, &self.config)
                } else {
                    StyleNode::Leaf(value)
                }
            }
            StyleNode::Object(map) => {
                let mut map = plain(&map);
                wrap_in_place(&mut map, full_path, self.handler.as_ref(), &self.config);
                StyleNode::Object(map)
            }
            custom => custom,
        };
        parent.insert(last.to_string(), node);

        self.refresh_selectors();
        Ok(())
    }

    /// Delete the node at `path` from the live tree and return it
    pub fn remove(&mut self, path: &[&str]) -> Result<StyleNode> {
        let (last, parents) = split_path(path)?;
        let parent = parent_mut(&mut self.root, parents)?;
        let removed = parent
            .shift_remove(last)
            .ok_or_else(|| StyleError::PathNotFound(path.join(".")))?;

        self.refresh_selectors();
        Ok(removed)
    }

    /// Derive a new tree: `overrides` deep-merged into the defaults, under
    /// the configuration forked with `options`.
    ///
    /// Values changed through [`StyleTree::set`] are not carried over; any
    /// property not named in `overrides` comes back at its default.
    /// Overrides containing a control key at any depth are rejected.
    pub fn fork(&self, overrides: &StyleMap, options: &ConfigPatch) -> Result<StyleTree> {
        check_keys(overrides)?;
        let mut source = self.defaults.clone();
        deep_merge(&mut source, overrides);
        let config = self.config.fork(options);

        tracing::debug!(
            prefix = %config.prefix,
            overrides = overrides.len(),
            "forking style tree"
        );

        Ok(wrap(source, self.handler.clone(), &config))
    }

    /// Every custom property declaration, in document order
    pub fn declarations(&self, options: &ConfigPatch) -> Vec<String> {
        let config = self.config.fork(options);
        let resolved = self.resolved(&config);

        let mut declarations = Vec::new();
        let mut stack = vec![resolved.values()];
        while let Some(iter) = stack.last_mut() {
            match iter.next() {
                Some(StyleNode::Object(child)) => stack.push(child.values()),
                Some(StyleNode::Custom(prop)) => declarations.push(prop.to_css()),
                Some(StyleNode::Leaf(_)) => {}
                None => {
                    stack.pop();
                }
            }
        }

        tracing::trace!(count = declarations.len(), "collected declarations");
        declarations
    }

    /// Serialize the custom property declarations to CSS
    pub fn css(&self, options: &ConfigPatch) -> String {
        let config = self.config.fork(options);
        format_declarations(&self.declarations(options), &config)
    }

    /// Plain snapshot with every custom property replaced by its resolved value
    pub fn to_js(&self, options: &ConfigPatch) -> Value {
        let config = self.config.fork(options);
        resolved_to_json(&self.resolved(&config))
    }

    /// Live tree re-wrapped under `config`
    fn resolved(&self, config: &Config) -> StyleMap {
        let mut map = plain(&self.root);
        wrap_in_place(&mut map, Vec::new(), self.handler.as_ref(), config);
        map
    }

    fn refresh_selectors(&mut self) {
        self.selectors = append_selector(&self.root, self.config.selector_prefix());
    }
}

/// Join declarations the way `config` asks for.
///
/// Inline output wins over `selector`: it is a single line with every
/// whitespace character removed.
pub fn format_declarations(declarations: &[String], config: &Config) -> String {
    if config.is_inline {
        return declarations
            .concat()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
    }

    match &config.selector {
        Some(selector) => {
            let mut out = format!("{selector} {{\n");
            for declaration in declarations {
                out.push_str("  ");
                out.push_str(declaration);
                out.push('\n');
            }
            out.push('}');
            out
        }
        None => declarations.join("\n"),
    }
}

fn resolved_to_json(map: &StyleMap) -> Value {
    let mut out = Map::with_capacity(map.len());
    for (key, node) in map {
        let value = match node {
            StyleNode::Leaf(value) => value.to_json(),
            StyleNode::Custom(prop) => prop.resolve().to_json(),
            StyleNode::Object(child) => resolved_to_json(child),
        };
        out.insert(key.clone(), value);
    }
    Value::Object(out)
}

/// Re-root a protected key error found inside the object stored at `path`
fn under(path: &[&str], err: StyleError) -> StyleError {
    match err {
        StyleError::ProtectedProperty(inner) => {
            StyleError::ProtectedProperty(format!("{}.{inner}", path.join(".")))
        }
        other => other,
    }
}

fn split_path<'a>(path: &[&'a str]) -> Result<(&'a str, Vec<&'a str>)> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| StyleError::PathNotFound(String::new()))?;
    if is_control_key(last) {
        return Err(StyleError::ProtectedProperty(last.to_string()));
    }
    Ok((*last, parents.to_vec()))
}

fn parent_mut<'m>(root: &'m mut StyleMap, parents: Vec<&str>) -> Result<&'m mut StyleMap> {
    let mut map = root;
    for (depth, segment) in parents.iter().enumerate() {
        let here = || parents[..=depth].join(".");
        map = match map.get_mut(*segment) {
            Some(StyleNode::Object(child)) => child,
            Some(_) => return Err(StyleError::NotAnObject(here())),
            None => return Err(StyleError::PathNotFound(here())),
        };
    }
    Ok(map)
}
