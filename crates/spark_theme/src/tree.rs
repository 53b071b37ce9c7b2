//! Component token trees
//!
//! A [`TokenTree`] is the root object for one UI component: raw token
//! `properties`, the component style description, per-mode variants merged
//! over the component, and optional `@keyframes`, `@media` and `@supports`
//! fragments. Everything is scoped under `{prefix}-{component}` so that the
//! custom properties and class names of different components never collide.

use crate::error::{Result, ThemeError};
use crate::state::ThemeState;
use crate::theme::{ThemeMode, TokenPair};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use spark_core::{
    check_keys, dash_case, deep_merge, format_declarations, map_from_json, Config, ConfigPatch,
    SelectorTree, StyleMap, StyleNode, StyleTree,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TokenTree {
    name: String,
    config: Config,
    properties: StyleMap,
    component: StyleMap,
    keyframes: IndexMap<String, StyleMap>,
    media: IndexMap<String, StyleMap>,
    supports: IndexMap<String, StyleMap>,
    variants: TokenPair<StyleMap>,
}

/// On-disk layout read by [`TokenTree::from_toml_str`]
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TokenFile {
    properties: Map<String, Value>,
    component: Map<String, Value>,
    light: Map<String, Value>,
    dark: Map<String, Value>,
    keyframes: IndexMap<String, Map<String, Value>>,
    media: IndexMap<String, Map<String, Value>>,
    supports: IndexMap<String, Map<String, Value>>,
}

impl TokenTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: Config::default(),
            properties: StyleMap::new(),
            component: StyleMap::new(),
            keyframes: IndexMap::new(),
            media: IndexMap::new(),
            supports: IndexMap::new(),
            variants: TokenPair::default(),
        }
    }

    /// Base configuration; the component name is appended to its prefix
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_properties(mut self, properties: StyleMap) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_component(mut self, component: StyleMap) -> Self {
        self.component = component;
        self
    }

    pub fn with_keyframes(mut self, name: impl Into<String>, frames: StyleMap) -> Self {
        self.keyframes.insert(name.into(), frames);
        self
    }

    pub fn with_media(mut self, query: impl Into<String>, fragment: StyleMap) -> Self {
        self.media.insert(query.into(), fragment);
        self
    }

    pub fn with_supports(mut self, condition: impl Into<String>, fragment: StyleMap) -> Self {
        self.supports.insert(condition.into(), fragment);
        self
    }

    /// Style merged over the component in `mode`
    pub fn with_variant(mut self, mode: ThemeMode, variant: StyleMap) -> Self {
        *self.variants.for_mode_mut(mode) = variant;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &StyleMap {
        &self.properties
    }

    pub fn variant(&self, mode: ThemeMode) -> &StyleMap {
        self.variants.for_mode(mode)
    }

    /// Configuration with prefix and class name scoped to this component
    pub fn config(&self) -> Config {
        let scope = match (self.config.prefix.is_empty(), dash_case(&self.name)) {
            (true, name) => name,
            (false, name) if name.is_empty() => self.config.prefix.clone(),
            (false, name) => format!("{}-{}", self.config.prefix, name),
        };
        self.config.fork(&ConfigPatch::new().prefix(scope.clone()).class_name(scope))
    }

    pub fn properties_tree(&self) -> StyleTree {
        StyleTree::new(self.properties.clone(), &self.config())
    }

    /// Component style tree with the `mode` variant merged in
    pub fn component(&self, mode: ThemeMode) -> StyleTree {
        let mut source = self.component.clone();
        deep_merge(&mut source, self.variants.for_mode(mode));
        StyleTree::new(source, &self.config())
    }

    /// Selectors of the component in the process-wide mode
    pub fn selectors(&self) -> SelectorTree {
        self.component(ThemeState::mode()).selectors().clone()
    }

    /// Copy with `overrides` deep-merged into the component description.
    /// Overrides holding a control key are rejected.
    pub fn fork(&self, overrides: &StyleMap) -> Result<TokenTree> {
        check_keys(overrides)?;
        tracing::debug!(component = %self.name, overrides = overrides.len(), "forking token tree");
        let mut forked = self.clone();
        deep_merge(&mut forked.component, overrides);
        Ok(forked)
    }

    /// Copy with `overrides` deep-merged into one mode's variant
    pub fn fork_variant(&self, mode: ThemeMode, overrides: &StyleMap) -> Result<TokenTree> {
        check_keys(overrides)?;
        tracing::debug!(component = %self.name, %mode, "forking token tree variant");
        let mut forked = self.clone();
        deep_merge(forked.variants.for_mode_mut(mode), overrides);
        Ok(forked)
    }

    /// Scoped animation name for a keyframes block
    pub fn keyframe_name(&self, name: &str) -> String {
        format!("{}-{}", self.config().prefix, dash_case(name))
    }

    /// Stylesheet for `mode`.
    ///
    /// The property and component declarations go under `.{class}` (or the
    /// `selector` option), followed by the keyframes, media and supports
    /// blocks. Inline output is the bare declarations only.
    pub fn css(&self, mode: ThemeMode, options: &ConfigPatch) -> String {
        let config = self.config().fork(options);
        let mut declarations = self.properties_tree().declarations(options);
        declarations.extend(self.component(mode).declarations(options));

        if config.is_inline {
            return format_declarations(&declarations, &config);
        }

        let class = config
            .selector
            .clone()
            .unwrap_or_else(|| format!(".{}", config.selector_prefix()));
        let root = config.fork(&ConfigPatch::new().selector(class.clone()));

        let mut blocks = vec![format_declarations(&declarations, &root)];
        for (name, frames) in &self.keyframes {
            blocks.push(keyframes_block(&self.keyframe_name(name), frames));
        }
        for (query, fragment) in &self.media {
            blocks.push(self.at_rule("@media", query, fragment, &root));
        }
        for (condition, fragment) in &self.supports {
            blocks.push(self.at_rule("@supports", condition, fragment, &root));
        }

        tracing::trace!(component = %self.name, %mode, blocks = blocks.len(), "rendered token css");
        blocks.join("\n\n")
    }

    fn at_rule(&self, rule: &str, condition: &str, fragment: &StyleMap, config: &Config) -> String {
        let declarations = StyleTree::new(fragment.clone(), config).declarations(&ConfigPatch::default());
        let inner = format_declarations(&declarations, config);
        format!("{rule} {condition} {{\n{}\n}}", indent(&inner))
    }

    /// Plain snapshot: name, selectors, resolved properties and component
    pub fn to_js(&self, mode: ThemeMode) -> Value {
        let component = self.component(mode);
        json!({
            "name": self.name,
            "selectors": component.selectors().to_json(),
            "properties": self.properties_tree().to_js(&ConfigPatch::default()),
            "component": component.to_js(&ConfigPatch::default()),
        })
    }

    /// Read a token tree from TOML with the optional sections `properties`,
    /// `component`, `light`, `dark`, `keyframes`, `media` and `supports`.
    pub fn from_toml_str(name: impl Into<String>, input: &str) -> Result<Self> {
        let file: TokenFile = toml::from_str(input)?;
        let section = |map: Map<String, Value>| -> Result<StyleMap> {
            map_from_json(Value::Object(map)).map_err(ThemeError::from)
        };

        let mut tree = TokenTree::new(name)
            .with_properties(section(file.properties)?)
            .with_component(section(file.component)?)
            .with_variant(ThemeMode::Light, section(file.light)?)
            .with_variant(ThemeMode::Dark, section(file.dark)?);
        for (name, frames) in file.keyframes {
            tree = tree.with_keyframes(name, section(frames)?);
        }
        for (query, fragment) in file.media {
            tree = tree.with_media(query, section(fragment)?);
        }
        for (condition, fragment) in file.supports {
            tree = tree.with_supports(condition, section(fragment)?);
        }
        Ok(tree)
    }
}

/// `@keyframes` block; each step holds plain CSS declarations
fn keyframes_block(name: &str, frames: &StyleMap) -> String {
    let mut out = format!("@keyframes {name} {{\n");
    for (step, node) in frames {
        let StyleNode::Object(declarations) = node else {
            continue;
        };
        out.push_str(&format!("  {step} {{\n"));
        for (property, value) in declarations {
            if let Some(value) = value.value() {
                out.push_str(&format!("    {}: {value};\n", dash_case(property)));
            }
        }
        out.push_str("  }\n");
    }
    out.push('}');
    out
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
