//! Engine configuration
//!
//! [`Config`] is never mutated once shared. Call sites derive a new one with
//! [`Config::fork`] and a [`ConfigPatch`] holding only the options they want
//! to change.

use serde::{Deserialize, Serialize};

/// Default custom property prefix
pub const DEFAULT_PREFIX: &str = "spark";

/// Options threaded through every traversal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for generated custom property names (`--{prefix}-{key}`)
    pub prefix: String,
    /// Emit `var(--name, value)` instead of `var(--name)`
    pub is_fallback: bool,
    /// Turn leaves into custom properties
    pub custom_properties: bool,
    /// Root class name for selector paths; falls back to `prefix`
    pub class_name: Option<String>,
    /// Serialize `css()` output on a single line without whitespace
    pub is_inline: bool,
    /// Wrap `css()` output in a rule for this selector
    pub selector: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            is_fallback: false,
            custom_properties: true,
            class_name: None,
            is_inline: false,
            selector: None,
        }
    }
}

impl Config {
    /// Derive a configuration with `patch` applied on top of `self`
    pub fn fork(&self, patch: &ConfigPatch) -> Config {
        Config {
            prefix: patch.prefix.clone().unwrap_or_else(|| self.prefix.clone()),
            is_fallback: patch.is_fallback.unwrap_or(self.is_fallback),
            custom_properties: patch.custom_properties.unwrap_or(self.custom_properties),
            class_name: patch.class_name.clone().or_else(|| self.class_name.clone()),
            is_inline: patch.is_inline.unwrap_or(self.is_inline),
            selector: patch.selector.clone().or_else(|| self.selector.clone()),
        }
    }

    /// Root of the selector paths produced for this configuration
    pub fn selector_prefix(&self) -> &str {
        self.class_name.as_deref().unwrap_or(&self.prefix)
    }

    /// Full custom property name for a generated key
    pub fn variable_name(&self, key: &str) -> String {
        match (self.prefix.is_empty(), key.is_empty()) {
            (true, _) => format!("--{key}"),
            (false, true) => format!("--{}", self.prefix),
            (false, false) => format!("--{}-{}", self.prefix, key),
        }
    }
}

/// Partial configuration used by `fork`, `css` and `to_js` call sites
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub prefix: Option<String>,
    pub is_fallback: Option<bool>,
    pub custom_properties: Option<bool>,
    pub class_name: Option<String>,
    pub is_inline: Option<bool>,
    pub selector: Option<String>,
}

impl ConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn fallback(mut self, enabled: bool) -> Self {
        self.is_fallback = Some(enabled);
        self
    }

    pub fn custom_properties(mut self, enabled: bool) -> Self {
        self.custom_properties = Some(enabled);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn inline(mut self, enabled: bool) -> Self {
        self.is_inline = Some(enabled);
        self
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fork_leaves_parent_untouched() {
        let parent = Config::default();
        let child = parent.fork(&ConfigPatch::new().prefix("ui").fallback(true));

        assert_eq!(parent.prefix, "spark");
        assert!(!parent.is_fallback);
        assert_eq!(child.prefix, "ui");
        assert!(child.is_fallback);
        assert!(child.custom_properties);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let config = Config::default().fork(&ConfigPatch::new().class_name("btn"));
        assert_eq!(config.fork(&ConfigPatch::default()), config);
    }

    #[test]
    fn test_variable_name() {
        let config = Config::default();
        assert_eq!(config.variable_name("button-color"), "--spark-button-color");

        let bare = config.fork(&ConfigPatch::new().prefix(""));
        assert_eq!(bare.variable_name("button-color"), "--button-color");
    }

    #[test]
    fn test_selector_prefix_prefers_class_name() {
        let config = Config::default();
        assert_eq!(config.selector_prefix(), "spark");
        let config = config.fork(&ConfigPatch::new().class_name("spark-button"));
        assert_eq!(config.selector_prefix(), "spark-button");
    }
}
