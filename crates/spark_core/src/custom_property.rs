//! Custom property leaves
//!
//! A custom property is a leaf whose output depends on the configuration it
//! was resolved against: a `var(--name)` reference when custom properties are
//! enabled, the literal value otherwise.

use crate::config::Config;
use crate::node::Primitive;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct CustomProperty {
    key: String,
    value: Primitive,
    default: Primitive,
    config: Config,
}

impl CustomProperty {
    pub fn new(key: impl Into<String>, value: impl Into<Primitive>, config: Config) -> Self {
        let value = value.into();
        Self {
            key: key.into(),
            default: value.clone(),
            value,
            config,
        }
    }

    /// Generated key, without prefix or leading dashes
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Primitive {
        &self.value
    }

    pub fn default_value(&self) -> &Primitive {
        &self.default
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_value(&mut self, value: impl Into<Primitive>) {
        self.value = value.into();
    }

    /// Full variable name, e.g. `--spark-button-color`
    pub fn name(&self) -> String {
        self.config.variable_name(&self.key)
    }

    /// Value to use where the property is referenced
    pub fn resolve(&self) -> Primitive {
        if !self.config.custom_properties {
            return self.value.clone();
        }
        if self.config.is_fallback {
            Primitive::Str(format!("var({}, {})", self.name(), self.value))
        } else {
            Primitive::Str(format!("var({})", self.name()))
        }
    }

    /// Declaration text, e.g. `--spark-button-color: red;`
    pub fn to_css(&self) -> String {
        format!("{}: {};", self.name(), self.value)
    }
}

impl fmt::Display for CustomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigPatch;

    #[test]
    fn test_resolve_variable_reference() {
        let prop = CustomProperty::new("button-color", "red", Config::default());
        assert_eq!(prop.to_string(), "var(--spark-button-color)");
        assert_eq!(prop.to_css(), "--spark-button-color: red;");
    }

    #[test]
    fn test_resolve_with_fallback() {
        let config = Config::default().fork(&ConfigPatch::new().fallback(true));
        let prop = CustomProperty::new("gap", 4, config);
        assert_eq!(prop.resolve(), Primitive::Str("var(--spark-gap, 4)".into()));
    }

    #[test]
    fn test_resolve_literal_when_disabled() {
        let config = Config::default().fork(&ConfigPatch::new().custom_properties(false));
        let prop = CustomProperty::new("gap", 4, config);
        assert_eq!(prop.resolve(), Primitive::Number(4.0));
    }

    #[test]
    fn test_set_value_keeps_default() {
        let mut prop = CustomProperty::new("color", "red", Config::default());
        prop.set_value("blue");
        assert_eq!(prop.to_css(), "--spark-color: blue;");
        assert_eq!(prop.default_value(), &Primitive::Str("red".into()));
    }
}
