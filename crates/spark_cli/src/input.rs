//! Style description input files

use anyhow::{Context, Result};
use serde_json::Value;
use spark_core::{map_from_json, StyleMap};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    /// Format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => anyhow::bail!(
                "Unsupported input {}: expected a .toml or .json file",
                path.display()
            ),
        }
    }
}

/// Read a style description from disk
pub fn load_style(path: &Path) -> Result<StyleMap> {
    let format = InputFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_style(&content, format).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_style(content: &str, format: InputFormat) -> Result<StyleMap> {
    let value: Value = match format {
        InputFormat::Toml => toml::from_str(content)?,
        InputFormat::Json => serde_json::from_str(content)?,
    };
    Ok(map_from_json(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("button.toml")).unwrap(),
            InputFormat::Toml
        );
        assert_eq!(
            InputFormat::from_path(Path::new("tokens/Button.JSON")).unwrap(),
            InputFormat::Json
        );
        assert!(InputFormat::from_path(Path::new("button.yaml")).is_err());
        assert!(InputFormat::from_path(Path::new("button")).is_err());
    }

    #[test]
    fn test_toml_and_json_agree() {
        let toml = parse_style(
            r##"
            [button.primary]
            backgroundColor = "#1d4ed8"
            zIndex = 2
            "##,
            InputFormat::Toml,
        )
        .unwrap();
        let json = parse_style(
            r##"{ "button": { "primary": { "backgroundColor": "#1d4ed8", "zIndex": 2 } } }"##,
            InputFormat::Json,
        )
        .unwrap();

        assert_eq!(toml, json);
    }

    #[test]
    fn test_rejects_non_object_json() {
        assert!(parse_style("[1, 2]", InputFormat::Json).is_err());
        assert!(parse_style(r#"{ "hidden": true }"#, InputFormat::Json).is_err());
    }
}
