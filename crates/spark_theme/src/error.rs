use spark_core::StyleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("unknown theme mode `{0}` (expected `light` or `dark`)")]
    UnknownMode(String),

    #[error("unknown component `{0}`")]
    UnknownComponent(String),

    #[error("unknown {kind} token `{name}`")]
    UnknownToken { kind: &'static str, name: String },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        ThemeError::Parse(err.to_string())
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
