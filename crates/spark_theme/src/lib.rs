//! Spark Theme System
//!
//! Design tokens, light/dark modes and per-component token trees built on
//! top of the `spark_core` style engine.
//!
//! # Overview
//!
//! - **Design tokens**: Colors, spacing, radii, typography, shadows
//! - **Modes**: every theme comes as a light/dark [`ThemeBundle`]
//! - **Component token trees**: scoped style trees per widget ([`TokenTree`])
//! - **Overrides**: replace individual tokens in code or from TOML
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use spark_core::ConfigPatch;
//! use spark_theme::{button_tokens, SparkTheme, ThemeMode, ThemeState};
//!
//! // Pick the process-wide mode once at startup
//! ThemeState::init(SparkTheme::bundle(), ThemeMode::Dark);
//!
//! // Stylesheet for a component
//! let button = button_tokens(&SparkTheme::bundle());
//! let css = button.css(ThemeState::mode(), &ConfigPatch::default());
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: Semantic colors (primary, error, background, text, etc.)
//! - [`TypographyTokens`]: Font families, sizes, weights, line height
//! - [`SpacingTokens`]: 4px-based spacing scale
//! - [`RadiusTokens`]: Border radii
//! - [`ShadowTokens`]: Box shadows
//!
//! # Overrides
//!
//! ```rust,ignore
//! let overrides = ThemeOverrides::new()
//!     .color(ColorToken::Primary, Color::from_hex(0xFF5500))
//!     .spacing(SpacingToken::Space4, 20.0);
//! let bundle = overrides.apply_bundle(&SparkTheme::bundle());
//! ```

pub mod components;
pub mod error;
pub mod overrides;
pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;
pub mod tree;

// Re-export commonly used types
pub use components::{button_tokens, component_tokens, tooltip_tokens, Component};
pub use error::{Result, ThemeError};
pub use overrides::ThemeOverrides;
pub use state::ThemeState;
pub use theme::{Theme, ThemeBundle, ThemeMode, TokenPair};
pub use themes::{palette, SparkTheme};
pub use tokens::*;
pub use tree::TokenTree;
