use clap::{Args, Parser, Subcommand};
use spark_core::ConfigPatch;
use spark_theme::ThemeMode;
use std::path::PathBuf;

/// Render Spark style descriptions and component tokens to CSS
#[derive(Parser, Debug)]
#[command(name = "spark", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file, or a directory containing spark.toml
    #[arg(long, global = true, default_value = ".")]
    pub config: PathBuf,

    /// Theme mode (overrides [theme].mode)
    #[arg(long, global = true)]
    pub mode: Option<ThemeMode>,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Per-call engine options
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Wrap declarations in `SELECTOR { ... }`
    #[arg(long, global = true)]
    pub selector: Option<String>,

    /// Emit a single line with all whitespace removed
    #[arg(long, global = true)]
    pub inline: bool,

    /// Custom property prefix
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Include the value as a `var()` fallback
    #[arg(long, global = true)]
    pub fallback: bool,
}

impl StyleArgs {
    /// Only the flags that were given override the config file
    pub fn patch(&self) -> ConfigPatch {
        ConfigPatch {
            prefix: self.prefix.clone(),
            is_fallback: self.fallback.then_some(true),
            is_inline: self.inline.then_some(true),
            selector: self.selector.clone(),
            ..ConfigPatch::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the custom property declarations of a style description.
    Css(InputArg),

    /// Print the resolved value snapshot as JSON.
    Js(InputArg),

    /// Print the selector map as JSON.
    Selectors(InputArg),

    /// Print the stylesheet of a built-in component or a token file.
    Tokens(TokensArgs),

    /// Print the theme token stylesheet for both modes.
    Theme,

    /// Write a starter spark.toml.
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct InputArg {
    /// Style description (.toml or .json)
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct TokensArgs {
    /// Component name (`button`, `tooltip`) or a token tree .toml file
    pub component: String,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create spark.toml in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing spark.toml
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_css_with_flags() {
        let cli = Cli::try_parse_from([
            "spark", "css", "button.toml", "--inline", "--prefix", "ui", "--mode", "dark",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Css(ref arg) if arg.input == PathBuf::from("button.toml")));
        assert_eq!(cli.mode, Some(ThemeMode::Dark));
        assert_eq!(
            cli.style.patch(),
            ConfigPatch::new().inline(true).prefix("ui")
        );
    }

    #[test]
    fn test_unset_flags_leave_patch_empty() {
        let cli = Cli::try_parse_from(["spark", "theme"]).unwrap();
        assert_eq!(cli.style.patch(), ConfigPatch::default());
        assert_eq!(cli.config, PathBuf::from("."));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["spark", "theme", "--mode", "sepia"]).is_err());
    }
}
