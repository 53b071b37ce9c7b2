//! Spark CLI
//!
//! Renders style descriptions and component token trees:
//! - `spark css button.toml --selector :root`
//! - `spark js button.json`
//! - `spark selectors button.toml`
//! - `spark tokens button --mode dark`
//! - `spark theme`
//! - `spark init`
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

mod cli;
mod config;
mod input;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::{SparkConfig, CONFIG_FILE};
use spark_core::StyleTree;
use spark_theme::{component_tokens, ThemeState, TokenTree};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let load_config = || SparkConfig::load_or_default(&cli.config);
    let options = cli.style.patch();

    match &cli.command {
        Command::Css(arg) => Ok(style_tree(&arg.input, &load_config()?)?.css(&options)),
        Command::Js(arg) => {
            let snapshot = style_tree(&arg.input, &load_config()?)?.to_js(&options);
            Ok(serde_json::to_string_pretty(&snapshot)?)
        }
        Command::Selectors(arg) => {
            let style = load_config()?.style_config().fork(&options);
            let tree = StyleTree::new(input::load_style(&arg.input)?, &style);
            Ok(serde_json::to_string_pretty(&tree.selectors().to_json())?)
        }
        Command::Tokens(args) => {
            let config = load_config()?;
            let mode = cli.mode.unwrap_or(config.theme.mode);
            tracing::debug!(?config, %mode, "rendering component tokens");

            ThemeState::init(config.bundle()?, mode);
            let state = ThemeState::try_get().context("Theme state is not initialized")?;
            let tree = load_tokens(&args.component, state)?.with_config(config.style_config());
            Ok(tree.css(ThemeState::mode(), &options))
        }
        Command::Theme => {
            let config = load_config()?;
            let style = config.style_config().fork(&options);
            Ok(config.bundle()?.stylesheet(&style))
        }
        Command::Init(args) => init(&args.path, args.force),
    }
}

fn style_tree(path: &Path, config: &SparkConfig) -> Result<StyleTree> {
    Ok(StyleTree::new(input::load_style(path)?, &config.style_config()))
}

/// A built-in component name, or a token tree TOML file named after its stem
fn load_tokens(component: &str, state: &ThemeState) -> Result<TokenTree> {
    let path = Path::new(component);
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml")) {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("Invalid token file name {}", path.display()))?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return TokenTree::from_toml_str(name, &content)
            .with_context(|| format!("Failed to parse {}", path.display()));
    }

    Ok(component_tokens(component, state.bundle())?)
}

fn init(dir: &Path, force: bool) -> Result<String> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, SparkConfig::starter().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "created config");
    Ok(format!("Created {}", path.display()))
}
