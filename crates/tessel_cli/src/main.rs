//! Tessel CLI
//!
//! Inspect the classes, style rules and forwarded props a menu item resolves
//! to under a theme.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tessel_cn::menu_item::{self, MenuItem, MenuItemState};
use tessel_style::ClassOverrides;
use tessel_theme::Theme;

#[derive(Parser)]
#[command(name = "tessel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tessel component style inspector", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the root class string of a menu item
    Classes {
        #[command(flatten)]
        item: ItemArgs,
    },

    /// Print the composed style rule of a menu item
    Styles {
        #[command(flatten)]
        item: ItemArgs,

        /// Flatten media blocks for this viewport width (px)
        #[arg(long)]
        viewport: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Print the props forwarded to the list row as JSON
    Props {
        #[command(flatten)]
        item: ItemArgs,

        /// Focus-order hint
        #[arg(long, allow_hyphen_values = true)]
        tab_index: Option<i32>,

        /// ARIA role
        #[arg(long)]
        role: Option<String>,
    },

    /// Validate a theme file and print it as JSON
    Theme {
        /// Theme file (TOML)
        #[arg(long)]
        theme: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
struct ItemArgs {
    /// Mark the item as selected
    #[arg(long)]
    selected: bool,

    /// Disable the item
    #[arg(long)]
    disabled: bool,

    /// Remove horizontal padding
    #[arg(long)]
    disable_gutters: bool,

    /// Compact vertical sizing
    #[arg(long)]
    dense: bool,

    /// Theme file (TOML)
    #[arg(long)]
    theme: Option<String>,

    /// Caller class, as `token=class` or a bare class for `root` (repeatable)
    #[arg(long = "class")]
    classes: Vec<String>,

    /// Item label
    #[arg(long, default_value = "Menu item")]
    label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Css,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Classes { item } => cmd_classes(&item),

        Commands::Styles {
            item,
            viewport,
            format,
        } => cmd_styles(&item, viewport, format),

        Commands::Props {
            item,
            tab_index,
            role,
        } => cmd_props(&item, tab_index, role.as_deref()),

        Commands::Theme { theme } => cmd_theme(theme.as_deref()),
    }
}

fn load_theme(path: Option<&str>) -> Result<Theme> {
    match path {
        Some(path) => {
            let theme = Theme::load(Path::new(path))
                .with_context(|| format!("Failed to load theme from {}", path))?;
            info!("Using theme {}", path);
            Ok(theme)
        }
        None => {
            debug!("No theme given, using defaults");
            Ok(Theme::default())
        }
    }
}

/// Parse repeated `--class` values into per-token overrides
fn parse_classes(values: &[String]) -> Result<ClassOverrides> {
    let mut classes = ClassOverrides::new();
    for value in values {
        match value.split_once('=') {
            Some((token, class)) => {
                let token = token.trim();
                if token.is_empty() {
                    anyhow::bail!("Missing token in class override '{}'", value);
                }
                classes.insert(token, class.trim());
            }
            None => classes.insert("root", value.trim()),
        }
    }
    Ok(classes)
}

fn build_item(args: &ItemArgs) -> Result<MenuItem> {
    let mut item = menu_item::menu_item(args.label.as_str())
        .classes(parse_classes(&args.classes)?);
    // Only explicit flags override theme default props
    if args.selected {
        item = item.selected(true);
    }
    if args.disabled {
        item = item.disabled(true);
    }
    if args.disable_gutters {
        item = item.disable_gutters(true);
    }
    if args.dense {
        item = item.dense(true);
    }
    Ok(item)
}

fn cmd_classes(args: &ItemArgs) -> Result<()> {
    let theme = load_theme(args.theme.as_deref())?;
    let props = build_item(args)?.build(&theme);
    println!("{}", props.class_name);
    Ok(())
}

fn cmd_styles(args: &ItemArgs, viewport: Option<f64>, format: Format) -> Result<()> {
    let theme = load_theme(args.theme.as_deref())?;
    let item = build_item(args)?;
    let state: MenuItemState = item.state(&theme);
    let mut rule = item.build(&theme).style;

    if let Some(width) = viewport {
        debug!("Flattening styles at {}px", width);
        rule = rule.at_viewport(width);
    }

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&rule)?);
        }
        Format::Css => {
            let selector = format!(".{}", menu_item::get_menu_item_utility_class("root"));
            debug!("Emitting CSS for {:?}", state);
            print!("{}", rule.to_css(&selector));
        }
    }
    Ok(())
}

fn cmd_props(args: &ItemArgs, tab_index: Option<i32>, role: Option<&str>) -> Result<()> {
    let theme = load_theme(args.theme.as_deref())?;
    let mut item = build_item(args)?;
    if let Some(tab_index) = tab_index {
        item = item.tab_index(tab_index);
    }
    if let Some(role) = role {
        item = item.role(role);
    }
    let props = item.build(&theme);
    println!("{}", serde_json::to_string_pretty(&props)?);
    Ok(())
}

fn cmd_theme(path: Option<&str>) -> Result<()> {
    let theme = load_theme(path)?;
    info!("Theme is valid ({} component entries)", theme.components.len());
    println!("{}", serde_json::to_string_pretty(&theme)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classes() {
        let classes = parse_classes(&[
            "row".to_string(),
            "dense = row--dense".to_string(),
        ])
        .unwrap();
        assert_eq!(classes.get("root"), Some("row"));
        assert_eq!(classes.get("dense"), Some("row--dense"));
    }

    #[test]
    fn test_parse_classes_missing_token() {
        assert!(parse_classes(&["=row".to_string()]).is_err());
    }

    #[test]
    fn test_build_item_respects_flags() {
        let args = ItemArgs {
            dense: true,
            classes: vec!["row".to_string()],
            label: "Copy".to_string(),
            ..Default::default()
        };
        let props = build_item(&args).unwrap().build(&Theme::default());
        assert!(props.dense);
        assert_eq!(
            props.class_name,
            "TesselMenuItem-root row TesselMenuItem-gutters TesselMenuItem-dense"
        );
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "tessel", "styles", "--dense", "--viewport", "320", "--format", "css",
        ])
        .unwrap();
        match cli.command {
            Commands::Styles {
                item,
                viewport,
                format,
            } => {
                assert!(item.dense);
                assert_eq!(viewport, Some(320.0));
                assert_eq!(format, Format::Css);
            }
            _ => panic!("expected styles command"),
        }
    }

    #[test]
    fn test_load_missing_theme_fails() {
        assert!(load_theme(Some("/definitely/not/here/theme.toml")).is_err());
        assert!(load_theme(None).is_ok());
    }
}
