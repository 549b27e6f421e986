use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `quire` binary.
#[derive(Parser, Debug)]
#[command(
    name = "quire",
    version,
    long_version = long_version(),
    about = "Terminal notebook viewer with switchable cell languages",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "NOTEBOOK",
        help = "Notebook file to open (default: the embedded sample)"
    )]
    pub(crate) notebook: Option<PathBuf>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "QUIRE_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: library theme)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'a',
        long = "animate",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Animate cell show and hide transitions (default: enabled)"
    )]
    pub(crate) animate: Option<bool>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
}
