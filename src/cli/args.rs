use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use slidr::{app_dirs, logging};

use super::annotations::dim_cli_annotations;

/// Version banner listing the directories slidr reads from.
fn long_version() -> &'static str {
    let describe = |dir: anyhow::Result<PathBuf>| match dir {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("slidr {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {}", describe(app_dirs::get_config_dir()));
    let _ = writeln!(details, "deck directory: {}", describe(app_dirs::get_data_dir()));
    let _ = writeln!(details, "log file: {}", describe(logging::default_log_file()));

    Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Blue.on_default().effects(Effects::BOLD))
        .placeholder(AnsiColor::Cyan.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = tinted_cli_command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn tinted_cli_command() -> Command {
    CliArgs::command().mut_args(dim_cli_annotations)
}

#[derive(Parser, Debug)]
#[command(
    name = "slidr",
    version,
    long_version = long_version(),
    about = "Present hero, stats and chart slides in the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `slidr` binary.
pub(crate) struct CliArgs {
    #[arg(
        value_name = "DECK",
        help = "Deck file to present (default: the built-in welcome deck)"
    )]
    pub(crate) deck: Option<PathBuf>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SLIDR_CONFIG",
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
        short = 't',
        long,
        value_name = "THEME",
        help = "Select a theme by name or alias (default: hlt)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 's',
        long,
        value_name = "SLIDE",
        help = "Open on a slide id or 1-based position (default: 1)"
    )]
    pub(crate) start: Option<String>,
    #[arg(
        long = "transition-ms",
        value_name = "MS",
        help = "Length of the slide-in transition (default: 500)"
    )]
    pub(crate) transition_ms: Option<u64>,
    #[arg(
        long = "no-animation",
        help = "Show every slide fully drawn without transitions (default: disabled)"
    )]
    pub(crate) no_animation: bool,
    #[arg(
        long,
        help = "Reject decks containing slide types slidr cannot draw (default: disabled)"
    )]
    pub(crate) strict: bool,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Append log records to this file (default: slidr.log in the cache directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before presenting (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List available themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        long = "list-slides",
        help = "List the deck's slides and exit (default: disabled)"
    )]
    pub(crate) list_slides: bool,
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how --list-slides prints")]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats for listings.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
