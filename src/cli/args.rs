use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		BoolishValueParser, Styles,
		styling::{AnsiColor, Effects},
	},
};
use pagetabs::app_dirs;

/// Version banner with the configuration directory appended.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("pagetabs {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "pagetabs",
	version,
	long_version = long_version(),
	about = "Page through titled pages with a sliding tab indicator",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `pagetabs` demo.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PAGETABS_CONFIG",
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
		short = 'v',
		long = "visible-tabs",
		value_name = "NUM",
		allow_negative_numbers = true,
		help = "Number of tabs sharing the indicator width (default: 4)"
	)]
	pub(crate) visible_tabs: Option<i32>,
	#[arg(
		short = 't',
		long = "title",
		value_name = "TITLE",
		help = "Page title, repeat once per page (default: nine sample pages)"
	)]
	pub(crate) titles: Option<Vec<String>>,
	#[arg(
		short = 'p',
		long = "initial-page",
		value_name = "INDEX",
		help = "Page shown at start-up (default: 0)"
	)]
	pub(crate) initial_page: Option<usize>,
	#[arg(
		long = "screen-width",
		value_name = "COLUMNS",
		help = "Display width bounding the pointer size (default: terminal width)"
	)]
	pub(crate) screen_width: Option<u32>,
	#[arg(
		long = "transition-frames",
		value_name = "NUM",
		help = "Frames used to animate a page change (default: 12)"
	)]
	pub(crate) transition_frames: Option<u32>,
	#[arg(
		short = 'l',
		long = "log",
		value_parser = BoolishValueParser::new(),
		help = "Show the log pane at start-up (default: disabled)"
	)]
	pub(crate) show_log: Option<bool>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Most verbose level captured in the log pane (default: debug)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration and exit (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Format used by --print-config"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats for printed configuration.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
