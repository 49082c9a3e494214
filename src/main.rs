mod cli;
mod demo;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		match cli.output {
			OutputFormat::Plain => print_plain(&resolved),
			OutputFormat::Json => print_json(&resolved)?,
		}
		return Ok(());
	}

	pagetabs::logging::initialize(resolved.log_level);
	demo::run(&resolved)
}
