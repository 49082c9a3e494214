use std::env;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;
use pagetabs::app_dirs;

/// Stack the default files, explicit `--config` files, and `PAGETABS__*`
/// environment variables into one [`Config`].
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		let cwd = env::current_dir().ok();
		for path in app_dirs::config_files(cwd.as_deref()) {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix("pagetabs")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("demo.titles"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}
