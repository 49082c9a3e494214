//! Where `pagetabs` looks for its configuration.
//!
//! `PAGETABS_CONFIG_DIR` wins when set to a non-empty value; otherwise the
//! platform location from the `directories` crate is used.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "PAGETABS_CONFIG_DIR";

/// File names checked in the working directory, in merge order.
pub const LOCAL_CONFIG_FILES: [&str; 2] = [".pagetabs.toml", "pagetabs.toml"];

fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory holding the user's `config.toml`.
pub fn config_dir() -> Result<PathBuf> {
	if let Some(dir) = override_dir(env::var_os(CONFIG_DIR_ENV)) {
		return Ok(dir);
	}

	let dirs = ProjectDirs::from("io", "albo", "pagetabs")
		.ok_or_else(|| anyhow!("no home directory to place pagetabs configuration in"))?;
	Ok(dirs.config_local_dir().to_path_buf())
}

/// Every configuration file consulted for `cwd`, lowest precedence first.
/// Missing files are skipped by the loader.
pub fn config_files(cwd: Option<&Path>) -> Vec<PathBuf> {
	let mut files = Vec::new();
	if let Ok(dir) = config_dir() {
		files.push(dir.join("config.toml"));
	}
	if let Some(cwd) = cwd {
		files.extend(LOCAL_CONFIG_FILES.iter().map(|name| cwd.join(name)));
	}
	files
}
