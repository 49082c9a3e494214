//! Log capture for the in-terminal log pane.
//!
//! The library reports through the `log` facade. Hosts that want the records
//! on screen call [`initialize`] once and render a `tui_logger` widget; the
//! logger moves captured records into the widget buffer on its own thread.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `tui_logger` backend. Safe to call more than once; a logger
/// installed elsewhere is left in place.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if let Err(err) = tui_logger::init_logger(level) {
			eprintln!("log capture unavailable: {err}");
			return;
		}
		tui_logger::set_default_level(level);
	});
}

/// Parse a level name as used in configuration files.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
	name.trim().parse().ok()
}
