use anyhow::Result;
use serde_json::json;

use crate::settings::ResolvedConfig;

/// Print the resolved configuration as a readable summary.
pub(crate) fn print_plain(config: &ResolvedConfig) {
	config.print_summary();
}

/// Format the resolved configuration as a JSON string.
pub(crate) fn format_config_json(config: &ResolvedConfig) -> Result<String> {
	let payload = json!({
		"indicator": {
			"visible_tab_count": config.indicator.effective_visible_tab_count(),
			"screen_width": config
				.screen_width_explicit
				.then_some(config.indicator.screen_width),
		},
		"demo": {
			"titles": config.titles,
			"initial_page": config.initial_page,
			"transition_frames": config.transition_frames,
			"show_log": config.show_log,
			"log_level": config.log_level.to_string().to_lowercase(),
		},
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the resolved configuration.
pub(crate) fn print_json(config: &ResolvedConfig) -> Result<()> {
	println!("{}", format_config_json(config)?);
	Ok(())
}
