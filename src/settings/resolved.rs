use log::LevelFilter;
use pagetabs::IndicatorConfig;

/// Validated demo configuration.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub indicator: IndicatorConfig,
	/// Whether the screen width came from configuration rather than the
	/// built-in default; the demo measures the terminal otherwise.
	pub screen_width_explicit: bool,
	pub titles: Vec<String>,
	pub initial_page: usize,
	pub transition_frames: u32,
	pub show_log: bool,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!(
			"  Visible tabs: {}",
			self.indicator.effective_visible_tab_count()
		);
		if self.screen_width_explicit {
			println!("  Screen width: {}", self.indicator.screen_width);
		} else {
			println!("  Screen width: (terminal width)");
		}
		println!("  Pages: {}", self.titles.join(", "));
		println!("  Initial page: {}", self.initial_page);
		println!("  Transition frames: {}", self.transition_frames);
		println!("  Log pane: {}", if self.show_log { "shown" } else { "hidden" });
		println!("  Log level: {}", self.log_level);
	}
}
