use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use pagetabs::IndicatorConfig;
use pagetabs::indicator::DEFAULT_SCREEN_WIDTH;
use pagetabs::logging;
use pagetabs::pager::DEFAULT_TRANSITION_FRAMES;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Titles shown when none are configured.
pub(super) const SAMPLE_TITLES: [&str; 9] = [
	"Messages 1",
	"Saved 2",
	"Picks 3",
	"Messages 4",
	"Saved 5",
	"Picks 6",
	"Messages 7",
	"Saved 8",
	"Picks 9",
];

/// Configuration as read from files and the environment, before CLI
/// overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	indicator: IndicatorSection,
	demo: DemoSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct IndicatorSection {
	visible_tab_count: Option<i32>,
	screen_width: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DemoSection {
	titles: Option<Vec<String>>,
	initial_page: Option<usize>,
	transition_frames: Option<u32>,
	show_log: Option<bool>,
	log_level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(count) = cli.visible_tabs {
			self.indicator.visible_tab_count = Some(count);
		}
		if let Some(width) = cli.screen_width {
			self.indicator.screen_width = Some(width);
		}
		if let Some(titles) = &cli.titles {
			self.demo.titles = Some(titles.clone());
		}
		if let Some(page) = cli.initial_page {
			self.demo.initial_page = Some(page);
		}
		if let Some(frames) = cli.transition_frames {
			self.demo.transition_frames = Some(frames);
		}
		if let Some(show) = cli.show_log {
			self.demo.show_log = Some(show);
		}
		if let Some(level) = &cli.log_level {
			self.demo.log_level = Some(level.clone());
		}
	}

	/// Validate and fill defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let titles = match self.demo.titles {
			Some(titles) => sanitize_titles(titles),
			None => SAMPLE_TITLES.iter().map(|title| title.to_string()).collect(),
		};
		ensure!(!titles.is_empty(), "at least one page title is required");

		let initial_page = self.demo.initial_page.unwrap_or(0);
		ensure!(
			initial_page < titles.len(),
			"initial page {initial_page} is out of range for {} pages",
			titles.len()
		);

		let level_name = self.demo.log_level.unwrap_or_else(|| "debug".to_string());
		let log_level = logging::parse_level(&level_name)
			.with_context(|| format!("unknown log level '{level_name}'"))?;

		let frames = self.demo.transition_frames.unwrap_or(DEFAULT_TRANSITION_FRAMES);
		ensure!(frames > 0, "transition-frames must be at least 1");

		let indicator = IndicatorConfig::new(
			self.indicator
				.visible_tab_count
				.unwrap_or(IndicatorConfig::default().visible_tab_count),
			self.indicator.screen_width.unwrap_or(DEFAULT_SCREEN_WIDTH),
		);

		Ok(ResolvedConfig {
			indicator,
			screen_width_explicit: self.indicator.screen_width.is_some(),
			titles,
			initial_page,
			transition_frames: frames,
			show_log: self.demo.show_log.unwrap_or(false),
			log_level,
		})
	}
}

fn sanitize_titles(titles: Vec<String>) -> Vec<String> {
	titles
		.into_iter()
		.map(|title| title.trim().to_string())
		.filter(|title| !title.is_empty())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_use_sample_pages() {
		let resolved = RawConfig::default().resolve().expect("resolves");
		assert_eq!(resolved.titles.len(), 9);
		assert_eq!(resolved.indicator.visible_tab_count, 4);
		assert_eq!(resolved.initial_page, 0);
		assert!(!resolved.screen_width_explicit);
	}

	#[test]
	fn blank_titles_are_dropped() {
		let mut raw = RawConfig::default();
		raw.demo.titles = Some(vec![" One ".into(), "  ".into(), "Two".into()]);
		let resolved = raw.resolve().expect("resolves");
		assert_eq!(resolved.titles, ["One", "Two"]);
	}

	#[test]
	fn all_blank_titles_are_rejected() {
		let mut raw = RawConfig::default();
		raw.demo.titles = Some(vec![" ".into()]);
		assert!(raw.resolve().is_err());
	}

	#[test]
	fn initial_page_must_exist() {
		let mut raw = RawConfig::default();
		raw.demo.initial_page = Some(9);
		assert!(raw.resolve().is_err());
	}

	#[test]
	fn unknown_log_level_is_rejected() {
		let mut raw = RawConfig::default();
		raw.demo.log_level = Some("chatty".into());
		assert!(raw.resolve().is_err());
	}
}
