use serde::Deserialize;

/// Tabs sharing the indicator's width when nothing else is configured.
pub const DEFAULT_VISIBLE_TAB_COUNT: u32 = 4;

/// Screen width assumed when the host does not report one.
pub const DEFAULT_SCREEN_WIDTH: u32 = 1080;

/// Construction-time options for a [`TabIndicator`](super::TabIndicator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
	/// Number of tab slots across the indicator. Values below one fall back
	/// to [`DEFAULT_VISIBLE_TAB_COUNT`].
	pub visible_tab_count: i32,
	/// Width of the display the indicator lives on; bounds the pointer size.
	pub screen_width: u32,
}

impl Default for IndicatorConfig {
	fn default() -> Self {
		Self {
			visible_tab_count: DEFAULT_VISIBLE_TAB_COUNT as i32,
			screen_width: DEFAULT_SCREEN_WIDTH,
		}
	}
}

impl IndicatorConfig {
	#[must_use]
	pub fn new(visible_tab_count: i32, screen_width: u32) -> Self {
		Self {
			visible_tab_count,
			screen_width,
		}
	}

	/// Visible tab count with out-of-range values replaced by the default.
	pub fn effective_visible_tab_count(&self) -> u32 {
		normalize_visible_tab_count(self.visible_tab_count)
	}
}

pub(crate) fn normalize_visible_tab_count(count: i32) -> u32 {
	if count < 1 {
		DEFAULT_VISIBLE_TAB_COUNT
	} else {
		count as u32
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn negative_count_falls_back_to_default() {
		assert_eq!(IndicatorConfig::new(-1, 1080).effective_visible_tab_count(), 4);
	}

	#[test]
	fn zero_count_falls_back_to_default() {
		assert_eq!(IndicatorConfig::new(0, 1080).effective_visible_tab_count(), 4);
	}

	#[test]
	fn positive_count_is_kept() {
		assert_eq!(IndicatorConfig::new(7, 1080).effective_visible_tab_count(), 7);
	}
}
