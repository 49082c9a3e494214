use ratatui::style::Color;

/// Text color state of a tab label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabColor {
	/// Translucent white.
	#[default]
	Normal,
	/// Opaque white.
	Highlighted,
}

impl TabColor {
	/// ARGB value of the color.
	pub const fn argb(self) -> u32 {
		match self {
			TabColor::Normal => 0x77FF_FFFF,
			TabColor::Highlighted => 0xFFFF_FFFF,
		}
	}

	/// Terminal color with the alpha channel composited over black.
	pub fn to_color(self) -> Color {
		let argb = self.argb();
		let alpha = argb >> 24;
		let channel = |shift: u32| (((argb >> shift) & 0xFF) * alpha / 0xFF) as u8;
		Color::Rgb(channel(16), channel(8), channel(0))
	}
}

/// Colors for `tab_count` tabs with at most one highlighted.
///
/// An `active` index without a matching tab leaves every tab normal.
pub fn compute_highlights(tab_count: usize, active: Option<usize>) -> Vec<TabColor> {
	(0..tab_count)
		.map(|index| {
			if Some(index) == active {
				TabColor::Highlighted
			} else {
				TabColor::Normal
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exactly_one_tab_is_highlighted() {
		for count in 1..10 {
			for active in 0..count {
				let colors = compute_highlights(count, Some(active));
				let highlighted: Vec<usize> = colors
					.iter()
					.enumerate()
					.filter(|(_, color)| **color == TabColor::Highlighted)
					.map(|(index, _)| index)
					.collect();
				assert_eq!(highlighted, vec![active]);
			}
		}
	}

	#[test]
	fn highlight_vector_snapshot() {
		insta::assert_debug_snapshot!(compute_highlights(3, Some(1)), @r"
		[
		    Normal,
		    Highlighted,
		    Normal,
		]
		");
	}

	#[test]
	fn out_of_range_selection_highlights_nothing() {
		assert!(
			compute_highlights(3, Some(3))
				.iter()
				.all(|color| *color == TabColor::Normal)
		);
		assert!(compute_highlights(0, Some(0)).is_empty());
	}

	#[test]
	fn colors_blend_over_black() {
		assert_eq!(TabColor::Highlighted.to_color(), Color::Rgb(255, 255, 255));
		assert_eq!(TabColor::Normal.to_color(), Color::Rgb(0x77, 0x77, 0x77));
	}
}
