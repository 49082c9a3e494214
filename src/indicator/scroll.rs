//! Pointer translation and tab-row auto-scroll for in-progress paging.

/// Result of one scroll step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollUpdate {
	/// Pointer offset from its resting position.
	pub translation: u32,
	/// New horizontal scroll of the tab row, when it has to move.
	pub viewport: Option<u32>,
}

/// Compute the pointer translation and tab-row scroll for a pager at
/// `position + offset`.
///
/// The tab row only scrolls once paging has passed the last fully visible
/// slot and there are more tabs than slots.
pub fn compute(
	position: usize,
	offset: f32,
	tab_width: u32,
	visible_tab_count: u32,
	tab_count: usize,
) -> ScrollUpdate {
	let slot = tab_width as f32;
	let translation = (slot * (position as f32 + offset)).round() as u32;
	let partial = (slot * offset).round() as u32;
	let position = position as u32;
	let visible = visible_tab_count.max(1);

	let overflowing = tab_count > visible as usize;
	let viewport = if position >= visible - 1 && offset > 0.0 && overflowing {
		let leading = if visible != 1 {
			position - (visible - 1)
		} else {
			position
		};
		Some(leading * tab_width + partial)
	} else {
		None
	};

	ScrollUpdate {
		translation,
		viewport,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn translation_interpolates_between_slots() {
		assert_eq!(compute(0, 0.0, 100, 4, 9).translation, 0);
		assert_eq!(compute(2, 0.5, 100, 4, 9).translation, 250);
		assert_eq!(compute(3, 0.9, 100, 4, 9).translation, 390);
	}

	#[test]
	fn translation_is_monotonic_over_a_page() {
		let mut last = compute(5, 0.0, 137, 4, 9).translation;
		assert_eq!(last, 685);
		for step in 1..100 {
			let offset = step as f32 / 100.0;
			let current = compute(5, offset, 137, 4, 9).translation;
			assert!(current >= last, "{current} < {last} at {offset}");
			last = current;
		}
		assert!(last <= 137 * 6);
	}

	#[test]
	fn no_scroll_below_threshold() {
		assert_eq!(compute(2, 0.5, 100, 4, 9).viewport, None);
	}

	#[test]
	fn scrolls_by_partial_offset_at_threshold() {
		assert_eq!(compute(3, 0.5, 100, 4, 9).viewport, Some(50));
		assert_eq!(compute(5, 0.25, 100, 4, 9).viewport, Some(225));
	}

	#[test]
	fn no_scroll_at_rest() {
		assert_eq!(compute(6, 0.0, 100, 4, 9).viewport, None);
	}

	#[test]
	fn no_scroll_when_every_tab_fits() {
		assert_eq!(compute(3, 0.5, 100, 4, 4).viewport, None);
		assert_eq!(compute(3, 0.5, 100, 4, 5).viewport, Some(50));
	}

	#[test]
	fn single_slot_scrolls_by_whole_position() {
		assert_eq!(compute(0, 0.5, 100, 1, 3).viewport, Some(50));
		assert_eq!(compute(2, 0.5, 100, 1, 3).viewport, Some(250));
	}
}
