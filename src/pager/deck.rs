use super::{PageEvent, PageEventSink, Pager, ScrollState};

/// Frames used by an animated page transition.
pub const DEFAULT_TRANSITION_FRAMES: u32 = 12;

/// Offsets reported for a page boundary passed between two frames: just past
/// the boundary when moving backwards, just short of it when moving forwards.
const AFTER_BOUNDARY: f32 = f32::MIN_POSITIVE;
const BEFORE_BOUNDARY: f32 = 1.0 - f32::EPSILON;

/// Content shown for a single page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
	pub title: String,
	pub body: String,
}

impl Page {
	#[must_use]
	pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			body: body.into(),
		}
	}
}

#[derive(Clone, Copy, Debug)]
struct Transition {
	from: f32,
	to: f32,
	frame: u32,
	frames: u32,
}

/// In-memory horizontal pager.
///
/// The scroll position is continuous and measured in pages: `3.9` means page
/// 3 is mostly scrolled out and page 4 is almost fully visible. Drags move it
/// freely between the first and last page, releases snap it to the nearest
/// page, and jumps animate over a fixed number of [`tick`](Self::tick)s.
#[derive(Debug)]
pub struct PageDeck {
	pages: Vec<Page>,
	current: usize,
	scroll: f32,
	page_width: u32,
	frames: u32,
	state: ScrollState,
	transition: Option<Transition>,
	sink: Option<PageEventSink>,
}

impl PageDeck {
	#[must_use]
	pub fn new(pages: impl IntoIterator<Item = Page>) -> Self {
		Self {
			pages: pages.into_iter().collect(),
			current: 0,
			scroll: 0.0,
			page_width: 0,
			frames: DEFAULT_TRANSITION_FRAMES,
			state: ScrollState::Idle,
			transition: None,
			sink: None,
		}
	}

	/// Build a deck with one page per title, using the title as page body.
	#[must_use]
	pub fn from_titles<I, S>(titles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(titles.into_iter().map(|title| {
			let title = title.into();
			Page::new(title.clone(), title)
		}))
	}

	pub fn pages(&self) -> &[Page] {
		&self.pages
	}

	pub fn current(&self) -> usize {
		self.current
	}

	pub fn current_page(&self) -> Option<&Page> {
		self.pages.get(self.current)
	}

	/// Continuous scroll position in pages.
	pub fn scroll_position(&self) -> f32 {
		self.scroll
	}

	pub fn state(&self) -> ScrollState {
		self.state
	}

	pub fn is_animating(&self) -> bool {
		self.transition.is_some()
	}

	pub fn page_width(&self) -> u32 {
		self.page_width
	}

	/// Width of one page, used to report pixel offsets.
	pub fn set_page_width(&mut self, width: u32) {
		self.page_width = width;
	}

	pub fn set_transition_frames(&mut self, frames: u32) {
		self.frames = frames.max(1);
	}

	/// Drag the pages by `delta` pages; positive moves towards later pages.
	pub fn drag_by(&mut self, delta: f32) {
		let Some(last) = self.last_index() else {
			return;
		};
		self.transition = None;
		self.set_state(ScrollState::Dragging);
		self.move_to((self.scroll + delta).clamp(0.0, last as f32));
	}

	/// End a drag and settle on the nearest page.
	pub fn release(&mut self) {
		if self.state != ScrollState::Dragging {
			return;
		}
		let target = self.scroll.round() as usize;
		self.settle_to(target);
	}

	/// Animate to the neighbouring page, if there is one.
	pub fn step(&mut self, forward: bool) {
		let target = if forward {
			self.current.saturating_add(1)
		} else {
			self.current.saturating_sub(1)
		};
		self.jump_to_page(target);
	}

	/// Advance the running transition by one frame. Returns whether a
	/// transition is still in progress afterwards.
	pub fn tick(&mut self) -> bool {
		let Some(mut transition) = self.transition else {
			return false;
		};
		transition.frame += 1;
		if transition.frame >= transition.frames {
			self.transition = None;
			self.move_to(transition.to);
			self.set_state(ScrollState::Idle);
			return false;
		}

		let progress = transition.frame as f32 / transition.frames as f32;
		let eased = 1.0 - (1.0 - progress).powi(3);
		self.transition = Some(transition);
		self.move_to(transition.from + (transition.to - transition.from) * eased);
		true
	}

	/// Run the current transition to completion.
	pub fn finish(&mut self) {
		while self.tick() {}
	}

	fn last_index(&self) -> Option<usize> {
		self.pages.len().checked_sub(1)
	}

	fn settle_to(&mut self, target: usize) {
		let Some(last) = self.last_index() else {
			return;
		};
		let target = target.min(last);
		if target != self.current {
			self.current = target;
			self.emit(PageEvent::Selected(target));
		}

		let to = target as f32;
		if self.scroll == to {
			self.transition = None;
			self.emit_scrolled();
			self.set_state(ScrollState::Idle);
			return;
		}

		self.set_state(ScrollState::Settling);
		self.transition = Some(Transition {
			from: self.scroll,
			to,
			frame: 0,
			frames: self.frames,
		});
	}

	fn set_state(&mut self, state: ScrollState) {
		if self.state != state {
			self.state = state;
			self.emit(PageEvent::ScrollStateChanged(state));
		}
	}

	/// Move to `scroll`, first reporting every page boundary the jump skips
	/// over so observers see each page edge even on coarse frames.
	fn move_to(&mut self, scroll: f32) {
		let from = self.scroll;
		if scroll > from {
			let first = from.floor() as usize + 1;
			let last = scroll.floor() as usize;
			for boundary in first..=last {
				self.emit_scrolled_at(boundary - 1, BEFORE_BOUNDARY);
			}
		} else if scroll < from {
			let first = scroll.ceil() as usize;
			let last = from.ceil() as usize;
			for boundary in (first..last).rev() {
				self.emit_scrolled_at(boundary, AFTER_BOUNDARY);
			}
		}
		self.scroll = scroll;
		self.emit_scrolled();
	}

	fn emit_scrolled(&self) {
		let position = self.scroll.floor();
		self.emit_scrolled_at(position as usize, self.scroll - position);
	}

	fn emit_scrolled_at(&self, position: usize, offset: f32) {
		let offset_px = (offset * self.page_width as f32).round() as u32;
		self.emit(PageEvent::Scrolled {
			position,
			offset,
			offset_px,
		});
	}

	fn emit(&self, event: PageEvent) {
		if let Some(sink) = &self.sink
			&& !sink.send(event)
		{
			log::trace!("page event dropped, indicator detached: {event:?}");
		}
	}
}

impl Pager for PageDeck {
	fn page_count(&self) -> usize {
		self.pages.len()
	}

	fn jump_to_page(&mut self, index: usize) {
		self.settle_to(index);
	}

	fn subscribe(&mut self, sink: PageEventSink) {
		self.sink = Some(sink);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc::{self, Receiver};

	use super::*;

	fn subscribed(titles: &[&str]) -> (PageDeck, Receiver<PageEvent>) {
		let (tx, rx) = mpsc::channel();
		let mut deck = PageDeck::from_titles(titles.iter().copied());
		deck.set_page_width(100);
		deck.subscribe(PageEventSink::new(tx));
		(deck, rx)
	}

	fn drain(rx: &Receiver<PageEvent>) -> Vec<PageEvent> {
		rx.try_iter().collect()
	}

	#[test]
	fn drag_reports_dragging_then_fractional_scroll() {
		let (mut deck, rx) = subscribed(&["a", "b", "c"]);
		deck.drag_by(0.25);

		assert_eq!(
			drain(&rx),
			vec![
				PageEvent::ScrollStateChanged(ScrollState::Dragging),
				PageEvent::Scrolled {
					position: 0,
					offset: 0.25,
					offset_px: 25,
				},
			]
		);
	}

	#[test]
	fn drag_is_clamped_to_first_and_last_page() {
		let (mut deck, _rx) = subscribed(&["a", "b", "c"]);
		deck.drag_by(-1.0);
		assert_eq!(deck.scroll_position(), 0.0);
		deck.drag_by(10.0);
		assert_eq!(deck.scroll_position(), 2.0);
	}

	#[test]
	fn release_selects_nearest_page_before_settling() {
		let (mut deck, rx) = subscribed(&["a", "b", "c"]);
		deck.drag_by(0.75);
		drain(&rx);

		deck.release();
		assert_eq!(
			drain(&rx),
			vec![
				PageEvent::Selected(1),
				PageEvent::ScrollStateChanged(ScrollState::Settling),
			]
		);
		assert!(deck.is_animating());

		deck.finish();
		let events = drain(&rx);
		assert_eq!(
			events.last(),
			Some(&PageEvent::ScrollStateChanged(ScrollState::Idle))
		);
		assert_eq!(
			events[events.len() - 2],
			PageEvent::Scrolled {
				position: 1,
				offset: 0.0,
				offset_px: 0,
			}
		);
		assert_eq!(deck.current(), 1);
	}

	#[test]
	fn release_without_drag_is_ignored() {
		let (mut deck, rx) = subscribed(&["a", "b"]);
		deck.release();
		assert!(drain(&rx).is_empty());
	}

	#[test]
	fn jump_animates_monotonically() {
		let (mut deck, rx) = subscribed(&["a", "b", "c", "d"]);
		deck.set_transition_frames(4);
		deck.jump_to_page(3);
		deck.finish();

		let scrolls: Vec<f32> = drain(&rx)
			.into_iter()
			.filter_map(|event| match event {
				PageEvent::Scrolled {
					position, offset, ..
				} => Some(position as f32 + offset),
				_ => None,
			})
			.collect();
		assert!(scrolls.len() >= 4);
		assert!(scrolls.windows(2).all(|pair| pair[0] <= pair[1]));
		assert_eq!(scrolls.last(), Some(&3.0));
	}

	#[test]
	fn coarse_frames_report_each_boundary_passed() {
		let (mut deck, rx) = subscribed(&["a", "b", "c", "d", "e"]);
		deck.drag_by(4.0);
		drain(&rx);

		deck.set_transition_frames(1);
		deck.jump_to_page(0);
		deck.finish();
		let scrolls: Vec<(usize, f32)> = drain(&rx)
			.into_iter()
			.filter_map(|event| match event {
				PageEvent::Scrolled {
					position, offset, ..
				} => Some((position, offset)),
				_ => None,
			})
			.collect();
		let positions: Vec<usize> = scrolls.iter().map(|(position, _)| *position).collect();
		assert_eq!(positions, vec![3, 2, 1, 0, 0]);
		assert!(scrolls[..4].iter().all(|(_, offset)| *offset > 0.0));
		assert_eq!(scrolls.last(), Some(&(0, 0.0)));
	}

	#[test]
	fn forward_jump_reports_approach_to_each_page() {
		let (mut deck, rx) = subscribed(&["a", "b", "c"]);
		deck.drag_by(1.5);
		let scrolls: Vec<(usize, u32)> = drain(&rx)
			.into_iter()
			.filter_map(|event| match event {
				PageEvent::Scrolled {
					position,
					offset_px,
					..
				} => Some((position, offset_px)),
				_ => None,
			})
			.collect();
		assert_eq!(scrolls, vec![(0, 100), (1, 50)]);
	}

	#[test]
	fn jump_is_clamped_to_last_page() {
		let (mut deck, _rx) = subscribed(&["a", "b"]);
		deck.jump_to_page(9);
		deck.finish();
		assert_eq!(deck.current(), 1);
	}

	#[test]
	fn jump_to_current_page_settles_immediately() {
		let (mut deck, rx) = subscribed(&["a", "b"]);
		deck.jump_to_page(0);
		assert_eq!(
			drain(&rx),
			vec![PageEvent::Scrolled {
				position: 0,
				offset: 0.0,
				offset_px: 0,
			}]
		);
		assert!(!deck.is_animating());
	}

	#[test]
	fn empty_deck_ignores_gestures() {
		let (tx, rx) = mpsc::channel();
		let mut deck = PageDeck::new(Vec::new());
		deck.subscribe(PageEventSink::new(tx));
		deck.drag_by(0.5);
		deck.jump_to_page(1);
		assert!(drain(&rx).is_empty());
	}
}
