//! The paged-content side of the indicator.
//!
//! A [`Pager`] owns the pages and the horizontal scroll position between them.
//! It reports progress as [`PageEvent`]s through a [`PageEventSink`] handed to
//! it on subscription; the indicator drains those events on the UI loop in
//! delivery order.

mod deck;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;

pub use deck::{DEFAULT_TRANSITION_FRAMES, Page, PageDeck};

/// Scroll phase reported by a pager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollState {
	/// No gesture or animation in progress.
	#[default]
	Idle,
	/// The user is dragging the pages.
	Dragging,
	/// The pager is animating towards a resting page.
	Settling,
}

/// A single notification emitted by a pager.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
	/// A page became the current page.
	Selected(usize),
	/// The pages moved. `position` is the leftmost visible page and `offset`
	/// the fraction in `[0, 1)` of the way towards `position + 1`.
	Scrolled {
		position: usize,
		offset: f32,
		offset_px: u32,
	},
	/// The scroll phase changed.
	ScrollStateChanged(ScrollState),
}

/// Sending half of the channel a pager reports through.
#[derive(Clone, Debug)]
pub struct PageEventSink {
	tx: Sender<PageEvent>,
}

impl PageEventSink {
	pub(crate) fn new(tx: Sender<PageEvent>) -> Self {
		Self { tx }
	}

	/// Queue an event. Returns `false` once the receiving side is gone.
	pub fn send(&self, event: PageEvent) -> bool {
		self.tx.send(event).is_ok()
	}
}

/// Paged content controller driven by the indicator.
pub trait Pager {
	/// Number of pages currently held.
	fn page_count(&self) -> usize;

	/// Move to `index`. Progress is reported through the subscribed sink.
	fn jump_to_page(&mut self, index: usize);

	/// Replace the sink page-change events are delivered to.
	fn subscribe(&mut self, sink: PageEventSink);
}

/// Shared handle so the host can keep driving gestures on a pager the
/// indicator is attached to.
impl<P: Pager> Pager for Rc<RefCell<P>> {
	fn page_count(&self) -> usize {
		self.borrow().page_count()
	}

	fn jump_to_page(&mut self, index: usize) {
		self.borrow_mut().jump_to_page(index);
	}

	fn subscribe(&mut self, sink: PageEventSink) {
		self.borrow_mut().subscribe(sink);
	}
}

/// Observer notified after the indicator has handled each pager event.
pub trait PageChangeListener {
	fn on_page_selected(&mut self, position: usize);

	fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_px: u32);

	fn on_page_scroll_state_changed(&mut self, state: ScrollState);
}
