//! The paged tab indicator.
//!
//! [`TabIndicator`] keeps a row of tab labels and a triangular pointer in step
//! with a [`Pager`]. The pager reports selection, scroll progress, and scroll
//! phase; the indicator turns those into a highlighted tab, a continuous
//! pointer offset, and a horizontal scroll of the tab row once paging runs
//! past the last visible slot.

mod config;
mod error;
pub mod geometry;
pub mod highlight;
mod render;
pub mod scroll;
mod tab;

use std::sync::mpsc::{self, Receiver, TryRecvError};

pub use config::{DEFAULT_SCREEN_WIDTH, DEFAULT_VISIBLE_TAB_COUNT, IndicatorConfig};
pub use error::IndicatorError;
pub use geometry::{POINTER_GAP, PointerGeometry, PointerPath};
pub use highlight::{TabColor, compute_highlights};
pub use render::{POINTER_ROWS, PointerPaint, container_size_for};
pub use tab::{TAB_TEXT_SIZE, TabClick, TabLabel};

use crate::pager::{PageChangeListener, PageEvent, PageEventSink, Pager, ScrollState};

/// Where the pointer path is drawn, in the indicator's own coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerPlacement {
	pub x: u32,
	pub y: u32,
}

/// Tab row with a sliding pointer, driven by a pager.
pub struct TabIndicator {
	visible_tab_count: u32,
	tabs: Vec<TabLabel>,
	container_width: u32,
	container_height: u32,
	max_pointer_width: u32,
	pointer: PointerGeometry,
	scroll_translation: u32,
	scroll_x: u32,
	scroll_state: ScrollState,
	active_tab: Option<usize>,
	listener: Option<Box<dyn PageChangeListener>>,
	pager: Option<Box<dyn Pager>>,
	events: Option<Receiver<PageEvent>>,
	needs_redraw: bool,
}

impl Default for TabIndicator {
	fn default() -> Self {
		Self::new(IndicatorConfig::default())
	}
}

impl TabIndicator {
	#[must_use]
	pub fn new(config: IndicatorConfig) -> Self {
		Self {
			visible_tab_count: config.effective_visible_tab_count(),
			tabs: Vec::new(),
			container_width: 0,
			container_height: 0,
			max_pointer_width: geometry::max_pointer_width(config.screen_width),
			pointer: PointerGeometry::default(),
			scroll_translation: 0,
			scroll_x: 0,
			scroll_state: ScrollState::Idle,
			active_tab: None,
			listener: None,
			pager: None,
			events: None,
			needs_redraw: true,
		}
	}

	pub fn visible_tab_count(&self) -> u32 {
		self.visible_tab_count
	}

	/// Change the number of tab slots. Existing tabs keep their width until
	/// the next [`set_tab_titles`](Self::set_tab_titles) or
	/// [`finish_layout`](Self::finish_layout).
	pub fn set_visible_tab_count(&mut self, count: i32) {
		self.visible_tab_count = config::normalize_visible_tab_count(count);
		self.pointer = PointerGeometry::compute(
			self.container_width,
			self.visible_tab_count,
			self.max_pointer_width,
		);
		self.request_redraw();
	}

	/// Replace every tab with one label per title. An empty list keeps the
	/// current tabs.
	pub fn set_tab_titles<I, S>(&mut self, titles: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut titles = titles.into_iter().peekable();
		if titles.peek().is_none() {
			return;
		}

		let width = self.tab_width();
		self.tabs.clear();
		self.tabs.extend(titles.map(|title| {
			let mut label = TabLabel::new(title);
			label.set_width(width);
			label
		}));
		self.active_tab = None;
		self.install_click_handlers();
		log::debug!("tab row rebuilt with {} tabs", self.tabs.len());
		self.request_redraw();
	}

	/// Append a label as declared, without sizing it. Declared labels are
	/// sized and made clickable by [`finish_layout`](Self::finish_layout).
	pub fn push_tab(&mut self, label: TabLabel) {
		self.tabs.push(label);
		self.request_redraw();
	}

	/// Size every tab purely from its slot width and reinstall click
	/// handlers.
	pub fn finish_layout(&mut self) {
		let width = self.tab_width();
		for tab in &mut self.tabs {
			tab.set_weight(0.0);
			tab.set_width(width);
		}
		self.install_click_handlers();
		self.request_redraw();
	}

	/// Record a new layout size and rebuild the pointer for it.
	pub fn on_size_changed(&mut self, width: u32, height: u32) {
		self.container_width = width;
		self.container_height = height;
		self.pointer = PointerGeometry::compute(width, self.visible_tab_count, self.max_pointer_width);
		self.request_redraw();
	}

	/// Apply a layout size, re-laying out the tabs when it differs from the
	/// last one. Returns whether anything changed.
	pub fn resize(&mut self, width: u32, height: u32) -> bool {
		if (width, height) == (self.container_width, self.container_height) {
			return false;
		}
		self.on_size_changed(width, height);
		self.finish_layout();
		true
	}

	/// Attach a pager: subscribe to its events, move it to
	/// `initial_position`, and highlight that tab straight away.
	pub fn set_view_pager<P>(&mut self, pager: P, initial_position: usize)
	where
		P: Pager + 'static,
	{
		let (tx, rx) = mpsc::channel();
		let mut pager: Box<dyn Pager> = Box::new(pager);
		pager.subscribe(PageEventSink::new(tx));
		if pager.page_count() != self.tabs.len() {
			log::warn!(
				"pager has {} pages but the indicator has {} tabs",
				pager.page_count(),
				self.tabs.len()
			);
		}

		self.events = Some(rx);
		pager.jump_to_page(initial_position);
		self.pager = Some(pager);
		self.highlight(initial_position);
	}

	pub fn has_pager(&self) -> bool {
		self.pager.is_some()
	}

	pub fn pager_mut(&mut self) -> Option<&mut (dyn Pager + 'static)> {
		self.pager.as_deref_mut()
	}

	/// Install the observer that receives every pager event after the
	/// indicator has handled it.
	pub fn set_page_change_listener<L>(&mut self, listener: L)
	where
		L: PageChangeListener + 'static,
	{
		self.listener = Some(Box::new(listener));
	}

	pub fn clear_page_change_listener(&mut self) {
		self.listener = None;
	}

	/// Handle every event the attached pager has queued, in order. Returns
	/// the number handled.
	pub fn pump_page_events(&mut self) -> usize {
		let Some(events) = self.events.take() else {
			return 0;
		};

		let mut handled = 0;
		loop {
			match events.try_recv() {
				Ok(event) => {
					self.handle_page_event(event);
					handled += 1;
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					log::debug!("pager event channel closed");
					break;
				}
			}
		}

		self.events = Some(events);
		handled
	}

	pub fn handle_page_event(&mut self, event: PageEvent) {
		match event {
			PageEvent::Selected(position) => self.on_page_selected(position),
			PageEvent::Scrolled {
				position,
				offset,
				offset_px,
			} => self.on_page_scrolled(position, offset, offset_px),
			PageEvent::ScrollStateChanged(state) => self.on_page_scroll_state_changed(state),
		}
	}

	pub fn on_page_selected(&mut self, position: usize) {
		if let Some(listener) = self.listener.as_mut() {
			listener.on_page_selected(position);
		}
		self.highlight(position);
	}

	pub fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_px: u32) {
		self.scroll(position, offset);
		if let Some(listener) = self.listener.as_mut() {
			listener.on_page_scrolled(position, offset, offset_px);
		}
	}

	pub fn on_page_scroll_state_changed(&mut self, state: ScrollState) {
		self.scroll_state = state;
		if let Some(listener) = self.listener.as_mut() {
			listener.on_page_scroll_state_changed(state);
		}
	}

	/// Move the pointer to `position + offset` and scroll the tab row when
	/// paging has passed the last visible slot.
	pub fn scroll(&mut self, position: usize, offset: f32) {
		let update = scroll::compute(
			position,
			offset,
			self.tab_width(),
			self.visible_tab_count,
			self.tabs.len(),
		);
		self.scroll_translation = update.translation;
		if let Some(x) = update.viewport {
			log::trace!("tab row scrolled to {x}");
			self.scroll_x = x;
		}
		self.request_redraw();
	}

	/// Forward a click on tab `index` to the pager. Highlighting follows
	/// from the pager's selection event, not from the click.
	pub fn click_tab(&mut self, index: usize) -> Result<(), IndicatorError> {
		let tab = self.tabs.get(index).ok_or(IndicatorError::NoSuchTab {
			index,
			count: self.tabs.len(),
		})?;
		let click = tab.click().ok_or(IndicatorError::Unbound { index })?;
		let pager = self.pager.as_deref_mut().ok_or(IndicatorError::Detached)?;
		click.invoke(pager);
		Ok(())
	}

	/// Tab under `column`, measured from the left edge of the indicator.
	pub fn tab_at(&self, column: u32) -> Option<usize> {
		let target = column.checked_add(self.scroll_x)?;
		let mut start = 0u32;
		for (index, tab) in self.tabs.iter().enumerate() {
			let end = start.saturating_add(tab.width());
			if target >= start && target < end {
				return Some(index);
			}
			start = end;
		}
		None
	}

	pub fn tabs(&self) -> &[TabLabel] {
		&self.tabs
	}

	pub fn active_tab(&self) -> Option<usize> {
		self.active_tab
	}

	/// Width of one tab slot for the current layout.
	pub fn tab_width(&self) -> u32 {
		geometry::tab_width(self.container_width, self.visible_tab_count)
	}

	pub fn container_size(&self) -> (u32, u32) {
		(self.container_width, self.container_height)
	}

	pub fn pointer(&self) -> &PointerGeometry {
		&self.pointer
	}

	pub fn max_pointer_width(&self) -> u32 {
		self.max_pointer_width
	}

	pub fn scroll_translation(&self) -> u32 {
		self.scroll_translation
	}

	/// Horizontal scroll of the tab row.
	pub fn scroll_x(&self) -> u32 {
		self.scroll_x
	}

	pub fn scroll_state(&self) -> ScrollState {
		self.scroll_state
	}

	/// Translation applied before painting the pointer path.
	pub fn pointer_placement(&self) -> PointerPlacement {
		PointerPlacement {
			x: self.pointer.base_offset + self.scroll_translation,
			y: self.container_height + POINTER_GAP,
		}
	}

	/// Whether a redraw was requested since the last call.
	pub fn take_redraw_request(&mut self) -> bool {
		std::mem::take(&mut self.needs_redraw)
	}

	fn request_redraw(&mut self) {
		self.needs_redraw = true;
	}

	fn highlight(&mut self, position: usize) {
		let colors = compute_highlights(self.tabs.len(), Some(position));
		for (tab, color) in self.tabs.iter_mut().zip(colors) {
			tab.set_color(color);
		}

		if position < self.tabs.len() {
			log::debug!("tab {position} highlighted");
			self.active_tab = Some(position);
		} else {
			log::debug!(
				"page {position} selected without a matching tab ({} tabs)",
				self.tabs.len()
			);
			self.active_tab = None;
		}
		self.request_redraw();
	}

	fn install_click_handlers(&mut self) {
		for (index, tab) in self.tabs.iter_mut().enumerate() {
			tab.set_click(TabClick::new(index));
		}
	}
}
