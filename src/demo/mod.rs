//! Interactive demo: a deck of text pages with the tab indicator on top.

mod render;
mod runtime;

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use pagetabs::{IndicatorConfig, Page, PageChangeListener, PageDeck, ScrollState, TabIndicator};

use crate::settings::ResolvedConfig;

pub(crate) use runtime::run;

/// Fraction of a page moved by one drag key press.
const DRAG_STEP: f32 = 0.1;

/// Latest pager activity, shared with the status bar.
#[derive(Clone, Copy, Debug, Default)]
struct Status {
	selected: Option<usize>,
	position: usize,
	offset: f32,
	offset_px: u32,
	state: ScrollState,
}

/// Listener that mirrors pager events into the status bar and the log.
struct StatusListener {
	status: Rc<RefCell<Status>>,
}

impl PageChangeListener for StatusListener {
	fn on_page_selected(&mut self, position: usize) {
		log::info!("page {position} selected");
		self.status.borrow_mut().selected = Some(position);
	}

	fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_px: u32) {
		let mut status = self.status.borrow_mut();
		status.position = position;
		status.offset = offset;
		status.offset_px = offset_px;
	}

	fn on_page_scroll_state_changed(&mut self, state: ScrollState) {
		log::debug!("scroll state {state:?}");
		self.status.borrow_mut().state = state;
	}
}

pub(crate) struct DemoApp {
	indicator: TabIndicator,
	deck: Rc<RefCell<PageDeck>>,
	status: Rc<RefCell<Status>>,
	indicator_area: Rect,
	show_log: bool,
	dirty: bool,
}

impl DemoApp {
	pub(crate) fn new(config: &ResolvedConfig, terminal_width: u16) -> Self {
		let indicator_config = if config.screen_width_explicit {
			config.indicator
		} else {
			IndicatorConfig::new(config.indicator.visible_tab_count, u32::from(terminal_width))
		};

		let pages = config.titles.iter().enumerate().map(|(index, title)| {
			Page::new(
				title.clone(),
				format!("Page {} of {}", index + 1, config.titles.len()),
			)
		});
		let deck = Rc::new(RefCell::new(PageDeck::new(pages)));
		deck.borrow_mut().set_transition_frames(config.transition_frames);

		let status = Rc::new(RefCell::new(Status::default()));
		let mut indicator = TabIndicator::new(indicator_config);
		indicator.set_tab_titles(config.titles.iter().cloned());
		indicator.set_page_change_listener(StatusListener {
			status: Rc::clone(&status),
		});
		indicator.set_view_pager(Rc::clone(&deck), config.initial_page);
		status.borrow_mut().selected = Some(config.initial_page);

		Self {
			indicator,
			deck,
			status,
			indicator_area: Rect::default(),
			show_log: config.show_log,
			dirty: true,
		}
	}

	/// Advance animations and apply queued pager events.
	fn pump(&mut self) {
		self.deck.borrow_mut().tick();
		self.indicator.pump_page_events();
	}

	fn needs_redraw(&mut self) -> bool {
		let requested = self.indicator.take_redraw_request();
		std::mem::take(&mut self.dirty) || requested || self.show_log
	}

	/// Returns `true` when the user asked to quit.
	fn handle_key(&mut self, key: KeyEvent) -> bool {
		self.dirty = true;
		let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
		match key.code {
			KeyCode::Char('q') | KeyCode::Esc => return true,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
			KeyCode::Char('L') => self.show_log = !self.show_log,
			KeyCode::Left if shifted => self.deck.borrow_mut().drag_by(-DRAG_STEP),
			KeyCode::Right if shifted => self.deck.borrow_mut().drag_by(DRAG_STEP),
			KeyCode::Char('[') => self.deck.borrow_mut().drag_by(-DRAG_STEP),
			KeyCode::Char(']') => self.deck.borrow_mut().drag_by(DRAG_STEP),
			KeyCode::Char(' ') => self.deck.borrow_mut().release(),
			KeyCode::Left | KeyCode::Char('h') => self.deck.borrow_mut().step(false),
			KeyCode::Right | KeyCode::Char('l') => self.deck.borrow_mut().step(true),
			KeyCode::Char(digit @ '1'..='9') => {
				let index = digit as usize - '1' as usize;
				self.click(index);
			}
			_ => {}
		}
		false
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		let area = self.indicator_area;
		let inside = mouse.column >= area.x
			&& mouse.column < area.right()
			&& mouse.row >= area.y
			&& mouse.row < area.bottom();
		if !inside {
			return;
		}
		if let Some(index) = self.indicator.tab_at(u32::from(mouse.column - area.x)) {
			self.click(index);
		}
	}

	fn click(&mut self, index: usize) {
		if let Err(err) = self.indicator.click_tab(index) {
			log::warn!("tab click ignored: {err}");
		}
	}
}
