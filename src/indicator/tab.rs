use ratatui::layout::Alignment;
use unicode_width::UnicodeWidthStr;

use super::highlight::TabColor;
use crate::pager::Pager;

/// Text size of generated tab labels, in scale-independent units.
pub const TAB_TEXT_SIZE: f32 = 16.0;

/// Click action bound to the index of the tab it was installed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabClick {
	index: usize,
}

impl TabClick {
	pub const fn new(index: usize) -> Self {
		Self { index }
	}

	pub const fn index(self) -> usize {
		self.index
	}

	/// Ask the pager to move to the bound page.
	pub fn invoke(self, pager: &mut dyn Pager) {
		pager.jump_to_page(self.index);
	}
}

/// One clickable label in the tab row.
#[derive(Clone, Debug, PartialEq)]
pub struct TabLabel {
	title: String,
	color: TabColor,
	width: u32,
	weight: f32,
	text_size: f32,
	alignment: Alignment,
	click: Option<TabClick>,
}

impl TabLabel {
	/// Centred label in the normal color with no width yet.
	#[must_use]
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			color: TabColor::Normal,
			width: 0,
			weight: 0.0,
			text_size: TAB_TEXT_SIZE,
			alignment: Alignment::Center,
			click: None,
		}
	}

	/// Give the label a share of leftover space, as a declared child would.
	/// Cleared again when the indicator finishes layout.
	#[must_use]
	pub fn weighted(mut self, weight: f32) -> Self {
		self.weight = weight;
		self
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	/// Display width of the title text.
	pub fn title_width(&self) -> usize {
		self.title.width()
	}

	pub fn color(&self) -> TabColor {
		self.color
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn weight(&self) -> f32 {
		self.weight
	}

	pub fn text_size(&self) -> f32 {
		self.text_size
	}

	pub fn alignment(&self) -> Alignment {
		self.alignment
	}

	pub fn click(&self) -> Option<TabClick> {
		self.click
	}

	pub(crate) fn set_color(&mut self, color: TabColor) {
		self.color = color;
	}

	pub(crate) fn set_width(&mut self, width: u32) {
		self.width = width;
	}

	pub(crate) fn set_weight(&mut self, weight: f32) {
		self.weight = weight;
	}

	pub(crate) fn set_click(&mut self, click: TabClick) {
		self.click = Some(click);
	}
}
