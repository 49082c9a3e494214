//! Terminal rendering for [`TabIndicator`].
//!
//! The top rows of the area hold the tab row; the bottom [`POINTER_ROWS`]
//! hold the pointer, drawn on a braille canvas so it can sit between cells.
//! Both scroll together by the indicator's `scroll_x`.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Painter, Shape};
use unicode_width::UnicodeWidthChar;

use super::TabIndicator;
use super::geometry::PointerPath;

/// Rows reserved under the tab row for the pointer.
pub const POINTER_ROWS: u16 = 1;

/// How the pointer path is filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerPaint {
	pub argb: u32,
	/// Sample the path at sub-cell resolution instead of whole cells.
	pub anti_alias: bool,
}

impl PointerPaint {
	pub const SOLID_WHITE: Self = Self {
		argb: 0xFFFF_FFFF,
		anti_alias: true,
	};

	pub fn marker(&self) -> Marker {
		if self.anti_alias {
			Marker::Braille
		} else {
			Marker::Block
		}
	}

	pub fn color(&self) -> Color {
		Color::Rgb(
			(self.argb >> 16) as u8,
			(self.argb >> 8) as u8,
			self.argb as u8,
		)
	}
}

impl Default for PointerPaint {
	fn default() -> Self {
		Self::SOLID_WHITE
	}
}

/// Layout size of the tab row when the indicator is rendered into `area`.
pub fn container_size_for(area: Rect) -> (u32, u32) {
	let (tabs, _) = split_rows(area);
	(u32::from(tabs.width), u32::from(tabs.height))
}

fn split_rows(area: Rect) -> (Rect, Option<Rect>) {
	if area.height <= POINTER_ROWS {
		return (area, None);
	}
	let tabs = Rect {
		height: area.height - POINTER_ROWS,
		..area
	};
	let pointer = Rect {
		y: area.y + tabs.height,
		height: POINTER_ROWS,
		..area
	};
	(tabs, Some(pointer))
}

impl Widget for &TabIndicator {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.is_empty() {
			return;
		}
		let (tabs, pointer) = split_rows(area);
		if let Some(pointer) = pointer {
			render_pointer(self, pointer, buf, PointerPaint::default());
		}
		render_tabs(self, tabs, buf);
	}
}

fn render_tabs(indicator: &TabIndicator, area: Rect, buf: &mut Buffer) {
	let row = area.y + area.height / 2;
	let view_start = indicator.scroll_x();
	let view_end = view_start.saturating_add(u32::from(area.width));

	let mut start = 0u32;
	for tab in indicator.tabs() {
		if start >= view_end {
			break;
		}
		let end = start.saturating_add(tab.width());
		if end > view_start {
			let slack = tab.width().saturating_sub(tab.title_width() as u32);
			let lead = match tab.alignment() {
				Alignment::Left => 0,
				Alignment::Center => slack / 2,
				Alignment::Right => slack,
			};
			let style = Style::default().fg(tab.color().to_color());

			let mut x = start + lead;
			for ch in tab.title().chars() {
				let width = ch.width().unwrap_or(0) as u32;
				if width == 0 {
					continue;
				}
				if x + width > end {
					break;
				}
				if x >= view_start && x + width <= view_end {
					let column = area.x + (x - view_start) as u16;
					if let Some(cell) = buf.cell_mut(Position::new(column, row)) {
						cell.set_char(ch).set_style(style);
					}
				}
				x += width;
			}
		}
		start = end;
	}
}

fn render_pointer(indicator: &TabIndicator, area: Rect, buf: &mut Buffer, paint: PointerPaint) {
	let pointer = indicator.pointer();
	if pointer.width == 0 {
		return;
	}

	let shape = PointerShape {
		path: &pointer.path,
		offset: f64::from(indicator.pointer_placement().x) - f64::from(indicator.scroll_x()),
		height: f64::from(pointer.height.max(1)),
		rows: area.height,
		color: paint.color(),
	};
	Canvas::default()
		.marker(paint.marker())
		.x_bounds([0.0, f64::from(area.width)])
		.y_bounds([0.0, shape.height])
		.paint(|ctx| ctx.draw(&shape))
		.render(area, buf);
}

/// Filled pointer triangle. Canvas y grows upwards while the path's grows
/// downwards, so sample points are mirrored before the containment test.
struct PointerShape<'a> {
	path: &'a PointerPath,
	offset: f64,
	height: f64,
	rows: u16,
	color: Color,
}

impl Shape for PointerShape<'_> {
	fn draw(&self, painter: &mut Painter) {
		let [left, right, _] = self.path.points();
		let step_x = 0.25;
		let step_y = self.height / (f64::from(self.rows.max(1)) * 8.0);

		let mut y = 0.0;
		while y <= self.height {
			let mut x = f64::from(left.x);
			while x <= f64::from(right.x) {
				if self.path.contains(x, -y)
					&& let Some((column, row)) = painter.get_point(x + self.offset, y)
				{
					painter.paint(column, row, self.color);
				}
				x += step_x;
			}
			y += step_y;
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;
	use crate::indicator::{IndicatorConfig, TabColor};

	fn row_text(buf: &Buffer, y: u16) -> String {
		(0..buf.area.width)
			.map(|x| buf[(x, y)].symbol())
			.collect()
	}

	fn indicator(titles: &[&str], width: u16, height: u16) -> TabIndicator {
		let mut indicator = TabIndicator::new(IndicatorConfig::new(4, 240));
		let area = Rect::new(0, 0, width, height);
		let (w, h) = container_size_for(area);
		indicator.resize(w, h);
		indicator.set_tab_titles(titles.iter().copied());
		indicator.on_page_selected(0);
		indicator
	}

	#[test]
	fn container_excludes_pointer_rows() {
		assert_eq!(container_size_for(Rect::new(0, 0, 40, 3)), (40, 2));
		assert_eq!(container_size_for(Rect::new(0, 0, 40, 1)), (40, 1));
	}

	#[test]
	fn tabs_are_centred_in_their_slots() {
		let indicator = indicator(&["one", "two", "three", "four"], 40, 2);
		let backend = TestBackend::new(40, 2);
		let mut terminal = Terminal::new(backend).expect("create terminal");
		terminal
			.draw(|frame| frame.render_widget(&indicator, frame.area()))
			.expect("render frame");

		let buffer = terminal.backend().buffer();
		let row = row_text(buffer, 0);
		assert_eq!(&row[3..6], "one");
		assert_eq!(&row[13..16], "two");
		assert_eq!(&row[22..27], "three");
		assert_eq!(buffer[(3, 0)].fg, TabColor::Highlighted.to_color());
		assert_eq!(buffer[(13, 0)].fg, TabColor::Normal.to_color());
	}

	#[test]
	fn pointer_is_drawn_under_the_first_tab() {
		let indicator = indicator(&["a", "b", "c", "d"], 40, 2);
		assert_eq!(indicator.pointer().width, 1);

		let backend = TestBackend::new(40, 2);
		let mut terminal = Terminal::new(backend).expect("create terminal");
		terminal
			.draw(|frame| frame.render_widget(&indicator, frame.area()))
			.expect("render frame");

		let pointer_row = row_text(terminal.backend().buffer(), 1);
		let marked: Vec<usize> = pointer_row
			.chars()
			.enumerate()
			.filter(|(_, ch)| *ch != ' ' && *ch != '\u{2800}')
			.map(|(index, _)| index)
			.collect();
		assert!(!marked.is_empty());
		assert!(marked.iter().all(|column| *column < 10));
	}

	#[test]
	fn scrolled_row_hides_leading_tabs() {
		let titles = ["t0", "t1", "t2", "t3", "t4", "t5"];
		let mut indicator = indicator(&titles, 40, 2);
		indicator.scroll(4, 0.5);
		assert_eq!(indicator.scroll_x(), 15);

		let backend = TestBackend::new(40, 2);
		let mut terminal = Terminal::new(backend).expect("create terminal");
		terminal
			.draw(|frame| frame.render_widget(&indicator, frame.area()))
			.expect("render frame");

		let row = row_text(terminal.backend().buffer(), 0);
		assert!(!row.contains("t0"));
		assert!(!row.contains("t1"));
		assert!(row.contains("t4"));
	}

	#[test]
	fn aliased_paint_fills_whole_cells() {
		let indicator = indicator(&["a", "b", "c", "d"], 40, 2);
		let area = Rect::new(0, 0, 40, 1);
		let mut buf = Buffer::empty(area);
		let paint = PointerPaint {
			anti_alias: false,
			..PointerPaint::SOLID_WHITE
		};
		render_pointer(&indicator, area, &mut buf, paint);

		let row = row_text(&buf, 0);
		assert!(row.contains('█'));
		assert!(!row.chars().any(|ch| ('\u{2801}'..='\u{28FF}').contains(&ch)));
		assert_eq!(PointerPaint::SOLID_WHITE.marker(), Marker::Braille);
	}
}
