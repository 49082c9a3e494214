use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use pagetabs::indicator::POINTER_ROWS;
use pagetabs::{Page, PageDeck, ScrollState, TabIndicator, container_size_for};

use super::{DemoApp, Status};

const TAB_ROWS: u16 = 2;
const TAB_BACKGROUND: Color = Color::Rgb(0x2E, 0x3B, 0x8C);
const HELP: &str =
	"←/→ page · shift+←/→ or [ ] drag · space release · 1-9 tab · click tab · L log · q quit";

impl DemoApp {
	pub(super) fn draw(&mut self, frame: &mut Frame) {
		let [indicator_area, body, status_area] = Layout::vertical([
			Constraint::Length(TAB_ROWS + POINTER_ROWS),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(frame.area());

		let (pages_area, log_area) = if self.show_log {
			let [pages, log] =
				Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
					.areas(body);
			(pages, Some(log))
		} else {
			(body, None)
		};

		let (width, height) = container_size_for(indicator_area);
		self.indicator.resize(width, height);
		self.indicator_area = indicator_area;
		let tab_row = Rect {
			height: height as u16,
			..indicator_area
		};
		frame.render_widget(
			Block::default().style(Style::default().bg(TAB_BACKGROUND)),
			tab_row,
		);
		frame.render_widget(&self.indicator, indicator_area);

		self.deck
			.borrow_mut()
			.set_page_width(u32::from(pages_area.width));
		render_pages(frame, pages_area, &self.deck.borrow());

		if let Some(log_area) = log_area {
			render_log(frame, log_area);
		}
		render_status(frame, status_area, &self.status.borrow(), &self.indicator);
	}
}

/// Draw the page under the scroll position and, mid-transition, the sliver
/// of the next page sliding in from the right.
fn render_pages(frame: &mut Frame, area: Rect, deck: &PageDeck) {
	if area.is_empty() {
		return;
	}
	let scroll = deck.scroll_position();
	let leading = scroll.floor();
	let shift = (((scroll - leading) * f32::from(area.width)).round() as u16).min(area.width);
	let leading = leading as usize;

	if let Some(page) = deck.pages().get(leading) {
		let visible = Rect {
			width: area.width - shift,
			..area
		};
		frame.render_widget(page_paragraph(page).scroll((0, shift)), visible);
	}
	if shift > 0
		&& let Some(page) = deck.pages().get(leading + 1)
	{
		let incoming = Rect {
			x: area.x + area.width - shift,
			width: shift,
			..area
		};
		frame.render_widget(page_paragraph(page), incoming);
	}
}

fn page_paragraph(page: &Page) -> Paragraph<'_> {
	let title_style = Style::default().add_modifier(Modifier::BOLD);
	Paragraph::new(vec![
		Line::default(),
		Line::from(vec![Span::raw("  "), Span::styled(page.title.as_str(), title_style)]),
		Line::default(),
		Line::from(vec![Span::raw("  "), Span::raw(page.body.as_str())]),
		Line::default(),
		Line::from(Span::styled(
			format!("  {HELP}"),
			Style::default().fg(Color::DarkGray),
		)),
	])
}

fn render_log(frame: &mut Frame, area: Rect) {
	let widget = TuiLoggerWidget::default()
		.block(Block::bordered().title("Log"))
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.output_file(false)
		.output_line(false);
	frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, status: &Status, indicator: &TabIndicator) {
	let state = match status.state {
		ScrollState::Idle => "idle",
		ScrollState::Dragging => "dragging",
		ScrollState::Settling => "settling",
	};
	let selected = status
		.selected
		.map(|page| (page + 1).to_string())
		.unwrap_or_else(|| "-".to_string());
	let text = format!(
		" page {selected}/{} · {state} · at {}+{:.2} ({}px) · pointer {} · row scroll {}",
		indicator.tabs().len(),
		status.position,
		status.offset,
		status.offset_px,
		indicator.pointer_placement().x,
		indicator.scroll_x(),
	);
	frame.render_widget(
		Paragraph::new(text).style(Style::default().fg(Color::Gray)),
		area,
	);
}
