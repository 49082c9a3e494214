use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::crossterm::execute;

use crate::settings::ResolvedConfig;

use super::DemoApp;

const FRAME: Duration = Duration::from_millis(16);

/// Run the demo until the user quits.
pub(crate) fn run(config: &ResolvedConfig) -> Result<()> {
	let mut terminal = ratatui::init();
	terminal.clear()?;
	execute!(std::io::stdout(), EnableMouseCapture).context("enable mouse capture")?;

	let width = terminal.size().map(|size| size.width).unwrap_or_default();
	let mut app = DemoApp::new(config, width);
	log::info!("demo started with {} pages", config.titles.len());

	let (event_tx, event_rx) = mpsc::channel();
	let input_running = Arc::new(AtomicBool::new(true));
	let input_flag = Arc::clone(&input_running);

	let input_thread = thread::spawn(move || -> Result<()> {
		while input_flag.load(Ordering::Relaxed) {
			if event::poll(Duration::from_millis(50))? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let result: Result<()> = 'frames: loop {
		app.pump();

		loop {
			match event_rx.try_recv() {
				Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
					if app.handle_key(key) {
						break 'frames Ok(());
					}
				}
				Ok(Event::Mouse(mouse)) => app.handle_mouse(mouse),
				Ok(Event::Resize(_, _)) => app.dirty = true,
				Ok(_) => {}
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'frames Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		if app.needs_redraw()
			&& let Err(err) = terminal.draw(|frame| app.draw(frame))
		{
			break Err(err).context("draw frame");
		}

		thread::sleep(FRAME);
	};

	let _ = execute!(std::io::stdout(), DisableMouseCapture);
	ratatui::restore();

	input_running.store(false, Ordering::Relaxed);
	match input_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	result
}
