//! Paged tab indicator for terminal interfaces.
//!
//! The crate is built around [`TabIndicator`], a row of tab labels with a
//! triangular pointer underneath that follows a horizontal [`Pager`]. Hosts
//! attach a pager, pump its events once per frame, and render the indicator
//! as a `ratatui` widget.

pub mod app_dirs;
pub mod indicator;
pub mod logging;
pub mod pager;

pub use indicator::{
	IndicatorConfig, IndicatorError, PointerGeometry, PointerPlacement, TabColor, TabIndicator,
	TabLabel, compute_highlights, container_size_for,
};
pub use pager::{Page, PageChangeListener, PageDeck, PageEvent, PageEventSink, Pager, ScrollState};
