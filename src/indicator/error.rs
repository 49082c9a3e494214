use thiserror::Error;

/// Failures when forwarding a tab click to the pager.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
	/// The clicked index has no tab.
	#[error("no tab at index {index} ({count} tabs)")]
	NoSuchTab { index: usize, count: usize },

	/// The tab exists but its click handler has not been installed yet.
	#[error("tab {index} has no click handler installed")]
	Unbound { index: usize },

	/// No pager has been attached with `set_view_pager`.
	#[error("no pager attached to the indicator")]
	Detached,
}
