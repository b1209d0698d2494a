//! Side-effect seams the hosting shell provides: history navigation and toast notifications.
//!
//! The crate never talks to a browser directly. A web shell forwards [`Navigator::replace`] to
//! its router and [`Notifier::toast`] to its toaster; headless shells and tests use the
//! recording implementations below.

// self
use crate::_prelude::*;

/// Router handle used for redirects; every redirect replaces the current history entry.
pub trait Navigator
where
	Self: Send + Sync,
{
	/// Replaces the current location with `path`.
	fn replace(&self, path: &str);
}

/// Transient notification surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
	/// Short heading.
	pub title: String,
	/// Body text.
	pub description: String,
}
impl Toast {
	/// Title used for every reported error.
	pub const ERROR_TITLE: &'static str = "Error!";

	/// Builds the toast shown for a reported error.
	pub fn error(description: impl Into<String>) -> Self {
		Self { title: Self::ERROR_TITLE.into(), description: description.into() }
	}
}

/// Global toast sink.
pub trait Notifier
where
	Self: Send + Sync,
{
	/// Shows `toast`.
	fn toast(&self, toast: Toast);
}

/// [`Navigator`] that records every replacement; the last entry is the current location.
#[derive(Debug, Default)]
pub struct RecordingNavigator(Mutex<Vec<String>>);
impl RecordingNavigator {
	/// Most recent redirect target, if any.
	pub fn current(&self) -> Option<String> {
		self.0.lock().last().cloned()
	}

	/// Every redirect target in order.
	pub fn history(&self) -> Vec<String> {
		self.0.lock().clone()
	}
}
impl Navigator for RecordingNavigator {
	fn replace(&self, path: &str) {
		self.0.lock().push(path.to_owned());
	}
}

/// [`Notifier`] that keeps every toast in memory.
#[derive(Debug, Default)]
pub struct ToastLog(Mutex<Vec<Toast>>);
impl ToastLog {
	/// Every toast shown so far.
	pub fn toasts(&self) -> Vec<Toast> {
		self.0.lock().clone()
	}

	/// Removes and returns every toast shown so far.
	pub fn drain(&self) -> Vec<Toast> {
		std::mem::take(&mut *self.0.lock())
	}
}
impl Notifier for ToastLog {
	fn toast(&self, toast: Toast) {
		self.0.lock().push(toast);
	}
}
