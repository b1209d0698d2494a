//! Optional observability helpers for API calls, session transitions, and route guarding.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `pad_portal.request` with the `endpoint`,
//!   `method`, and `outcome` fields, plus events for session and guard transitions.
//! - Enable `metrics` to increment `pad_portal_request_total` (labeled by `endpoint` + `outcome`)
//!   and `pad_portal_guard_total` (labeled by `decision`).

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

pub(crate) use self::tracing::event;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Request handed to the transport.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
