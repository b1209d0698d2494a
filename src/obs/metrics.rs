// self
use crate::obs::RequestOutcome;

/// Records an API call outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(endpoint: &'static str, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"pad_portal_request_total",
			"endpoint" => endpoint,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (endpoint, outcome);
	}
}

/// Records a route guard decision via the global metrics recorder (when enabled).
pub fn record_guard_decision(decision: &'static str) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("pad_portal_guard_total", "decision" => decision).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = decision;
	}
}
