// self
use crate::{_prelude::*, http::Method, obs::RequestOutcome};

/// Future wrapped in the request span; the bare future when tracing is disabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Future wrapped in the request span; the bare future when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// Span covering one backend call, from header decoration to body decoding.
///
/// The `outcome` field starts empty and is filled once via [`RequestSpan::record`].
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Opens a `pad_portal.request` span for `method endpoint`.
	pub fn new(endpoint: &'static str, method: Method) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"pad_portal.request",
				endpoint,
				method = method.as_str(),
				outcome = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (endpoint, method);

			Self {}
		}
	}

	/// Stores the final outcome on the span.
	pub fn record(&self, outcome: RequestOutcome) {
		#[cfg(feature = "tracing")]
		self.span.record("outcome", outcome.as_str());
		#[cfg(not(feature = "tracing"))]
		let _ = outcome;
	}

	/// Runs `fut` inside the span without holding an entered guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `tracing` event at `$level` when the feature is enabled; expands to nothing otherwise.
macro_rules! event {
	($level:ident, $($arg:tt)+) => {
		#[cfg(feature = "tracing")]
		{
			::tracing::$level!($($arg)+);
		}
	};
}
pub(crate) use event;
