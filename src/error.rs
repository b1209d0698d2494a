//! Portal-level error types shared across the session, navigation, and client layers.

// self
use crate::_prelude::*;

/// Portal-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical portal error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Transport failure or non-success backend response.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The stored session expiry has passed; the session was cleared.
	#[error("Session has expired.")]
	SessionExpired,
	/// The backend rejected the credential.
	#[error("{message}")]
	Authentication {
		/// Backend-supplied message that identified the failure.
		message: String,
	},
	/// Form input failed schema checks before any request was sent.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Tabular export could not be written.
	#[error("Export could not be written: {0}")]
	Export(#[from] csv::Error),
	/// The session changed while a multi-step flow was in flight; its results were dropped.
	#[error("Session changed while the request was in flight.")]
	Superseded,
}
impl Error {
	/// Text surfaced to the user when the error is reported.
	pub fn toast_message(&self) -> String {
		match self {
			Self::Transport(TransportError::Status { message, .. }) => message.clone(),
			other => other.to_string(),
		}
	}
}

/// Transport-level failures (network, HTTP status, payload shape).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Backend answered with a non-success status; `message` is taken from its error body.
	#[error("{message}")]
	Status {
		/// HTTP status code returned by the backend.
		status: u16,
		/// Backend-supplied message (or a generic fallback when the body had none).
		message: String,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the backend.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	Encode {
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// Backend responded with JSON that does not match the expected shape.
	#[error("Backend response does not match the expected shape at `{}`.", .source.path())]
	Decode {
		/// Structured parsing failure including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Configuration and validation failures raised while assembling the portal.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Backend base URL cannot be parsed.
	#[error("Backend URL is invalid.")]
	InvalidBackendUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Backend base URL uses a scheme other than http or https.
	#[error("Backend URL scheme `{scheme}` is not supported.")]
	UnsupportedScheme {
		/// Offending scheme.
		scheme: String,
	},
	/// Endpoint path cannot be joined onto the backend URL.
	#[error("Endpoint `{path}` cannot be joined onto the backend URL.")]
	InvalidEndpoint {
		/// Endpoint path requested by the caller.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Credential header name is empty or contains characters outside the HTTP token set.
	#[error("Credential header name `{name}` is invalid.")]
	InvalidHeaderName {
		/// Offending header name.
		name: String,
	},
	/// Storage key is empty.
	#[error("Session storage key cannot be empty.")]
	EmptyStorageKey,
	/// A configured route does not start with `/`.
	#[error("Route `{route}` must start with `/`.")]
	InvalidRoute {
		/// Offending route.
		route: String,
	},
	/// Required environment variable is missing.
	#[error("Environment variable `{var}` is not set.")]
	MissingEnv {
		/// Variable name.
		var: &'static str,
	},
	/// Session expiry is not an ISO-8601 timestamp.
	#[error("Session expiry `{value}` is not an ISO-8601 timestamp.")]
	InvalidExpiry {
		/// Raw value received from the backend.
		value: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Form input rejected before reaching the backend.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// Email field was left empty.
	#[error("Please enter your email")]
	MissingEmail,
	/// Email field is not a well-formed address.
	#[error("Invalid email address")]
	InvalidEmail,
	/// Password field was left empty.
	#[error("Please enter your password")]
	MissingPassword,
	/// Password is shorter than the accepted minimum.
	#[error("Password must be at least {min} characters long")]
	PasswordTooShort {
		/// Minimum accepted length in characters.
		min: usize,
	},
	/// Permission form has no menu selected.
	#[error("Menu is required")]
	MissingMenu,
	/// Permission form has no role selected.
	#[error("Role is required")]
	MissingRole,
}
