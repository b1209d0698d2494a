//! Transport primitives for backend API calls.
//!
//! [`ApiTransport`] is the client's only dependency on an HTTP stack. The interceptor pipeline in
//! [`crate::client`] builds a fully decorated [`ApiRequest`] (URL, headers, JSON body) and hands it
//! to the transport; the transport returns the raw status and body as an [`ApiResponse`] without
//! interpreting either.

// self
use crate::{_prelude::*, error::TransportError};

/// Future returned by [`ApiTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ApiResponse, TransportError>> + 'a + Send>>;

/// HTTP stack capable of executing backend API calls.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared across clients.
/// Only network-level failures are errors here; every HTTP status, success or not, resolves to an
/// [`ApiResponse`].
pub trait ApiTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes `request`.
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_>;
}

/// HTTP method used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
}
impl Method {
	/// Upper-case method name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully decorated request handed to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute endpoint URL.
	pub url: Url,
	/// Request headers keyed by lower-case name.
	pub headers: BTreeMap<String, String>,
	/// JSON body, if any.
	pub body: Option<serde_json::Value>,
}
impl ApiRequest {
	/// Creates a request without headers or body.
	pub fn new(method: Method, url: Url) -> Self {
		Self { method, url, headers: BTreeMap::new(), body: None }
	}

	/// Attaches a JSON body.
	pub fn with_body(mut self, body: serde_json::Value) -> Self {
		self.body = Some(body);

		self
	}

	/// Sets a header, replacing any existing value.
	pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
		self.headers.insert(name.to_ascii_lowercase(), value.into());
	}

	/// Removes a header.
	pub fn remove_header(&mut self, name: &str) {
		self.headers.remove(&name.to_ascii_lowercase());
	}

	/// Returns a header value.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
	}
}

/// Raw backend response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Parses the body as JSON; an empty or non-JSON body yields `Value::Null`.
	pub fn json_or_null(&self) -> serde_json::Value {
		serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a client that identifies itself with the crate's user agent.
	pub fn new() -> Result<Self, crate::error::ConfigError> {
		let client = ReqwestClient::builder()
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiTransport for ReqwestTransport {
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let mut builder = match request.method {
				Method::Get => self.0.get(request.url),
				Method::Post => self.0.post(request.url),
			};

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}
			if let Some(body) = &request.body {
				builder = builder.json(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn header_names_are_case_insensitive() {
		let mut request = ApiRequest::new(
			Method::Get,
			Url::parse("https://pad.example.go.id/logout").expect("Fixture URL should parse."),
		);

		request.set_header("X-Pendapatan", "tok");

		assert_eq!(request.header("x-pendapatan"), Some("tok"));

		request.remove_header("x-PENDAPATAN");

		assert!(request.headers.is_empty());
	}

	#[test]
	fn non_json_bodies_read_as_null() {
		let response = ApiResponse { status: 502, body: b"<html>Bad Gateway</html>".to_vec() };

		assert!(!response.is_success());
		assert_eq!(response.json_or_null(), serde_json::Value::Null);
		assert!(ApiResponse { status: 204, body: Vec::new() }.is_success());
	}
}
