//! Intercepted REST client for the revenue backend.
//!
//! Every call goes through the same pipeline:
//!
//! 1. The credential header is set from the session (quotes stripped), or removed when signed out.
//! 2. The transport executes the request.
//! 3. The stored expiry is checked whether or not the transport reached the backend; a passed
//!    expiry clears the session, redirects to sign-in, and fails the call with
//!    [`Error::SessionExpired`].
//! 4. Non-2xx responses are normalized into [`Error::Authentication`] or
//!    [`TransportError::Status`] carrying the backend's `message`.
//!
//! Callers hand failures to [`ApiClient::report`], which applies the global policy: clear and
//! redirect on authentication failures from queries, toast everything else that is user-facing
//! (mutation authentication failures included).

pub mod rbac;
pub mod revenue;
pub mod session_api;

pub use session_api::SignInOutcome;

// self
use crate::{
	_prelude::*,
	config::PortalConfig,
	error::TransportError,
	http::{ApiRequest, ApiResponse, ApiTransport, Method},
	obs::{self, RequestOutcome, RequestSpan},
	session::SessionContext,
	shell::{Navigator, Notifier, Toast},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = ApiClient<ReqwestTransport>;

/// Backend messages that mean the credential was rejected.
const AUTHENTICATION_FAILURE_MESSAGES: [&str; 3] =
	["Unauthenticated.", "Authentication failed", "Invalid authentication"];

/// Returns `true` when a backend error message signals a rejected credential.
pub fn is_authentication_failure(message: &str) -> bool {
	AUTHENTICATION_FAILURE_MESSAGES.contains(&message)
}

/// Where a failed call originated; decides how [`ApiClient::report`] reacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorOrigin {
	/// Read call backing a view.
	Query,
	/// Write call triggered by a user action.
	Mutation,
}

/// Client that owns the session, the transport, and the shell seams.
pub struct ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Backend location, credential header, and routes.
	pub config: PortalConfig,
	/// Session shared with the route guard and the shell.
	pub session: SessionContext,
	/// HTTP transport used for every call.
	pub transport: Arc<T>,
	/// Router handle for redirects.
	pub navigator: Arc<dyn Navigator>,
	/// Toast sink for reported errors.
	pub notifier: Arc<dyn Notifier>,
	flow_guard: Arc<AsyncMutex<()>>,
}
impl<T> ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates a client over the provided transport and shell seams.
	pub fn new(
		config: PortalConfig,
		session: SessionContext,
		transport: impl Into<Arc<T>>,
		navigator: Arc<dyn Navigator>,
		notifier: Arc<dyn Notifier>,
	) -> Self {
		Self {
			config,
			session,
			transport: transport.into(),
			navigator,
			notifier,
			flow_guard: Default::default(),
		}
	}

	/// Applies the global error policy to a failed call.
	///
	/// - [`Error::Authentication`] from a query clears the session and replaces history with the
	///   root route; from a mutation it is toasted like any other failure.
	/// - [`Error::SessionExpired`] was already handled by the pipeline.
	/// - [`Error::Validation`] stays with the form that produced it.
	/// - [`Error::Superseded`] belongs to a result nobody is waiting for.
	/// - Everything else is toasted with its message.
	pub fn report(&self, error: &Error, origin: ErrorOrigin) {
		match (error, origin) {
			(Error::SessionExpired | Error::Validation(_) | Error::Superseded, _) => {},
			(Error::Authentication { .. }, ErrorOrigin::Query) =>
				self.terminate_session(&self.config.routes.root),
			(other, _) => self.notifier.toast(Toast::error(other.toast_message())),
		}
	}

	/// Reports the error of `result`, if any, and passes the result through.
	pub fn reporting<R>(&self, result: Result<R>, origin: ErrorOrigin) -> Result<R> {
		if let Err(e) = &result {
			self.report(e, origin);
		}

		result
	}

	/// Sends a `GET` through the pipeline and decodes the JSON body.
	pub async fn get<R>(&self, endpoint: &'static str) -> Result<R>
	where
		R: DeserializeOwned,
	{
		self.call(Method::Get, endpoint, None).await
	}

	/// Sends a `POST` with a JSON body through the pipeline and decodes the JSON body.
	pub async fn post<B, R>(&self, endpoint: &'static str, body: &B) -> Result<R>
	where
		B: ?Sized + Serialize,
		R: DeserializeOwned,
	{
		let body =
			serde_json::to_value(body).map_err(|source| TransportError::Encode { source })?;

		self.call(Method::Post, endpoint, Some(body)).await
	}

	async fn call<R>(
		&self,
		method: Method,
		endpoint: &'static str,
		body: Option<serde_json::Value>,
	) -> Result<R>
	where
		R: DeserializeOwned,
	{
		let span = RequestSpan::new(endpoint, method);

		obs::record_request_outcome(endpoint, RequestOutcome::Attempt);

		let result = span
			.instrument(async move {
				let mut request = ApiRequest::new(method, self.config.endpoint(endpoint)?);

				if let Some(body) = body {
					request = request.with_body(body);
				}

				self.attach_credential(&mut request);

				let response = self.transport.execute(request).await;

				self.ensure_not_expired()?;

				decode(normalize(response?)?)
			})
			.await;

		let outcome = if result.is_ok() { RequestOutcome::Success } else { RequestOutcome::Failure };

		span.record(outcome);
		obs::record_request_outcome(endpoint, outcome);

		result
	}

	fn attach_credential(&self, request: &mut ApiRequest) {
		match self.session.credential() {
			Some(credential) =>
				request.set_header(&self.config.credential_header, credential.header_value()),
			None => request.remove_header(&self.config.credential_header),
		}
	}

	fn ensure_not_expired(&self) -> Result<()> {
		if self.session.is_expired_at(OffsetDateTime::now_utc()) {
			crate::obs::event!(info, "session expired; signing out");

			self.terminate_session(&self.config.routes.sign_in);

			return Err(Error::SessionExpired);
		}

		Ok(())
	}

	// Clears the session and redirects. A failed persist still leaves the in-memory session
	// cleared, so the redirect proceeds.
	fn terminate_session(&self, redirect_to: &str) {
		if let Err(e) = self.session.clear_all() {
			crate::obs::event!(warn, error = %e, "failed to persist cleared session");
		}

		self.navigator.replace(redirect_to);
	}

	pub(crate) fn flow_guard(&self) -> &AsyncMutex<()> {
		&self.flow_guard
	}
}
impl<T> Clone for ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			session: self.session.clone(),
			transport: self.transport.clone(),
			navigator: self.navigator.clone(),
			notifier: self.notifier.clone(),
			flow_guard: self.flow_guard.clone(),
		}
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestTransport> {
	/// Creates a client that provisions its own reqwest transport.
	pub fn with_reqwest(
		config: PortalConfig,
		session: SessionContext,
		navigator: Arc<dyn Navigator>,
		notifier: Arc<dyn Notifier>,
	) -> Result<Self> {
		Ok(Self::new(config, session, ReqwestTransport::new()?, navigator, notifier))
	}
}
impl<T> Debug for ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("config", &self.config)
			.field("session", &self.session)
			.finish()
	}
}

#[derive(Deserialize)]
struct ErrorBody {
	message: Option<String>,
}

fn normalize(response: ApiResponse) -> Result<ApiResponse> {
	if response.is_success() {
		return Ok(response);
	}

	let message = serde_json::from_value::<ErrorBody>(response.json_or_null())
		.ok()
		.and_then(|body| body.message)
		.unwrap_or_else(|| format!("Request failed with status code {}", response.status));

	if response.status == 401 || is_authentication_failure(&message) {
		return Err(Error::Authentication { message });
	}

	Err(TransportError::Status { status: response.status, message }.into())
}

fn decode<R>(response: ApiResponse) -> Result<R>
where
	R: DeserializeOwned,
{
	let body = if response.body.is_empty() { b"null".as_slice() } else { &response.body };
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de)
		.map_err(|source| TransportError::Decode { source }.into())
}
