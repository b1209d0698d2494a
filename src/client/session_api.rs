//! Sign-in, sign-out, and the two detail calls that populate the session.
//!
//! [`ApiClient::sign_in`] runs the whole login round-trip under the client's flow guard: login,
//! then profile, then grant, strictly in that order. Results are only written to the session while
//! the session generation still matches the one the flow established; if anything else changed the
//! credential in between (a sign-out, an expiry), the late results are dropped with
//! [`Error::Superseded`].

// self
use crate::{
	_prelude::*,
	auth::{AuthorizationGrant, Credential, LoginRequest, SessionExpiry, UserProfile},
	client::ApiClient,
	http::ApiTransport,
};

/// Result of a completed sign-in round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
	/// Credential, expiry, profile, and grant are stored; history was replaced with the dashboard.
	Dashboard,
	/// Every call succeeded but the session is still missing a field, so no navigation happened.
	Incomplete,
}

#[derive(Debug, Deserialize)]
struct LoginEnvelope {
	data: LoginData,
}

#[derive(Debug, Deserialize)]
struct LoginData {
	#[serde(default)]
	token: Option<Credential>,
	#[serde(rename = "expirationTime", default)]
	expiration_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
	data: UserProfile,
}

#[derive(Debug, Deserialize)]
struct GrantEnvelope {
	#[serde(rename = "listData", default)]
	list_data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
	#[serde(default)]
	message: String,
}

impl<T> ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Signs in and loads the profile and grant, then navigates to the dashboard.
	///
	/// The session is cleared before the login call so no stale grant survives a failed attempt.
	/// Any failure stops the sequence before navigation.
	pub async fn sign_in(&self, request: LoginRequest) -> Result<SignInOutcome> {
		let _flow = self.flow_guard().lock().await;

		self.session.clear_all()?;

		let LoginEnvelope { data } = self.post("/login", &request).await?;

		if let (Some(token), Some(raw_expiry)) = (data.token, data.expiration_time) {
			let expiry = SessionExpiry::parse(&raw_expiry)?;

			self.session.set_login(token, expiry)?;
		}

		let generation = self.session.generation();

		self.load_profile(generation).await?;
		self.load_grant(generation).await?;

		if !self.session.snapshot().is_complete() {
			crate::obs::event!(warn, "sign-in left the session incomplete");

			return Ok(SignInOutcome::Incomplete);
		}

		self.navigator.replace(&self.config.routes.dashboard);

		Ok(SignInOutcome::Dashboard)
	}

	/// Signs out, clearing the session whatever the backend answers.
	///
	/// Returns the backend's acknowledgement message.
	pub async fn sign_out(&self) -> Result<String> {
		let result = self.get::<MessageEnvelope>("/logout").await;

		self.session.clear_all()?;
		self.navigator.replace(&self.config.routes.sign_in);

		result.map(|envelope| envelope.message)
	}

	/// Fetches the signed-in user's profile and stores it.
	pub async fn fetch_profile(&self) -> Result<UserProfile> {
		self.load_profile(self.session.generation()).await
	}

	/// Fetches the signed-in user's grant and stores it.
	pub async fn fetch_grant(&self) -> Result<AuthorizationGrant> {
		self.load_grant(self.session.generation()).await
	}

	async fn load_profile(&self, generation: u64) -> Result<UserProfile> {
		let ProfileEnvelope { data } = self.get("/users/detail-users").await?;

		self.ensure_generation(generation)?;
		self.session.set_profile(data.clone())?;

		Ok(data)
	}

	async fn load_grant(&self, generation: u64) -> Result<AuthorizationGrant> {
		let GrantEnvelope { list_data } = self.get("/users/detail-rbac").await?;
		let grant = if list_data.is_null() {
			AuthorizationGrant::default()
		} else {
			AuthorizationGrant::from_value(list_data)?
		};

		self.ensure_generation(generation)?;
		self.session.set_grant(grant.clone())?;

		Ok(grant)
	}

	fn ensure_generation(&self, expected: u64) -> Result<()> {
		if self.session.generation() != expected {
			crate::obs::event!(debug, expected, "dropping response for a replaced session");

			return Err(Error::Superseded);
		}

		Ok(())
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// crates.io
	use httpmock::prelude::*;
	use serde_json::json;
	// self
	use super::*;
	use crate::{_preludet::*, nav::NavEntry};

	const TOKEN: &str = "\"tok-42\"";

	async fn mock_login<'a>(server: &'a MockServer, expiration: &str) -> httpmock::Mock<'a> {
		server
			.mock_async(|when, then| {
				when.method(POST)
					.path("/login")
					.header_missing("x-pendapatan")
					.json_body(json!({ "email": "admin@pad.go.id", "password": "rahasia123" }));
				then.status(200).json_body(json!({
					"message": "Login berhasil",
					"code": 200,
					"status": true,
					"data": { "token": TOKEN, "expirationTime": expiration }
				}));
			})
			.await
	}

	fn login_request() -> LoginRequest {
		LoginRequest::new("admin@pad.go.id", "rahasia123")
			.expect("Fixture login request should validate.")
	}

	#[tokio::test]
	async fn sign_in_loads_profile_and_grant_then_navigates() {
		let server = MockServer::start_async().await;
		let harness = build_test_harness(&server.base_url());
		let login = mock_login(&server, "2099-12-31T23:59:59Z").await;
		let profile = server
			.mock_async(|when, then| {
				when.method(GET).path("/users/detail-users").header("x-pendapatan", "tok-42");
				then.status(200).json_body(json!({
					"message": "ok",
					"data": {
						"email": "admin@pad.go.id",
						"client_id": "c-1",
						"status": true,
						"next_login": 0,
						"is_verifikasi": true,
						"id_roles": 1,
						"is_update_password": false
					}
				}));
			})
			.await;
		let grant = server
			.mock_async(|when, then| {
				when.method(GET).path("/users/detail-rbac").header("x-pendapatan", "tok-42");
				then.status(200).json_body(json!({
					"message": "ok",
					"listData": [{
						"nama_roles": "Administrator",
						"menus": [{
							"nama_menu": "User Management",
							"sub_menus": [
								{ "nama_sub_menu": "Users", "url": "/users/list-users", "is_menu": true }
							]
						}]
					}]
				}));
			})
			.await;
		let outcome =
			harness.client.sign_in(login_request()).await.expect("Sign-in should succeed.");

		assert_eq!(outcome, SignInOutcome::Dashboard);
		assert_eq!(harness.navigator.current().as_deref(), Some("/dashboard"));

		login.assert_async().await;
		profile.assert_async().await;
		grant.assert_async().await;

		let state = harness.session.snapshot();

		assert!(state.is_complete());
		assert_eq!(state.profile.map(|p| p.email).as_deref(), Some("admin@pad.go.id"));

		let tree = crate::nav::compile(state.grant.as_ref());

		assert_eq!(tree[0].children, vec![NavEntry::link("Users", "/users/list-users")]);
	}

	#[tokio::test]
	async fn failed_detail_call_stops_before_navigation() {
		let server = MockServer::start_async().await;
		let harness = build_test_harness(&server.base_url());
		let _login = mock_login(&server, "2099-12-31T23:59:59Z").await;
		let _profile = server
			.mock_async(|when, then| {
				when.method(GET).path("/users/detail-users");
				then.status(500).json_body(json!({ "message": "Server sedang sibuk" }));
			})
			.await;
		let grant = server
			.mock_async(|when, then| {
				when.method(GET).path("/users/detail-rbac");
				then.status(200).json_body(json!({ "listData": [] }));
			})
			.await;
		let err = harness
			.client
			.sign_in(login_request())
			.await
			.expect_err("Profile failure should abort sign-in.");

		assert_eq!(err.toast_message(), "Server sedang sibuk");
		assert!(harness.navigator.history().is_empty());
		assert!(harness.session.snapshot().profile.is_none());

		grant.assert_calls_async(0).await;
	}

	#[tokio::test]
	async fn sign_out_clears_even_when_backend_fails() {
		let server = MockServer::start_async().await;
		let harness = build_test_harness(&server.base_url());
		let logout = server
			.mock_async(|when, then| {
				when.method(GET).path("/logout").header("x-pendapatan", "tok-42");
				then.status(500).json_body(json!({ "message": "Gagal logout" }));
			})
			.await;

		harness
			.session
			.set_credential(Credential::new(TOKEN))
			.expect("Credential should persist.");

		let err = harness.client.sign_out().await.expect_err("Backend failure should surface.");

		assert_eq!(err.toast_message(), "Gagal logout");
		assert!(!harness.session.is_authenticated());
		assert_eq!(harness.navigator.current().as_deref(), Some("/sign-in"));

		logout.assert_async().await;
	}

	#[tokio::test]
	async fn responses_for_a_replaced_session_are_dropped() {
		let server = MockServer::start_async().await;
		let harness = build_test_harness(&server.base_url());
		let _grant = server
			.mock_async(|when, then| {
				when.method(GET).path("/users/detail-rbac");
				then.status(200)
					.delay(std::time::Duration::from_millis(200))
					.json_body(json!({ "listData": [] }));
			})
			.await;
		let client = harness.client.clone();
		let session = harness.session.clone();
		let (fetched, cleared) = tokio::join!(client.fetch_grant(), async move {
			tokio::time::sleep(std::time::Duration::from_millis(50)).await;
			session.clear_all()
		});

		cleared.expect("Clear should persist.");

		assert!(matches!(fetched, Err(Error::Superseded)));
		assert!(harness.session.grant().is_none());
	}
}
