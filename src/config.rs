//! Portal configuration: backend location, credential header, storage key, and route table.
//!
//! Values come from [`PortalConfigBuilder`] (validated on `build`), from serde, or from the
//! process environment through [`PortalConfig::from_env`].

/// Builder API for assembling portal configuration.
pub mod builder;

pub use builder::*;

// self
use crate::{_prelude::*, error::ConfigError, nav::CompileOptions};

/// Immutable portal configuration consumed by the client, session, and route guard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
	/// Base URL every endpoint path is appended to.
	pub backend_url: Url,
	/// Request header that carries the bearer credential.
	pub credential_header: String,
	/// Durable storage key holding the serialized session.
	pub storage_key: String,
	/// Well-known routes used for redirects.
	pub routes: RouteTable,
	/// Navigation compilation options.
	#[serde(default)]
	pub nav: CompileOptions,
}
impl PortalConfig {
	/// Environment variable holding the backend base URL.
	pub const ENV_BACKEND_URL: &'static str = "PAD_BACKEND_URL";
	/// Environment variable overriding the credential header name.
	pub const ENV_CREDENTIAL_HEADER: &'static str = "PAD_CREDENTIAL_HEADER";
	/// Environment variable overriding the session storage key.
	pub const ENV_STORAGE_KEY: &'static str = "PAD_STORAGE_KEY";

	/// Creates a new builder for the provided backend URL.
	pub fn builder(backend_url: Url) -> PortalConfigBuilder {
		PortalConfigBuilder::new(backend_url)
	}

	/// Loads configuration from `PAD_BACKEND_URL`, `PAD_CREDENTIAL_HEADER`, and `PAD_STORAGE_KEY`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|var| std::env::var(var).ok())
	}

	/// Loads configuration through an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let raw = lookup(Self::ENV_BACKEND_URL)
			.ok_or(ConfigError::MissingEnv { var: Self::ENV_BACKEND_URL })?;
		let backend_url =
			Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBackendUrl { source })?;
		let mut builder = Self::builder(backend_url);

		if let Some(header) = lookup(Self::ENV_CREDENTIAL_HEADER) {
			builder = builder.credential_header(header);
		}
		if let Some(key) = lookup(Self::ENV_STORAGE_KEY) {
			builder = builder.storage_key(key);
		}

		builder.build()
	}

	/// Joins `path` onto the backend URL the way a base-URL HTTP client does: by concatenation,
	/// so a base path such as `/api/v1` is preserved.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		let joined = format!(
			"{}/{}",
			self.backend_url.as_str().trim_end_matches('/'),
			path.trim_start_matches('/')
		);

		Url::parse(&joined)
			.map_err(|source| ConfigError::InvalidEndpoint { path: path.to_owned(), source })
	}
}

/// Well-known routes of the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
	/// Application root; authentication failures land here.
	pub root: String,
	/// Sign-in route; session expiry and sign-out land here.
	pub sign_in: String,
	/// Landing route after sign-in; denied routes fall back here.
	pub dashboard: String,
	/// Target when the user has no permitted route at all.
	pub no_access: String,
	/// Routes reachable without a session.
	pub public: Vec<String>,
	/// Static error views, never guarded.
	pub static_errors: Vec<String>,
}
impl RouteTable {
	/// Returns `true` for routes reachable without a session.
	pub fn is_public(&self, path: &str) -> bool {
		self.public.iter().any(|route| route == path)
	}

	/// Returns `true` for static error views.
	pub fn is_static_error(&self, path: &str) -> bool {
		self.static_errors.iter().any(|route| route == path)
	}

	/// Returns `true` when `path` must pass the route guard.
	pub fn is_guarded(&self, path: &str) -> bool {
		!self.is_public(path) && !self.is_static_error(path)
	}

	fn all(&self) -> impl Iterator<Item = &String> {
		[&self.root, &self.sign_in, &self.dashboard, &self.no_access]
			.into_iter()
			.chain(self.public.iter())
			.chain(self.static_errors.iter())
	}
}
impl Default for RouteTable {
	fn default() -> Self {
		Self {
			root: "/".into(),
			sign_in: "/sign-in".into(),
			dashboard: "/dashboard".into(),
			no_access: "/sign-in".into(),
			public: vec!["/sign-in".into(), "/sign-up".into(), "/forgot-password".into()],
			static_errors: vec!["/404".into(), "/401".into(), "/503".into()],
		}
	}
}
