//! Validating builder for [`PortalConfig`](crate::config::PortalConfig).

// self
use crate::{
	_prelude::*,
	config::{PortalConfig, RouteTable},
	error::ConfigError,
	nav::CompileOptions,
};

/// Builder for [`PortalConfig`] values.
#[derive(Debug)]
pub struct PortalConfigBuilder {
	/// Base URL every endpoint path is appended to.
	pub backend_url: Url,
	/// Request header that carries the bearer credential.
	pub credential_header: String,
	/// Durable storage key holding the serialized session.
	pub storage_key: String,
	/// Well-known routes used for redirects.
	pub routes: RouteTable,
	/// Navigation compilation options.
	pub nav: CompileOptions,
}
impl PortalConfigBuilder {
	/// Header the revenue backend reads the credential from.
	pub const DEFAULT_CREDENTIAL_HEADER: &'static str = "x-pendapatan";
	/// Storage key the dashboard persists its session under.
	pub const DEFAULT_STORAGE_KEY: &'static str = "auth-storage";

	/// Creates a new builder seeded with defaults and the provided backend URL.
	pub fn new(backend_url: Url) -> Self {
		Self {
			backend_url,
			credential_header: Self::DEFAULT_CREDENTIAL_HEADER.into(),
			storage_key: Self::DEFAULT_STORAGE_KEY.into(),
			routes: RouteTable::default(),
			nav: CompileOptions::default(),
		}
	}

	/// Overrides the credential header name.
	pub fn credential_header(mut self, name: impl Into<String>) -> Self {
		self.credential_header = name.into();

		self
	}

	/// Overrides the session storage key.
	pub fn storage_key(mut self, key: impl Into<String>) -> Self {
		self.storage_key = key.into();

		self
	}

	/// Replaces the route table.
	pub fn routes(mut self, routes: RouteTable) -> Self {
		self.routes = routes;

		self
	}

	/// Replaces the navigation compilation options.
	pub fn nav(mut self, nav: CompileOptions) -> Self {
		self.nav = nav;

		self
	}

	/// Validates the configuration and produces a [`PortalConfig`].
	pub fn build(self) -> Result<PortalConfig, ConfigError> {
		self.validate()?;

		Ok(PortalConfig {
			backend_url: self.backend_url,
			credential_header: self.credential_header.to_ascii_lowercase(),
			storage_key: self.storage_key,
			routes: self.routes,
			nav: self.nav,
		})
	}

	fn validate(&self) -> Result<(), ConfigError> {
		match self.backend_url.scheme() {
			"http" | "https" => {},
			other => return Err(ConfigError::UnsupportedScheme { scheme: other.to_owned() }),
		}

		if !is_header_token(&self.credential_header) {
			return Err(ConfigError::InvalidHeaderName { name: self.credential_header.clone() });
		}
		if self.storage_key.trim().is_empty() {
			return Err(ConfigError::EmptyStorageKey);
		}
		if let Some(route) = self.routes.all().find(|route| !route.starts_with('/')) {
			return Err(ConfigError::InvalidRoute { route: route.clone() });
		}

		Ok(())
	}
}

// RFC 9110 `token` characters.
fn is_header_token(name: &str) -> bool {
	!name.is_empty()
		&& name.chars().all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c))
}
