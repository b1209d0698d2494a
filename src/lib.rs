//! Headless core of the Pendapatan Asli Daerah dashboard: a persisted session store, navigation
//! compiled from the signed-in user's authorization grant, route guarding, and an intercepted REST
//! client for the revenue backend.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]
#![cfg_attr(not(feature = "tracing"), allow(unused_variables))]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod nav;
pub mod obs;
pub mod rbac;
pub mod revenue;
pub mod session;
pub mod shell;
pub mod store;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// self
	use crate::auth::{AuthorizationGrant, CrudPermissions, Menu, Role, SubMenu};
	#[cfg(feature = "reqwest")]
	use crate::{
		client::ApiClient,
		config::PortalConfig,
		http::ReqwestTransport,
		session::SessionContext,
		shell::{RecordingNavigator, ToastLog},
	};

	/// Client type alias used by reqwest-backed tests.
	#[cfg(feature = "reqwest")]
	pub type ReqwestTestClient = ApiClient<ReqwestTransport>;

	/// Everything a test needs to drive and observe an [`ApiClient`].
	#[cfg(feature = "reqwest")]
	pub struct TestHarness {
		/// Client under test.
		pub client: ReqwestTestClient,
		/// Session shared with the client.
		pub session: SessionContext,
		/// Navigator capturing every history replacement.
		pub navigator: Arc<RecordingNavigator>,
		/// Notifier capturing every toast.
		pub toasts: Arc<ToastLog>,
	}

	/// Builds a client pointed at `backend_url` with an in-memory session.
	#[cfg(feature = "reqwest")]
	pub fn build_test_harness(backend_url: &str) -> TestHarness {
		let config = PortalConfig::builder(
			Url::parse(backend_url).expect("Test backend URL should parse successfully."),
		)
		.build()
		.expect("Test portal configuration should build successfully.");
		let session = SessionContext::in_memory(&config.storage_key);
		let navigator = Arc::new(RecordingNavigator::default());
		let toasts = Arc::new(ToastLog::default());
		let client = ApiClient::new(
			config,
			session.clone(),
			ReqwestTransport::default(),
			navigator.clone(),
			toasts.clone(),
		);

		TestHarness { client, session, navigator, toasts }
	}

	/// Builds a sub-menu fixture with every permission flag cleared.
	pub fn sub_menu(name: Option<&str>, url: &str, is_menu: bool) -> SubMenu {
		SubMenu {
			name: name.map(str::to_owned),
			url: url.to_owned(),
			is_menu,
			permissions: CrudPermissions::default(),
		}
	}

	/// Builds a single-role grant from `(menu name, sub-menus)` pairs.
	pub fn grant_with_menus(menus: Vec<(&str, Vec<SubMenu>)>) -> AuthorizationGrant {
		let menus = menus
			.into_iter()
			.map(|(name, sub_menus)| Menu { name: name.to_owned(), sub_menus })
			.collect();

		AuthorizationGrant::new(vec![Role { name: "Administrator".into(), menus }])
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, BTreeSet},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
