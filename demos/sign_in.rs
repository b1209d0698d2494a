//! Demonstrates the sign-in round-trip against a mocked revenue backend: login, profile and grant
//! fetches, sidebar compilation, and route guarding with the default reqwest transport.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use pad_portal::{
	auth::LoginRequest,
	client::ApiClient,
	config::PortalConfig,
	guard::{GuardRoutes, RouteGuard},
	nav,
	session::SessionContext,
	shell::{RecordingNavigator, ToastLog},
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/login");
			then.status(200).json_body(json!({
				"data": { "token": "\"demo-token\"", "expirationTime": "2099-01-01T00:00:00Z" }
			}));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/users/detail-users").header("x-pendapatan", "demo-token");
			then.status(200).json_body(json!({ "data": { "email": "admin@pad.go.id" } }));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/users/detail-rbac").header("x-pendapatan", "demo-token");
			then.status(200).json_body(json!({
				"listData": [{
					"nama_roles": "Administrator",
					"menus": [
						{ "nama_menu": "Dashboard", "sub_menus": [
							{ "nama_sub_menu": null, "url": "/dashboard", "is_menu": false }
						]},
						{ "nama_menu": "Pengaturan", "sub_menus": [
							{ "nama_sub_menu": "List Menu", "url": "/rbac/list-menu", "is_menu": true },
							{ "nama_sub_menu": "List Semua Roles", "url": "/rbac/list-roles", "is_menu": true }
						]}
					]
				}]
			}));
		})
		.await;

	let config = PortalConfig::builder(Url::parse(&server.base_url())?).build()?;
	let session = SessionContext::in_memory(&config.storage_key);
	let navigator = Arc::new(RecordingNavigator::default());
	let guard = RouteGuard::new(navigator.clone(), GuardRoutes::from(&config.routes), config.nav);
	let client = ApiClient::with_reqwest(
		config,
		session.clone(),
		navigator.clone(),
		Arc::new(ToastLog::default()),
	)?;
	let outcome = client.sign_in(LoginRequest::new("admin@pad.go.id", "rahasia123")?).await?;

	println!("Sign-in outcome: {outcome:?}; now at {:?}.", navigator.current());

	for entry in nav::compile(session.grant().as_ref()) {
		println!("[{}] {} {}", entry.icon, entry.title, entry.href);

		for child in &entry.children {
			println!("    [{}] {} {}", child.icon, child.title, child.href);
		}
	}

	for path in ["/rbac/list-menu", "/reports"] {
		let page = guard.visit_session(path, &session, || path);

		println!("{path}: {page:?}");
	}

	Ok(())
}
