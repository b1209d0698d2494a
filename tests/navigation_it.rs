// crates.io
use serde_json::{Value, json};
// self
use pad_portal::{
	auth::AuthorizationGrant,
	guard::{DenyReason, GuardDecision, GuardRoutes, decide},
	nav::{AllowList, CompileOptions, Icon, MenuFallback, compile, compile_with, flatten},
};

fn grant(value: Value) -> AuthorizationGrant {
	AuthorizationGrant::from_value(value).expect("Fixture grant should decode.")
}

fn sub(name: Option<&str>, url: &str, is_menu: bool) -> Value {
	json!({ "nama_sub_menu": name, "url": url, "is_menu": is_menu })
}

fn menu(name: &str, subs: Vec<Value>) -> Value {
	json!({ "nama_menu": name, "sub_menus": subs })
}

fn role(menus: Vec<Value>) -> Value {
	json!({ "nama_roles": "Operator", "menus": menus })
}

#[test]
fn allow_list_is_empty_only_without_reachable_links() {
	let cases = [
		(Value::Null, true),
		(json!({ "menus": [] }), true),
		(json!([]), true),
		(json!([role(vec![menu("Laporan", vec![])])]), true),
		(json!([role(vec![menu("Dashboard", vec![sub(None, "/dashboard", false)])])]), false),
		(json!([role(vec![menu("Users", vec![sub(Some("Users"), "/users/list-users", true)])])]), false),
	];

	for (payload, expect_empty) in cases {
		let grant = AuthorizationGrant::from_value_lenient(payload.clone());

		assert_eq!(flatten(&compile(Some(&grant))).is_empty(), expect_empty, "payload: {payload}");
	}
}

#[test]
fn visible_sub_menus_become_ordered_children() {
	let g = grant(json!([role(vec![menu("User Management", vec![
		sub(Some("List Semua Roles"), "/rbac/list-roles", true),
		sub(None, "/rbac/anonymous", true),
		sub(Some("Hidden"), "/rbac/hidden", false),
		sub(Some("List Menu"), "/rbac/list-menu", true),
	])])]));
	let tree = compile(Some(&g));

	assert_eq!(tree.len(), 1);
	assert_eq!(tree[0].href, "");
	assert_eq!(
		tree[0].children.iter().map(|c| c.href.as_str()).collect::<Vec<_>>(),
		["/rbac/list-roles", "/rbac/list-menu"]
	);
	assert_eq!(tree[0].children[1].icon, Icon::Menu2);
}

#[test]
fn hidden_menu_links_to_first_sub_menu_even_if_hidden() {
	let g = grant(json!([role(vec![menu("Data Pendapatan", vec![
		sub(Some("Ranking"), "/data/ranking", false),
		sub(None, "/data/kontribusi", false),
	])])]));
	let tree = compile(Some(&g));

	assert_eq!(tree.len(), 1);
	assert_eq!(tree[0].href, "/data/ranking");
	assert!(tree[0].children.is_empty());
	assert_eq!(tree[0].icon, Icon::HexagonNumber1);

	let unlisted = compile_with(Some(&g), CompileOptions { fallback: MenuFallback::Unlisted });

	assert!(unlisted.is_empty());
}

#[test]
fn compile_and_flatten_are_repeatable() {
	let g = grant(json!([
		role(vec![menu("Dashboard", vec![sub(None, "/dashboard", false)])]),
		role(vec![menu("User Management", vec![sub(Some("Users"), "/users/list-users", true)])]),
	]));

	assert_eq!(flatten(&compile(Some(&g))), flatten(&compile(Some(&g))));
	assert_eq!(
		AllowList::from_grant(Some(&g), CompileOptions::default()).iter().collect::<Vec<_>>(),
		["/dashboard", "/users/list-users"]
	);
}

#[test]
fn guard_boundary_decisions() {
	let allow = ["/dashboard", "/users/list-users"].into_iter().collect::<AllowList>();
	let routes = GuardRoutes::default();

	assert_eq!(decide(&allow, "/users/list-users", &routes), GuardDecision::Permit);
	assert_eq!(decide(&allow, "/reports", &routes), GuardDecision::Deny {
		reason: DenyReason::NotPermitted,
		redirect_to: "/dashboard".into(),
	});

	for path in ["/dashboard", "/reports", "/"] {
		assert!(matches!(
			decide(&AllowList::default(), path, &routes),
			GuardDecision::Deny { reason: DenyReason::NoAccess, ref redirect_to } if redirect_to == "/sign-in"
		));
	}
}
