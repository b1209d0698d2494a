//! Allow-list of navigable paths, flattened from the compiled link tree.

// self
use crate::{
	_prelude::*,
	auth::AuthorizationGrant,
	nav::{CompileOptions, NavEntry, compile_with},
};

/// Flat, sorted set of every route reachable from a link tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList(BTreeSet<String>);
impl AllowList {
	/// Compiles the grant and flattens the resulting tree.
	pub fn from_grant(grant: Option<&AuthorizationGrant>, options: CompileOptions) -> Self {
		flatten(&compile_with(grant, options))
	}

	/// Returns `true` when `path` is permitted.
	pub fn contains(&self, path: &str) -> bool {
		self.0.contains(path)
	}

	/// Returns `true` when nothing is permitted.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of permitted routes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Permitted routes in sorted order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}
}
impl<S> FromIterator<S> for AllowList
where
	S: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = S>,
	{
		Self(iter.into_iter().map(Into::into).collect())
	}
}

/// Collects every non-empty href, descending into children of entries with an empty href too.
pub fn flatten(tree: &[NavEntry]) -> AllowList {
	fn visit(entries: &[NavEntry], out: &mut BTreeSet<String>) {
		for entry in entries {
			if !entry.href.is_empty() {
				out.insert(entry.href.clone());
			}

			visit(&entry.children, out);
		}
	}

	let mut out = BTreeSet::new();

	visit(tree, &mut out);

	AllowList(out)
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::nav::compile;

	fn grant(value: serde_json::Value) -> AuthorizationGrant {
		AuthorizationGrant::from_value(value).expect("Fixture grant should decode.")
	}

	#[test]
	fn parents_are_skipped_but_children_kept() {
		let tree = vec![
			NavEntry::link("Dashboard", "/dashboard"),
			NavEntry {
				children: vec![
					NavEntry::link("Users", "/users/list-users"),
					NavEntry::link("List Menu", "/rbac/list-menu"),
				],
				..NavEntry::link("User Management", "")
			},
		];
		let allow = flatten(&tree);

		assert_eq!(allow.iter().collect::<Vec<_>>(), [
			"/dashboard",
			"/rbac/list-menu",
			"/users/list-users"
		]);
		assert!(!allow.contains(""));
	}

	#[test]
	fn emptiness_tracks_reachable_links() {
		assert!(AllowList::from_grant(None, CompileOptions::default()).is_empty());
		assert!(
			AllowList::from_grant(
				Some(&AuthorizationGrant::from_value_lenient(json!("not a list"))),
				CompileOptions::default()
			)
			.is_empty()
		);

		let only_empty_menu = grant(json!([{ "nama_roles": "R", "menus": [
			{ "nama_menu": "Laporan", "sub_menus": [] }
		]}]));

		assert!(AllowList::from_grant(Some(&only_empty_menu), CompileOptions::default()).is_empty());

		let hidden_only = grant(json!([{ "nama_roles": "R", "menus": [
			{ "nama_menu": "Dashboard", "sub_menus": [{ "nama_sub_menu": null, "url": "/dashboard", "is_menu": false }] }
		]}]));

		assert_eq!(
			AllowList::from_grant(Some(&hidden_only), CompileOptions::default()).len(),
			1
		);
		assert!(
			AllowList::from_grant(
				Some(&hidden_only),
				CompileOptions { fallback: crate::nav::MenuFallback::Unlisted }
			)
			.is_empty()
		);
	}

	#[test]
	fn compile_then_flatten_is_idempotent() {
		let g = grant(json!([{ "nama_roles": "R", "menus": [
			{ "nama_menu": "User Management", "sub_menus": [
				{ "nama_sub_menu": "Users", "url": "/users/list-users", "is_menu": true, "read_permission": true }
			]},
			{ "nama_menu": "Dashboard", "sub_menus": [{ "nama_sub_menu": null, "url": "/dashboard", "is_menu": false }] }
		]}]));
		let first = flatten(&compile(Some(&g)));
		let second = flatten(&compile(Some(&g)));

		assert_eq!(first, second);
		assert_eq!(first, ["/dashboard", "/users/list-users"].into_iter().collect::<AllowList>());
	}
}
