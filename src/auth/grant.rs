//! Authorization grant: roles, their menus, and per-sub-menu CRUD permissions.
//!
//! The backend ships the grant as loosely shaped JSON (`listData` of `GET /users/detail-rbac`).
//! Decoding happens once at the API boundary so the rest of the crate works on typed records.

// self
use crate::{_prelude::*, error::TransportError};

/// Ordered roles granted to the signed-in user; the sole source of truth for navigation and
/// route access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationGrant(Vec<Role>);
impl AuthorizationGrant {
	/// Wraps an ordered list of roles.
	pub fn new(roles: Vec<Role>) -> Self {
		Self(roles)
	}

	/// Decodes a grant, reporting the offending JSON path on shape mismatch.
	pub fn from_value(value: serde_json::Value) -> Result<Self, TransportError> {
		serde_path_to_error::deserialize(value).map_err(|source| TransportError::Decode { source })
	}

	/// Decodes a grant, treating `null`, non-array, and malformed payloads as an empty grant.
	pub fn from_value_lenient(value: serde_json::Value) -> Self {
		if !value.is_array() {
			return Self::default();
		}

		Self::from_value(value).unwrap_or_default()
	}

	/// Roles in source order.
	pub fn roles(&self) -> &[Role] {
		&self.0
	}

	/// Returns `true` when no role is granted.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates every menu of every role, preserving role then menu order.
	pub fn menus(&self) -> impl Iterator<Item = &Menu> {
		self.0.iter().flat_map(|role| role.menus.iter())
	}

	/// Union of the permissions every role grants on `url`.
	pub fn permissions_for(&self, url: &str) -> CrudPermissions {
		self.menus()
			.flat_map(|menu| menu.sub_menus.iter())
			.filter(|sub| sub.url == url)
			.fold(CrudPermissions::default(), |acc, sub| acc.union(sub.permissions))
	}
}

/// Role entry of a grant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
	/// Display name.
	#[serde(rename = "nama_roles", default)]
	pub name: String,
	/// Menus reachable through this role, in display order.
	#[serde(default)]
	pub menus: Vec<Menu>,
}

/// Menu entry of a role.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
	/// Display name.
	#[serde(rename = "nama_menu", default)]
	pub name: String,
	/// Sub-menus in display order. URLs are unique within one menu.
	#[serde(default)]
	pub sub_menus: Vec<SubMenu>,
}

/// Sub-menu entry of a menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubMenu {
	/// Display name; `None` for sub-menus that only carry permissions.
	#[serde(rename = "nama_sub_menu", default)]
	pub name: Option<String>,
	/// Route this sub-menu grants.
	#[serde(default)]
	pub url: String,
	/// Whether the sub-menu is shown in navigation.
	#[serde(default)]
	pub is_menu: bool,
	/// CRUD flags granted on `url`.
	#[serde(flatten)]
	pub permissions: CrudPermissions,
}
impl SubMenu {
	/// Named and flagged visible.
	pub fn is_visible(&self) -> bool {
		self.name.is_some() && self.is_menu
	}
}

/// Four independent permission flags attached to a sub-menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrudPermissions {
	/// May create records.
	#[serde(rename = "create_permission", default)]
	pub create: bool,
	/// May read records.
	#[serde(rename = "read_permission", default)]
	pub read: bool,
	/// May update records.
	#[serde(rename = "update_permission", default)]
	pub update: bool,
	/// May delete records.
	#[serde(rename = "delete_permission", default)]
	pub delete: bool,
}
impl CrudPermissions {
	/// Every flag set.
	pub const ALL: Self = Self { create: true, read: true, update: true, delete: true };

	/// Returns whether `action` is permitted.
	pub const fn allows(self, action: CrudAction) -> bool {
		match action {
			CrudAction::Create => self.create,
			CrudAction::Read => self.read,
			CrudAction::Update => self.update,
			CrudAction::Delete => self.delete,
		}
	}

	/// Flag-wise OR.
	pub const fn union(self, other: Self) -> Self {
		Self {
			create: self.create || other.create,
			read: self.read || other.read,
			update: self.update || other.update,
			delete: self.delete || other.delete,
		}
	}
}

/// Action checked against [`CrudPermissions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrudAction {
	/// Create records.
	Create,
	/// Read records.
	Read,
	/// Update records.
	Update,
	/// Delete records.
	Delete,
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn payload() -> serde_json::Value {
		json!([{
			"nama_roles": "Administrator",
			"menus": [{
				"nama_menu": "Users",
				"sub_menus": [
					{
						"nama_sub_menu": "List Users",
						"url": "/users/list-users",
						"is_menu": true,
						"create_permission": true,
						"read_permission": true,
						"update_permission": false,
						"delete_permission": false
					},
					{
						"nama_sub_menu": null,
						"url": "/users/update/password",
						"is_menu": false,
						"read_permission": true
					}
				]
			}]
		}])
	}

	#[test]
	fn decodes_backend_payload() {
		let grant = AuthorizationGrant::from_value(payload()).expect("Grant payload should decode.");
		let menu = grant.menus().next().expect("Grant should contain one menu.");

		assert_eq!(grant.roles()[0].name, "Administrator");
		assert_eq!(menu.name, "Users");
		assert!(menu.sub_menus[0].is_visible());
		assert!(!menu.sub_menus[1].is_visible());
		assert!(menu.sub_menus[0].permissions.allows(CrudAction::Create));
		assert!(!menu.sub_menus[1].permissions.allows(CrudAction::Delete));
	}

	#[test]
	fn strict_decoding_names_the_offending_path() {
		let err = AuthorizationGrant::from_value(json!([{ "menus": [{ "sub_menus": 3 }] }]))
			.expect_err("Numeric sub_menus should be rejected.");

		assert!(err.to_string().contains("[0].menus[0].sub_menus"));
	}

	#[test]
	fn lenient_decoding_defaults_on_shape_mismatch() {
		assert!(AuthorizationGrant::from_value_lenient(serde_json::Value::Null).is_empty());
		assert!(AuthorizationGrant::from_value_lenient(json!({ "listData": [] })).is_empty());
		assert!(AuthorizationGrant::from_value_lenient(json!([{ "menus": 3 }])).is_empty());
		assert_eq!(AuthorizationGrant::from_value_lenient(payload()).roles().len(), 1);
	}

	#[test]
	fn permissions_union_across_roles() {
		let mut grant = AuthorizationGrant::from_value(payload()).expect("Grant should decode.");
		let mut second = grant.roles()[0].clone();

		second.menus[0].sub_menus[0].permissions =
			CrudPermissions { delete: true, ..CrudPermissions::default() };
		grant.0.push(second);

		let merged = grant.permissions_for("/users/list-users");

		assert!(merged.create && merged.read && merged.delete);
		assert!(!merged.update);
		assert_eq!(grant.permissions_for("/missing"), CrudPermissions::default());
	}
}
