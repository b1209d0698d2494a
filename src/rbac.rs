//! Role, menu, and permission administration records.

// self
use crate::{_prelude::*, auth::CrudPermissions, error::ValidationError};

/// `{message, code, list}` envelope returned by the RBAC listing endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
	/// Backend message.
	#[serde(default)]
	pub message: String,
	/// Backend status code.
	#[serde(default)]
	pub code: i64,
	/// Listed records.
	#[serde(default = "Vec::new")]
	pub list: Vec<T>,
}

/// `{message, code, status}` acknowledgement returned by write endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
	/// Backend message.
	#[serde(default)]
	pub message: String,
	/// Backend status code.
	#[serde(default)]
	pub code: i64,
	/// Backend success flag.
	#[serde(default)]
	pub status: bool,
}

/// Sub-menu registered in the RBAC catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
	/// Catalogue identifier, referenced by permission writes.
	pub id: i64,
	/// Parent menu name.
	#[serde(rename = "nama_menu")]
	pub menu_name: String,
	/// Sub-menu name; `None` for permission-only entries.
	#[serde(rename = "nama_sub_menu", default)]
	pub sub_menu_name: Option<String>,
	/// Route guarded by this entry.
	pub url: String,
}
impl MenuItem {
	/// Label shown in pickers: `"menu - sub-menu"`, or the menu name alone.
	pub fn label(&self) -> String {
		match &self.sub_menu_name {
			Some(sub) => format!("{} - {sub}", self.menu_name),
			None => self.menu_name.clone(),
		}
	}
}

/// Role known to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
	/// Numeric identifier, referenced by permission writes.
	pub id: i64,
	/// Stable identifier used for status updates.
	pub uuid: String,
	/// Display name.
	#[serde(rename = "nama_roles")]
	pub name: String,
	/// Whether the role is active.
	pub status: bool,
}

/// Body of `POST /rbac/update-roles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStatusUpdate {
	/// Role identifier.
	pub uuid: String,
	/// New activation state.
	pub status: bool,
}

/// Body of `POST /rbac/create-permission` and `POST /rbac/update-permission`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequest {
	/// Catalogue identifier of the sub-menu.
	pub id_menu: i64,
	/// Role identifier.
	pub id_roles: i64,
	/// Grants creation.
	pub create_permission: bool,
	/// Grants reading.
	pub read_permission: bool,
	/// Grants updates.
	pub update_permission: bool,
	/// Grants deletion.
	pub delete_permission: bool,
}
impl PermissionRequest {
	/// Builds a request for `id_menu` and `id_roles` carrying `permissions`.
	pub fn new(id_menu: i64, id_roles: i64, permissions: CrudPermissions) -> Self {
		Self {
			id_menu,
			id_roles,
			create_permission: permissions.create,
			read_permission: permissions.read,
			update_permission: permissions.update,
			delete_permission: permissions.delete,
		}
	}

	/// Flags carried by the request.
	pub fn permissions(&self) -> CrudPermissions {
		CrudPermissions {
			create: self.create_permission,
			read: self.read_permission,
			update: self.update_permission,
			delete: self.delete_permission,
		}
	}

	/// Rejects requests without a menu or a role selected.
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.id_menu < 1 {
			return Err(ValidationError::MissingMenu);
		}
		if self.id_roles < 1 {
			return Err(ValidationError::MissingRole);
		}

		Ok(())
	}
}

/// Body of `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
	/// Email address of the invited user.
	pub email: String,
}
impl RegisterUserRequest {
	/// Validates and wraps an email address.
	pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
		let email = email.into().trim().to_owned();

		crate::auth::validate_email(&email)?;

		Ok(Self { email })
	}
}
