//! Role, menu, permission, and user administration calls.

// self
use crate::{
	_prelude::*,
	auth::AuthorizationGrant,
	client::ApiClient,
	http::ApiTransport,
	rbac::{
		Acknowledgement, ListResponse, MenuItem, PermissionRequest, RegisterUserRequest,
		RoleRecord, RoleStatusUpdate,
	},
};

#[derive(Debug, Deserialize)]
struct PermissionEnvelope {
	#[serde(rename = "listData", default)]
	list_data: serde_json::Value,
}

impl<T> ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// `GET /rbac/list-menu`: every sub-menu in the RBAC catalogue.
	pub async fn list_menu(&self) -> Result<Vec<MenuItem>> {
		self.get::<ListResponse<MenuItem>>("/rbac/list-menu").await.map(|r| r.list)
	}

	/// `GET /rbac/list-roles`: roles assignable to permissions.
	pub async fn list_roles(&self) -> Result<Vec<RoleRecord>> {
		self.get::<ListResponse<RoleRecord>>("/rbac/list-roles").await.map(|r| r.list)
	}

	/// `GET /rbac/list-roles-all`: every role, active or not.
	pub async fn list_all_roles(&self) -> Result<Vec<RoleRecord>> {
		self.get::<ListResponse<RoleRecord>>("/rbac/list-roles-all").await.map(|r| r.list)
	}

	/// `POST /rbac/update-roles`: activates or deactivates a role.
	pub async fn update_role_status(&self, update: &RoleStatusUpdate) -> Result<Acknowledgement> {
		self.post("/rbac/update-roles", update).await
	}

	/// `GET /rbac/list-permission`: the permission matrix of every role, shaped like a grant.
	pub async fn list_permissions(&self) -> Result<AuthorizationGrant> {
		let PermissionEnvelope { list_data } = self.get("/rbac/list-permission").await?;

		if list_data.is_null() {
			return Ok(AuthorizationGrant::default());
		}

		Ok(AuthorizationGrant::from_value(list_data)?)
	}

	/// `POST /rbac/create-permission`, after validating the request locally.
	pub async fn create_permission(&self, request: &PermissionRequest) -> Result<Acknowledgement> {
		request.validate()?;

		self.post("/rbac/create-permission", request).await
	}

	/// `POST /rbac/update-permission`, after validating the request locally.
	pub async fn update_permission(&self, request: &PermissionRequest) -> Result<Acknowledgement> {
		request.validate()?;

		self.post("/rbac/update-permission", request).await
	}

	/// `POST /users/register`: invites a user by email.
	pub async fn register_user(&self, request: &RegisterUserRequest) -> Result<Acknowledgement> {
		self.post("/users/register", request).await
	}
}
