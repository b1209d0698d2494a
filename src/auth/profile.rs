//! Signed-in user profile as returned by `GET /users/detail-users`.

// self
use crate::_prelude::*;

/// Identifying attributes of the signed-in user; replaced wholesale on refetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
	/// Login email address.
	pub email: String,
	/// Backend client identifier bound to the account.
	#[serde(default)]
	pub client_id: String,
	/// Whether the account is active.
	#[serde(default)]
	pub status: bool,
	/// Backend-managed next-login marker.
	#[serde(default)]
	pub next_login: i64,
	/// Whether the email address has been verified.
	#[serde(rename = "is_verifikasi", default)]
	pub is_verified: bool,
	/// Primary role identifier.
	#[serde(rename = "id_roles", default)]
	pub role_id: i64,
	/// Whether the user must change their password before continuing.
	#[serde(rename = "is_update_password", default)]
	pub must_update_password: bool,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn backend_field_names_map_onto_profile() {
		let profile: UserProfile = serde_json::from_str(
			"{\"email\":\"admin@pad.go.id\",\"client_id\":\"c-1\",\"status\":true,\"next_login\":0,\
			 \"is_verifikasi\":true,\"id_roles\":2,\"is_update_password\":false}",
		)
		.expect("Profile payload should deserialize.");

		assert_eq!(profile.email, "admin@pad.go.id");
		assert!(profile.is_verified);
		assert_eq!(profile.role_id, 2);
		assert!(!profile.must_update_password);
	}
}
