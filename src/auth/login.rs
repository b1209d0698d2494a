//! Sign-in form input, validated before any request leaves the client.

// crates.io
use email_address::{EmailAddress, Options};
// self
use crate::{_prelude::*, error::ValidationError};

/// Credentials submitted to `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
	email: String,
	password: String,
}
impl LoginRequest {
	/// Minimum accepted password length, in characters.
	pub const MIN_PASSWORD_LEN: usize = 7;

	/// Validates the sign-in form and builds the request body.
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, ValidationError> {
		let email = email.into().trim().to_owned();
		let password = password.into();

		validate_email(&email)?;

		if password.is_empty() {
			return Err(ValidationError::MissingPassword);
		}
		if password.chars().count() < Self::MIN_PASSWORD_LEN {
			return Err(ValidationError::PasswordTooShort { min: Self::MIN_PASSWORD_LEN });
		}

		Ok(Self { email, password })
	}

	/// Submitted email address.
	pub fn email(&self) -> &str {
		&self.email
	}
}
impl Debug for LoginRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LoginRequest")
			.field("email", &self.email)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Checks that `email` is present and is a bare RFC 5322 address with a top-level domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
	if email.is_empty() {
		return Err(ValidationError::MissingEmail);
	}

	let options = Options::default().with_required_tld().without_display_text();
	let address = EmailAddress::parse_with_options(email, options)
		.map_err(|_| ValidationError::InvalidEmail)?;
	let local = address.local_part();

	// Dot-atom: no leading or trailing dot.
	if local.starts_with('.') || local.ends_with('.') {
		return Err(ValidationError::InvalidEmail);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn accepts_well_formed_credentials() {
		let request = LoginRequest::new(" admin@pad.go.id ", "rahasia123")
			.expect("Well-formed credentials should validate.");

		assert_eq!(request.email(), "admin@pad.go.id");
		assert!(!format!("{request:?}").contains("rahasia123"));
	}

	#[test]
	fn rejects_schema_violations_in_field_order() {
		assert_eq!(LoginRequest::new("", ""), Err(ValidationError::MissingEmail));
		assert_eq!(LoginRequest::new("admin", "rahasia123"), Err(ValidationError::InvalidEmail));
		assert_eq!(LoginRequest::new("admin@pad", "rahasia123"), Err(ValidationError::InvalidEmail));
		assert_eq!(LoginRequest::new("a@@pad.go.id", "rahasia123"), Err(ValidationError::InvalidEmail));
		assert_eq!(LoginRequest::new(".a@pad.go.id", "rahasia123"), Err(ValidationError::InvalidEmail));
		assert_eq!(LoginRequest::new("a.@pad.go.id", "rahasia123"), Err(ValidationError::InvalidEmail));
		assert_eq!(LoginRequest::new("a..b@pad.go.id", "rahasia123"), Err(ValidationError::InvalidEmail));
		assert_eq!(
			LoginRequest::new("Admin <admin@pad.go.id>", "rahasia123"),
			Err(ValidationError::InvalidEmail)
		);
		assert_eq!(LoginRequest::new("admin@pad.go.id", ""), Err(ValidationError::MissingPassword));
		assert_eq!(
			LoginRequest::new("admin@pad.go.id", "pendek"),
			Err(ValidationError::PasswordTooShort { min: 7 })
		);
	}

	#[test]
	fn accepts_dotted_and_tagged_local_parts() {
		for email in ["first.last@pad.go.id", "ops+alerts@bapenda.jabarprov.go.id"] {
			assert_eq!(validate_email(email), Ok(()), "email: {email}");
		}
	}

	#[test]
	fn serializes_as_login_body() {
		let request =
			LoginRequest::new("admin@pad.go.id", "rahasia123").expect("Credentials should validate.");

		assert_eq!(
			serde_json::to_value(&request).expect("Login body should serialize."),
			serde_json::json!({ "email": "admin@pad.go.id", "password": "rahasia123" })
		);
	}
}
