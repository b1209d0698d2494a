//! Bearer credential and session expiry held by the session store.

// std
use std::ops::Deref;
// crates.io
use time::format_description::well_known::Iso8601;
// self
use crate::{_prelude::*, error::ConfigError};

/// Opaque bearer token issued at sign-in; redacted in every formatter.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);
impl Credential {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Value placed in the credential header, with every embedded `"` stripped.
	///
	/// Tokens persisted as JSON strings sometimes come back still quoted; the backend only
	/// accepts the bare value.
	pub fn header_value(&self) -> String {
		self.0.replace('"', "")
	}
}
impl AsRef<str> for Credential {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Credential").field(&"<redacted>").finish()
	}
}
impl Display for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Expiry instant reported by the backend at sign-in.
///
/// The raw ISO-8601 text is kept so the persisted session round-trips byte for byte.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionExpiry {
	raw: String,
	instant: OffsetDateTime,
}
impl SessionExpiry {
	/// Parses an ISO-8601 timestamp.
	pub fn parse(value: impl AsRef<str>) -> Result<Self, ConfigError> {
		let raw = value.as_ref().trim();
		let instant = OffsetDateTime::parse(raw, &Iso8601::DEFAULT)
			.map_err(|_| ConfigError::InvalidExpiry { value: raw.to_owned() })?;

		Ok(Self { raw: raw.to_owned(), instant })
	}

	/// Instant at which the session stops being valid.
	pub fn instant(&self) -> OffsetDateTime {
		self.instant
	}

	/// Returns `true` once `now` has reached the expiry instant.
	pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
		now >= self.instant
	}

	/// Returns `true` if the expiry has passed relative to the current UTC clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
impl Deref for SessionExpiry {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.raw
	}
}
impl From<SessionExpiry> for String {
	fn from(value: SessionExpiry) -> Self {
		value.raw
	}
}
impl TryFrom<String> for SessionExpiry {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}
impl FromStr for SessionExpiry {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
impl Debug for SessionExpiry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "SessionExpiry({})", self.raw)
	}
}
impl Display for SessionExpiry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.raw)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn credential_formatters_redact() {
		let credential = Credential::new("super-secret");

		assert_eq!(format!("{credential:?}"), "Credential(\"<redacted>\")");
		assert_eq!(format!("{credential}"), "<redacted>");
	}

	#[test]
	fn header_value_strips_embedded_quotes() {
		assert_eq!(Credential::new("\"abc.def\"").header_value(), "abc.def");
		assert_eq!(Credential::new("plain").header_value(), "plain");
	}

	#[test]
	fn expiry_parses_iso8601_and_compares_against_now() {
		let expiry = SessionExpiry::parse("2024-08-01T10:00:00.000Z")
			.expect("Millisecond precision timestamps should parse.");

		assert_eq!(expiry.instant(), macros::datetime!(2024-08-01 10:00 UTC));
		assert!(expiry.is_expired_at(macros::datetime!(2024-08-01 10:00 UTC)));
		assert!(!expiry.is_expired_at(macros::datetime!(2024-08-01 09:59:59 UTC)));
	}

	#[test]
	fn expiry_round_trips_the_raw_text() {
		let payload = "\"2030-01-15T08:30:00+07:00\"";
		let expiry: SessionExpiry =
			serde_json::from_str(payload).expect("Offset timestamps should deserialize.");

		assert_eq!(&*expiry, "2030-01-15T08:30:00+07:00");
		assert_eq!(
			serde_json::to_string(&expiry).expect("Expiry should serialize back to a string."),
			payload
		);
		assert!(serde_json::from_str::<SessionExpiry>("\"tomorrow\"").is_err());
	}
}
