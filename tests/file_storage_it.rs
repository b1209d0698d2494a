// std
use std::{env, fs, process, sync::Arc};
// self
use pad_portal::{
	auth::{Credential, SessionExpiry},
	session::SessionContext,
	store::FileStorage,
};

fn temp_path(label: &str) -> std::path::PathBuf {
	env::temp_dir().join(format!("pad_portal_{label}_{}.json", process::id()))
}

#[test]
fn session_survives_reopening_file_storage() {
	let path = temp_path("reopen");
	let storage = FileStorage::open(&path).expect("File storage should open.");
	let session = SessionContext::open(Arc::new(storage), "auth-storage");

	session
		.set_login(
			Credential::new("tok-file"),
			SessionExpiry::parse("2099-06-30T12:00:00+07:00").expect("Fixture expiry should parse."),
		)
		.expect("Login should persist.");
	drop(session);

	let reopened = SessionContext::open(
		Arc::new(FileStorage::open(&path).expect("File storage should reopen.")),
		"auth-storage",
	);
	let state = reopened.snapshot();

	assert_eq!(state.credential.as_ref().map(Credential::expose), Some("tok-file"));
	assert_eq!(state.expiry.as_deref(), Some("2099-06-30T12:00:00+07:00"));

	reopened.clear_all().expect("Clear should persist.");

	let cleared = SessionContext::open(
		Arc::new(FileStorage::open(&path).expect("File storage should reopen.")),
		"auth-storage",
	);

	assert!(!cleared.is_authenticated());

	let _ = fs::remove_file(path);
}

#[test]
fn corrupt_session_entry_starts_signed_out() {
	let path = temp_path("corrupt");

	fs::write(&path, r#"{"auth-storage":"{\"state\":{\"token\":42},\"version\":0}"}"#)
		.expect("Fixture file should be written.");

	let session = SessionContext::open(
		Arc::new(FileStorage::open(&path).expect("File storage should open.")),
		"auth-storage",
	);

	assert!(!session.is_authenticated());

	let _ = fs::remove_file(path);
}
