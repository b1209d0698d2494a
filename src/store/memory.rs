//! Thread-safe in-memory [`SessionStorage`] for headless shells and tests.

// std
use std::collections::HashMap;
// self
use crate::{
	_prelude::*,
	store::{SessionStorage, StoreError},
};

/// Storage backend that keeps values in-process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage(Arc<RwLock<HashMap<String, String>>>);
impl MemoryStorage {
	/// Number of stored keys.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}
}
impl SessionStorage for MemoryStorage {
	fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.0.read().get(key).cloned())
	}

	fn write(&self, key: &str, value: String) -> Result<(), StoreError> {
		self.0.write().insert(key.to_owned(), value);

		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), StoreError> {
		self.0.write().remove(key);

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn write_read_remove() {
		let storage = MemoryStorage::default();

		storage.write("auth-storage", "{}".into()).expect("Memory writes should succeed.");

		assert_eq!(
			storage.read("auth-storage").expect("Memory reads should succeed."),
			Some("{}".into())
		);

		storage.remove("auth-storage").expect("Memory removals should succeed.");
		storage.remove("auth-storage").expect("Removing a missing key should succeed.");

		assert!(storage.is_empty());
	}
}
