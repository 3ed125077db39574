//! Client session identity.
//!
//! Every request carries an opaque, client-generated user identifier. The
//! identifier is persisted through an injected [`IdentityStore`] capability
//! rather than read from global storage, so tests can run multiple
//! simulated sessions side by side.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LimpiaError, Result};

/// Storage capability for the persisted client identifier.
pub trait IdentityStore {
    /// Load the stored identifier, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Persist an identifier, replacing any previous one.
    fn store(&self, user_id: &str) -> Result<()>;

    /// Delete the stored identifier.
    fn clear(&self) -> Result<()>;
}

/// Identity store backed by a plain file.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    /// Create a store persisting to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> LimpiaError {
        LimpiaError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    fn store(&self, user_id: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        fs::write(&self.path, user_id).map_err(|e| self.io_error(e))
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| self.io_error(e))?;
        }
        Ok(())
    }
}

/// In-memory identity store for tests.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    value: RefCell<Option<String>>,
}

impl MemoryIdentityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn store(&self, user_id: &str) -> Result<()> {
        *self.value.borrow_mut() = Some(user_id.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.value.borrow_mut() = None;
        Ok(())
    }
}

/// A client session holding the user identifier sent on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: String,
}

impl Session {
    /// Load the persisted identifier, or generate and persist a fresh one.
    pub fn obtain(store: &dyn IdentityStore) -> Result<Self> {
        if let Some(user_id) = store.load()? {
            return Ok(Self { user_id });
        }
        let user_id = generate_user_id();
        store.store(&user_id)?;
        Ok(Self { user_id })
    }

    /// Create a session from a known identifier.
    pub fn with_user_id(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// The opaque user identifier.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Delete the persisted identifier; the next [`Session::obtain`]
    /// generates a new one.
    pub fn reset(store: &dyn IdentityStore) -> Result<()> {
        store.clear()
    }
}

/// Random 128-bit identifier in the hyphenated RFC 4122 version-4 layout.
fn generate_user_id() -> String {
    let mut bits = fastrand::u128(..);
    bits = (bits & !(0xf << 76)) | (0x4 << 76);
    bits = (bits & !(0x3 << 62)) | (0x2 << 62);
    let hex = format!("{:032x}", bits);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obtain_generates_and_persists() {
        let store = MemoryIdentityStore::new();
        let session = Session::obtain(&store).unwrap();
        assert!(!session.user_id().is_empty());
        assert_eq!(store.load().unwrap().as_deref(), Some(session.user_id()));

        // A second obtain reuses the stored identifier.
        let again = Session::obtain(&store).unwrap();
        assert_eq!(again.user_id(), session.user_id());
    }

    #[test]
    fn test_reset_forces_a_new_identifier() {
        let store = MemoryIdentityStore::new();
        let first = Session::obtain(&store).unwrap();
        Session::reset(&store).unwrap();
        let second = Session::obtain(&store).unwrap();
        assert_ne!(first.user_id(), second.user_id());
    }

    #[test]
    fn test_generated_identifier_shape() {
        let id = generate_user_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(
            parts.iter().map(|p| p.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(parts[2].starts_with('4'));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = FileIdentityStore::new(dir.path().join("state").join("identity"));

        assert_eq!(store.load().unwrap(), None);
        store.store("abc-123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc-123"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
