use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Key under which the backend's issued credential is persisted.
pub const ACCESS_TOKEN_KEY: &str = "accesstoken";

/// Persisted session state, read once before building the HTTP client.
///
/// The on-disk format is a flat JSON object of string values. A missing or
/// unreadable file yields an empty store: an unauthenticated session is a
/// normal state, not an error.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no session file, starting unauthenticated");
                return Self::default();
            }
        };

        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(entries) => Self { entries },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "session file malformed, starting unauthenticated");
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The stored credential, verbatim as issued by the backend.
    pub fn access_token(&self) -> Option<&str> {
        self.get(ACCESS_TOKEN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_reads_access_token_as_plain_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(
            &path,
            r#"{"accesstoken": "Bearer eyJhbGciOiJIUzI1NiJ9.test"}"#,
        )
        .unwrap();

        let store = SessionStore::load(&path);
        assert_eq!(
            store.access_token(),
            Some("Bearer eyJhbGciOiJIUzI1NiJ9.test")
        );
    }

    #[test]
    fn missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::load(dir.path().join("absent.json"));
        assert!(store.access_token().is_none());
    }

    #[test]
    fn malformed_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json at all").unwrap();

        let store = SessionStore::load(&path);
        assert!(store.access_token().is_none());
    }

    #[test]
    fn absent_key_yields_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let store = SessionStore::load(&path);
        assert!(store.access_token().is_none());
        assert_eq!(store.get("theme"), Some("dark"));
    }
}
