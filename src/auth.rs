// Token storage
//
// The bearer token issued by `auth/login/` is the only client-persisted
// state. Access goes through the `TokenProvider` trait so the API client
// and the dashboard's token poll can be tested without touching the
// filesystem.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Mutex;

/// Source of the bearer token attached to authenticated requests
pub trait TokenProvider: Send + Sync {
    /// Current token, if one has been issued
    fn token(&self) -> Option<String>;

    /// Persist a freshly issued token
    fn store(&self, token: &str) -> Result<()>;
}

/// File-backed token store at `~/.config/dsaquest/token`
///
/// The token is cached in memory after the first read; `store` updates
/// both the cache and the file.
pub struct FileTokenStore {
    path: PathBuf,
    cached: Mutex<Option<String>>,
}

impl FileTokenStore {
    /// Default location next to the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("dsaquest").join("token"))
    }

    pub fn new(path: PathBuf) -> Self {
        let cached = std::fs::read_to_string(&path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            path,
            cached: Mutex::new(cached),
        }
    }
}

impl TokenProvider for FileTokenStore {
    fn token(&self) -> Option<String> {
        self.cached.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, token)
            .with_context(|| format!("Failed to write token to {}", self.path.display()))?;
        *self.cached.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }
}

/// In-memory token store for demo mode and tests
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenProvider for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryTokenStore::new();
        assert!(store.token().is_none());
        store.store("abc123").unwrap();
        assert_eq!(store.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn file_store_persists_and_reloads() {
        let dir = std::env::temp_dir().join(format!("dsaquest-test-{}", std::process::id()));
        let path = dir.join("token");

        let store = FileTokenStore::new(path.clone());
        assert!(store.token().is_none());
        store.store("tok-1").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-1"));

        // A fresh store picks the token up from disk
        let reloaded = FileTokenStore::new(path);
        assert_eq!(reloaded.token().as_deref(), Some("tok-1"));

        let _ = std::fs::remove_dir_all(dir);
    }
}
