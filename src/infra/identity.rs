// src/infra/identity.rs — Persistent user identity + per-run session id
//
// The user id survives across runs in a small file under the config dir,
// mirroring what a durable browser profile would hold. The session id is
// regenerated on every process start and never persisted.

use std::path::{Path, PathBuf};

use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Identity {
    user_id: String,
    session_id: String,
    dir: PathBuf,
}

impl Identity {
    /// Load the persisted user id from the default config dir, creating one
    /// on first run. The session id is always fresh.
    pub fn load_or_create() -> std::io::Result<Self> {
        Self::load_or_create_in(&crate::infra::paths::config_dir())
    }

    /// Same, rooted at an explicit directory.
    pub fn load_or_create_in(dir: &Path) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join("user_id");

        let user_id = match std::fs::read_to_string(&path) {
            Ok(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => {
                let id = generate_user_id();
                std::fs::write(&path, &id)?;
                id
            }
        };

        Ok(Self {
            user_id,
            session_id: generate_session_id(),
            dir: dir.to_path_buf(),
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Overwrite the user id and persist immediately.
    pub fn set_user_id(&mut self, id: &str) -> std::io::Result<()> {
        self.user_id = id.to_string();
        std::fs::write(self.dir.join("user_id"), id)
    }

    /// Best-effort cache of the last known interaction count, used only as a
    /// display hint before the first analytics fetch lands. Never
    /// authoritative.
    pub fn cached_interactions(&self) -> Option<u64> {
        std::fs::read_to_string(self.dir.join("interactions"))
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }

    pub fn cache_interactions(&self, count: u64) {
        let _ = std::fs::write(self.dir.join("interactions"), count.to_string());
    }
}

fn generate_user_id() -> String {
    format!("user_{}", Uuid::new_v4())
}

fn generate_session_id() -> String {
    format!("session_{}", chrono::Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_id_stable_within_run() {
        let dir = tempfile::tempdir().unwrap();
        let identity = Identity::load_or_create_in(dir.path()).unwrap();
        assert_eq!(identity.user_id(), identity.user_id());
        assert!(identity.user_id().starts_with("user_"));
    }

    #[test]
    fn test_user_id_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let first = Identity::load_or_create_in(dir.path()).unwrap();
        let second = Identity::load_or_create_in(dir.path()).unwrap();
        assert_eq!(first.user_id(), second.user_id());
    }

    #[test]
    fn test_session_id_fresh_per_load() {
        let dir = tempfile::tempdir().unwrap();
        let identity = Identity::load_or_create_in(dir.path()).unwrap();
        assert!(identity.session_id().starts_with("session_"));
        // Session ids are never written to disk.
        assert!(!dir.path().join("session_id").exists());
    }

    #[test]
    fn test_set_user_id_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut identity = Identity::load_or_create_in(dir.path()).unwrap();
        identity.set_user_id("user_custom").unwrap();
        assert_eq!(identity.user_id(), "user_custom");

        let reloaded = Identity::load_or_create_in(dir.path()).unwrap();
        assert_eq!(reloaded.user_id(), "user_custom");
    }

    #[test]
    fn test_interaction_cache_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let identity = Identity::load_or_create_in(dir.path()).unwrap();
        assert_eq!(identity.cached_interactions(), None);
        identity.cache_interactions(42);
        assert_eq!(identity.cached_interactions(), Some(42));
    }

    #[test]
    fn test_blank_user_id_file_regenerates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("user_id"), "  \n").unwrap();
        let identity = Identity::load_or_create_in(dir.path()).unwrap();
        assert!(identity.user_id().starts_with("user_"));
    }
}
