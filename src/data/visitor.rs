//! Visitor Identity Module
//!
//! Anonymous visitor identifier used to key per-visitor wishlists. The id
//! is generated once per installation and persisted under a fixed raw key,
//! deliberately outside the cache namespace so cache version bumps and
//! `clear_all` never rotate a visitor's identity.

use tracing::debug;
use uuid::Uuid;

use crate::cache::backing::SharedStore;

/// Raw backing-store key holding the visitor identifier.
pub const VISITOR_ID_KEY: &str = "ss_visitor_id";

// == Ensure Visitor Id ==
/// Returns the persisted visitor id, generating and storing one if absent.
///
/// If the store rejects the write the fresh id is still returned; identity
/// then lasts for the session only, which is the best that can be done on
/// a full medium.
pub fn ensure_visitor_id(store: &SharedStore) -> String {
    let existing = {
        let guard = store.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.get(VISITOR_ID_KEY)
    };
    if let Some(id) = existing {
        if !id.is_empty() {
            return id;
        }
    }

    let id = Uuid::new_v4().to_string();
    let mut guard = store.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Err(err) = guard.set(VISITOR_ID_KEY, &id) {
        debug!(%err, "could not persist visitor id; continuing with session-scoped id");
    }
    id
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::backing::{shared, MemoryStore};

    #[test]
    fn test_generates_once_and_sticks() {
        let store = shared(MemoryStore::new());

        let first = ensure_visitor_id(&store);
        let second = ensure_visitor_id(&store);

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_respects_preexisting_id() {
        let store = shared(MemoryStore::new());
        {
            let mut guard = store.write().unwrap();
            guard.set(VISITOR_ID_KEY, "legacy-visitor").unwrap();
        }

        assert_eq!(ensure_visitor_id(&store), "legacy-visitor");
    }

    #[test]
    fn test_full_store_still_yields_id() {
        let store = shared(MemoryStore::with_quota(1));
        let id = ensure_visitor_id(&store);
        assert!(!id.is_empty());
    }
}
