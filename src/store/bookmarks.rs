//! Bookmark cache with batched, deduplicated status checks.
//!
//! Guarantees, for the lifetime of the cache:
//! - at most one network read per distinct dedup key
//! - an id that has been resolved is never fetched again, under any key
//! - a cache entry, once present, is trusted until explicitly toggled
//!
//! Overlapping `batch_check` calls issued before the first resolves are
//! serialized through an in-flight key set plus per-id claims, so two
//! near-identical page loads cannot both hit the network. Reads are always
//! served from the cache, regardless of in-flight loading for other keys.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::UserSession;
use crate::remote::{BookmarkApi, RemoteError};

/// Client-side cache of "is book X bookmarked".
pub struct BookmarkStore {
    api: Arc<dyn BookmarkApi>,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    session: Option<UserSession>,
    /// id → bookmarked; absence reads as false
    bookmarks: HashMap<i64, bool>,
    /// Dedup keys that have been fully processed
    checked_keys: HashSet<String>,
    /// Dedup keys with a network read currently in flight
    in_flight_keys: HashSet<String>,
    /// Ids claimed by an in-flight read
    pending_ids: HashSet<i64>,
    /// Most recent failure, for UI retry affordances
    last_error: Option<String>,
}

impl BookmarkStore {
    pub fn new(api: Arc<dyn BookmarkApi>) -> Self {
        Self {
            api,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Push the auth provider's session state into the cache.
    ///
    /// Losing the session discards everything: the bookmark map, the
    /// processed keys, and any in-flight claims. No partial invalidation.
    pub fn set_session(&self, session: Option<UserSession>) {
        let mut inner = self.inner.write();
        if session.is_none() {
            inner.bookmarks.clear();
            inner.checked_keys.clear();
            inner.in_flight_keys.clear();
            inner.pending_ids.clear();
            inner.last_error = None;
        }
        inner.session = session;
    }

    /// Pure cache read; an unchecked id reads as not bookmarked.
    pub fn is_bookmarked(&self, book_id: i64) -> bool {
        self.inner
            .read()
            .bookmarks
            .get(&book_id)
            .copied()
            .unwrap_or(false)
    }

    /// Direct cache write, for optimistic paths.
    pub fn update(&self, book_id: i64, bookmarked: bool) {
        self.inner.write().bookmarks.insert(book_id, bookmarked);
    }

    /// Whether any batch read is currently in flight.
    pub fn is_loading(&self) -> bool {
        !self.inner.read().in_flight_keys.is_empty()
    }

    /// Most recent failure message, if any.
    pub fn last_error(&self) -> Option<String> {
        self.inner.read().last_error.clone()
    }

    /// Resolve bookmark state for `book_ids` with at most one network call.
    ///
    /// The dedup key is `page_key` when supplied, otherwise derived from
    /// the sorted id set. An already-processed (or in-flight) key returns
    /// immediately; otherwise only the ids that are neither cached nor
    /// claimed are fetched, in one batched request. Without a session this
    /// is a no-op: there is nothing to attribute the check to.
    pub async fn batch_check(
        &self,
        book_ids: &[i64],
        page_key: Option<&str>,
    ) -> Result<(), RemoteError> {
        let key = page_key
            .map(str::to_string)
            .unwrap_or_else(|| derive_key(book_ids));

        let missing = {
            let mut inner = self.inner.write();
            if inner.session.is_none() {
                return Ok(());
            }
            if inner.checked_keys.contains(&key) || inner.in_flight_keys.contains(&key) {
                return Ok(());
            }

            let mut missing: Vec<i64> = book_ids
                .iter()
                .copied()
                .filter(|id| !inner.bookmarks.contains_key(id) && !inner.pending_ids.contains(id))
                .collect();
            missing.sort_unstable();
            missing.dedup();

            if missing.is_empty() {
                inner.checked_keys.insert(key);
                return Ok(());
            }

            inner.in_flight_keys.insert(key.clone());
            inner.pending_ids.extend(missing.iter().copied());
            missing
        };

        tracing::debug!(key = %key, count = missing.len(), "checking bookmark state");
        let result = self.api.batch_check(&missing).await;

        let mut inner = self.inner.write();
        inner.in_flight_keys.remove(&key);
        for id in &missing {
            inner.pending_ids.remove(id);
        }

        match result {
            Ok(states) => {
                // The session may have been torn down while we were away;
                // a cleared cache stays cleared.
                if inner.session.is_some() {
                    inner.bookmarks.extend(states);
                    inner.checked_keys.insert(key);
                }
                inner.last_error = None;
                Ok(())
            }
            Err(e) => {
                // Key left unprocessed so the caller can retry
                tracing::warn!("bookmark check failed: {e}");
                inner.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Toggle a bookmark on the server and adopt its reported state.
    ///
    /// The cache is never written before the acknowledgment, so a failure
    /// leaves the pre-toggle view intact; and the written value is the
    /// server's answer, not a local flip, in case the two disagree.
    pub async fn toggle(&self, book_id: i64) -> Result<bool, RemoteError> {
        {
            let inner = self.inner.read();
            if inner.session.is_none() {
                return Err(RemoteError::Unauthenticated);
            }
        }

        match self.api.toggle(book_id).await {
            Ok(bookmarked) => {
                let mut inner = self.inner.write();
                inner.bookmarks.insert(book_id, bookmarked);
                inner.last_error = None;
                Ok(bookmarked)
            }
            Err(e) => {
                tracing::warn!(book_id, "bookmark toggle failed: {e}");
                self.inner.write().last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

/// Deterministic dedup key for an id set.
fn derive_key(book_ids: &[i64]) -> String {
    let mut ids: Vec<i64> = book_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("-");
    format!("ids:{joined}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::traits::mocks::MockBookmarkApi;
    use crate::test_utils::{init_test_logging, mock_session};

    fn store_with(api: Arc<MockBookmarkApi>) -> BookmarkStore {
        init_test_logging();
        let store = BookmarkStore::new(api);
        store.set_session(Some(mock_session()));
        store
    }

    #[test]
    fn test_derive_key_is_order_independent() {
        assert_eq!(derive_key(&[3, 1, 2]), derive_key(&[1, 2, 3]));
        assert_eq!(derive_key(&[1, 1, 2]), derive_key(&[2, 1]));
        assert_eq!(derive_key(&[1, 2]), "ids:1-2");
    }

    #[tokio::test]
    async fn test_absence_reads_false() {
        let store = store_with(Arc::new(MockBookmarkApi::new()));
        assert!(!store.is_bookmarked(42));
    }

    #[tokio::test]
    async fn test_batch_check_merges_results() {
        let api = Arc::new(MockBookmarkApi::with_states(&[(1, true)]));
        let store = store_with(Arc::clone(&api));

        store.batch_check(&[1, 2], None).await.unwrap();
        assert!(store.is_bookmarked(1));
        assert!(!store.is_bookmarked(2));
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_subset_under_same_key_is_one_call() {
        // A ⊆ B with the same page key: the second call is a no-op
        let api = Arc::new(MockBookmarkApi::new());
        let store = store_with(Arc::clone(&api));

        store.batch_check(&[1, 2], Some("books:page:1")).await.unwrap();
        store
            .batch_check(&[1, 2, 3, 4], Some("books:page:1"))
            .await
            .unwrap();

        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_resolved_ids_skipped_under_new_key() {
        let api = Arc::new(MockBookmarkApi::new());
        let store = store_with(Arc::clone(&api));

        store.batch_check(&[1, 2], Some("page:1")).await.unwrap();
        store.batch_check(&[2, 3], Some("page:2")).await.unwrap();

        // Second call only fetched the unresolved id
        let calls = api.calls.lock().clone();
        assert_eq!(calls, vec![vec![1, 2], vec![3]]);
    }

    #[tokio::test]
    async fn test_fully_resolved_set_issues_no_call() {
        let api = Arc::new(MockBookmarkApi::new());
        let store = store_with(Arc::clone(&api));

        store.batch_check(&[1, 2], Some("page:1")).await.unwrap();
        store.batch_check(&[1, 2], Some("page:9")).await.unwrap();
        assert_eq!(api.call_count(), 1);

        // The second key is still marked processed
        store.batch_check(&[1, 2], Some("page:9")).await.unwrap();
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_derived_key_dedups_repeat_calls() {
        let api = Arc::new(MockBookmarkApi::new());
        let store = store_with(Arc::clone(&api));

        store.batch_check(&[3, 1, 2], None).await.unwrap();
        store.batch_check(&[1, 2, 3], None).await.unwrap();
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_batch_check_without_session_is_noop() {
        let api = Arc::new(MockBookmarkApi::new());
        let store = BookmarkStore::new(Arc::clone(&api));

        store.batch_check(&[1, 2], None).await.unwrap();
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_batch_can_be_retried() {
        let api = Arc::new(MockBookmarkApi::new());
        let store = store_with(Arc::clone(&api));

        api.set_error(Some(RemoteError::Network("timeout".to_string())));
        let result = store.batch_check(&[1, 2], Some("page:1")).await;
        assert!(result.is_err());
        assert!(store.last_error().is_some());

        // The key was not marked processed; a retry issues the call
        api.set_error(None);
        store.batch_check(&[1, 2], Some("page:1")).await.unwrap();
        assert_eq!(api.call_count(), 1);
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn test_toggle_requires_session() {
        let store = BookmarkStore::new(Arc::new(MockBookmarkApi::new()));
        let result = store.toggle(1).await;
        assert!(matches!(result, Err(RemoteError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_toggle_adopts_server_state() {
        // The server's answer wins even when it disagrees with the local
        // pre-toggle state
        let api = Arc::new(MockBookmarkApi::new());
        *api.forced_toggle.lock() = Some(false);
        let store = store_with(Arc::clone(&api));

        store.update(9, false); // local view: not bookmarked, a flip would say true
        let state = store.toggle(9).await.unwrap();
        assert!(!state);
        assert!(!store.is_bookmarked(9));
    }

    #[tokio::test]
    async fn test_failed_toggle_leaves_cache_untouched() {
        let api = Arc::new(MockBookmarkApi::new());
        let store = store_with(Arc::clone(&api));
        store.update(5, true);

        api.set_error(Some(RemoteError::Api("boom".to_string())));
        assert!(store.toggle(5).await.is_err());
        assert!(store.is_bookmarked(5));
        assert!(store.last_error().is_some());
    }

    #[tokio::test]
    async fn test_session_loss_discards_everything() {
        let api = Arc::new(MockBookmarkApi::with_states(&[(1, true)]));
        let store = store_with(Arc::clone(&api));

        store.batch_check(&[1, 2], Some("page:1")).await.unwrap();
        assert!(store.is_bookmarked(1));

        store.set_session(None);
        assert!(!store.is_bookmarked(1));

        // Processed keys are gone too: a fresh session re-checks
        store.set_session(Some(mock_session()));
        store.batch_check(&[1, 2], Some("page:1")).await.unwrap();
        assert_eq!(api.call_count(), 2);
    }
}
