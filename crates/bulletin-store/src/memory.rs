//! In-memory document store
//!
//! This module provides the in-memory [`DocumentStore`] implementation.
//! It is suitable for single-process applications and testing; production
//! deployments plug a real store driver into the same trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use bulletin_model::{Bulletin, BulletinFilter};

use crate::store::{DocumentStore, StoreError, StoreResult, Versioned};

/// Fault injection counters used by tests to simulate store failures.
#[derive(Debug, Default)]
struct InjectedFaults {
    /// Forced version mismatches on the next N puts
    put_conflicts: AtomicU32,
    /// Forced I/O failures on the next N puts
    put_io: AtomicU32,
    /// Forced I/O failures on the next N gets
    get_io: AtomicU32,
}

/// In-memory document store.
///
/// The whole map is guarded by one `RwLock`, so `put` holds the write
/// lock across the version check and the insert: the compare-and-swap is
/// atomic with respect to every other writer.
///
/// Fault injection (`fail_next_puts_with_conflict` and friends) lets tests
/// simulate interleaved writers and store outages without a second task.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Stored documents with their version stamps
    documents: Arc<RwLock<HashMap<Uuid, Versioned<Bulletin>>>>,
    /// Fault injection state
    faults: Arc<InjectedFaults>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Force the next `n` puts to fail with a version mismatch.
    ///
    /// Simulates a competing writer committing between the caller's read
    /// and its write, which is how conflict-retry paths are exercised.
    pub fn fail_next_puts_with_conflict(&self, n: u32) {
        self.faults.put_conflicts.store(n, Ordering::SeqCst);
    }

    /// Force the next `n` puts to fail with an I/O error.
    pub fn fail_next_puts_with_io(&self, n: u32) {
        self.faults.put_io.store(n, Ordering::SeqCst);
    }

    /// Force the next `n` gets to fail with an I/O error.
    pub fn fail_next_gets_with_io(&self, n: u32) {
        self.faults.get_io.store(n, Ordering::SeqCst);
    }

    fn take_fault(counter: &AtomicU32) -> bool {
        counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, id: Uuid) -> StoreResult<Versioned<Bulletin>> {
        if Self::take_fault(&self.faults.get_io) {
            return Err(StoreError::Io("injected get failure".to_string()));
        }

        self.documents
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn put(&self, id: Uuid, document: Bulletin, expected_version: u64) -> StoreResult<u64> {
        if Self::take_fault(&self.faults.put_io) {
            return Err(StoreError::Io("injected put failure".to_string()));
        }
        if Self::take_fault(&self.faults.put_conflicts) {
            return Err(StoreError::VersionMismatch {
                expected: expected_version,
                actual: expected_version + 1,
            });
        }

        let mut documents = self.documents.write().await;
        let actual = documents.get(&id).map(|stored| stored.version).unwrap_or(0);
        if actual != expected_version {
            return Err(StoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }

        let version = expected_version + 1;
        documents.insert(id, Versioned::new(document, version));
        Ok(version)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        match self.documents.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }

    async fn query(&self, filter: &BulletinFilter) -> StoreResult<Vec<Versioned<Bulletin>>> {
        let documents = self.documents.read().await;
        let mut matching: Vec<_> = documents
            .values()
            .filter(|stored| filter.matches(&stored.document))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.document.updated_at.cmp(&a.document.updated_at));
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulletin(title: &str) -> Bulletin {
        Bulletin::new(title, Uuid::now_v7(), Vec::new())
    }

    #[tokio::test]
    async fn test_put_and_get_round_trip() {
        let store = MemoryStore::new();
        let doc = bulletin("First");

        let version = store.put(doc.id, doc.clone(), 0).await.unwrap();
        assert_eq!(version, 1);

        let stored = store.get(doc.id).await.unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.document.title, "First");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get(Uuid::now_v7()).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_create_collision_is_version_mismatch() {
        let store = MemoryStore::new();
        let doc = bulletin("First");
        store.put(doc.id, doc.clone(), 0).await.unwrap();

        let err = store.put(doc.id, doc.clone(), 0).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::VersionMismatch { expected: 0, actual: 1 }
        ));
    }

    #[tokio::test]
    async fn test_stale_put_is_rejected() {
        let store = MemoryStore::new();
        let doc = bulletin("First");
        store.put(doc.id, doc.clone(), 0).await.unwrap();
        store.put(doc.id, doc.clone(), 1).await.unwrap();

        // A writer that read version 1 loses after the second commit
        let err = store.put(doc.id, doc.clone(), 1).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::VersionMismatch { expected: 1, actual: 2 }
        ));
    }

    #[tokio::test]
    async fn test_version_stamp_increments_per_put() {
        let store = MemoryStore::new();
        let doc = bulletin("Counted");

        let mut expected = 0;
        for _ in 0..4 {
            expected = store.put(doc.id, doc.clone(), expected).await.unwrap();
        }
        assert_eq!(expected, 4);
        assert_eq!(store.get(doc.id).await.unwrap().version, 4);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        let doc = bulletin("Gone");
        store.put(doc.id, doc.clone(), 0).await.unwrap();

        store.delete(doc.id).await.unwrap();
        assert!(matches!(store.get(doc.id).await, Err(StoreError::NotFound)));
        assert!(matches!(
            store.delete(doc.id).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_query_applies_filter() {
        let store = MemoryStore::new();
        let kept = bulletin("Release notes");
        let skipped = bulletin("Agenda");
        store.put(kept.id, kept.clone(), 0).await.unwrap();
        store.put(skipped.id, skipped.clone(), 0).await.unwrap();

        let filter = BulletinFilter::new().with_title_contains("release");
        let results = store.query(&filter).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document.id, kept.id);
    }

    #[tokio::test]
    async fn test_query_orders_most_recently_updated_first() {
        let store = MemoryStore::new();
        let older = bulletin("older");
        store.put(older.id, older.clone(), 0).await.unwrap();

        let mut newer = bulletin("newer");
        newer.updated_at = older.updated_at + chrono::Duration::seconds(5);
        store.put(newer.id, newer.clone(), 0).await.unwrap();

        let results = store.query(&BulletinFilter::new()).await.unwrap();
        assert_eq!(results[0].document.id, newer.id);
        assert_eq!(results[1].document.id, older.id);
    }

    #[tokio::test]
    async fn test_injected_conflicts_are_consumed() {
        let store = MemoryStore::new();
        let doc = bulletin("Contended");
        store.put(doc.id, doc.clone(), 0).await.unwrap();

        store.fail_next_puts_with_conflict(1);
        assert!(matches!(
            store.put(doc.id, doc.clone(), 1).await,
            Err(StoreError::VersionMismatch { .. })
        ));

        // Fault consumed; the retry goes through
        assert_eq!(store.put(doc.id, doc.clone(), 1).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_injected_io_failures() {
        let store = MemoryStore::new();
        let doc = bulletin("Flaky");

        store.fail_next_puts_with_io(1);
        assert!(matches!(
            store.put(doc.id, doc.clone(), 0).await,
            Err(StoreError::Io(_))
        ));
        store.put(doc.id, doc.clone(), 0).await.unwrap();

        store.fail_next_gets_with_io(1);
        assert!(matches!(store.get(doc.id).await, Err(StoreError::Io(_))));
        assert!(store.get(doc.id).await.is_ok());
    }
}
