//! Store trait and versioned documents
//!
//! This module defines the capability the rest of the platform consumes:
//! atomic get/put/delete by id plus a filtered query, every document
//! carrying a monotonically increasing version stamp.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use bulletin_model::{Bulletin, BulletinFilter};

/// Document store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with the requested id
    #[error("Document not found")]
    NotFound,

    /// The stored version differs from the version the writer observed
    #[error("Version mismatch: expected {expected}, found {actual}")]
    VersionMismatch {
        /// Version the writer expected to find
        expected: u64,
        /// Version actually stored (0 when the document does not exist)
        actual: u64,
    },

    /// Underlying I/O failure; transient from the caller's point of view
    #[error("Store I/O error: {0}")]
    Io(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A document paired with its store version stamp.
///
/// The stamp starts at 1 on first write and increases by exactly one per
/// successful `put`. The service layer keeps the bulletin's own `version`
/// field in lockstep with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    /// The stored document
    pub document: T,
    /// Store version stamp at the time of the read
    pub version: u64,
}

impl<T> Versioned<T> {
    /// Pair a document with a version stamp.
    pub fn new(document: T, version: u64) -> Self {
        Self { document, version }
    }
}

/// Capability trait for the underlying document store.
///
/// Implementations must make `put` atomic with respect to the version
/// check: the expected version is compared and the document written as one
/// indivisible step, never interleaving with another writer. Expected
/// version 0 means "the document must not exist yet" (versions start at 1),
/// which is how creations are expressed.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document and its current version stamp.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no document has this id.
    async fn get(&self, id: Uuid) -> StoreResult<Versioned<Bulletin>>;

    /// Atomically write a document if the stored version matches.
    ///
    /// # Arguments
    ///
    /// * `id` - Document id
    /// * `document` - Full replacement document body
    /// * `expected_version` - Version the writer observed; 0 to create
    ///
    /// # Returns
    ///
    /// The new version stamp on success.
    ///
    /// # Errors
    ///
    /// [`StoreError::VersionMismatch`] when another writer committed in
    /// between (or the document already exists for `expected_version` 0);
    /// [`StoreError::Io`] on transient store failure.
    async fn put(&self, id: Uuid, document: Bulletin, expected_version: u64) -> StoreResult<u64>;

    /// Remove a document entirely.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no document has this id.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;

    /// Fetch all documents matching a filter, most recently updated first.
    async fn query(&self, filter: &BulletinFilter) -> StoreResult<Vec<Versioned<Bulletin>>>;
}
