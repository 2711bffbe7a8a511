//! # Bulletin Document Store
//!
//! This crate provides the document store adapter for the bulletin
//! platform: atomic, versioned single-document reads and writes plus
//! filtered queries.
//!
//! ## Overview
//!
//! The bulletin-store crate handles:
//! - **DocumentStore**: The async trait real store drivers implement
//! - **Versioned**: A document paired with its store version stamp
//! - **MemoryStore**: In-memory implementation for single-process use
//!   and tests
//!
//! ## Concurrency model
//!
//! The store is the only shared mutable resource in the platform. All
//! coordination between concurrent writers happens through the version
//! stamp: `put` is an atomic compare-and-swap that commits only when the
//! caller's expected version matches the stored stamp, so two concurrent
//! updates to the same document are ordered by the store and the loser
//! observes a version mismatch.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bulletin_model::{Bulletin, BulletinFilter};
//! use bulletin_store::{DocumentStore, MemoryStore};
//! use uuid::Uuid;
//!
//! # async fn example() -> bulletin_store::StoreResult<()> {
//! let store = MemoryStore::new();
//! let bulletin = Bulletin::new("Hello", Uuid::now_v7(), Vec::new());
//!
//! // Version 0 means "must not exist yet"
//! store.put(bulletin.id, bulletin.clone(), 0).await?;
//!
//! let stored = store.get(bulletin.id).await?;
//! assert_eq!(stored.version, 1);
//! # Ok(())
//! # }
//! ```

pub mod memory;
pub mod store;

// Re-export main types for convenience
pub use memory::MemoryStore;
pub use store::{DocumentStore, StoreError, StoreResult, Versioned};
