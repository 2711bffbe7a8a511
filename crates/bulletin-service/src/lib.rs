//! # Bulletin Service
//!
//! This crate provides the access-control and consistency layer that
//! mediates every CRUD operation on bulletin documents. It is the single
//! entry point external callers (typically an HTTP transport) use.
//!
//! ## Overview
//!
//! The bulletin-service crate handles:
//! - **BulletinService**: create / read / update / delete / list /
//!   publish / archive / duplicate, each taking a verified principal
//! - **ConsistencyController**: optimistic-concurrency commits with
//!   structural validation before any write
//! - **ServiceError**: the outcome taxonomy transports map onto
//!
//! ## Control flow
//!
//! ```text
//! request (principal + target)
//!   └─> fetch current state            (bulletin-store)
//!        └─> authorize against state   (bulletin-rbac)
//!             └─> validate + commit    (ConsistencyController)
//!                  └─> atomic versioned write, retry on conflict ×3
//! ```
//!
//! The core is stateless between requests: the persisted document is the
//! sole source of truth, and concurrent updates are ordered by the store's
//! version-check-and-write primitive. Only version conflicts are retried;
//! store outages surface immediately as [`ServiceError::Transient`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bulletin_model::{BulletinPatch, NewBulletin, SectionDraft};
//! use bulletin_rbac::{Principal, Role};
//! use bulletin_service::BulletinService;
//! use bulletin_store::MemoryStore;
//! use uuid::Uuid;
//!
//! # async fn example() -> bulletin_service::ServiceResult<()> {
//! let service = BulletinService::new(Arc::new(MemoryStore::new()));
//! let editor = Principal::new(Uuid::now_v7(), Role::Editor);
//! let publisher = Principal::new(Uuid::now_v7(), Role::Publisher);
//!
//! let payload = NewBulletin::new("Launch notes")
//!     .with_section(SectionDraft::new(0, "Intro", "We shipped."));
//! let bulletin = service.create(editor, payload).await?;
//!
//! let patch = BulletinPatch::new(bulletin.version).with_title("Launch notes v2");
//! let bulletin = service.update(editor, bulletin.id, patch).await?;
//!
//! service.publish(publisher, bulletin.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod consistency;
pub mod error;
pub mod service;

// Re-export main types for convenience
pub use consistency::{ConsistencyController, Mutation};
pub use error::{InvalidReason, ServiceError, ServiceResult};
pub use service::{BulletinService, MAX_COMMIT_ATTEMPTS};
