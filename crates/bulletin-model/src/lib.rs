//! # Bulletin Domain Model
//!
//! This crate provides the domain model for the bulletin platform,
//! shared by the access-control, storage, and service crates.
//!
//! ## Overview
//!
//! The bulletin-model crate handles:
//! - **Bulletins**: Top-level document aggregates with a version counter
//! - **Sections**: Ordered child content blocks owned by one bulletin
//! - **Lifecycle**: The draft/published/archived state machine
//! - **Payloads**: Create and patch shapes accepted by the service
//! - **Filters**: Query filters for bulletin listings
//!
//! ## Architecture
//!
//! ```text
//! Bulletin (aggregate root, version counter)
//!   ├─ Lifecycle (draft → published → archived)
//!   └─ Sections (gapless 0..n-1 positions)
//!         └─ AttachmentRef (inline references)
//! ```
//!
//! A bulletin and its sections are always persisted and mutated as one
//! atomic unit; sections have no identity outside their parent.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bulletin_model::{Bulletin, SectionDraft, normalize_sections};
//! use uuid::Uuid;
//!
//! let owner_id = Uuid::now_v7();
//! let sections = normalize_sections(vec![
//!     SectionDraft::new(0, "Intro", "Welcome"),
//!     SectionDraft::new(1, "Details", "Body text"),
//! ]);
//! let bulletin = Bulletin::new("Quarterly Update", owner_id, sections);
//! assert_eq!(bulletin.version, 1);
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `bulletin-rbac`: Role and permission checks against lifecycle state
//! - `bulletin-store`: Versioned persistence of the aggregate
//! - `bulletin-service`: Orchestration and consistency control

pub mod bulletin;
pub mod filter;
pub mod lifecycle;
pub mod section;

// Re-export main types for convenience
pub use bulletin::{Bulletin, BulletinPatch, BulletinSummary, NewBulletin};
pub use filter::BulletinFilter;
pub use lifecycle::Lifecycle;
pub use section::{duplicate_section_id, normalize_sections, AttachmentRef, Section, SectionDraft};
