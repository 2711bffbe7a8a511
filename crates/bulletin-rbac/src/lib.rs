//! # Bulletin RBAC (Role-Based Access Control)
//!
//! This crate provides the authorization engine for the bulletin platform:
//! a static, exhaustively-checked mapping from (role, action, lifecycle
//! state) to an allow/deny decision.
//!
//! ## Overview
//!
//! The bulletin-rbac crate handles:
//! - **Roles**: The four principal roles (viewer, editor, publisher, admin)
//! - **Actions**: Operations that can be performed on bulletins
//! - **Policy**: The permission table, evaluated by [`authorize`]
//! - **Denials**: Machine-distinguishable reasons for a deny decision
//!
//! ## Policy
//!
//! ```text
//! admin      every action in every state (archived content stays immutable)
//! publisher  read / update / publish / archive (update also on published)
//! editor     read / create / update, update only while draft
//! viewer     read, published bulletins only
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bulletin_rbac::{authorize, Action, Denial, Role};
//! use bulletin_model::Lifecycle;
//!
//! assert!(authorize(Role::Admin, Action::Delete, Lifecycle::Published).is_ok());
//!
//! let denied = authorize(Role::Editor, Action::Update, Lifecycle::Published);
//! assert!(matches!(denied, Err(Denial::InvalidLifecycleState { .. })));
//! ```
//!
//! ## Design
//!
//! [`authorize`] is a pure function of its inputs: no side effects, no I/O,
//! deterministic for every (role, action, state) triple. The table is a
//! single exhaustive `match`, so a missing rule is a compile error rather
//! than a silently-denied (or silently-allowed) runtime hole.

pub mod actions;
pub mod policy;
pub mod principal;
pub mod roles;

// Re-export main types for convenience
pub use actions::Action;
pub use policy::{authorize, can_list, Denial};
pub use principal::Principal;
pub use roles::Role;
