//! Bulletin lifecycle states
//!
//! This module defines the lifecycle state machine for bulletins.
//! Transitions are encoded in a single explicit table so that illegal
//! transitions are rejected by one centralized check, reused by both
//! update-permission logic and the publish/archive operations.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a bulletin.
///
/// The state machine is:
///
/// ```text
/// draft ──publish──> published ──archive──> archived
///   └───────────────archive───────────────────┘
/// ```
///
/// `archived` is terminal; no transitions lead out of it.
///
/// # Examples
///
/// ```
/// use bulletin_model::Lifecycle;
///
/// assert!(Lifecycle::Draft.can_transition(Lifecycle::Published));
/// assert!(Lifecycle::Draft.can_transition(Lifecycle::Archived));
/// assert!(!Lifecycle::Archived.can_transition(Lifecycle::Published));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// Being authored; freely editable.
    Draft,

    /// Live and visible to readers; content corrections are restricted.
    Published,

    /// Retired; terminal state with no further transitions.
    Archived,
}

impl Lifecycle {
    /// Get the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Draft => "draft",
            Lifecycle::Published => "published",
            Lifecycle::Archived => "archived",
        }
    }

    /// Parse a state from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Lifecycle)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use bulletin_model::Lifecycle;
    ///
    /// assert_eq!(Lifecycle::parse("draft"), Some(Lifecycle::Draft));
    /// assert_eq!(Lifecycle::parse("PUBLISHED"), Some(Lifecycle::Published));
    /// assert_eq!(Lifecycle::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Lifecycle::Draft),
            "published" => Some(Lifecycle::Published),
            "archived" => Some(Lifecycle::Archived),
            _ => None,
        }
    }

    /// Get all lifecycle states.
    pub fn all() -> Vec<Self> {
        vec![Lifecycle::Draft, Lifecycle::Published, Lifecycle::Archived]
    }

    /// Check whether a transition from this state to `to` is legal.
    ///
    /// This is the single transition table for the whole platform:
    /// - `draft → published`
    /// - `draft → archived` (direct archive of a draft, for cleanup)
    /// - `published → archived`
    ///
    /// Everything else, including self-transitions, is illegal here.
    /// Idempotent re-publishing of an already-published bulletin is
    /// handled by the service as a no-op, not as a transition.
    ///
    /// # Arguments
    ///
    /// * `to` - The target state
    ///
    /// # Returns
    ///
    /// `true` if the transition is legal, `false` otherwise
    pub fn can_transition(&self, to: Lifecycle) -> bool {
        matches!(
            (self, to),
            (Lifecycle::Draft, Lifecycle::Published)
                | (Lifecycle::Draft, Lifecycle::Archived)
                | (Lifecycle::Published, Lifecycle::Archived)
        )
    }

    /// Check if this state is terminal (no outgoing transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Lifecycle::Archived)
    }
}
