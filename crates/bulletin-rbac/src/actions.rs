//! Actions
//!
//! Defines the operations that can be performed on bulletins. Together
//! with a role and a lifecycle state, an action is one coordinate of the
//! permission table in [`crate::policy`].

use serde::{Deserialize, Serialize};

/// Actions that can be performed on a bulletin.
///
/// `list` is not a separate action: listings authorize `Read` per item,
/// so visibility is driven by the same table as direct reads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read/view a bulletin.
    Read,

    /// Create a new bulletin (always enters the draft state).
    Create,

    /// Modify the content of an existing bulletin.
    Update,

    /// Permanently remove a bulletin.
    Delete,

    /// Transition a bulletin to the published state.
    Publish,

    /// Transition a bulletin to the archived state.
    Archive,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Publish => "publish",
            Action::Archive => "archive",
        }
    }

    /// Parse an action from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Returns
    ///
    /// `Some(Action)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use bulletin_rbac::Action;
    ///
    /// assert_eq!(Action::parse("read"), Some(Action::Read));
    /// assert_eq!(Action::parse("edit"), Some(Action::Update)); // Alias
    /// assert_eq!(Action::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" | "view" | "get" => Some(Action::Read),
            "create" | "add" | "new" => Some(Action::Create),
            "update" | "edit" | "write" | "modify" => Some(Action::Update),
            "delete" | "remove" | "destroy" => Some(Action::Delete),
            "publish" => Some(Action::Publish),
            "archive" => Some(Action::Archive),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            Action::Read,
            Action::Create,
            Action::Update,
            Action::Delete,
            Action::Publish,
            Action::Archive,
        ]
    }

    /// Check if this action mutates a bulletin.
    pub fn is_write(&self) -> bool {
        !matches!(self, Action::Read)
    }

    /// Check if this is a destructive action.
    ///
    /// Deletion is the only irreversible removal; archiving is a state
    /// transition, not a deletion.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Action::Delete)
    }
}
