//! Principal roles
//!
//! This module defines the role assigned to every principal. Roles are
//! verified externally (token verification is outside this crate) and
//! delivered with each request; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Role of a principal making a request.
///
/// Roles are hierarchical in spirit (Viewer < Editor < Publisher < Admin)
/// but the permission table in [`crate::policy`] is the source of truth;
/// the ordering exists for display and coarse comparisons only.
///
/// # Examples
///
/// ```
/// use bulletin_rbac::Role;
///
/// assert_eq!(Role::parse("publisher"), Some(Role::Publisher));
/// assert!(Role::Admin.is_admin());
/// assert!(!Role::Editor.is_admin());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Read-only access to published bulletins
    Viewer = 0,

    /// Can create and edit draft bulletins
    Editor = 1,

    /// Can correct live content and drive lifecycle transitions
    Publisher = 2,

    /// Full control, including irreversible deletion
    Admin = 3,
}

impl Role {
    /// Check if this role has admin privileges.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Parse a role from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Role)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use bulletin_rbac::Role;
    ///
    /// assert_eq!(Role::parse("admin"), Some(Role::Admin));
    /// assert_eq!(Role::parse("VIEWER"), Some(Role::Viewer));
    /// assert_eq!(Role::parse("superuser"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "viewer" => Some(Self::Viewer),
            "editor" => Some(Self::Editor),
            "publisher" => Some(Self::Publisher),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Get the string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Publisher => "publisher",
            Role::Admin => "admin",
        }
    }

    /// Get all roles.
    pub fn all() -> Vec<Self> {
        vec![Role::Viewer, Role::Editor, Role::Publisher, Role::Admin]
    }
}
