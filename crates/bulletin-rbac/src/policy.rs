//! The permission table
//!
//! This module implements the authorization engine: a pure function of a
//! static (role, action, lifecycle state) table. The table is one
//! exhaustive `match`, so adding a role or an action forces every rule to
//! be spelled out at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

use bulletin_model::Lifecycle;

use crate::actions::Action;
use crate::roles::Role;

/// Why an authorization request was denied.
///
/// The two variants are machine-distinguishable so the transport layer can
/// render accurate errors: `InsufficientRole` means the role can never
/// perform the action, `InvalidLifecycleState` means the role could, but
/// not while the bulletin is in its current state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Denial {
    /// The role does not grant this action in any state.
    InsufficientRole {
        /// Role that made the request
        role: Role,
        /// Action that was requested
        action: Action,
    },

    /// The role grants this action, but not in the bulletin's current state.
    InvalidLifecycleState {
        /// Role that made the request
        role: Role,
        /// Action that was requested
        action: Action,
        /// Lifecycle state the bulletin was in
        state: Lifecycle,
    },
}

impl Denial {
    /// Get the machine-readable reason code.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Denial::InsufficientRole { .. } => "insufficient_role",
            Denial::InvalidLifecycleState { .. } => "invalid_lifecycle_state",
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::InsufficientRole { role, action } => {
                write!(f, "role '{}' may not {}", role.as_str(), action.as_str())
            }
            Denial::InvalidLifecycleState { role, action, state } => write!(
                f,
                "role '{}' may not {} a bulletin in state '{}'",
                role.as_str(),
                action.as_str(),
                state.as_str()
            ),
        }
    }
}

/// Evaluate whether a role may perform an action on a bulletin in the
/// given lifecycle state.
///
/// This is a pure function: no side effects, no I/O, identical results for
/// identical inputs. Note that it decides *permission* only; transition
/// legality (for example, publishing an archived bulletin) is validated
/// separately by the consistency layer, which is why an admin is allowed
/// `Publish` here in every state.
///
/// # Policy
///
/// - `admin` may perform any action in any state, except updating an
///   archived bulletin: archived content is immutable for everyone.
/// - `publisher` may read, update (draft and published, not archived),
///   publish, and archive, but never create or delete.
/// - `editor` may read and create, and update only while the bulletin is a
///   draft; updates to published or archived bulletins are denied with
///   [`Denial::InvalidLifecycleState`].
/// - `viewer` may only read, and only published bulletins.
///
/// # Examples
///
/// ```
/// use bulletin_rbac::{authorize, Action, Role};
/// use bulletin_model::Lifecycle;
///
/// assert!(authorize(Role::Editor, Action::Update, Lifecycle::Draft).is_ok());
/// assert!(authorize(Role::Editor, Action::Update, Lifecycle::Published).is_err());
/// assert!(authorize(Role::Publisher, Action::Update, Lifecycle::Published).is_ok());
/// ```
pub fn authorize(role: Role, action: Action, state: Lifecycle) -> Result<(), Denial> {
    match (role, action) {
        // Archived content is immutable for everyone; all other actions
        // are unrestricted for admins.
        (Role::Admin, Action::Update) => match state {
            Lifecycle::Draft | Lifecycle::Published => Ok(()),
            Lifecycle::Archived => Err(Denial::InvalidLifecycleState { role, action, state }),
        },
        (Role::Admin, _) => Ok(()),

        (Role::Publisher, Action::Read | Action::Publish | Action::Archive) => Ok(()),
        (Role::Publisher, Action::Update) => match state {
            Lifecycle::Draft | Lifecycle::Published => Ok(()),
            Lifecycle::Archived => Err(Denial::InvalidLifecycleState { role, action, state }),
        },
        (Role::Publisher, Action::Create | Action::Delete) => {
            Err(Denial::InsufficientRole { role, action })
        }

        (Role::Editor, Action::Read | Action::Create) => Ok(()),
        (Role::Editor, Action::Update) => match state {
            Lifecycle::Draft => Ok(()),
            Lifecycle::Published | Lifecycle::Archived => {
                Err(Denial::InvalidLifecycleState { role, action, state })
            }
        },
        (Role::Editor, Action::Delete | Action::Publish | Action::Archive) => {
            Err(Denial::InsufficientRole { role, action })
        }

        (Role::Viewer, Action::Read) => match state {
            Lifecycle::Published => Ok(()),
            Lifecycle::Draft | Lifecycle::Archived => {
                Err(Denial::InvalidLifecycleState { role, action, state })
            }
        },
        (
            Role::Viewer,
            Action::Create | Action::Update | Action::Delete | Action::Publish | Action::Archive,
        ) => Err(Denial::InsufficientRole { role, action }),
    }
}

/// Check whether a role may see a bulletin in a listing.
///
/// Listings apply the same table as direct reads, per item, so a viewer
/// sees published bulletins only while every other role sees everything
/// it could read directly.
pub fn can_list(role: Role, state: Lifecycle) -> bool {
    authorize(role, Action::Read, state).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_is_deterministic_over_full_grid() {
        for role in Role::all() {
            for action in Action::all() {
                for state in Lifecycle::all() {
                    let first = authorize(role, action, state);
                    let second = authorize(role, action, state);
                    assert_eq!(first, second, "{role:?} {action:?} {state:?}");
                }
            }
        }
    }

    #[test]
    fn test_admin_may_do_anything_except_touch_archived_content() {
        for action in Action::all() {
            for state in Lifecycle::all() {
                let decision = authorize(Role::Admin, action, state);
                if action == Action::Update && state == Lifecycle::Archived {
                    assert!(matches!(
                        decision,
                        Err(Denial::InvalidLifecycleState { .. })
                    ));
                } else {
                    assert!(decision.is_ok());
                }
            }
        }
    }

    #[test]
    fn test_publisher_policy() {
        for state in Lifecycle::all() {
            assert!(authorize(Role::Publisher, Action::Read, state).is_ok());
            assert!(authorize(Role::Publisher, Action::Publish, state).is_ok());
            assert!(authorize(Role::Publisher, Action::Archive, state).is_ok());
            assert!(matches!(
                authorize(Role::Publisher, Action::Delete, state),
                Err(Denial::InsufficientRole { .. })
            ));
            assert!(matches!(
                authorize(Role::Publisher, Action::Create, state),
                Err(Denial::InsufficientRole { .. })
            ));
        }

        assert!(authorize(Role::Publisher, Action::Update, Lifecycle::Draft).is_ok());
        assert!(authorize(Role::Publisher, Action::Update, Lifecycle::Published).is_ok());
        assert!(matches!(
            authorize(Role::Publisher, Action::Update, Lifecycle::Archived),
            Err(Denial::InvalidLifecycleState { .. })
        ));
    }

    #[test]
    fn test_editor_update_restricted_to_draft() {
        assert!(authorize(Role::Editor, Action::Update, Lifecycle::Draft).is_ok());

        let denied = authorize(Role::Editor, Action::Update, Lifecycle::Published);
        assert_eq!(
            denied,
            Err(Denial::InvalidLifecycleState {
                role: Role::Editor,
                action: Action::Update,
                state: Lifecycle::Published,
            })
        );
        assert!(authorize(Role::Editor, Action::Update, Lifecycle::Archived).is_err());
    }

    #[test]
    fn test_editor_never_drives_lifecycle() {
        for state in Lifecycle::all() {
            assert!(matches!(
                authorize(Role::Editor, Action::Publish, state),
                Err(Denial::InsufficientRole { .. })
            ));
            assert!(matches!(
                authorize(Role::Editor, Action::Archive, state),
                Err(Denial::InsufficientRole { .. })
            ));
            assert!(matches!(
                authorize(Role::Editor, Action::Delete, state),
                Err(Denial::InsufficientRole { .. })
            ));
        }
    }

    #[test]
    fn test_viewer_reads_published_only() {
        assert!(authorize(Role::Viewer, Action::Read, Lifecycle::Published).is_ok());
        assert!(matches!(
            authorize(Role::Viewer, Action::Read, Lifecycle::Draft),
            Err(Denial::InvalidLifecycleState { .. })
        ));
        assert!(matches!(
            authorize(Role::Viewer, Action::Read, Lifecycle::Archived),
            Err(Denial::InvalidLifecycleState { .. })
        ));

        for action in Action::all() {
            if action == Action::Read {
                continue;
            }
            assert!(matches!(
                authorize(Role::Viewer, action, Lifecycle::Published),
                Err(Denial::InsufficientRole { .. })
            ));
        }
    }

    #[test]
    fn test_delete_is_admin_only() {
        for role in Role::all() {
            for state in Lifecycle::all() {
                let decision = authorize(role, Action::Delete, state);
                if role == Role::Admin {
                    assert!(decision.is_ok());
                } else {
                    assert!(decision.is_err());
                }
            }
        }
    }

    #[test]
    fn test_list_visibility_follows_read_policy() {
        assert!(can_list(Role::Viewer, Lifecycle::Published));
        assert!(!can_list(Role::Viewer, Lifecycle::Draft));
        assert!(!can_list(Role::Viewer, Lifecycle::Archived));

        for state in Lifecycle::all() {
            assert!(can_list(Role::Editor, state));
            assert!(can_list(Role::Publisher, state));
            assert!(can_list(Role::Admin, state));
        }
    }

    #[test]
    fn test_denial_reason_codes_and_display() {
        let insufficient = Denial::InsufficientRole {
            role: Role::Viewer,
            action: Action::Delete,
        };
        assert_eq!(insufficient.reason_code(), "insufficient_role");
        assert_eq!(insufficient.to_string(), "role 'viewer' may not delete");

        let invalid_state = Denial::InvalidLifecycleState {
            role: Role::Editor,
            action: Action::Update,
            state: Lifecycle::Published,
        };
        assert_eq!(invalid_state.reason_code(), "invalid_lifecycle_state");
        assert_eq!(
            invalid_state.to_string(),
            "role 'editor' may not update a bulletin in state 'published'"
        );
    }
}
