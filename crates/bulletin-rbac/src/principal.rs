//! Principals
//!
//! A principal is the already-verified identity making a request. Token
//! verification happens outside this platform; by the time a request
//! reaches the service it carries a trusted (id, role) pair. Principals
//! are never persisted here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::Role;

/// An externally-verified identity with its assigned role.
///
/// # Examples
///
/// ```
/// use bulletin_rbac::{Principal, Role};
/// use uuid::Uuid;
///
/// let principal = Principal::new(Uuid::now_v7(), Role::Editor);
/// assert_eq!(principal.role, Role::Editor);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    /// Verified user ID
    pub id: Uuid,

    /// Role claim delivered with the verified identity
    pub role: Role,
}

impl Principal {
    /// Create a principal from a verified identity and role claim.
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_creation() {
        let id = Uuid::now_v7();
        let principal = Principal::new(id, Role::Publisher);
        assert_eq!(principal.id, id);
        assert_eq!(principal.role, Role::Publisher);
    }
}
