//! Query filters for bulletin listings
//!
//! Filters describe which bulletins a query should return. They are
//! evaluated by the document store adapter; access control is applied
//! separately, per item, by the service layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bulletin::Bulletin;
use crate::lifecycle::Lifecycle;

/// Filter for bulletin queries.
///
/// All criteria are optional and combined with AND semantics. An empty
/// filter matches every bulletin.
///
/// # Examples
///
/// ```
/// use bulletin_model::{BulletinFilter, Lifecycle};
///
/// let filter = BulletinFilter::new()
///     .with_state(Lifecycle::Published)
///     .with_title_contains("release");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulletinFilter {
    /// Match only bulletins in this lifecycle state
    pub state: Option<Lifecycle>,

    /// Match titles containing this substring (case-insensitive)
    pub title_contains: Option<String>,

    /// Match only bulletins owned by this user
    pub owner_id: Option<Uuid>,
}

impl BulletinFilter {
    /// Create an empty filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a lifecycle state.
    pub fn with_state(mut self, state: Lifecycle) -> Self {
        self.state = Some(state);
        self
    }

    /// Restrict to titles containing a substring (case-insensitive).
    pub fn with_title_contains(mut self, needle: impl Into<String>) -> Self {
        self.title_contains = Some(needle.into());
        self
    }

    /// Restrict to bulletins owned by a user.
    pub fn with_owner(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Check whether a bulletin matches this filter.
    pub fn matches(&self, bulletin: &Bulletin) -> bool {
        if let Some(state) = self.state {
            if bulletin.state != state {
                return false;
            }
        }
        if let Some(ref needle) = self.title_contains {
            let haystack = bulletin.title.to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(owner_id) = self.owner_id {
            if bulletin.owner_id != owner_id {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulletin(title: &str, state: Lifecycle, owner_id: Uuid) -> Bulletin {
        let mut b = Bulletin::new(title, owner_id, Vec::new());
        b.state = state;
        b
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let b = bulletin("Anything", Lifecycle::Archived, Uuid::now_v7());
        assert!(BulletinFilter::new().matches(&b));
    }

    #[test]
    fn test_state_filter() {
        let owner = Uuid::now_v7();
        let filter = BulletinFilter::new().with_state(Lifecycle::Published);

        assert!(filter.matches(&bulletin("a", Lifecycle::Published, owner)));
        assert!(!filter.matches(&bulletin("a", Lifecycle::Draft, owner)));
    }

    #[test]
    fn test_title_filter_is_case_insensitive() {
        let owner = Uuid::now_v7();
        let filter = BulletinFilter::new().with_title_contains("RELEASE");

        assert!(filter.matches(&bulletin("Q3 release notes", Lifecycle::Draft, owner)));
        assert!(!filter.matches(&bulletin("Weekly digest", Lifecycle::Draft, owner)));
    }

    #[test]
    fn test_owner_filter() {
        let owner = Uuid::now_v7();
        let filter = BulletinFilter::new().with_owner(owner);

        assert!(filter.matches(&bulletin("a", Lifecycle::Draft, owner)));
        assert!(!filter.matches(&bulletin("a", Lifecycle::Draft, Uuid::now_v7())));
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let owner = Uuid::now_v7();
        let filter = BulletinFilter::new()
            .with_state(Lifecycle::Draft)
            .with_title_contains("notes")
            .with_owner(owner);

        assert!(filter.matches(&bulletin("meeting notes", Lifecycle::Draft, owner)));
        assert!(!filter.matches(&bulletin("meeting notes", Lifecycle::Published, owner)));
        assert!(!filter.matches(&bulletin("agenda", Lifecycle::Draft, owner)));
    }
}
