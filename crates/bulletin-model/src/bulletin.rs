//! Bulletin domain models
//!
//! This module provides the core Bulletin aggregate along with the
//! payload shapes the service accepts for creation and partial update,
//! and the lightweight summary used in listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lifecycle::Lifecycle;
use crate::section::{Section, SectionDraft};

/// A bulletin is the top-level document aggregate managed by the platform.
///
/// A bulletin and its sections are always persisted and mutated as one
/// atomic unit. The version counter strictly increases by one with each
/// committed mutation and drives optimistic concurrency control.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use bulletin_model::{Bulletin, Lifecycle};
///
/// let owner_id = Uuid::now_v7();
/// let bulletin = Bulletin::new("Quarterly Update", owner_id, Vec::new());
/// assert_eq!(bulletin.state, Lifecycle::Draft);
/// assert_eq!(bulletin.version, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bulletin {
    /// Unique identifier for the bulletin
    pub id: Uuid,

    /// Human-readable title
    pub title: String,

    /// Ordered sections; positions are gapless `0..n-1`
    pub sections: Vec<Section>,

    /// Lifecycle state controlling which mutations are legal
    pub state: Lifecycle,

    /// User who created (and owns) the bulletin
    pub owner_id: Uuid,

    /// Monotonic version counter; +1 per committed mutation
    pub version: u64,

    /// When the bulletin was created
    pub created_at: DateTime<Utc>,

    /// When the bulletin was last updated
    pub updated_at: DateTime<Utc>,

    /// User who performed the last committed mutation
    pub updated_by: Option<Uuid>,
}

impl Bulletin {
    /// Creates a new draft bulletin.
    ///
    /// The bulletin is created with:
    /// - A newly generated UUID v7 ID
    /// - Draft lifecycle state
    /// - Version 1
    /// - Current timestamp for created_at and updated_at
    ///
    /// Sections are expected to already be normalized
    /// (see [`crate::normalize_sections`]).
    ///
    /// # Arguments
    ///
    /// * `title` - The bulletin title
    /// * `owner_id` - The user ID who owns this bulletin
    /// * `sections` - Normalized sections
    pub fn new(title: impl Into<String>, owner_id: Uuid, sections: Vec<Section>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            sections,
            state: Lifecycle::Draft,
            owner_id,
            version: 1,
            created_at: now,
            updated_at: now,
            updated_by: None,
        }
    }

    /// Check if the bulletin has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Build the listing summary for this bulletin.
    pub fn summary(&self) -> BulletinSummary {
        BulletinSummary {
            id: self.id,
            title: self.title.clone(),
            state: self.state,
            owner_id: self.owner_id,
            version: self.version,
            section_count: self.sections.len(),
            updated_at: self.updated_at,
        }
    }
}

/// Summary of a bulletin for list displays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulletinSummary {
    /// Bulletin ID
    pub id: Uuid,

    /// Title
    pub title: String,

    /// Lifecycle state
    pub state: Lifecycle,

    /// Owner user ID
    pub owner_id: Uuid,

    /// Current version
    pub version: u64,

    /// Number of sections
    pub section_count: usize,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a bulletin.
///
/// Section positions may be gappy or duplicated; they are normalized to a
/// gapless `0..n-1` sequence before the bulletin is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBulletin {
    /// Bulletin title
    pub title: String,

    /// Initial sections (may be empty for a draft)
    #[serde(default)]
    pub sections: Vec<SectionDraft>,
}

impl NewBulletin {
    /// Create a payload with no sections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Add a section draft.
    pub fn with_section(mut self, section: SectionDraft) -> Self {
        self.sections.push(section);
        self
    }
}

/// Partial update of a bulletin's content.
///
/// Carries the version the caller read the bulletin at; the commit is
/// rejected with a conflict when the stored version has moved on.
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletinPatch {
    /// Version the caller observed when it read the bulletin
    pub expected_version: u64,

    /// Replacement title, if any
    pub title: Option<String>,

    /// Full replacement section list, if any (normalized before commit)
    pub sections: Option<Vec<SectionDraft>>,
}

impl BulletinPatch {
    /// Create an empty patch against an observed version.
    pub fn new(expected_version: u64) -> Self {
        Self {
            expected_version,
            title: None,
            sections: None,
        }
    }

    /// Replace the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the section list.
    pub fn with_sections(mut self, sections: Vec<SectionDraft>) -> Self {
        self.sections = Some(sections);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::normalize_sections;

    #[test]
    fn test_bulletin_creation() {
        let owner_id = Uuid::now_v7();
        let bulletin = Bulletin::new("Release Notes", owner_id, Vec::new());

        assert_eq!(bulletin.title, "Release Notes");
        assert_eq!(bulletin.owner_id, owner_id);
        assert_eq!(bulletin.state, Lifecycle::Draft);
        assert_eq!(bulletin.version, 1);
        assert_eq!(bulletin.created_at, bulletin.updated_at);
        assert!(bulletin.updated_by.is_none());
        assert!(bulletin.is_empty());
    }

    #[test]
    fn test_bulletin_summary() {
        let owner_id = Uuid::now_v7();
        let sections = normalize_sections(vec![
            SectionDraft::new(0, "a", ""),
            SectionDraft::new(1, "b", ""),
        ]);
        let bulletin = Bulletin::new("Summary Test", owner_id, sections);
        let summary = bulletin.summary();

        assert_eq!(summary.id, bulletin.id);
        assert_eq!(summary.title, "Summary Test");
        assert_eq!(summary.section_count, 2);
        assert_eq!(summary.version, 1);
        assert_eq!(summary.state, Lifecycle::Draft);
    }

    #[test]
    fn test_patch_builder() {
        let patch = BulletinPatch::new(4)
            .with_title("Renamed")
            .with_sections(vec![SectionDraft::new(0, "only", "")]);

        assert_eq!(patch.expected_version, 4);
        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.sections.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_new_bulletin_builder() {
        let payload = NewBulletin::new("Weekly")
            .with_section(SectionDraft::new(0, "intro", "hello"))
            .with_section(SectionDraft::new(1, "news", "world"));

        assert_eq!(payload.title, "Weekly");
        assert_eq!(payload.sections.len(), 2);
    }
}
