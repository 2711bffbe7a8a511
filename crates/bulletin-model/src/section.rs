//! Sections and section normalization
//!
//! Sections are the ordered content blocks inside a bulletin. They belong
//! to exactly one bulletin and carry no identity outside their parent.
//! After every successful mutation the positions within a bulletin form a
//! gapless `0..n-1` sequence; `normalize_sections` is the one place that
//! produces such a sequence from arbitrary caller input.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inline attachment reference embedded in a section.
///
/// Attachments have no independent lifecycle; they are value data carried
/// by their section and persisted with the bulletin aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachmentRef {
    /// Location of the attached resource (URL or storage key).
    pub uri: String,

    /// Display name.
    pub name: Option<String>,

    /// MIME type, if known.
    pub media_type: Option<String>,
}

impl AttachmentRef {
    /// Create a new attachment reference.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: None,
            media_type: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the MIME type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// An ordered content block owned by exactly one bulletin.
///
/// # Examples
///
/// ```
/// use bulletin_model::{SectionDraft, normalize_sections};
///
/// let sections = normalize_sections(vec![
///     SectionDraft::new(10, "Second", "comes after"),
///     SectionDraft::new(3, "First", "comes before"),
/// ]);
/// assert_eq!(sections[0].title, "First");
/// assert_eq!(sections[0].position, 0);
/// assert_eq!(sections[1].position, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    /// Unique identifier within the parent bulletin.
    pub id: Uuid,

    /// Order index; gapless `0..n-1` within the parent after every mutation.
    pub position: usize,

    /// Section heading.
    pub title: String,

    /// Body content.
    pub body: String,

    /// Inline attachment references.
    #[serde(default)]
    pub attachments: Vec<AttachmentRef>,
}

/// Caller-supplied shape of a section before normalization.
///
/// Positions may be gappy or duplicated; ids may be omitted for new
/// sections or carried over from a previous read for existing ones.
/// `normalize_sections` turns a list of drafts into committed [`Section`]s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionDraft {
    /// Existing section id, or `None` to mint a fresh one.
    pub id: Option<Uuid>,

    /// Requested order index; only the relative order is honored.
    pub position: usize,

    /// Section heading.
    pub title: String,

    /// Body content.
    pub body: String,

    /// Inline attachment references.
    #[serde(default)]
    pub attachments: Vec<AttachmentRef>,
}

impl SectionDraft {
    /// Create a new section draft without attachments.
    ///
    /// # Arguments
    ///
    /// * `position` - Requested order index (relative order only)
    /// * `title` - Section heading
    /// * `body` - Body content
    pub fn new(position: usize, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            position,
            title: title.into(),
            body: body.into(),
            attachments: Vec::new(),
        }
    }

    /// Carry over an existing section id.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Add an attachment reference.
    pub fn with_attachment(mut self, attachment: AttachmentRef) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// Normalize caller-supplied section drafts into a gapless sequence.
///
/// Drafts are ordered by their requested position (stable, so ties keep
/// their input order) and then reassigned contiguous positions `0..n-1`.
/// Drafts without an id get a freshly minted one.
///
/// Duplicate explicit ids are not resolved here; callers reject them
/// beforehand via [`duplicate_section_id`].
///
/// # Examples
///
/// ```
/// use bulletin_model::{SectionDraft, normalize_sections};
///
/// let sections = normalize_sections(vec![
///     SectionDraft::new(7, "a", ""),
///     SectionDraft::new(7, "b", ""),
///     SectionDraft::new(2, "c", ""),
/// ]);
/// let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
/// assert_eq!(titles, ["c", "a", "b"]);
/// assert_eq!(sections.iter().map(|s| s.position).collect::<Vec<_>>(), [0, 1, 2]);
/// ```
pub fn normalize_sections(mut drafts: Vec<SectionDraft>) -> Vec<Section> {
    drafts.sort_by_key(|d| d.position);
    drafts
        .into_iter()
        .enumerate()
        .map(|(position, draft)| Section {
            id: draft.id.unwrap_or_else(Uuid::now_v7),
            position,
            title: draft.title,
            body: draft.body,
            attachments: draft.attachments,
        })
        .collect()
}

/// Find the first duplicated explicit section id, if any.
///
/// Omitted ids cannot collide (they are minted during normalization), so
/// only explicit ids are checked.
///
/// # Returns
///
/// `Some(id)` for the first id that appears more than once, `None` otherwise
pub fn duplicate_section_id(drafts: &[SectionDraft]) -> Option<Uuid> {
    let mut seen = std::collections::HashSet::new();
    for draft in drafts {
        if let Some(id) = draft.id {
            if !seen.insert(id) {
                return Some(id);
            }
        }
    }
    None
}
