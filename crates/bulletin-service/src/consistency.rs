//! Consistency controller
//!
//! This module enforces optimistic concurrency and structural invariants
//! on every mutation. A mutation is validated and the replacement document
//! fully constructed in isolation before a single atomic write is issued,
//! so an abandoned request can never leave a partially-applied section
//! list behind.

use chrono::Utc;
use uuid::Uuid;

use bulletin_model::{
    duplicate_section_id, normalize_sections, Bulletin, Lifecycle, SectionDraft,
};
use bulletin_store::{DocumentStore, Versioned};

use crate::error::{InvalidReason, ServiceError, ServiceResult};

/// A validated-and-committed mutation of a bulletin.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Replace content fields; `None` fields are left untouched.
    Content {
        /// Replacement title, if any
        title: Option<String>,
        /// Full replacement section list, if any
        sections: Option<Vec<SectionDraft>>,
    },

    /// Move the bulletin to another lifecycle state.
    Transition(Lifecycle),
}

/// Enforces optimistic concurrency and structural invariants on writes.
///
/// The controller is stateless; all coordination happens through the
/// store's version stamp.
pub struct ConsistencyController<'a, S: DocumentStore> {
    store: &'a S,
}

impl<'a, S: DocumentStore> ConsistencyController<'a, S> {
    /// Create a controller over a store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate a mutation against the current document and commit it.
    ///
    /// The order is fixed:
    /// 1. version check — a stale `expected_version` returns
    ///    [`ServiceError::Conflict`] without applying anything;
    /// 2. structural validation — the full replacement document is built
    ///    in isolation (sections re-normalized to gapless `0..n-1`,
    ///    duplicate section ids and illegal transitions rejected as
    ///    [`ServiceError::Invalid`]);
    /// 3. one atomic write carrying the observed version, so a writer that
    ///    lost the race gets a conflict from the store itself.
    ///
    /// On success the committed document has its version incremented by
    /// exactly one and its update audit fields set.
    ///
    /// # Arguments
    ///
    /// * `current` - The document as last read, with its version stamp
    /// * `mutation` - The change to apply
    /// * `expected_version` - Version the caller observed
    /// * `actor` - Principal performing the mutation
    pub async fn commit(
        &self,
        current: &Versioned<Bulletin>,
        mutation: &Mutation,
        expected_version: u64,
        actor: Uuid,
    ) -> ServiceResult<Bulletin> {
        if current.version != expected_version {
            return Err(ServiceError::Conflict);
        }

        let mut next = Self::apply(&current.document, mutation)?;
        next.version = expected_version + 1;
        next.updated_at = Utc::now();
        next.updated_by = Some(actor);

        self.store.put(next.id, next.clone(), expected_version).await?;
        Ok(next)
    }

    /// Build the replacement document, rejecting structural violations.
    ///
    /// Pure with respect to the store: nothing is written here.
    fn apply(current: &Bulletin, mutation: &Mutation) -> ServiceResult<Bulletin> {
        let mut next = current.clone();
        match mutation {
            Mutation::Content { title, sections } => {
                if let Some(title) = title {
                    next.title = title.clone();
                }
                if let Some(drafts) = sections {
                    if let Some(id) = duplicate_section_id(drafts) {
                        return Err(ServiceError::Invalid(InvalidReason::DuplicateSection(id)));
                    }
                    next.sections = normalize_sections(drafts.clone());
                }
            }
            Mutation::Transition(to) => {
                if !current.state.can_transition(*to) {
                    return Err(ServiceError::Invalid(InvalidReason::IllegalTransition {
                        from: current.state,
                        to: *to,
                    }));
                }
                if *to == Lifecycle::Published {
                    if next.title.trim().is_empty() {
                        return Err(ServiceError::Invalid(InvalidReason::EmptyTitle));
                    }
                    if next.sections.is_empty() {
                        return Err(ServiceError::Invalid(InvalidReason::EmptyContent));
                    }
                }
                next.state = *to;
            }
        }
        Ok(next)
    }
}
