//! Bulletin service orchestration
//!
//! The single entry point external callers use. Every operation follows
//! the same order: fetch current state (when there is one), ask the
//! authorization engine to approve against that state, then let the
//! consistency controller validate and apply the mutation, retrying a
//! bounded number of times on version conflicts.

use std::sync::Arc;
use uuid::Uuid;

use bulletin_model::{
    duplicate_section_id, normalize_sections, Bulletin, BulletinFilter, BulletinPatch,
    BulletinSummary, Lifecycle, NewBulletin, Section,
};
use bulletin_rbac::{authorize, can_list, Action, Principal};
use bulletin_store::DocumentStore;

use crate::consistency::{ConsistencyController, Mutation};
use crate::error::{InvalidReason, ServiceError, ServiceResult};

/// Total commit attempts per mutating call before a version conflict is
/// surfaced to the caller. Only conflicts are retried; I/O failures
/// surface immediately so store outages are not masked as delay.
pub const MAX_COMMIT_ATTEMPTS: u32 = 3;

/// Access-controlled CRUD service over bulletin documents.
///
/// The service holds no mutable state of its own; the persisted document
/// is the sole source of truth per request, so any number of service
/// instances may run concurrently against the same store.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use bulletin_model::NewBulletin;
/// use bulletin_rbac::{Principal, Role};
/// use bulletin_service::BulletinService;
/// use bulletin_store::MemoryStore;
/// use uuid::Uuid;
///
/// # async fn example() -> bulletin_service::ServiceResult<()> {
/// let service = BulletinService::new(Arc::new(MemoryStore::new()));
/// let editor = Principal::new(Uuid::now_v7(), Role::Editor);
///
/// let bulletin = service.create(editor, NewBulletin::new("Hello")).await?;
/// let fetched = service.read(editor, bulletin.id).await?;
/// assert_eq!(fetched.version, 1);
/// # Ok(())
/// # }
/// ```
pub struct BulletinService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> BulletinService<S> {
    /// Create a service over a document store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a new draft bulletin owned by the caller.
    ///
    /// Section positions in the payload may be gappy or duplicated; they
    /// are normalized to a gapless `0..n-1` sequence before the first
    /// write. Duplicate explicit section ids are rejected as invalid.
    pub async fn create(&self, principal: Principal, payload: NewBulletin) -> ServiceResult<Bulletin> {
        authorize(principal.role, Action::Create, Lifecycle::Draft)
            .map_err(ServiceError::Forbidden)?;

        if let Some(id) = duplicate_section_id(&payload.sections) {
            return Err(ServiceError::Invalid(InvalidReason::DuplicateSection(id)));
        }

        let sections = normalize_sections(payload.sections);
        let bulletin = Bulletin::new(payload.title, principal.id, sections);
        self.store.put(bulletin.id, bulletin.clone(), 0).await?;

        tracing::info!(bulletin_id = %bulletin.id, owner_id = %principal.id, "bulletin created");
        Ok(bulletin)
    }

    /// Read a bulletin by id.
    pub async fn read(&self, principal: Principal, id: Uuid) -> ServiceResult<Bulletin> {
        let current = self.store.get(id).await?;
        authorize(principal.role, Action::Read, current.document.state)
            .map_err(ServiceError::Forbidden)?;
        Ok(current.document)
    }

    /// Apply a partial content update.
    ///
    /// The patch carries the version the caller read the bulletin at.
    /// A stale version is retried by re-fetching and re-validating against
    /// the fresh document, up to [`MAX_COMMIT_ATTEMPTS`] total attempts.
    pub async fn update(
        &self,
        principal: Principal,
        id: Uuid,
        patch: BulletinPatch,
    ) -> ServiceResult<Bulletin> {
        let mutation = Mutation::Content {
            title: patch.title,
            sections: patch.sections,
        };
        self.commit_with_retry(principal, id, Action::Update, mutation, Some(patch.expected_version))
            .await
    }

    /// Permanently remove a bulletin. Admin-only, irreversible.
    ///
    /// # Returns
    ///
    /// The bulletin as it was at deletion time.
    pub async fn delete(&self, principal: Principal, id: Uuid) -> ServiceResult<Bulletin> {
        let current = self.store.get(id).await?;
        authorize(principal.role, Action::Delete, current.document.state)
            .map_err(ServiceError::Forbidden)?;

        self.store.delete(id).await?;
        tracing::info!(bulletin_id = %id, actor_id = %principal.id, "bulletin deleted");
        Ok(current.document)
    }

    /// List bulletins matching a filter, restricted to what the caller's
    /// role may read.
    ///
    /// Visibility is the same permission table as direct reads, applied
    /// per item, so a viewer only ever sees published bulletins.
    pub async fn list(
        &self,
        principal: Principal,
        filter: BulletinFilter,
    ) -> ServiceResult<Vec<BulletinSummary>> {
        let results = self.store.query(&filter).await?;
        Ok(results
            .into_iter()
            .filter(|stored| can_list(principal.role, stored.document.state))
            .map(|stored| stored.document.summary())
            .collect())
    }

    /// Publish a draft bulletin.
    ///
    /// Publishing an already-published bulletin is an idempotent no-op:
    /// version and content are left unchanged. Publishing an archived
    /// bulletin is an illegal transition for every role, and publishing a
    /// draft with no sections (or a blank title) is invalid.
    pub async fn publish(&self, principal: Principal, id: Uuid) -> ServiceResult<Bulletin> {
        self.commit_with_retry(
            principal,
            id,
            Action::Publish,
            Mutation::Transition(Lifecycle::Published),
            None,
        )
        .await
    }

    /// Archive a bulletin (from draft or published).
    ///
    /// Archived is terminal; archiving an archived bulletin is an illegal
    /// transition. Archiving is a state transition, not a deletion.
    pub async fn archive(&self, principal: Principal, id: Uuid) -> ServiceResult<Bulletin> {
        self.commit_with_retry(
            principal,
            id,
            Action::Archive,
            Mutation::Transition(Lifecycle::Archived),
            None,
        )
        .await
    }

    /// Duplicate an accessible bulletin into a fresh draft owned by the
    /// caller.
    ///
    /// The copy gets new bulletin and section ids, version 1, and — when
    /// no title is supplied — the source title with a " (copy)" suffix.
    /// Requires both read access to the source and create permission.
    pub async fn duplicate(
        &self,
        principal: Principal,
        id: Uuid,
        title: Option<String>,
    ) -> ServiceResult<Bulletin> {
        let current = self.store.get(id).await?;
        authorize(principal.role, Action::Read, current.document.state)
            .map_err(ServiceError::Forbidden)?;
        authorize(principal.role, Action::Create, Lifecycle::Draft)
            .map_err(ServiceError::Forbidden)?;

        let source = current.document;
        let title = title.unwrap_or_else(|| format!("{} (copy)", source.title));
        let sections: Vec<Section> = source
            .sections
            .into_iter()
            .map(|section| Section {
                id: Uuid::now_v7(),
                ..section
            })
            .collect();

        let copy = Bulletin::new(title, principal.id, sections);
        self.store.put(copy.id, copy.clone(), 0).await?;

        tracing::info!(source_id = %id, bulletin_id = %copy.id, "bulletin duplicated");
        Ok(copy)
    }

    /// Fetch, authorize, and commit a mutation, retrying version conflicts.
    ///
    /// `caller_expected` is the version the external caller observed (for
    /// updates); transitions always commit against the freshly fetched
    /// version. Authorization is re-evaluated on every attempt because the
    /// lifecycle state may have moved between fetches.
    async fn commit_with_retry(
        &self,
        principal: Principal,
        id: Uuid,
        action: Action,
        mutation: Mutation,
        caller_expected: Option<u64>,
    ) -> ServiceResult<Bulletin> {
        let controller = ConsistencyController::new(self.store.as_ref());
        let mut attempt = 1;

        loop {
            let current = self.store.get(id).await?;
            authorize(principal.role, action, current.document.state)
                .map_err(ServiceError::Forbidden)?;

            // Re-publishing is an idempotent no-op
            if matches!(mutation, Mutation::Transition(Lifecycle::Published))
                && current.document.state == Lifecycle::Published
            {
                return Ok(current.document);
            }

            let expected = match caller_expected {
                Some(observed) if attempt == 1 => observed,
                _ => current.version,
            };

            match controller.commit(&current, &mutation, expected, principal.id).await {
                Ok(committed) => {
                    if attempt > 1 {
                        tracing::info!(
                            bulletin_id = %id,
                            attempts = attempt,
                            "commit succeeded after conflict retry"
                        );
                    }
                    return Ok(committed);
                }
                Err(ServiceError::Conflict) if attempt < MAX_COMMIT_ATTEMPTS => {
                    tracing::warn!(
                        bulletin_id = %id,
                        attempt,
                        max_attempts = MAX_COMMIT_ATTEMPTS,
                        "version conflict, re-fetching"
                    );
                    attempt += 1;
                }
                Err(ServiceError::Conflict) => {
                    tracing::warn!(
                        bulletin_id = %id,
                        attempts = attempt,
                        "conflict retry budget exhausted"
                    );
                    return Err(ServiceError::Conflict);
                }
                Err(other) => return Err(other),
            }
        }
    }
}
