//! FormRepository: owner of the saved forms and the current draft
//!
//! ## Design
//!
//! The repository is the single source of truth for two pieces of state:
//!
//! - the **collection** of saved forms, unique by id
//! - the **current draft**, always present, not part of the collection
//!   until saved
//!
//! Every mutation is write-through: memory changes first, observers are
//! notified, then the affected blob is written to the store before the call
//! returns.
//!
//! ## Persistence Failures
//!
//! A failed write is returned as [`Error::Persistence`] and memory keeps the
//! new state, so the session stays usable. The blob is remembered as
//! pending until a later write of it succeeds or [`FormRepository::flush`]
//! retries it.
//!
//! ## Restore
//!
//! [`FormRepository::open`] reads both blobs. A blob that does not parse is
//! replaced by an empty collection or a fresh draft and reported through
//! [`FormRepository::restore_issues`]; it is not an error.

use crate::config::IntakeConfig;
use crate::observer::{ChangeEvent, Observers, SubscriptionId};
use intake_core::{Error, FieldValue, Fields, FormId, FormRecord, Result};
use intake_storage::KeyValueStore;
use serde::de::DeserializeOwned;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, warn};

/// Store keys used by a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOptions {
    /// Key of the saved-forms blob
    pub forms_key: String,
    /// Key of the draft blob
    pub draft_key: String,
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        Self::from(&IntakeConfig::default())
    }
}

impl From<&IntakeConfig> for RepositoryOptions {
    fn from(config: &IntakeConfig) -> Self {
        RepositoryOptions {
            forms_key: config.forms_key.clone(),
            draft_key: config.draft_key.clone(),
        }
    }
}

/// One of the two persisted blobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Blob {
    Forms,
    Draft,
}

/// Saved forms plus the current draft, persisted through a [`KeyValueStore`]
///
/// # Example
///
/// ```
/// use intake_engine::{FormRepository, RepositoryOptions};
/// use intake_storage::MemoryStore;
///
/// let mut repo = FormRepository::open(MemoryStore::new(), RepositoryOptions::default())?;
/// repo.update_current_draft([("nombre", "Ana"), ("dni", "111")])?;
/// let id = repo.save_current_draft()?;
/// assert_eq!(repo.get_by_id(&id).unwrap().text("nombre"), "Ana");
/// # Ok::<(), intake_core::Error>(())
/// ```
#[derive(Debug)]
pub struct FormRepository<S: KeyValueStore> {
    store: S,
    options: RepositoryOptions,
    forms: Vec<FormRecord>,
    draft: FormRecord,
    pending: BTreeSet<Blob>,
    restore_issues: Vec<Error>,
    observers: Observers,
}

impl<S: KeyValueStore> FormRepository<S> {
    /// Restore state from `store`, or start empty
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the store cannot be read at all.
    /// Unparseable contents are not an error (see [`Self::restore_issues`]).
    pub fn open(store: S, options: RepositoryOptions) -> Result<Self> {
        let mut restore_issues = Vec::new();

        let forms = match restore::<Vec<FormRecord>, _>(&store, &options.forms_key)? {
            Restored::Found(forms) => dedupe(forms, &options.forms_key),
            Restored::Missing => Vec::new(),
            Restored::Malformed(err) => {
                restore_issues.push(err);
                Vec::new()
            }
        };

        let draft = match restore::<FormRecord, _>(&store, &options.draft_key)? {
            Restored::Found(draft) => draft,
            Restored::Missing => FormRecord::new(),
            Restored::Malformed(err) => {
                restore_issues.push(err);
                FormRecord::new()
            }
        };

        info!(
            target: "intake::repo",
            forms = forms.len(),
            draft = %draft.id,
            issues = restore_issues.len(),
            "Form repository opened"
        );

        Ok(FormRepository {
            store,
            options,
            forms,
            draft,
            pending: BTreeSet::new(),
            restore_issues,
            observers: Observers::default(),
        })
    }

    // ========== Reads ==========

    /// All saved forms, in storage order
    pub fn forms(&self) -> &[FormRecord] {
        &self.forms
    }

    /// The form being edited
    pub fn current_draft(&self) -> &FormRecord {
        &self.draft
    }

    /// Number of saved forms
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether no form has been saved
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Saved form with the given id, if any
    pub fn get_by_id(&self, id: &FormId) -> Option<&FormRecord> {
        self.forms.iter().find(|f| f.id == *id)
    }

    /// Problems found while restoring; each one caused a fallback to empty
    /// or fresh state
    pub fn restore_issues(&self) -> &[Error] {
        &self.restore_issues
    }

    /// Store keys whose last write failed
    pub fn pending_writes(&self) -> Vec<&str> {
        self.pending.iter().map(|b| self.key(*b)).collect()
    }

    /// Whether the store holds exactly what memory holds
    pub fn is_durable(&self) -> bool {
        self.pending.is_empty()
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store keys in use
    pub fn options(&self) -> &RepositoryOptions {
        &self.options
    }

    // ========== Draft Operations ==========

    /// Merge `partial` into the draft's fields
    ///
    /// Keys in `partial` overwrite, all other fields are untouched. No
    /// validation is performed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the draft could not be written; the
    /// merge is kept in memory.
    pub fn update_current_draft<I, K, V>(&mut self, partial: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let partial: Fields = partial
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        debug!(target: "intake::repo", draft = %self.draft.id, fields = partial.len(), "Updating draft");
        self.draft.merge_fields(partial);
        self.notify(ChangeEvent::DraftUpdated {
            id: self.draft.id.clone(),
        });
        self.persist(Blob::Draft)
    }

    /// Upsert a snapshot of the draft into the saved forms
    ///
    /// Replaces the saved form with the same id, or appends. Later edits to
    /// the draft do not reach the saved copy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the collection could not be written;
    /// the upsert is kept in memory.
    pub fn save_current_draft(&mut self) -> Result<FormId> {
        let snapshot = self.draft.clone();
        let id = snapshot.id.clone();
        match self.forms.iter_mut().find(|f| f.id == id) {
            Some(existing) => *existing = snapshot,
            None => self.forms.push(snapshot),
        }
        info!(target: "intake::repo", id = %id, forms = self.forms.len(), "Form saved");
        self.notify(ChangeEvent::FormSaved { id: id.clone() });
        self.persist(Blob::Forms)?;
        Ok(id)
    }

    /// Replace the draft with a blank record, discarding unsaved edits
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the new draft could not be written.
    pub fn create_new_draft(&mut self) -> Result<FormId> {
        let id = self.replace_draft(FormRecord::new());
        self.persist(Blob::Draft)?;
        Ok(id)
    }

    /// Copy a saved form into the draft for editing
    ///
    /// Overwrites the draft, unsaved edits included. Returns `false` and
    /// leaves the draft alone when no form has that id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the draft could not be written.
    pub fn load_into_draft(&mut self, id: &FormId) -> Result<bool> {
        let Some(record) = self.get_by_id(id).cloned() else {
            debug!(target: "intake::repo", id = %id, "Load requested for unknown form");
            return Ok(false);
        };
        self.replace_draft(record);
        self.persist(Blob::Draft)?;
        Ok(true)
    }

    // ========== Deletion ==========

    /// Remove the saved form with `id`
    ///
    /// Missing ids are a no-op. If `id` is the draft's id the draft is
    /// replaced by a blank record, so it never refers to a deleted form.
    /// Returns whether a saved form was removed.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Persistence`] among the blobs written; both
    /// are attempted.
    pub fn delete_by_id(&mut self, id: &FormId) -> Result<bool> {
        let before = self.forms.len();
        self.forms.retain(|f| f.id != *id);
        let removed = self.forms.len() != before;

        let mut touched = Vec::with_capacity(2);
        if removed {
            info!(target: "intake::repo", id = %id, "Form deleted");
            self.notify(ChangeEvent::FormDeleted { id: id.clone() });
            touched.push(Blob::Forms);
        }
        if self.draft.id == *id {
            self.replace_draft(FormRecord::new());
            touched.push(Blob::Draft);
        }

        self.persist_all(&touched)?;
        Ok(removed)
    }

    /// Remove every saved form and start a blank draft
    ///
    /// Returns how many forms were removed.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Persistence`] among the blobs written; both
    /// are attempted.
    pub fn delete_all(&mut self) -> Result<usize> {
        let removed = self.forms.len();
        self.forms.clear();
        info!(target: "intake::repo", removed, "All forms deleted");
        self.notify(ChangeEvent::AllDeleted { removed });
        self.replace_draft(FormRecord::new());
        self.persist_all(&[Blob::Forms, Blob::Draft])?;
        Ok(removed)
    }

    // ========== Durability ==========

    /// Retry every pending write
    ///
    /// # Errors
    ///
    /// Returns the first failure; blobs still failing stay pending.
    pub fn flush(&mut self) -> Result<()> {
        let pending: Vec<Blob> = self.pending.iter().copied().collect();
        if !pending.is_empty() {
            debug!(target: "intake::repo", pending = pending.len(), "Flushing pending writes");
        }
        self.persist_all(&pending)
    }

    // ========== Observation ==========

    /// Call `callback` after every change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.observers.subscribe(Box::new(callback))
    }

    /// Stop calling a callback; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ========== Internals ==========

    fn key(&self, blob: Blob) -> &str {
        match blob {
            Blob::Forms => &self.options.forms_key,
            Blob::Draft => &self.options.draft_key,
        }
    }

    fn notify(&mut self, event: ChangeEvent) {
        self.observers.notify(&event);
    }

    fn replace_draft(&mut self, draft: FormRecord) -> FormId {
        self.draft = draft;
        let id = self.draft.id.clone();
        debug!(target: "intake::repo", draft = %id, "Draft replaced");
        self.notify(ChangeEvent::DraftReplaced { id: id.clone() });
        id
    }

    fn encode(&self, blob: Blob) -> Result<String> {
        let encoded = match blob {
            Blob::Forms => serde_json::to_string(&self.forms)?,
            Blob::Draft => serde_json::to_string(&self.draft)?,
        };
        Ok(encoded)
    }

    fn persist(&mut self, blob: Blob) -> Result<()> {
        let written = self.encode(blob).and_then(|encoded| {
            let key = self.key(blob);
            self.store
                .write(key, &encoded)
                .map_err(|e| Error::persistence(key, e))
                .map(|()| encoded.len())
        });
        match written {
            Ok(bytes) => {
                self.pending.remove(&blob);
                debug!(target: "intake::repo", key = self.key(blob), bytes, "Persisted");
                Ok(())
            }
            Err(e) => {
                self.pending.insert(blob);
                warn!(target: "intake::repo", key = self.key(blob), error = %e, "Persist failed, keeping in-memory state");
                Err(e)
            }
        }
    }

    fn persist_all(&mut self, blobs: &[Blob]) -> Result<()> {
        let mut first_err = None;
        for &blob in blobs {
            if let Err(e) = self.persist(blob) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

enum Restored<T> {
    Found(T),
    Missing,
    Malformed(Error),
}

fn restore<T: DeserializeOwned, S: KeyValueStore>(store: &S, key: &str) -> Result<Restored<T>> {
    let Some(raw) = store.read(key).map_err(|e| Error::persistence(key, e))? else {
        return Ok(Restored::Missing);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Restored::Found(value)),
        Err(e) => {
            warn!(target: "intake::repo", key, error = %e, "Persisted state is malformed, starting fresh");
            Ok(Restored::Malformed(Error::MalformedState {
                key: key.to_string(),
                reason: e.to_string(),
            }))
        }
    }
}

/// Keep the first record of every id
fn dedupe(forms: Vec<FormRecord>, key: &str) -> Vec<FormRecord> {
    let mut seen = HashSet::with_capacity(forms.len());
    let total = forms.len();
    let unique: Vec<FormRecord> = forms
        .into_iter()
        .filter(|f| seen.insert(f.id.clone()))
        .collect();
    if unique.len() != total {
        warn!(
            target: "intake::repo",
            key,
            dropped = total - unique.len(),
            "Dropped saved forms with duplicate ids"
        );
    }
    unique
}
