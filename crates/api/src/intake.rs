//! The intake facade

use intake_core::{Error, FieldValue, FormId, FormRecord, Result};
use intake_engine::{
    ChangeEvent, FormRepository, IntakeConfig, RepositoryOptions, SubscriptionId,
    CONFIG_FILE_NAME,
};
use intake_query::{FormDetail, ResponsePage, ResponseQuery};
use intake_stats::StatisticsReport;
use intake_storage::{FileStore, KeyValueStore, MemoryStore};
use std::path::Path;
use tracing::info;

/// Forms, draft, views and statistics behind one handle
pub struct Intake<S: KeyValueStore> {
    repo: FormRepository<S>,
    config: IntakeConfig,
}

impl Intake<FileStore> {
    /// Open a file-backed intake in `dir`
    ///
    /// Creates the directory and a default `intake.toml` when missing, then
    /// restores forms and draft from the JSON files next to it.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created, the config cannot be read
    /// or is invalid, or a stored blob cannot be read.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let store = Self::file_store(dir)?;
        let config_path = dir.join(CONFIG_FILE_NAME);
        IntakeConfig::write_default_if_missing(&config_path)?;
        let config = IntakeConfig::from_file(&config_path)?;
        info!(target: "intake::config", dir = %dir.display(), "Opening intake");
        Self::with_store(store, config)
    }

    /// Open a file-backed intake in `dir` with an explicit configuration
    ///
    /// `config` is written to `intake.toml` so later [`Intake::open`] calls
    /// pick up the same settings.
    pub fn open_with_config(dir: impl AsRef<Path>, config: IntakeConfig) -> Result<Self> {
        config.validate()?;
        let dir = dir.as_ref();
        let store = Self::file_store(dir)?;
        config.write_to_file(&dir.join(CONFIG_FILE_NAME))?;
        Self::with_store(store, config)
    }

    fn file_store(dir: &Path) -> Result<FileStore> {
        FileStore::open(dir).map_err(|e| Error::persistence(dir.display().to_string(), e))
    }
}

impl Intake<MemoryStore> {
    /// In-memory intake with default settings; nothing outlives the value
    pub fn ephemeral() -> Result<Self> {
        Self::with_store(MemoryStore::new(), IntakeConfig::default())
    }
}

impl<S: KeyValueStore> Intake<S> {
    /// Intake over any store
    pub fn with_store(store: S, config: IntakeConfig) -> Result<Self> {
        config.validate()?;
        let repo = FormRepository::open(store, RepositoryOptions::from(&config))?;
        Ok(Intake { repo, config })
    }

    /// Active configuration
    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// The underlying repository, for reads the facade does not wrap
    pub fn repository(&self) -> &FormRepository<S> {
        &self.repo
    }

    // ========== Reads ==========

    /// Saved forms in insertion order
    pub fn forms(&self) -> &[FormRecord] {
        self.repo.forms()
    }

    /// The draft being edited
    pub fn current_draft(&self) -> &FormRecord {
        self.repo.current_draft()
    }

    /// Saved form by id
    pub fn get_by_id(&self, id: &FormId) -> Option<&FormRecord> {
        self.repo.get_by_id(id)
    }

    /// Problems found while restoring, if any
    pub fn restore_issues(&self) -> &[Error] {
        self.repo.restore_issues()
    }

    /// Whether every change has reached the store
    pub fn is_durable(&self) -> bool {
        self.repo.is_durable()
    }

    // ========== Mutations ==========

    /// Merge fields into the draft
    pub fn update_current_draft<I, K, V>(&mut self, partial: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.repo.update_current_draft(partial)
    }

    /// Save a snapshot of the draft
    pub fn save_current_draft(&mut self) -> Result<FormId> {
        self.repo.save_current_draft()
    }

    /// Discard the draft and start a blank one
    pub fn create_new_draft(&mut self) -> Result<FormId> {
        self.repo.create_new_draft()
    }

    /// Edit a saved form; `false` when the id is unknown
    pub fn load_into_draft(&mut self, id: &FormId) -> Result<bool> {
        self.repo.load_into_draft(id)
    }

    /// Delete one form; `false` when the id is unknown
    pub fn delete_by_id(&mut self, id: &FormId) -> Result<bool> {
        self.repo.delete_by_id(id)
    }

    /// Delete every form and reset the draft
    pub fn delete_all(&mut self) -> Result<usize> {
        self.repo.delete_all()
    }

    /// Retry writes that failed earlier
    pub fn flush(&mut self) -> Result<()> {
        self.repo.flush()
    }

    // ========== Views ==========

    /// Table state with the configured page size
    pub fn new_query(&self) -> ResponseQuery {
        ResponseQuery::new(self.config.page_size)
    }

    /// One page of the response table
    pub fn responses(&self, query: &ResponseQuery) -> ResponsePage {
        query.run(self.repo.forms(), &self.config.fields)
    }

    /// Detail view of a saved form
    pub fn detail(&self, id: &FormId) -> Option<FormDetail> {
        self.repo
            .get_by_id(id)
            .map(|record| FormDetail::from_record(record, &self.config.fields))
    }

    /// Charts over every saved form
    pub fn statistics(&self) -> StatisticsReport {
        StatisticsReport::build(self.repo.forms(), &self.config.fields)
    }

    // ========== Observation ==========

    /// Call `callback` after every change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.repo.subscribe(callback)
    }

    /// Stop calling a callback
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.repo.unsubscribe(id)
    }
}

impl<S: KeyValueStore> std::fmt::Debug for Intake<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Intake")
            .field("forms", &self.repo.len())
            .field("draft", &self.repo.current_draft().id)
            .field("config", &self.config)
            .finish()
    }
}
