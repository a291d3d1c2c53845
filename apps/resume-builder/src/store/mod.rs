//! The resume document store.
//!
//! Owns the single in-memory `ResumeDocument` and the editor's section
//! cursor. Mutations commit synchronously and hand the new snapshot to a
//! per-key `WriteQueue`; readers get `Arc` snapshots and may subscribe to
//! changes.
//!
//! Lifecycle: `Loading -> Ready`, exactly once. Edits made while loading are
//! applied to the placeholder snapshot, remembered, and replayed on top of
//! the loaded document.

pub mod forms;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tokio::sync::{watch, OnceCell};
use tracing::{debug, error, info, warn};

use crate::errors::AppError;
use crate::models::{
    Certification, Education, Language, PersonalInfo, Project, ResumeDocument, ResumeField,
    SectionId, Skill, TemplateId, Theme, WorkExperience,
};
use crate::seed::{seed_document, seed_document_with_defaults};
use crate::storage::{
    KeyValueStorage, PersistedValue, WriteQueue, CURRENT_SECTION_KEY, RESUME_DATA_KEY,
};
use crate::validation::is_valid_document;

pub use forms::SectionForm;

enum Phase {
    Loading {
        pending: Vec<ResumeField>,
        section: Option<SectionId>,
    },
    Ready,
}

struct StoreState {
    document: Arc<ResumeDocument>,
    current_section: SectionId,
    phase: Phase,
}

pub struct ResumeStore {
    state: Mutex<StoreState>,
    snapshots: watch::Sender<Arc<ResumeDocument>>,
    document_slot: Arc<PersistedValue<ResumeDocument>>,
    section_slot: Arc<PersistedValue<SectionId>>,
    document_writes: WriteQueue<ResumeDocument>,
    section_writes: WriteQueue<SectionId>,
    loaded: OnceCell<()>,
}

impl ResumeStore {
    /// Creates a store in the loading state. Must be called from within a
    /// Tokio runtime; nothing is read until `load`.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let document_slot = Arc::new(PersistedValue::new(Arc::clone(&storage), RESUME_DATA_KEY));
        let section_slot = Arc::new(PersistedValue::new(storage, CURRENT_SECTION_KEY));
        let placeholder = Arc::new(seed_or_empty());
        let (snapshots, _) = watch::channel(Arc::clone(&placeholder));

        Self {
            state: Mutex::new(StoreState {
                document: placeholder,
                current_section: SectionId::default(),
                phase: Phase::Loading {
                    pending: Vec::new(),
                    section: None,
                },
            }),
            snapshots,
            document_writes: WriteQueue::spawn(Arc::clone(&document_slot)),
            section_writes: WriteQueue::spawn(Arc::clone(&section_slot)),
            document_slot,
            section_slot,
            loaded: OnceCell::new(),
        }
    }

    /// Creates a store and waits for the initial load.
    pub async fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        let store = Self::new(storage);
        store.load().await;
        store
    }

    /// Runs the initial load. Later calls wait for the first one and return.
    pub async fn load(&self) {
        self.loaded.get_or_init(|| self.load_once()).await;
    }

    async fn load_once(&self) {
        let loaded = match self.document_slot.load().await {
            Some(bytes) => decode_document(&bytes),
            None => {
                info!("No saved resume found, starting from sample data");
                Decoded::Rejected
            }
        };
        let saved_section = match self.section_slot.load().await {
            Some(bytes) => decode_section(&bytes),
            None => None,
        };
        // Bytes that passed the structural check but still did not decode are
        // left in storage rather than replaced by the sample.
        let (base, keep_stored) = match loaded {
            Decoded::Document(document) => (document, false),
            Decoded::Rejected => (seed_or_empty(), false),
            Decoded::Undecodable => (seed_or_empty(), true),
        };

        let document = {
            let mut guard = self.lock();
            let state = &mut *guard;
            let (pending, section) = match std::mem::replace(&mut state.phase, Phase::Ready) {
                Phase::Loading { pending, section } => (pending, section),
                Phase::Ready => (Vec::new(), None),
            };

            if !pending.is_empty() {
                debug!("Replaying {} edits made while loading", pending.len());
            }
            let edited = !pending.is_empty();
            let document = Arc::new(pending.into_iter().fold(base, ResumeDocument::with));
            state.document = Arc::clone(&document);

            match (section, saved_section) {
                (Some(section), _) => {
                    state.current_section = section;
                    self.section_writes.save(Arc::new(section));
                }
                (None, Some(saved)) => state.current_section = saved,
                (None, None) => {}
            }

            if keep_stored && !edited {
                warn!("Keeping the saved resume untouched until the next edit");
            } else {
                self.document_writes.save(Arc::clone(&document));
            }
            document
        };

        self.snapshots.send_replace(document);
        info!("Resume data loaded");
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.lock().phase, Phase::Loading { .. })
    }

    /// Current document snapshot.
    pub fn document(&self) -> Arc<ResumeDocument> {
        Arc::clone(&self.lock().document)
    }

    pub fn current_section(&self) -> SectionId {
        self.lock().current_section
    }

    /// Receives every committed snapshot, starting with the current one.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ResumeDocument>> {
        self.snapshots.subscribe()
    }

    pub fn set_current_section(&self, section: SectionId) {
        let mut guard = self.lock();
        let state = &mut *guard;
        state.current_section = section;
        match &mut state.phase {
            Phase::Loading { section: queued, .. } => *queued = Some(section),
            Phase::Ready => {
                self.section_writes.save(Arc::new(section));
            }
        }
    }

    pub fn set_personal_info(&self, personal_info: PersonalInfo) -> Arc<ResumeDocument> {
        self.apply(ResumeField::PersonalInfo(personal_info))
    }

    pub fn set_summary(&self, summary: impl Into<String>) -> Arc<ResumeDocument> {
        self.apply(ResumeField::Summary(summary.into()))
    }

    pub fn set_skills(&self, skills: Vec<Skill>) -> Arc<ResumeDocument> {
        self.apply(ResumeField::Skills(skills))
    }

    pub fn set_experiences(&self, experiences: Vec<WorkExperience>) -> Arc<ResumeDocument> {
        self.apply(ResumeField::Experiences(experiences))
    }

    pub fn set_education(&self, education: Vec<Education>) -> Arc<ResumeDocument> {
        self.apply(ResumeField::Education(education))
    }

    pub fn set_projects(&self, projects: Vec<Project>) -> Arc<ResumeDocument> {
        self.apply(ResumeField::Projects(projects))
    }

    pub fn set_certifications(&self, certifications: Vec<Certification>) -> Arc<ResumeDocument> {
        self.apply(ResumeField::Certifications(certifications))
    }

    pub fn set_languages(&self, languages: Vec<Language>) -> Arc<ResumeDocument> {
        self.apply(ResumeField::Languages(languages))
    }

    pub fn set_theme(&self, theme: Theme) -> Arc<ResumeDocument> {
        self.apply(ResumeField::Theme(theme))
    }

    pub fn set_template(&self, template: TemplateId) -> Arc<ResumeDocument> {
        self.apply(ResumeField::Template(template))
    }

    /// Replaces one field and queues a save of the whole document.
    fn apply(&self, field: ResumeField) -> Arc<ResumeDocument> {
        let next = {
            let mut guard = self.lock();
            let state = &mut *guard;
            let key = field.key();

            let next = match &mut state.phase {
                Phase::Loading { pending, .. } => {
                    pending.push(field.clone());
                    Arc::new(state.document.as_ref().clone().with(field))
                }
                Phase::Ready => {
                    let next = Arc::new(state.document.as_ref().clone().with(field));
                    // Enqueued under the lock so queue order matches commit order.
                    self.document_writes.save(Arc::clone(&next));
                    next
                }
            };
            state.document = Arc::clone(&next);
            debug!("Updated '{key}'");
            next
        };

        self.snapshots.send_replace(Arc::clone(&next));
        next
    }

    /// Clears saved data and restarts from the sample resume, with any
    /// missing list field defaulted to an empty list.
    pub async fn reset_to_seed(&self) -> Arc<ResumeDocument> {
        self.reset_with(seed_document_with_defaults).await
    }

    /// Clears saved data and restarts from the sample resume as-is.
    pub async fn force_reload_seed(&self) -> Arc<ResumeDocument> {
        let document = self.reset_with(seed_document).await;
        info!("Sample data reloaded");
        document
    }

    async fn reset_with(
        &self,
        seed: fn() -> Result<ResumeDocument, AppError>,
    ) -> Arc<ResumeDocument> {
        self.load().await;

        let document = match self.clear_saved(seed).await {
            Ok(document) => document,
            Err(e) => {
                error!("Failed to reset resume data, starting empty: {e}");
                ResumeDocument::default()
            }
        };

        let document = self.commit(document);
        if let Err(e) = self.document_writes.flush().await {
            error!("Failed to save reset resume data: {e}");
        }
        document
    }

    async fn clear_saved(
        &self,
        seed: fn() -> Result<ResumeDocument, AppError>,
    ) -> Result<ResumeDocument, AppError> {
        self.document_writes.remove();
        self.document_writes.flush().await?;
        seed()
    }

    fn commit(&self, document: ResumeDocument) -> Arc<ResumeDocument> {
        let document = Arc::new(document);
        {
            let mut state = self.lock();
            state.document = Arc::clone(&document);
            self.document_writes.save(Arc::clone(&document));
        }
        self.snapshots.send_replace(Arc::clone(&document));
        document
    }

    /// Waits until every queued write has settled. Returns the error of the
    /// last write per key if it failed.
    pub async fn flush(&self) -> Result<(), AppError> {
        self.document_writes.flush().await?;
        self.section_writes.flush().await
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Outcome of reading the saved document.
enum Decoded {
    Document(ResumeDocument),
    /// Missing, not JSON, or failed the structural check: replaced by the sample.
    Rejected,
    /// Structurally valid but not readable as a document.
    Undecodable,
}

fn decode_document(bytes: &[u8]) -> Decoded {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!("Saved resume is not valid JSON, using sample data: {e}");
            return Decoded::Rejected;
        }
    };

    if !is_valid_document(&value) {
        warn!("Invalid resume data structure detected, using sample data");
        return Decoded::Rejected;
    }

    match serde_json::from_value(value) {
        Ok(document) => Decoded::Document(document),
        Err(e) => {
            error!("Saved resume could not be decoded, showing sample data: {e}");
            Decoded::Undecodable
        }
    }
}

fn decode_section(bytes: &[u8]) -> Option<SectionId> {
    match serde_json::from_slice(bytes) {
        Ok(section) => Some(section),
        Err(e) => {
            warn!("Ignoring saved section: {e}");
            None
        }
    }
}

fn seed_or_empty() -> ResumeDocument {
    seed_document().unwrap_or_else(|e| {
        error!("Sample data unavailable, starting empty: {e}");
        ResumeDocument::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillCategory;
    use crate::storage::MemoryStorage;
    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Semaphore;

    fn seed() -> ResumeDocument {
        seed_document().unwrap()
    }

    fn persisted(doc: &ResumeDocument) -> Arc<MemoryStorage> {
        Arc::new(MemoryStorage::with_entry(
            RESUME_DATA_KEY,
            serde_json::to_vec(doc).unwrap(),
        ))
    }

    async fn stored_document(storage: &dyn KeyValueStorage) -> Option<ResumeDocument> {
        let bytes = storage.get(RESUME_DATA_KEY).await.unwrap()?;
        Some(serde_json::from_slice(&bytes).unwrap())
    }

    /// Blocks reads until released.
    struct SlowReadStorage {
        inner: MemoryStorage,
        gate: Semaphore,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl KeyValueStorage for SlowReadStorage {
        async fn get(&self, key: &str) -> Result<Option<Bytes>, AppError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.gate.acquire().await.unwrap().forget();
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: Bytes) -> Result<(), AppError> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), AppError> {
            self.inner.remove(key).await
        }
    }

    struct FailingStorage;

    #[async_trait]
    impl KeyValueStorage for FailingStorage {
        async fn get(&self, _key: &str) -> Result<Option<Bytes>, AppError> {
            Err(std::io::Error::other("storage unavailable").into())
        }

        async fn set(&self, _key: &str, _value: Bytes) -> Result<(), AppError> {
            Err(std::io::Error::other("storage unavailable").into())
        }

        async fn remove(&self, _key: &str) -> Result<(), AppError> {
            Err(std::io::Error::other("storage unavailable").into())
        }
    }

    #[tokio::test]
    async fn test_new_store_is_loading_until_loaded() {
        let store = ResumeStore::new(Arc::new(MemoryStorage::new()));
        assert!(store.is_loading());
        store.load().await;
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_empty_object_loads_seed() {
        let storage = Arc::new(MemoryStorage::with_entry(RESUME_DATA_KEY, "{}"));
        let store = ResumeStore::open(storage).await;

        assert!(!store.is_loading());
        assert_eq!(*store.document(), seed());
    }

    #[tokio::test]
    async fn test_missing_key_loads_seed() {
        let store = ResumeStore::open(Arc::new(MemoryStorage::new())).await;
        assert_eq!(*store.document(), seed());
    }

    #[tokio::test]
    async fn test_malformed_json_loads_seed() {
        let storage = Arc::new(MemoryStorage::with_entry(RESUME_DATA_KEY, "{not json"));
        let store = ResumeStore::open(storage).await;
        assert_eq!(*store.document(), seed());
    }

    /// The sample document as JSON with the summary replaced, so tests can
    /// tell user data from the sample after a load.
    fn user_value() -> Value {
        let mut value = serde_json::to_value(seed()).unwrap();
        value["summary"] = json!("Written by the user");
        value
    }

    fn persisted_value(value: &Value) -> Arc<MemoryStorage> {
        Arc::new(MemoryStorage::with_entry(
            RESUME_DATA_KEY,
            serde_json::to_vec(value).unwrap(),
        ))
    }

    async fn stored_value(storage: &dyn KeyValueStorage) -> Value {
        let bytes = storage.get(RESUME_DATA_KEY).await.unwrap().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_wrongly_typed_summary_is_kept() {
        let mut value = user_value();
        value["summary"] = json!(42);
        let storage = persisted_value(&value);

        let store = ResumeStore::open(storage.clone()).await;
        store.flush().await.unwrap();

        assert_eq!(store.document().summary, "42");
        assert_eq!(store.document().skills, seed().skills);
        assert_eq!(stored_document(storage.as_ref()).await.unwrap().summary, "42");
    }

    #[tokio::test]
    async fn test_null_scalars_keep_user_data() {
        let mut value = user_value();
        value["personalInfo"]["website"] = Value::Null;
        value["experiences"][0]["endDate"] = Value::Null;
        let storage = persisted_value(&value);

        let store = ResumeStore::open(storage.clone()).await;
        store.flush().await.unwrap();

        let doc = store.document();
        assert_eq!(doc.summary, "Written by the user");
        assert_eq!(doc.personal_info.website, "");
        assert_eq!(doc.personal_info.full_name, seed().personal_info.full_name);
        assert_eq!(doc.experiences[0].end_date, "");

        let stored = stored_document(storage.as_ref()).await.unwrap();
        assert_eq!(stored, *doc);
    }

    #[tokio::test]
    async fn test_unknown_template_is_kept_and_renders_modern() {
        let mut value = user_value();
        value["template"] = json!("executive");
        let storage = persisted_value(&value);

        let store = ResumeStore::open(storage.clone()).await;
        store.flush().await.unwrap();

        let doc = store.document();
        assert_eq!(doc.summary, "Written by the user");
        assert_eq!(doc.template, TemplateId::Other("executive".to_string()));
        assert_eq!(doc.template.resolve(), TemplateId::Modern);

        let stored = stored_value(storage.as_ref()).await;
        assert_eq!(stored["template"], json!("executive"));
        assert_eq!(stored["summary"], json!("Written by the user"));
    }

    #[tokio::test]
    async fn test_unknown_skill_values_are_kept() {
        let mut value = user_value();
        value["skills"] = json!([
            { "id": "1", "name": "Figma", "category": "design" },
            { "id": "2", "name": "Rust", "category": "technical", "level": "4" }
        ]);
        let storage = persisted_value(&value);

        let store = ResumeStore::open(storage.clone()).await;
        store.flush().await.unwrap();

        let doc = store.document();
        assert_eq!(doc.summary, "Written by the user");
        assert_eq!(doc.skills.len(), 2);
        assert_eq!(doc.skills[0].category, SkillCategory::Other("design".to_string()));
        assert_eq!(doc.skills[1].level, Some(4));

        let stored = stored_value(storage.as_ref()).await;
        assert_eq!(stored["summary"], json!("Written by the user"));
        assert_eq!(stored["skills"][0]["category"], json!("design"));
        assert_eq!(stored["skills"][1]["level"], json!(4));
    }

    #[tokio::test]
    async fn test_non_object_list_items_are_dropped() {
        let mut value = user_value();
        value["skills"] = json!([{ "id": "1", "name": "Rust" }, 42, "loose string", null]);
        let storage = persisted_value(&value);

        let store = ResumeStore::open(storage.clone()).await;
        store.flush().await.unwrap();

        let doc = store.document();
        assert_eq!(doc.summary, "Written by the user");
        assert_eq!(doc.skills.len(), 1);
        assert_eq!(doc.skills[0].name, "Rust");
        assert_eq!(doc.experiences, seed().experiences);

        let stored = stored_document(storage.as_ref()).await.unwrap();
        assert_eq!(stored.summary, "Written by the user");
        assert_eq!(stored.skills, doc.skills);
    }

    #[tokio::test]
    async fn test_valid_saved_document_is_loaded() {
        let saved = ResumeDocument {
            summary: "Saved on device".to_string(),
            ..ResumeDocument::default()
        };
        let store = ResumeStore::open(persisted(&saved)).await;
        assert_eq!(*store.document(), saved);
    }

    #[tokio::test]
    async fn test_partial_list_items_still_load() {
        let mut value = serde_json::to_value(seed()).unwrap();
        value["skills"] = json!([{ "id": "x", "name": "Go" }]);
        let storage = Arc::new(MemoryStorage::with_entry(
            RESUME_DATA_KEY,
            serde_json::to_vec(&value).unwrap(),
        ));

        let store = ResumeStore::open(storage).await;
        let skills = &store.document().skills;
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "Go");
        assert_eq!(skills[0].level, None);
    }

    #[tokio::test]
    async fn test_set_skills_changes_only_skills() {
        let store = ResumeStore::open(Arc::new(MemoryStorage::new())).await;
        let before = store.document();
        let skills = vec![Skill {
            name: "Rust".to_string(),
            category: SkillCategory::Technical,
            level: Some(5),
            ..Skill::blank()
        }];

        let after = store.set_skills(skills.clone());

        assert_eq!(after.skills, skills);
        assert_eq!(*after, before.as_ref().clone().with(ResumeField::Skills(skills)));
        assert_eq!(before.skills, seed().skills);
    }

    #[tokio::test]
    async fn test_rapid_edits_converge_in_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ResumeStore::open(storage.clone()).await;

        for i in 0..50 {
            store.set_summary(format!("draft {i}"));
        }
        store.set_template(TemplateId::Classic);
        store.flush().await.unwrap();

        let reopened = ResumeStore::open(storage).await;
        assert_eq!(reopened.document(), store.document());
        assert_eq!(reopened.document().summary, "draft 49");
        assert_eq!(reopened.document().template, TemplateId::Classic);
    }

    #[tokio::test]
    async fn test_load_persists_seed_on_first_run() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ResumeStore::open(storage.clone()).await;
        store.flush().await.unwrap();
        assert_eq!(stored_document(storage.as_ref()).await, Some(seed()));
    }

    #[tokio::test]
    async fn test_reset_and_force_reload_restore_seed_skills() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ResumeStore::open(storage.clone()).await;

        store.set_skills(Vec::new());
        let reset = store.reset_to_seed().await;
        assert_eq!(reset.skills, seed().skills);

        store.set_skills(Vec::new());
        let reloaded = store.force_reload_seed().await;
        assert_eq!(reloaded.skills, seed().skills);

        store.flush().await.unwrap();
        assert_eq!(stored_document(storage.as_ref()).await, Some(seed()));
    }

    #[tokio::test]
    async fn test_reset_with_failing_storage_yields_empty_document() {
        let store = ResumeStore::open(Arc::new(FailingStorage)).await;
        assert_eq!(*store.document(), seed());

        let reset = store.reset_to_seed().await;
        assert_eq!(*reset, ResumeDocument::default());
    }

    #[tokio::test]
    async fn test_failing_storage_keeps_memory_authoritative() {
        let store = ResumeStore::open(Arc::new(FailingStorage)).await;

        let doc = store.set_summary("kept in memory");
        assert_eq!(doc.summary, "kept in memory");
        assert!(store.flush().await.is_err());
        assert_eq!(store.document().summary, "kept in memory");
    }

    #[tokio::test]
    async fn test_edit_during_load_is_replayed_onto_loaded_document() {
        let saved = ResumeDocument {
            summary: "from disk".to_string(),
            ..seed()
        };
        let storage = Arc::new(SlowReadStorage {
            inner: MemoryStorage::with_entry(RESUME_DATA_KEY, serde_json::to_vec(&saved).unwrap()),
            gate: Semaphore::new(0),
            reads: AtomicUsize::new(0),
        });
        let store = Arc::new(ResumeStore::new(storage.clone()));

        let loader = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.load().await }
        });
        while storage.reads.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        assert!(store.is_loading());
        store.set_template(TemplateId::Classic);
        store.set_current_section(SectionId::Skills);
        assert_eq!(store.document().template, TemplateId::Classic);

        storage.gate.add_permits(10);
        loader.await.unwrap();

        let doc = store.document();
        assert!(!store.is_loading());
        assert_eq!(doc.summary, "from disk");
        assert_eq!(doc.template, TemplateId::Classic);
        assert_eq!(store.current_section(), SectionId::Skills);

        store.flush().await.unwrap();
        let stored = stored_document(&storage.inner).await.unwrap();
        assert_eq!(stored.template, TemplateId::Classic);
    }

    #[tokio::test]
    async fn test_current_section_is_restored() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ResumeStore::open(storage.clone()).await;
        store.set_current_section(SectionId::Certifications);
        store.flush().await.unwrap();

        let reopened = ResumeStore::open(storage).await;
        assert_eq!(reopened.current_section(), SectionId::Certifications);
    }

    #[tokio::test]
    async fn test_corrupt_section_does_not_block_document_load() {
        let saved = ResumeDocument {
            summary: "still loads".to_string(),
            ..seed()
        };
        let storage = persisted(&saved);
        storage
            .set(CURRENT_SECTION_KEY, Bytes::from_static(b"\"nowhere\""))
            .await
            .unwrap();

        let store = ResumeStore::open(storage).await;
        assert_eq!(store.document().summary, "still loads");
        assert_eq!(store.current_section(), SectionId::PersonalInfo);
    }

    #[tokio::test]
    async fn test_subscribers_see_committed_snapshots() {
        let store = ResumeStore::open(Arc::new(MemoryStorage::new())).await;
        let mut rx = store.subscribe();

        store.set_summary("watched");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().summary, "watched");
    }

    #[tokio::test]
    async fn test_load_runs_once() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ResumeStore::open(storage.clone()).await;
        store.set_summary("edited");

        store.load().await;
        assert_eq!(store.document().summary, "edited");
    }
}
