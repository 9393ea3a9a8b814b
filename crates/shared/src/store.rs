use serde_json::Value;
use std::{
    collections::BTreeMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use tokio::sync::RwLock;

use crate::Session;

/// Per-user document collections.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub enum Collection {
    #[strum(serialize = "meals")]
    Meals,
    #[strum(serialize = "mealPlans")]
    MealPlans,
    #[strum(serialize = "fridge")]
    Fridge,
}

/// Remote document store. Writes are full overwrites, never patches.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(
        &self,
        user_id: &str,
        collection: Collection,
        key: &str,
    ) -> crate::Result<Option<Value>>;

    async fn get_all(
        &self,
        user_id: &str,
        collection: Collection,
    ) -> crate::Result<Vec<(String, Value)>>;

    async fn set(
        &self,
        user_id: &str,
        collection: Collection,
        key: &str,
        document: Value,
    ) -> crate::Result<()>;
}

#[async_trait::async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for Arc<T> {
    async fn get(
        &self,
        user_id: &str,
        collection: Collection,
        key: &str,
    ) -> crate::Result<Option<Value>> {
        (**self).get(user_id, collection, key).await
    }

    async fn get_all(
        &self,
        user_id: &str,
        collection: Collection,
    ) -> crate::Result<Vec<(String, Value)>> {
        (**self).get_all(user_id, collection).await
    }

    async fn set(
        &self,
        user_id: &str,
        collection: Collection,
        key: &str,
        document: Value,
    ) -> crate::Result<()> {
        (**self).set(user_id, collection, key, document).await
    }
}

/// Outcome of pushing local state to the store. `Skipped` means nothing was
/// written, either for lack of a user or because nothing changed.
///
/// Local state is always mutated before the write, so a `Failed` status
/// means the session is ahead of the store until the next successful write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    Saved,
    Skipped,
    Failed(String),
}

impl SyncStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SyncStatus::Saved)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SyncStatus::Skipped)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SyncStatus::Failed(_))
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStatus::Saved => f.write_str("saved"),
            SyncStatus::Skipped => f.write_str("not saved"),
            SyncStatus::Failed(reason) => write!(f, "save failed: {reason}"),
        }
    }
}

/// Writes `document` for the session's user, logging instead of failing.
pub async fn write_through<S: DocumentStore + ?Sized>(
    store: &S,
    session: &Session,
    collection: Collection,
    key: &str,
    document: Value,
) -> SyncStatus {
    let Some(user_id) = session.user() else {
        tracing::warn!(%collection, key, "no user in session, write skipped");
        return SyncStatus::Skipped;
    };

    match store.set(user_id, collection, key, document).await {
        Ok(_) => {
            tracing::debug!(user_id, %collection, key, "document saved");
            SyncStatus::Saved
        }
        Err(e) => {
            tracing::error!(user_id, %collection, key, "error saving document: {e}");
            SyncStatus::Failed(e.to_string())
        }
    }
}

type Documents = BTreeMap<(String, Collection, String), Value>;

/// Process-local store, handy for tests and offline runs.
#[derive(Clone, Default)]
pub struct MemoryStore {
    documents: Arc<RwLock<Documents>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    fn check_read(&self) -> crate::Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(crate::Error::Store("memory store read failure".to_owned()));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn get(
        &self,
        user_id: &str,
        collection: Collection,
        key: &str,
    ) -> crate::Result<Option<Value>> {
        self.check_read()?;
        let documents = self.documents.read().await;

        Ok(documents
            .get(&(user_id.to_owned(), collection, key.to_owned()))
            .cloned())
    }

    async fn get_all(
        &self,
        user_id: &str,
        collection: Collection,
    ) -> crate::Result<Vec<(String, Value)>> {
        self.check_read()?;
        let documents = self.documents.read().await;

        Ok(documents
            .iter()
            .filter(|((user, c, _), _)| user == user_id && *c == collection)
            .map(|((_, _, key), value)| (key.to_owned(), value.clone()))
            .collect())
    }

    async fn set(
        &self,
        user_id: &str,
        collection: Collection,
        key: &str,
        document: Value,
    ) -> crate::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(crate::Error::Store("memory store write failure".to_owned()));
        }

        self.documents
            .write()
            .await
            .insert((user_id.to_owned(), collection, key.to_owned()), document);

        Ok(())
    }
}
