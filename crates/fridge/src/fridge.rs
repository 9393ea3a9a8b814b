use mealdeck_shared::{
    Collection, DocumentStore, Session, SyncStatus,
    fridge::{FridgeEntry, key_of},
    write_through,
};
use mealdeck_shopping::ShoppingList;
use serde_json::Value;
use std::collections::HashMap;
use validator::Validate;

use crate::FridgeInput;

/// What the user already has, backed by the `fridge` collection with one
/// document per lower-cased ingredient name.
///
/// Documents stored under any other key (older clients keyed them by display
/// name) are folded into the matching entry on load and emptied on the next
/// write of that entry.
pub struct Fridge<S> {
    store: S,
    entries: Vec<FridgeEntry>,
    legacy_keys: HashMap<String, Vec<String>>,
}

impl<S: DocumentStore> Fridge<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: vec![],
            legacy_keys: HashMap::new(),
        }
    }

    pub fn entries(&self) -> &[FridgeEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&FridgeEntry> {
        let key = key_of(name);
        self.entries.iter().find(|entry| entry.key() == key)
    }

    /// Replaces the inventory with the stored one. Emptied documents are
    /// skipped and documents sharing a merge key are summed into one entry
    /// that keeps the first name and unit.
    pub async fn load(&mut self, session: &Session) -> mealdeck_shared::Result<()> {
        let Some(user_id) = session.user() else {
            self.entries.clear();
            self.legacy_keys.clear();
            return Ok(());
        };

        let documents = self
            .store
            .get_all(user_id, Collection::Fridge)
            .await
            .inspect_err(|e| tracing::error!(user_id, "error loading fridge: {e}"))?;

        let mut entries: Vec<FridgeEntry> = vec![];
        let mut legacy_keys: HashMap<String, Vec<String>> = HashMap::new();

        for (document_key, document) in documents {
            let entry = match serde_json::from_value::<FridgeEntry>(document) {
                Ok(entry) if !entry.name.trim().is_empty() && entry.amount > 0.0 => entry,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(key = %document_key, "skipping unreadable fridge entry: {e}");
                    continue;
                }
            };

            let key = entry.key();
            if document_key != key {
                legacy_keys.entry(key.clone()).or_default().push(document_key);
            }

            match entries.iter_mut().find(|existing| existing.key() == key) {
                Some(existing) => existing.amount += entry.amount,
                _ => entries.push(entry),
            }
        }

        self.entries = entries;
        self.legacy_keys = legacy_keys;

        Ok(())
    }

    /// Adds stock, merging into an existing entry with the same name in any
    /// casing. A merge keeps the existing display name and unit.
    pub async fn add_or_merge(
        &mut self,
        session: &Session,
        input: FridgeInput,
    ) -> mealdeck_shared::Result<SyncStatus> {
        input.validate()?;

        let key = key_of(&input.name);
        let entry = match self.entries.iter_mut().find(|entry| entry.key() == key) {
            Some(entry) => {
                entry.amount += input.amount;
                entry.clone()
            }
            _ => {
                let entry = FridgeEntry::new(input.name, input.amount, input.unit);
                self.entries.push(entry.clone());
                entry
            }
        };

        tracing::debug!(name = %entry.name, amount = entry.amount, "fridge stocked");

        Ok(self.write(session, &key, serde_json::to_value(&entry)?).await)
    }

    /// [`add_or_merge`](Self::add_or_merge), then takes the added amount off
    /// the matching shopping entry once.
    pub async fn stock(
        &mut self,
        session: &Session,
        input: FridgeInput,
        shopping: &mut ShoppingList,
    ) -> mealdeck_shared::Result<SyncStatus> {
        let name = input.name.clone();
        let amount = input.amount;
        let status = self.add_or_merge(session, input).await?;
        shopping.deduct(&name, amount);

        Ok(status)
    }

    /// Changes the amount by `delta`, clamped at zero. An entry reaching zero
    /// disappears and its document is overwritten with `{}`.
    pub async fn adjust(&mut self, session: &Session, name: &str, delta: f64) -> SyncStatus {
        if !delta.is_finite() || delta == 0.0 {
            return SyncStatus::Skipped;
        }

        let key = key_of(name);
        let Some(index) = self.entries.iter().position(|entry| entry.key() == key) else {
            return SyncStatus::Skipped;
        };

        let entry = &mut self.entries[index];
        entry.amount = (entry.amount + delta).max(0.0);

        let document = if entry.amount > 0.0 {
            match serde_json::to_value(&*entry) {
                Ok(document) => document,
                Err(e) => return SyncStatus::Failed(e.to_string()),
            }
        } else {
            self.entries.remove(index);
            Value::Object(Default::default())
        };

        self.write(session, &key, document).await
    }

    /// Takes `amount` out. Only positive amounts are accepted.
    pub async fn remove(&mut self, session: &Session, name: &str, amount: f64) -> SyncStatus {
        if amount.is_nan() || amount <= 0.0 {
            return SyncStatus::Skipped;
        }

        self.adjust(session, name, -amount).await
    }

    /// Entries whose name contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&FridgeEntry> {
        let term = term.trim().to_lowercase();

        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Writes the entry under its merge key, then empties the legacy
    /// documents folded into it so they are not summed in again.
    async fn write(&mut self, session: &Session, key: &str, document: Value) -> SyncStatus {
        let status = write_through(&self.store, session, Collection::Fridge, key, document).await;
        if !status.is_saved() {
            return status;
        }

        let Some(legacy) = self.legacy_keys.remove(key) else {
            return status;
        };

        let mut result = status;
        let mut pending = vec![];
        for document_key in legacy {
            let empty = Value::Object(Default::default());
            let status =
                write_through(&self.store, session, Collection::Fridge, &document_key, empty).await;
            if status.is_failed() {
                pending.push(document_key);
                result = status;
            }
        }

        if !pending.is_empty() {
            self.legacy_keys.insert(key.to_owned(), pending);
        }

        result
    }
}
