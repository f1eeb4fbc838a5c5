//! Vault use-case service: the item store controller.
//!
//! # Responsibility
//! - Own the in-memory ordered collection for the session.
//! - Apply user-initiated mutations and persist the full collection after
//!   each one.
//!
//! # Invariants
//! - The in-memory collection is the source of truth during the session;
//!   new items are prepended (newest first).
//! - After every successful save the persisted collection equals the
//!   in-memory collection. A failed save leaves memory ahead of storage;
//!   there is no rollback and no retry.
//! - Unknown-id operations are no-ops and never persist.

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::model::item::{Item, ItemId, ItemValidationError};
use crate::repo::collection_repo::{CollectionRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for vault use-cases.
#[derive(Debug)]
pub enum VaultError {
    /// Input rejected before any state change.
    Validation(ItemValidationError),
    /// Persistence failure; the in-memory mutation is kept.
    Repo(RepoError),
    /// Clipboard failure; no state change.
    Clipboard(ClipboardError),
}

impl Display for VaultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Clipboard(err) => write!(f, "{err}"),
        }
    }
}

impl Error for VaultError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Clipboard(err) => Some(err),
        }
    }
}

impl From<ItemValidationError> for VaultError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for VaultError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ClipboardError> for VaultError {
    fn from(value: ClipboardError) -> Self {
        Self::Clipboard(value)
    }
}

/// Result of an edit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Content replaced and persisted.
    Updated,
    /// Trimmed content equals the stored content; nothing saved.
    Unchanged,
    /// No item with the given id; nothing saved.
    NotFound,
}

/// Result of a copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Item content written to the clipboard.
    Copied,
    /// No item with the given id; clipboard untouched.
    NotFound,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Item removed and the collection persisted.
    Deleted,
    /// No item with the given id; nothing saved.
    NotFound,
}

/// Session controller over the stored item collection.
pub struct VaultService<R: CollectionRepository> {
    repo: R,
    items: Vec<Item>,
}

impl<R: CollectionRepository> VaultService<R> {
    /// Loads the persisted collection and starts a session over it.
    ///
    /// Any read failure degrades to an empty collection: the session stays
    /// usable and new items can still be added.
    pub fn load(repo: R) -> Self {
        let items = match repo.load_collection() {
            Ok(items) => {
                info!(
                    "event=vault_load module=service status=ok count={}",
                    items.len()
                );
                items
            }
            Err(err) => {
                warn!("event=vault_load module=service status=degraded error={err}");
                Vec::new()
            }
        };
        Self { repo, items }
    }

    /// Items in collection order, newest first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only lookup by id; backs the expanded/detail view.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Validates and stores a new item at the head of the collection.
    ///
    /// Returns the new item's id. A save failure still returns `Err` while
    /// the item stays in memory.
    pub fn add(&mut self, content: &str) -> Result<ItemId, VaultError> {
        let item = Item::new(content)?;
        let id = item.id;
        self.items.insert(0, item);
        self.persist()?;
        Ok(id)
    }

    /// Writes one item's content to the clipboard.
    ///
    /// The only side effect that leaves the storage boundary. Unknown ids
    /// are a no-op.
    pub fn copy(
        &self,
        id: ItemId,
        clipboard: &mut dyn ClipboardWriter,
    ) -> Result<CopyOutcome, VaultError> {
        let Some(item) = self.get(id) else {
            info!("event=vault_copy module=service status=skipped reason=unknown_id");
            return Ok(CopyOutcome::NotFound);
        };
        clipboard.set_text(&item.content)?;
        info!(
            "event=vault_copy module=service status=ok chars={}",
            item.content.chars().count()
        );
        Ok(CopyOutcome::Copied)
    }

    /// Replaces one item's content and persists the collection.
    ///
    /// An edit that does not change the trimmed content skips persistence
    /// and leaves `updated_at` untouched.
    pub fn edit(&mut self, id: ItemId, content: &str) -> Result<EditOutcome, VaultError> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            info!("event=vault_edit module=service status=skipped reason=unknown_id");
            return Ok(EditOutcome::NotFound);
        };

        if !item.replace_content(content)? {
            return Ok(EditOutcome::Unchanged);
        }

        self.persist()?;
        Ok(EditOutcome::Updated)
    }

    /// Removes one item and persists the collection.
    ///
    /// Deleting an id twice is idempotent: the second call is a no-op.
    pub fn delete(&mut self, id: ItemId) -> Result<DeleteOutcome, VaultError> {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            info!("event=vault_delete module=service status=skipped reason=unknown_id");
            return Ok(DeleteOutcome::NotFound);
        };

        self.items.remove(index);
        self.persist()?;
        Ok(DeleteOutcome::Deleted)
    }

    fn persist(&self) -> Result<(), VaultError> {
        match self.repo.save_collection(&self.items) {
            Ok(()) => {
                info!(
                    "event=vault_save module=service status=ok count={}",
                    self.items.len()
                );
                Ok(())
            }
            Err(err) => {
                warn!("event=vault_save module=service status=error error={err}");
                Err(err.into())
            }
        }
    }
}
