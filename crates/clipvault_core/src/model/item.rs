//! Clipboard item domain model.
//!
//! # Responsibility
//! - Define the canonical record for one stored text snippet.
//! - Enforce construction-time validation (non-nil id, non-blank content).
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `content` is stored trimmed and is never blank.
//! - `updated_at` is never earlier than `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a stored item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Validation error for item construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// The nil UUID is reserved and never a valid item id.
    NilId,
    /// `content` is empty after trimming.
    EmptyContent,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be the nil uuid"),
            Self::EmptyContent => write!(f, "content must not be empty"),
        }
    }
}

impl Error for ItemValidationError {}

/// One stored text snippet and its metadata.
///
/// Serialized as camelCase to match the stored collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable id assigned at creation time.
    pub id: ItemId,
    /// Snippet text, trimmed, never blank.
    pub content: String,
    /// Creation timestamp (RFC 3339 on the wire).
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp, refreshed on content replacement.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item with a generated id and current timestamps.
    ///
    /// Content is trimmed before storage; blank content is rejected.
    pub fn new(content: impl Into<String>) -> Result<Self, ItemValidationError> {
        Self::with_id(Uuid::new_v4(), content, Utc::now())
    }

    /// Creates an item with a caller-provided id and creation time.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: ItemId,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ItemValidationError> {
        if id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        let content = normalize_content(&content.into())?;
        Ok(Self {
            id,
            content,
            created_at,
            updated_at: created_at,
        })
    }

    /// Replaces the snippet text and refreshes `updated_at`.
    ///
    /// Returns `Ok(false)` without touching any field when the trimmed
    /// replacement equals the current content, so callers can skip
    /// persistence for no-op edits.
    pub fn replace_content(
        &mut self,
        content: impl Into<String>,
    ) -> Result<bool, ItemValidationError> {
        let content = normalize_content(&content.into())?;
        if content == self.content {
            return Ok(false);
        }
        self.content = content;
        self.updated_at = Utc::now();
        Ok(true)
    }

    /// Re-checks model invariants; used by read paths on persisted data.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        if self.content.trim().is_empty() {
            return Err(ItemValidationError::EmptyContent);
        }
        Ok(())
    }
}

fn normalize_content(raw: &str) -> Result<String, ItemValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ItemValidationError::EmptyContent);
    }
    Ok(trimmed.to_string())
}
