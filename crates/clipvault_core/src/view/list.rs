//! List view projection.
//!
//! # Responsibility
//! - Project the in-memory collection (plus the transient filter query)
//!   into view-model records a UI layer can render directly.
//! - Keep filtering a visibility-only decision over the rendered rows.
//!
//! # Invariants
//! - Rendering never mutates the collection; rows preserve collection
//!   order and count regardless of the query.
//! - The same collection, query and clock always produce the same
//!   snapshot.

use crate::model::item::{Item, ItemId};
use chrono::{DateTime, Utc};

/// Maximum preview length in Unicode scalar values.
const PREVIEW_MAX_CHARS: usize = 150;

/// View-model record for one rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: ItemId,
    /// Whitespace-normalized, truncated content preview.
    pub preview: String,
    /// Human-relative age label derived from `created_at`.
    pub age: String,
    /// Content length in Unicode scalar values.
    pub char_count: usize,
    /// Whether the current filter query keeps this row visible.
    pub visible: bool,
}

/// Full view-model for the list surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    /// One row per item, in collection order.
    pub rows: Vec<ItemRow>,
    /// Counter label over the whole collection, e.g. `3 items`.
    pub counter: String,
    /// True when the collection itself is empty; the UI renders its
    /// empty-state indicator instead of the list.
    pub is_empty: bool,
}

/// Renders the collection into a list snapshot.
///
/// `now` is passed explicitly so rendering stays deterministic.
pub fn render_list(items: &[Item], query: &str, now: DateTime<Utc>) -> ListSnapshot {
    let rows = items
        .iter()
        .map(|item| ItemRow {
            id: item.id,
            preview: preview_text(&item.content),
            age: relative_age(item.created_at, now),
            char_count: item.content.chars().count(),
            visible: matches_query(item, query),
        })
        .collect();

    ListSnapshot {
        rows,
        counter: counter_label(items.len()),
        is_empty: items.is_empty(),
    }
}

/// Case-insensitive substring visibility check.
///
/// A blank query matches every item.
pub fn matches_query(item: &Item, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.content.to_lowercase().contains(&needle)
}

/// Derives the single-line preview: whitespace runs collapse to one space,
/// then the text is cut at [`PREVIEW_MAX_CHARS`] scalar values.
pub fn preview_text(content: &str) -> String {
    let normalized = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut preview: String = normalized.chars().take(PREVIEW_MAX_CHARS).collect();
    if normalized.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Human-relative age label: `just now`, `Nm ago`, `Nh ago`, `Nd ago`,
/// then an abbreviated month-day date past one week.
pub fn relative_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }
    at.format("%b %-d").to_string()
}

/// Item counter label with singular/plural handling.
pub fn counter_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}
