//! Core domain logic for ClipVault.
//! This crate is the single source of truth for vault invariants.

pub mod clipboard;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;
pub mod view;

pub use clipboard::{ClipboardError, ClipboardWriter, SystemClipboard};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use notify::{Notice, NoticeKind, TOAST_TTL};
pub use repo::collection_repo::{
    CollectionRepository, RepoError, RepoResult, SqliteCollectionRepository,
};
pub use service::vault_service::{
    CopyOutcome, DeleteOutcome, EditOutcome, VaultError, VaultService,
};
pub use view::list::{render_list, ItemRow, ListSnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
