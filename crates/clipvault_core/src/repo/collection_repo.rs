//! Collection repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and save the full item collection as one structured value under
//!   a single fixed key.
//! - Keep SQL and payload-codec details inside the persistence boundary.
//!
//! # Invariants
//! - Saves rewrite the whole collection; there is no delta persistence.
//! - Read paths must reject invalid persisted state (undecodable payloads,
//!   invalid items, duplicate ids) instead of masking it.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::item::{Item, ItemId};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key under which the whole collection is stored.
const ITEMS_KEY: &str = "clipboard_items";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for collection persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Persisted payload cannot be decoded into a valid collection.
    InvalidData(String),
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Connection is missing a table the repository depends on.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted collection: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for whole-collection persistence.
pub trait CollectionRepository {
    /// Loads the persisted collection; an absent key yields an empty one.
    fn load_collection(&self) -> RepoResult<Vec<Item>>;
    /// Rewrites the persisted collection in full.
    fn save_collection(&self, items: &[Item]) -> RepoResult<()>;
}

/// SQLite-backed collection repository.
pub struct SqliteCollectionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCollectionRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CollectionRepository for SqliteCollectionRepository<'_> {
    fn load_collection(&self) -> RepoResult<Vec<Item>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM vault_kv WHERE key = ?1;",
                [ITEMS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(Vec::new());
        };

        let items: Vec<Item> = serde_json::from_str(&payload)
            .map_err(|err| RepoError::InvalidData(format!("payload is not decodable: {err}")))?;

        let mut seen_ids: HashSet<ItemId> = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()
                .map_err(|err| RepoError::InvalidData(format!("item {}: {err}", item.id)))?;
            if !seen_ids.insert(item.id) {
                return Err(RepoError::InvalidData(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
        }

        Ok(items)
    }

    fn save_collection(&self, items: &[Item]) -> RepoResult<()> {
        let payload = serde_json::to_string(items)
            .map_err(|err| RepoError::InvalidData(format!("payload is not encodable: {err}")))?;

        self.conn.execute(
            "INSERT INTO vault_kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![ITEMS_KEY, payload],
        )?;

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'vault_kv'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists != 1 {
        return Err(RepoError::MissingRequiredTable("vault_kv"));
    }

    Ok(())
}
