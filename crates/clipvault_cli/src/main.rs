//! Command-line surface over the vault core.
//!
//! One invocation is one session: load the collection, apply the requested
//! operation, persist, render. Notices mirror the success/error toast
//! variants; unknown-id operations print nothing and exit cleanly.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use clipvault_core::db::open_db;
use clipvault_core::view::list::render_list;
use clipvault_core::{
    default_log_level, init_logging, CopyOutcome, DeleteOutcome, EditOutcome, Item, ItemId,
    ListSnapshot, Notice, NoticeKind, SqliteCollectionRepository, SystemClipboard, VaultError,
    VaultService,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "clipvault", version, about = "Local text snippet vault")]
struct Cli {
    /// Vault database file. Defaults to the platform data directory.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable file logging into this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level for file logging (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a new snippet at the head of the vault.
    Add {
        #[arg(required = true)]
        content: Vec<String>,
    },
    /// Render the whole vault.
    List,
    /// Render the vault with a visibility filter applied.
    Search { query: String },
    /// Print one snippet in full.
    Show { id: ItemId },
    /// Write one snippet's content to the system clipboard.
    Copy { id: ItemId },
    /// Replace one snippet's content.
    Edit {
        id: ItemId,
        #[arg(required = true)]
        content: Vec<String>,
    },
    /// Remove one snippet.
    Delete { id: ItemId },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = absolutize(log_dir)?;
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy())
            .map_err(|message| anyhow::anyhow!(message))?;
    }

    let db_path = resolve_db_path(cli.db);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }

    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open vault database at {}", db_path.display()))?;
    let repo = SqliteCollectionRepository::try_new(&conn).context("vault database is not ready")?;
    let mut vault = VaultService::load(repo);

    match cli.command {
        Command::Add { content } => match vault.add(&content.join(" ")) {
            Ok(_) => {
                print_notice(&Notice::success("Added to vault"));
                print_list(&render_list(vault.items(), "", Utc::now()));
            }
            Err(err) => print_notice(&Notice::error(failure_text(&err))),
        },
        Command::List => print_list(&render_list(vault.items(), "", Utc::now())),
        Command::Search { query } => {
            print_list(&render_list(vault.items(), &query, Utc::now()));
        }
        Command::Show { id } => {
            if let Some(item) = vault.get(id) {
                print_item(item);
            }
        }
        Command::Copy { id } => match SystemClipboard::new() {
            Ok(mut clipboard) => match vault.copy(id, &mut clipboard) {
                Ok(CopyOutcome::Copied) => print_notice(&Notice::success("Copied to clipboard")),
                Ok(CopyOutcome::NotFound) => {}
                Err(err) => print_notice(&Notice::error(failure_text(&err))),
            },
            Err(err) => print_notice(&Notice::error(format!("Failed to copy: {err}"))),
        },
        Command::Edit { id, content } => match vault.edit(id, &content.join(" ")) {
            Ok(EditOutcome::Updated) => {
                print_notice(&Notice::success("Item updated"));
                print_list(&render_list(vault.items(), "", Utc::now()));
            }
            Ok(EditOutcome::Unchanged) => {
                print_list(&render_list(vault.items(), "", Utc::now()));
            }
            Ok(EditOutcome::NotFound) => {}
            Err(err) => print_notice(&Notice::error(failure_text(&err))),
        },
        Command::Delete { id } => match vault.delete(id) {
            Ok(DeleteOutcome::Deleted) => {
                print_notice(&Notice::success("Item deleted"));
                print_list(&render_list(vault.items(), "", Utc::now()));
            }
            Ok(DeleteOutcome::NotFound) => {}
            Err(err) => print_notice(&Notice::error(failure_text(&err))),
        },
    }

    Ok(())
}

fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    match dirs::data_local_dir() {
        Some(base) => base.join("clipvault").join("vault.db3"),
        None => PathBuf::from("clipvault.db3"),
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}

fn failure_text(err: &VaultError) -> String {
    match err {
        VaultError::Validation(err) => err.to_string(),
        VaultError::Repo(err) => format!("Failed to save: {err}"),
        VaultError::Clipboard(err) => format!("Failed to copy: {err}"),
    }
}

fn print_notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Success => println!("✓ {}", notice.text),
        NoticeKind::Error => eprintln!("✗ {}", notice.text),
    }
}

fn print_list(snapshot: &ListSnapshot) {
    if snapshot.is_empty {
        println!("Vault is empty. Add your first snippet with `clipvault add <text>`.");
        return;
    }

    for row in snapshot.rows.iter().filter(|row| row.visible) {
        println!(
            "{}  {:>8}  {:>10}  {}",
            row.id,
            row.age,
            format!("{} chars", row.char_count),
            row.preview
        );
    }
    println!("{}", snapshot.counter);
}

fn print_item(item: &Item) {
    println!(
        "{}  created {}  updated {}  {} chars",
        item.id,
        item.created_at.to_rfc3339(),
        item.updated_at.to_rfc3339(),
        item.content.chars().count()
    );
    println!("{}", item.content);
}
