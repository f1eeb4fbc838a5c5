//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-collection data access contract.
//! - Isolate SQLite and payload-codec details from the service layer.
//!
//! # Invariants
//! - Repository reads reject invalid persisted state with `InvalidData`.
//! - Repository APIs expose semantic readiness errors in addition to DB
//!   transport errors.

pub mod collection_repo;
