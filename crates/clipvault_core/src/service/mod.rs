//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and clipboard calls into session-level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod vault_service;
