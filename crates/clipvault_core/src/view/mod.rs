//! View-model projection for UI layers.
//!
//! # Responsibility
//! - Turn the collection plus the transient filter query into declarative
//!   render records; the concrete UI is an external consumer.

pub mod list;
