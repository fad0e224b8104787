//! Domain library for the VenTal incubator management console.
//!
//! The two load-bearing components are the [`directory`] module, which owns
//! the in-memory company records for a session, and the [`program`] module,
//! which resolves static program metadata and validates scoring-weight
//! configurations. Everything else is plumbing shared with the API service.

pub mod config;
pub mod directory;
pub mod error;
pub mod program;
pub mod telemetry;
