//! Roster Core - in-memory employee roster kernel
//!
//! This crate provides the data structures and operations behind the
//! employee roster console, including:
//! - The `Employee` record and the insertion-ordered `Roster`
//! - CRUD operations over an explicitly owned roster
//! - A `Command` inventory and the pure `apply()` dispatch function
//! - Boundary parsing of raw console text into typed values
//! - Plain-text rendering of records
//! - Structured error and logging facilities

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod parse;
pub mod render;

// Re-export commonly used types
pub use apply::{apply, Outcome};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, Result, RosterError};
pub use model::Employee;
pub use ops::Roster;
pub use parse::MenuChoice;
