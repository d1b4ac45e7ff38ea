//! Command types representing every roster operation
//!
//! This module defines the command inventory that serves as the entry point
//! for functional-boundary operations via the `apply()` function.

/// Command enum representing the five roster operations
///
/// Commands are processed by the `apply()` function, which takes ownership of
/// the current roster, executes the command, and hands the roster back.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a new record (duplicate ids allowed)
    Add {
        id: i64,
        name: String,
        salary: f64,
        department: String,
    },

    /// List all records in insertion order
    ListAll,

    /// Look up the first record with the given id
    Find { id: i64 },

    /// Overwrite name, salary and department of the first record with the id
    Update {
        id: i64,
        name: String,
        salary: f64,
        department: String,
    },

    /// Remove every record with the given id
    Delete { id: i64 },
}

impl Command {
    /// Stable operation name used in log events and error context
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add_employee",
            Command::ListAll => "list_employees",
            Command::Find { .. } => "find_employee",
            Command::Update { .. } => "update_employee",
            Command::Delete { .. } => "delete_employees",
        }
    }

    /// The employee id the command targets, if any
    pub fn employee_id(&self) -> Option<i64> {
        match self {
            Command::Add { id, .. }
            | Command::Find { id }
            | Command::Update { id, .. }
            | Command::Delete { id } => Some(*id),
            Command::ListAll => None,
        }
    }
}
