//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry point for
//! roster mutations and queries in the functional-boundary style.
//!
//! ## Contract
//!
//! - **Owned state**: the roster is passed in by value and always handed back,
//!   whether the command succeeded or not
//! - **Unchanged on error**: a failed command leaves the roster exactly as it was
//! - **No panics, no console I/O**: failures are typed `RosterError`s
//!
//! ## Example
//!
//! ```
//! use roster_core::{apply, Command, Outcome, Roster};
//!
//! let state = Roster::new();
//! let cmd = Command::Add {
//!     id: 1,
//!     name: "Alice".to_string(),
//!     salary: 50000.0,
//!     department: "Eng".to_string(),
//! };
//!
//! let (state, outcome) = apply(state, cmd);
//! assert!(matches!(outcome, Ok(Outcome::Added(_))));
//! assert_eq!(state.len(), 1);
//! ```

use std::time::Instant;

use crate::commands::Command;
use crate::errors::Result;
use crate::model::Employee;
use crate::ops::{employee_ops, Roster};
use crate::{log_op_end, log_op_error, log_op_start};

/// Successful result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The appended record
    Added(Employee),
    /// Every record, in insertion order
    Listed(Vec<Employee>),
    /// The first record carrying the requested id
    Found(Employee),
    /// The record after its fields were overwritten
    Updated(Employee),
    /// How many records carrying `id` were removed
    Deleted { id: i64, removed: usize },
}

impl Outcome {
    /// Short label used in log events
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Added(_) => "added",
            Outcome::Listed(_) => "listed",
            Outcome::Found(_) => "found",
            Outcome::Updated(_) => "updated",
            Outcome::Deleted { .. } => "deleted",
        }
    }
}

/// Apply a command to a roster, returning the roster and the outcome
///
/// This is the functional-boundary entry point for every roster operation.
/// It takes ownership of the current state, executes the command and returns
/// the (possibly modified) state together with the command's result.
///
/// # Arguments
///
/// * `state` - Current roster (ownership transferred)
/// * `cmd` - Command to execute
///
/// # Returns
///
/// * `(Roster, Ok(Outcome))` - State after the command and its outcome
/// * `(Roster, Err(RosterError))` - Unchanged state and the reason
///
/// # Example
///
/// ```
/// use roster_core::{apply, Command, Roster, RosterError};
///
/// let (state, result) = apply(Roster::new(), Command::Find { id: 3 });
/// assert_eq!(result, Err(RosterError::EmployeeNotFound { id: 3 }));
/// assert!(state.is_empty());
/// ```
pub fn apply(mut state: Roster, cmd: Command) -> (Roster, Result<Outcome>) {
    let op = cmd.op_name();
    let employee_id = cmd.employee_id();
    let started = Instant::now();

    // `None` (list_employees) leaves the field out of the event
    log_op_start!(op, employee_id = employee_id, roster_len = state.len());

    let result = dispatch(&mut state, cmd);
    let duration_ms = started.elapsed().as_millis() as u64;

    match &result {
        Ok(Outcome::Deleted { removed, .. }) => {
            log_op_end!(
                op,
                duration_ms = duration_ms,
                employee_id = employee_id,
                roster_len = state.len(),
                removed = *removed,
            );
        }
        Ok(outcome) => {
            log_op_end!(
                op,
                duration_ms = duration_ms,
                employee_id = employee_id,
                roster_len = state.len(),
                outcome = outcome.label(),
            );
        }
        Err(err) => {
            log_op_error!(
                op,
                err.clone(),
                duration_ms = duration_ms,
                employee_id = employee_id,
            );
        }
    }

    (state, result)
}

fn dispatch(state: &mut Roster, cmd: Command) -> Result<Outcome> {
    match cmd {
        Command::Add {
            id,
            name,
            salary,
            department,
        } => {
            let added = employee_ops::add_employee(state, id, name, salary, department);
            Ok(Outcome::Added(added.clone()))
        }

        Command::ListAll => {
            let listed = employee_ops::list_employees(state)?.cloned().collect();
            Ok(Outcome::Listed(listed))
        }

        Command::Find { id } => {
            let found = employee_ops::find_employee(state, id)?;
            Ok(Outcome::Found(found.clone()))
        }

        Command::Update {
            id,
            name,
            salary,
            department,
        } => {
            let updated = employee_ops::update_employee(state, id, name, salary, department)?;
            Ok(Outcome::Updated(updated.clone()))
        }

        Command::Delete { id } => {
            let removed = employee_ops::delete_employees(state, id)?;
            Ok(Outcome::Deleted { id, removed })
        }
    }
}
