//! Boundary parsing of console input
//!
//! Raw lines typed at the console become typed values here and nowhere else,
//! so the roster operations never see malformed numbers.

use crate::errors::{Result, RosterError};

/// Menu entry selected at the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    DisplayAll,
    Search,
    Update,
    Delete,
    Exit,
    /// Any other integer; reported and re-prompted, never fatal
    Invalid(i64),
}

impl MenuChoice {
    /// Parse a menu line into a choice
    ///
    /// Integers outside `1..=6` are `Invalid`, not errors.
    ///
    /// # Errors
    /// * `InvalidInput` - If the line is not an integer
    pub fn parse(line: &str) -> Result<Self> {
        let n = parse_integer("choice", line)?;
        Ok(Self::from_number(n))
    }

    /// Map a menu number onto a choice
    pub fn from_number(n: i64) -> Self {
        match n {
            1 => MenuChoice::Add,
            2 => MenuChoice::DisplayAll,
            3 => MenuChoice::Search,
            4 => MenuChoice::Update,
            5 => MenuChoice::Delete,
            6 => MenuChoice::Exit,
            other => MenuChoice::Invalid(other),
        }
    }
}

/// Parse an employee id
///
/// # Errors
/// * `InvalidInput` - If the trimmed line is not a signed decimal integer
pub fn parse_id(line: &str) -> Result<i64> {
    parse_integer("id", line)
}

/// Parse a salary
///
/// The sign is not checked; only finite numbers are accepted.
///
/// # Errors
/// * `InvalidInput` - If the trimmed line is not a finite number
pub fn parse_salary(line: &str) -> Result<f64> {
    let trimmed = line.trim();
    match trimmed.parse::<f64>() {
        Ok(salary) if salary.is_finite() => Ok(salary),
        _ => Err(invalid("salary", line)),
    }
}

/// Take a line of free text as typed
///
/// Only the line terminator is removed; surrounding spaces stay and an empty
/// line yields an empty string.
pub fn parse_text(line: &str) -> String {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
        .to_string()
}

fn parse_integer(field: &str, line: &str) -> Result<i64> {
    line.trim().parse::<i64>().map_err(|_| invalid(field, line))
}

fn invalid(field: &str, line: &str) -> RosterError {
    RosterError::InvalidInput {
        field: field.to_string(),
        value: parse_text(line),
    }
}
