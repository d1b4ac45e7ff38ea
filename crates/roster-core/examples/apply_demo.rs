//! Apply API Demonstration
//!
//! This example demonstrates the functional-boundary `apply()` API for roster operations.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. State threading (apply hands the roster back)
//! 2. Command-based operations
//! 3. First-match lookups vs. all-match deletes
//! 4. Unchanged state on error

use roster_core::render::render_roster;
use roster_core::{apply, Command, Outcome, Roster};

fn add(id: i64, name: &str, salary: f64, department: &str) -> Command {
    Command::Add {
        id,
        name: name.to_string(),
        salary,
        department: department.to_string(),
    }
}

fn main() {
    println!("=== Roster Apply API Demo ===\n");

    // ===== Part 1: State Threading =====
    println!("## Part 1: State Threading\n");

    let state = Roster::new();
    let (state, _) = apply(state, add(1, "Alice", 50000.0, "Eng"));
    let (state, _) = apply(state, add(2, "Bob", 42000.0, "Ops"));
    let (state, _) = apply(state, add(1, "Alex", 39000.0, "Sales"));
    println!("Added {} records (two share id 1)", state.len());

    // ===== Part 2: First Match Wins =====
    println!("\n## Part 2: Lookups\n");

    let (state, found) = apply(state, Command::Find { id: 1 });
    if let Ok(Outcome::Found(emp)) = found {
        println!("Find(1) -> {}", emp.name);
    }

    // ===== Part 3: Errors Keep State =====
    println!("\n## Part 3: Errors\n");

    let before = state.clone();
    let (state, result) = apply(state, Command::Delete { id: 99 });
    println!("Delete(99) -> {}", result.unwrap_err());
    assert_eq!(state, before);

    // ===== Part 4: Delete Removes All Matches =====
    println!("\n## Part 4: Delete\n");

    let (state, result) = apply(state, Command::Delete { id: 1 });
    if let Ok(Outcome::Deleted { removed, .. }) = result {
        println!("Delete(1) removed {} records", removed);
    }

    print!("{}", render_roster(&state));
}
