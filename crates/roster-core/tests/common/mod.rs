use roster_core::{ops::employee_ops, Command, Roster};

/// Create a new empty Roster for testing
#[allow(dead_code)]
pub fn new_roster() -> Roster {
    Roster::new()
}

/// Build a roster from (id, name) pairs, in order
///
/// Salary and department are derived from the id so records stay
/// distinguishable.
#[allow(dead_code)]
pub fn roster_with(records: &[(i64, &str)]) -> Roster {
    let mut roster = Roster::new();
    for (id, name) in records {
        employee_ops::add_employee(
            &mut roster,
            *id,
            name.to_string(),
            *id as f64 * 1000.0,
            format!("Dept-{}", id),
        );
    }
    roster
}

/// Shorthand for an Add command
#[allow(dead_code)]
pub fn add_cmd(id: i64, name: &str, salary: f64, department: &str) -> Command {
    Command::Add {
        id,
        name: name.to_string(),
        salary,
        department: department.to_string(),
    }
}

/// Shorthand for an Update command
#[allow(dead_code)]
pub fn update_cmd(id: i64, name: &str, salary: f64, department: &str) -> Command {
    Command::Update {
        id,
        name: name.to_string(),
        salary,
        department: department.to_string(),
    }
}

/// Names in roster order
#[allow(dead_code)]
pub fn names(roster: &Roster) -> Vec<String> {
    roster.iter().map(|e| e.name.clone()).collect()
}
