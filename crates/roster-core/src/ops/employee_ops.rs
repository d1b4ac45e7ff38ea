use super::store::Roster;
use crate::errors::{Result, RosterError};
use crate::model::Employee;

/// Add a new Employee to the end of the roster
///
/// Always succeeds: an existing record with the same id is not replaced and
/// not rejected, the new record is simply appended after it.
///
/// # Returns
/// A reference to the freshly appended record
pub fn add_employee(
    roster: &mut Roster,
    id: i64,
    name: String,
    salary: f64,
    department: String,
) -> &Employee {
    roster.push_employee(Employee::new(id, name, salary, department));
    &roster.employees[roster.employees.len() - 1]
}

/// List every Employee in insertion order
///
/// The returned iterator is lazy; nothing is copied.
///
/// # Errors
/// * `EmptyRoster` - If the roster holds no records
pub fn list_employees(roster: &Roster) -> Result<std::slice::Iter<'_, Employee>> {
    if roster.is_empty() {
        return Err(RosterError::EmptyRoster);
    }
    Ok(roster.iter())
}

/// Find the first Employee (in insertion order) with the given id
///
/// # Errors
/// * `EmployeeNotFound` - If no record carries the id
pub fn find_employee(roster: &Roster, id: i64) -> Result<&Employee> {
    roster.get_employee(id)
}

/// Overwrite name, salary and department of the first Employee with `id`
///
/// All three fields are replaced; the id itself never changes. Later records
/// sharing the id are left as they are.
///
/// # Errors
/// * `EmployeeNotFound` - If no record carries the id (roster untouched)
pub fn update_employee(
    roster: &mut Roster,
    id: i64,
    name: String,
    salary: f64,
    department: String,
) -> Result<&Employee> {
    let employee = roster.get_employee_mut(id)?;
    employee.overwrite(name, salary, department);
    Ok(&*employee)
}

/// Delete every Employee with the given id
///
/// Unlike lookups, deletion is not limited to the first match: all records
/// carrying the id are removed. Survivors keep their relative order.
///
/// # Returns
/// The number of records removed (always at least 1)
///
/// # Errors
/// * `EmployeeNotFound` - If no record carried the id before removal
pub fn delete_employees(roster: &mut Roster, id: i64) -> Result<usize> {
    match roster.remove_employees(id) {
        0 => Err(RosterError::EmployeeNotFound { id }),
        removed => Ok(removed),
    }
}
