use crate::errors::{Result, RosterError};
use crate::model::Employee;

/// In-memory roster of employee records
///
/// A plain insertion-ordered `Vec` with no index: every lookup is a linear
/// scan by id, and the first match in insertion order wins.
/// Not thread-safe (no Arc/RwLock) - designed for single-threaded use.
/// All storage access is encapsulated here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    /// Records in insertion order
    pub(crate) employees: Vec<Employee>,
}

impl Roster {
    /// Create a new empty Roster
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Number of records, duplicates included
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Check whether the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterate over all records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Get the first Employee with the given id
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no record carries the id.
    pub fn get_employee(&self, id: i64) -> Result<&Employee> {
        self.employees
            .iter()
            .find(|e| e.has_id(id))
            .ok_or(RosterError::EmployeeNotFound { id })
    }

    /// Get a mutable reference to the first Employee with the given id
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no record carries the id.
    pub fn get_employee_mut(&mut self, id: i64) -> Result<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.has_id(id))
            .ok_or(RosterError::EmployeeNotFound { id })
    }

    /// Append an Employee at the end of the roster
    ///
    /// Never checks for an existing record with the same id.
    pub fn push_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Remove every Employee with the given id, returning how many went
    ///
    /// Survivors keep their relative order.
    pub fn remove_employees(&mut self, id: i64) -> usize {
        let original_len = self.employees.len();
        self.employees.retain(|e| !e.has_id(id));
        original_len - self.employees.len()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
