use serde::{Deserialize, Serialize};

/// Employee - one record in the roster
///
/// The `id` is supplied by the user and is neither unique nor range-checked.
/// It is the only identity a record has and never changes after creation;
/// the remaining fields are overwritten together by an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// User-supplied identifier (duplicates allowed)
    pub id: i64,

    /// Full name as typed, including any surrounding spaces
    pub name: String,

    /// Salary; expected non-negative but not checked
    pub salary: f64,

    /// Department name
    pub department: String,
}

impl Employee {
    /// Create a new Employee record
    pub fn new(id: i64, name: String, salary: f64, department: String) -> Self {
        Self {
            id,
            name,
            salary,
            department,
        }
    }

    /// Check whether this record carries the given id
    pub fn has_id(&self, id: i64) -> bool {
        self.id == id
    }

    /// Overwrite every mutable field at once
    ///
    /// There is no partial update: name, salary and department are always
    /// replaced together. The id is left untouched.
    pub fn overwrite(&mut self, name: String, salary: f64, department: String) {
        self.name = name;
        self.salary = salary;
        self.department = department;
    }
}
