use crate::model::Employee;

/// Line closing every rendered record
pub const RECORD_SEPARATOR: &str = "--------------------------";

/// Heading printed before a full listing
pub const ROSTER_HEADER: &str = "\nEmployee List:\n";

/// Render one Employee as a plain-text block
///
/// ```text
/// ID: 1
/// Name: Alice
/// Salary: $50000
/// Department: Eng
/// --------------------------
/// ```
///
/// Salary uses the shortest `Display` form of the number, so whole amounts
/// carry no decimal point.
pub fn render_employee(employee: &Employee) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID: {}\n", employee.id));
    output.push_str(&format!("Name: {}\n", employee.name));
    output.push_str(&format!("Salary: ${}\n", employee.salary));
    output.push_str(&format!("Department: {}\n", employee.department));
    output.push_str(RECORD_SEPARATOR);
    output.push('\n');

    output
}

/// Render a full listing: the header followed by every record in order
pub fn render_roster<'a, I>(employees: I) -> String
where
    I: IntoIterator<Item = &'a Employee>,
{
    employees
        .into_iter()
        .fold(ROSTER_HEADER.to_string(), |mut output, employee| {
            output.push_str(&render_employee(employee));
            output
        })
}
