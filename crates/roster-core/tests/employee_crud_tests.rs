#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{names, new_roster, roster_with};
use roster_core::{ops::employee_ops, RosterError};

// ===== ADD TESTS =====

#[test]
fn test_add_then_find_returns_supplied_fields() {
    let mut roster = new_roster();
    employee_ops::add_employee(&mut roster, 1, "Alice".to_string(), 50000.0, "Eng".to_string());

    let emp = employee_ops::find_employee(&roster, 1).unwrap();
    assert_eq!(emp.id, 1);
    assert_eq!(emp.name, "Alice");
    assert_eq!(emp.salary, 50000.0);
    assert_eq!(emp.department, "Eng");
}

#[test]
fn test_add_accepts_duplicate_ids() {
    let mut roster = roster_with(&[(1, "first")]);
    employee_ops::add_employee(&mut roster, 1, "second".to_string(), 1.0, "X".to_string());

    assert_eq!(roster.len(), 2);
    assert_eq!(names(&roster), vec!["first", "second"]);
}

#[test]
fn test_add_accepts_negative_id_and_salary() {
    let mut roster = new_roster();
    employee_ops::add_employee(&mut roster, -5, "Neg".to_string(), -1.5, String::new());

    let emp = employee_ops::find_employee(&roster, -5).unwrap();
    assert_eq!(emp.salary, -1.5);
    assert_eq!(emp.department, "");
}

// ===== LIST TESTS =====

#[test]
fn test_list_on_fresh_roster_is_empty() {
    let roster = new_roster();
    let result = employee_ops::list_employees(&roster);
    assert!(matches!(result, Err(RosterError::EmptyRoster)));
}

#[test]
fn test_list_after_one_add_yields_exactly_that_record() {
    let mut roster = new_roster();
    employee_ops::add_employee(&mut roster, 3, "Carol".to_string(), 1.0, "HR".to_string());

    let listed: Vec<_> = employee_ops::list_employees(&roster).unwrap().collect();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Carol");
}

#[test]
fn test_list_preserves_insertion_order() {
    let roster = roster_with(&[(9, "z"), (1, "a"), (5, "m")]);

    let ids: Vec<i64> = employee_ops::list_employees(&roster)
        .unwrap()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![9, 1, 5]);
}

// ===== FIND TESTS =====

#[test]
fn test_find_duplicate_id_returns_first_inserted() {
    let roster = roster_with(&[(1, "first"), (2, "other"), (1, "second")]);

    let emp = employee_ops::find_employee(&roster, 1).unwrap();
    assert_eq!(emp.name, "first");
}

#[test]
fn test_find_missing_is_not_found() {
    let roster = roster_with(&[(1, "a")]);
    let result = employee_ops::find_employee(&roster, 2);
    assert_eq!(result, Err(RosterError::EmployeeNotFound { id: 2 }));
}

// ===== UPDATE TESTS =====

#[test]
fn test_update_overwrites_all_three_fields() {
    let mut roster = roster_with(&[(1, "Alice")]);

    employee_ops::update_employee(
        &mut roster,
        1,
        "Alicia".to_string(),
        55000.0,
        "Engineering".to_string(),
    )
    .unwrap();

    let emp = employee_ops::find_employee(&roster, 1).unwrap();
    assert_eq!(emp.id, 1);
    assert_eq!(emp.name, "Alicia");
    assert_eq!(emp.salary, 55000.0);
    assert_eq!(emp.department, "Engineering");
}

#[test]
fn test_update_nonexistent_leaves_roster_unchanged() {
    let mut roster = roster_with(&[(1, "Alice"), (2, "Bob")]);
    let before = roster.clone();

    let result =
        employee_ops::update_employee(&mut roster, 3, "X".to_string(), 1.0, "Y".to_string());

    assert!(matches!(
        result,
        Err(RosterError::EmployeeNotFound { id: 3 })
    ));
    assert_eq!(roster, before);
}

// ===== DELETE TESTS =====

#[test]
fn test_delete_removes_every_record_sharing_the_id() {
    let mut roster = roster_with(&[(1, "a"), (1, "b")]);

    let removed = employee_ops::delete_employees(&mut roster, 1).unwrap();

    assert_eq!(removed, 2);
    assert!(roster.is_empty());
    assert!(employee_ops::find_employee(&roster, 1).is_err());
}

#[test]
fn test_delete_keeps_survivor_order() {
    let mut roster = roster_with(&[(1, "a"), (2, "b"), (1, "c"), (3, "d"), (2, "e")]);

    employee_ops::delete_employees(&mut roster, 1).unwrap();

    assert_eq!(names(&roster), vec!["b", "d", "e"]);
}

#[test]
fn test_delete_missing_is_not_found() {
    let mut roster = new_roster();
    let result = employee_ops::delete_employees(&mut roster, 1);
    assert_eq!(result, Err(RosterError::EmployeeNotFound { id: 1 }));
}
