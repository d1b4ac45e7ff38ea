pub mod employee_render;

pub use employee_render::{render_employee, render_roster, RECORD_SEPARATOR, ROSTER_HEADER};
