pub mod employee_ops;
pub mod store;

pub use store::Roster;
