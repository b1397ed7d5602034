pub mod employee;
pub mod history;
pub mod payroll;
