//! Persistence boundary for employees, payrolls and 13th-month history.
//!
//! Stores never validate; callers hand them checked drafts and get back the
//! stored record with its generated id and timestamps.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};

use crate::error::StoreError;
use crate::model::employee::{Employee, NewEmployee};
use crate::model::history::{History, NewHistory};
use crate::model::payroll::{NewPayroll, Payroll};

pub mod memory;
pub mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

/// A persisted entity and the checked draft it is created from.
pub trait Record: Send + Sized + 'static {
    type Draft: Send + 'static;
}

impl Record for Employee {
    type Draft = NewEmployee;
}

impl Record for Payroll {
    type Draft = NewPayroll;
}

impl Record for History {
    type Draft = NewHistory;
}

#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    async fn create(&self, draft: R::Draft) -> Result<R, StoreError>;

    /// Every record, oldest insert first.
    async fn list_all(&self) -> Result<Vec<R>, StoreError>;
}

#[async_trait]
pub trait EmployeeLookup: Send + Sync {
    async fn find_employee(&self, id: &str) -> Result<Option<Employee>, StoreError>;
}

#[async_trait]
pub trait HistoryLog: Send + Sync {
    /// History of one employee, newest first. Rows created in the same
    /// instant come back in reverse insertion order.
    async fn list_by_employee(&self, employee_id: &str) -> Result<Vec<History>, StoreError>;
}

/// Everything the HTTP layer needs from a backend.
pub trait Store:
    RecordStore<Employee>
    + RecordStore<Payroll>
    + RecordStore<History>
    + EmployeeLookup
    + HistoryLog
    + 'static
{
}

impl<T> Store for T where
    T: RecordStore<Employee>
        + RecordStore<Payroll>
        + RecordStore<History>
        + EmployeeLookup
        + HistoryLog
        + 'static
{
}

/// Current time at the microsecond precision a DATETIME(6) column keeps, so
/// a returned record compares equal to the same record read back later.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
