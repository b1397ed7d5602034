use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::{EmployeeLookup, HistoryLog, RecordStore, new_id, now};
use crate::error::StoreError;
use crate::model::employee::{Employee, NewEmployee};
use crate::model::history::{History, NewHistory};
use crate::model::payroll::{NewPayroll, Payroll};

#[derive(Default)]
struct Collections {
    employees: Vec<Employee>,
    payrolls: Vec<Payroll>,
    history: Vec<History>,
}

/// In-process store. Cloning shares the same collections.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::new("memory store lock poisoned"))
    }
}

#[async_trait]
impl RecordStore<Employee> for MemoryStore {
    async fn create(&self, draft: NewEmployee) -> Result<Employee, StoreError> {
        let created_at = now();
        let employee = Employee {
            id: new_id(),
            name: draft.name,
            position: draft.position,
            department: draft.department,
            monthly_salary: draft.monthly_salary,
            time_in: draft.time_in,
            time_out: draft.time_out,
            created_at,
            updated_at: created_at,
        };
        self.lock()?.employees.push(employee.clone());
        Ok(employee)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.lock()?.employees.clone())
    }
}

#[async_trait]
impl RecordStore<Payroll> for MemoryStore {
    async fn create(&self, draft: NewPayroll) -> Result<Payroll, StoreError> {
        let payroll = Payroll {
            id: new_id(),
            employee_name: draft.employee_name,
            rate_per_hour: draft.rate_per_hour,
            hours_per_day: draft.hours_per_day,
            days_worked: draft.days_worked,
            gross_salary: draft.gross_salary,
            tax: draft.tax,
            philhealth: draft.philhealth,
            sss: draft.sss,
            total_deductions: draft.total_deductions,
            net_salary: draft.net_salary,
            payday: draft.payday,
            created_at: now(),
        };
        self.lock()?.payrolls.push(payroll.clone());
        Ok(payroll)
    }

    async fn list_all(&self) -> Result<Vec<Payroll>, StoreError> {
        Ok(self.lock()?.payrolls.clone())
    }
}

#[async_trait]
impl RecordStore<History> for MemoryStore {
    async fn create(&self, draft: NewHistory) -> Result<History, StoreError> {
        let entry = History {
            id: new_id(),
            employee_id: draft.employee_id,
            pay: draft.pay,
            created_at: now(),
        };
        self.lock()?.history.push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<History>, StoreError> {
        Ok(self.lock()?.history.clone())
    }
}

#[async_trait]
impl EmployeeLookup for MemoryStore {
    async fn find_employee(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        Ok(self.lock()?.employees.iter().find(|e| e.id == id).cloned())
    }
}

#[async_trait]
impl HistoryLog for MemoryStore {
    async fn list_by_employee(&self, employee_id: &str) -> Result<Vec<History>, StoreError> {
        let mut rows: Vec<History> = self
            .lock()?
            .history
            .iter()
            .rev()
            .filter(|h| h.employee_id == employee_id)
            .cloned()
            .collect();
        // stable: equal timestamps keep the reversed insertion order
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clerk(name: &str, monthly_salary: f64) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            position: "Clerk".to_string(),
            department: "HR".to_string(),
            monthly_salary,
            time_in: None,
            time_out: None,
        }
    }

    #[actix_web::test]
    async fn create_assigns_id_and_timestamps() {
        let store = MemoryStore::new();
        let ana = RecordStore::<Employee>::create(&store, clerk("Ana", 2600.0))
            .await
            .unwrap();

        assert!(!ana.id.is_empty());
        assert_eq!(ana.created_at, ana.updated_at);
        assert_eq!(ana.name, "Ana");

        let found = store.find_employee(&ana.id).await.unwrap();
        assert_eq!(found, Some(ana));
    }

    #[actix_web::test]
    async fn list_all_keeps_insertion_order() {
        let store = MemoryStore::new();
        for name in ["Ana", "Ben", "Cy"] {
            RecordStore::<Employee>::create(&store, clerk(name, 1000.0))
                .await
                .unwrap();
        }
        let names: Vec<_> = RecordStore::<Employee>::list_all(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Ana", "Ben", "Cy"]);
    }

    #[actix_web::test]
    async fn unknown_employee_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.find_employee("nope").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn history_is_newest_first_per_employee() {
        let store = MemoryStore::new();
        for (employee_id, pay) in [("a", 1.0), ("b", 9.0), ("a", 2.0), ("a", 3.0)] {
            RecordStore::<History>::create(
                &store,
                NewHistory {
                    employee_id: employee_id.to_string(),
                    pay,
                },
            )
            .await
            .unwrap();
        }

        let pays: Vec<_> = store
            .list_by_employee("a")
            .await
            .unwrap()
            .into_iter()
            .map(|h| h.pay)
            .collect();
        assert_eq!(pays, [3.0, 2.0, 1.0]);
        assert!(store.list_by_employee("c").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        RecordStore::<Employee>::create(&store, clerk("Ana", 1.0))
            .await
            .unwrap();
        assert_eq!(RecordStore::<Employee>::list_all(&other).await.unwrap().len(), 1);
    }
}
