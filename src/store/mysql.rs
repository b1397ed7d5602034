use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use super::{EmployeeLookup, HistoryLog, RecordStore, new_id, now};
use crate::error::StoreError;
use crate::model::employee::{Employee, NewEmployee};
use crate::model::history::{History, NewHistory};
use crate::model::payroll::{NewPayroll, Payroll};

const EMPLOYEE_COLUMNS: &str =
    "id, name, position, department, monthly_salary, time_in, time_out, created_at, updated_at";

const PAYROLL_COLUMNS: &str = "id, employee_name, rate_per_hour, hours_per_day, days_worked, \
     gross_salary, tax, philhealth, sss, total_deductions, net_salary, payday, created_at";

const HISTORY_COLUMNS: &str = "id, employee_id, pay, created_at";

/// Store backed by the tables `db::ensure_schema` creates. Every table has an
/// auto-increment `seq` that fixes insertion order.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Employee> for MySqlStore {
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

        sqlx::query(
            r#"
            INSERT INTO employees
            (id, name, position, department, monthly_salary, time_in, time_out, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(&employee.position)
        .bind(&employee.department)
        .bind(employee.monthly_salary)
        .bind(&employee.time_in)
        .bind(&employee.time_out)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY seq");
        debug!(sql = %sql, "Fetching employees");

        Ok(sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl RecordStore<Payroll> for MySqlStore {
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

        sqlx::query(
            r#"
            INSERT INTO payrolls
            (id, employee_name, rate_per_hour, hours_per_day, days_worked, gross_salary,
             tax, philhealth, sss, total_deductions, net_salary, payday, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&payroll.id)
        .bind(&payroll.employee_name)
        .bind(payroll.rate_per_hour)
        .bind(payroll.hours_per_day)
        .bind(payroll.days_worked)
        .bind(payroll.gross_salary)
        .bind(payroll.tax)
        .bind(payroll.philhealth)
        .bind(payroll.sss)
        .bind(payroll.total_deductions)
        .bind(payroll.net_salary)
        .bind(payroll.payday)
        .bind(payroll.created_at)
        .execute(&self.pool)
        .await?;

        Ok(payroll)
    }

    async fn list_all(&self) -> Result<Vec<Payroll>, StoreError> {
        let sql = format!("SELECT {PAYROLL_COLUMNS} FROM payrolls ORDER BY seq");
        debug!(sql = %sql, "Fetching payrolls");

        Ok(sqlx::query_as::<_, Payroll>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl RecordStore<History> for MySqlStore {
    async fn create(&self, draft: NewHistory) -> Result<History, StoreError> {
        let entry = History {
            id: new_id(),
            employee_id: draft.employee_id,
            pay: draft.pay,
            created_at: now(),
        };

        sqlx::query(
            r#"
            INSERT INTO thirteenth_month_history (id, employee_id, pay, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.employee_id)
        .bind(entry.pay)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<History>, StoreError> {
        let sql = format!("SELECT {HISTORY_COLUMNS} FROM thirteenth_month_history ORDER BY seq");
        debug!(sql = %sql, "Fetching history");

        Ok(sqlx::query_as::<_, History>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl EmployeeLookup for MySqlStore {
    async fn find_employee(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");

        Ok(sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}

#[async_trait]
impl HistoryLog for MySqlStore {
    async fn list_by_employee(&self, employee_id: &str) -> Result<Vec<History>, StoreError> {
        let sql = format!(
            "SELECT {HISTORY_COLUMNS} FROM thirteenth_month_history \
             WHERE employee_id = ? ORDER BY created_at DESC, seq DESC"
        );
        debug!(sql = %sql, employee_id, "Fetching employee history");

        Ok(sqlx::query_as::<_, History>(&sql)
            .bind(employee_id)
            .fetch_all(&self.pool)
            .await?)
    }
}
