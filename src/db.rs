use sqlx::MySqlPool;
use tracing::info;

pub async fn init_db(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    MySqlPool::connect(database_url).await
}

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        seq            BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        id             CHAR(36)     NOT NULL UNIQUE,
        name           VARCHAR(255) NOT NULL,
        position       VARCHAR(255) NOT NULL,
        department     VARCHAR(255) NOT NULL,
        monthly_salary DOUBLE       NOT NULL,
        time_in        CHAR(5)      NULL,
        time_out       CHAR(5)      NULL,
        created_at     DATETIME(6)  NOT NULL,
        updated_at     DATETIME(6)  NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS payrolls (
        seq              BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        id               CHAR(36)     NOT NULL UNIQUE,
        employee_name    VARCHAR(255) NOT NULL,
        rate_per_hour    DOUBLE       NOT NULL,
        hours_per_day    DOUBLE       NOT NULL,
        days_worked      DOUBLE       NOT NULL,
        gross_salary     DOUBLE       NOT NULL,
        tax              DOUBLE       NOT NULL,
        philhealth       DOUBLE       NOT NULL,
        sss              DOUBLE       NOT NULL,
        total_deductions DOUBLE       NOT NULL,
        net_salary       DOUBLE       NOT NULL,
        payday           DATE         NOT NULL,
        created_at       DATETIME(6)  NOT NULL
    )
    "#,
    // no foreign key on employee_id: history outlives the employee
    r#"
    CREATE TABLE IF NOT EXISTS thirteenth_month_history (
        seq         BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        id          CHAR(36)    NOT NULL UNIQUE,
        employee_id CHAR(36)    NOT NULL,
        pay         DOUBLE      NOT NULL,
        created_at  DATETIME(6) NOT NULL,
        INDEX idx_history_employee (employee_id, created_at)
    )
    "#,
];

/// Create the three tables if they are missing. There is no migration step;
/// an existing table is left exactly as it is.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    info!("Schema ready");
    Ok(())
}
