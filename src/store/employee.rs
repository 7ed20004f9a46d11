use tracing::{info, instrument, warn};

use super::{RecordStore, unique_violation};
use crate::error::{HrmsError, HrmsResult};
use crate::model::employee::{Employee, NewEmployee};

impl RecordStore {
    /// Validates, then checks `emp_id` and `email` uniqueness in that order.
    ///
    /// A concurrent insert that slips past both checks is still caught by the
    /// table constraints and reported the same way.
    #[instrument(skip(self, new_employee), fields(emp_id = %new_employee.employee_id))]
    pub async fn add_employee(&self, new_employee: NewEmployee) -> HrmsResult<Employee> {
        new_employee.validate()?;
        let employee = Employee::from(new_employee);

        let id_taken = sqlx::query_scalar::<_, String>(
            "SELECT emp_id FROM employees WHERE emp_id = ?",
        )
        .bind(&employee.employee_id)
        .fetch_optional(&self.pool)
        .await?
        .is_some();
        if id_taken {
            warn!("Employee ID already exists");
            return Err(HrmsError::DuplicateKey);
        }

        let email_taken = sqlx::query_scalar::<_, String>(
            "SELECT emp_id FROM employees WHERE email = ?",
        )
        .bind(&employee.email)
        .fetch_optional(&self.pool)
        .await?
        .is_some();
        if email_taken {
            warn!(email = %employee.email, "Email already exists");
            return Err(HrmsError::DuplicateEmail);
        }

        self.insert_employee(&employee).await?;
        info!("Employee added");

        Ok(employee)
    }

    async fn insert_employee(&self, employee: &Employee) -> HrmsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employees (emp_id, name, email, department)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&employee.employee_id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.department)
        .execute(&self.pool)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(msg) if msg.contains("employees.email") => HrmsError::DuplicateEmail,
            Some(_) => HrmsError::DuplicateKey,
            None => HrmsError::Database(e),
        })?;

        Ok(())
    }

    pub async fn list_employees(&self) -> HrmsResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT emp_id, name, email, department FROM employees ORDER BY emp_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Attendance rows for the employee are left in place.
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, employee_id: &str) -> HrmsResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE emp_id = ?")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(HrmsError::NotFound);
        }

        info!("Employee deleted");
        Ok(())
    }

    pub async fn employee_exists(&self, employee_id: &str) -> HrmsResult<bool> {
        let found = sqlx::query_scalar::<_, String>("SELECT emp_id FROM employees WHERE emp_id = ?")
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use futures_util::future::join;

    use crate::error::HrmsError;
    use crate::model::employee::Employee;
    use crate::test_support::{employee, file_store, memory_store};

    #[actix_web::test]
    async fn adds_and_lists_employees() {
        let store = memory_store().await;
        store.add_employee(employee("E2", "b@corp.com")).await.expect("add E2");
        store.add_employee(employee("E1", "a@corp.com")).await.expect("add E1");

        let ids: Vec<_> = store
            .list_employees()
            .await
            .expect("list")
            .into_iter()
            .map(|e| e.employee_id)
            .collect();
        assert_eq!(ids, vec!["E1", "E2"]);
    }

    #[actix_web::test]
    async fn duplicate_id_is_rejected() {
        let store = memory_store().await;
        store.add_employee(employee("E1", "a@corp.com")).await.expect("first add");

        let err = store
            .add_employee(employee("E1", "other@corp.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, HrmsError::DuplicateKey));
    }

    #[actix_web::test]
    async fn duplicate_email_is_rejected() {
        let store = memory_store().await;
        store.add_employee(employee("E1", "a@corp.com")).await.expect("first add");

        let err = store.add_employee(employee("E2", "a@corp.com")).await.unwrap_err();
        assert!(matches!(err, HrmsError::DuplicateEmail));
    }

    #[actix_web::test]
    async fn id_check_runs_before_email_check() {
        let store = memory_store().await;
        store.add_employee(employee("E1", "a@corp.com")).await.expect("first add");

        let err = store.add_employee(employee("E1", "a@corp.com")).await.unwrap_err();
        assert!(matches!(err, HrmsError::DuplicateKey));
    }

    #[actix_web::test]
    async fn invalid_employee_is_not_stored() {
        let store = memory_store().await;
        let mut bad = employee("E1", "a@corp.com");
        bad.name = "  ".into();

        let err = store.add_employee(bad).await.unwrap_err();
        assert!(matches!(err, HrmsError::Validation(_)));
        assert!(store.list_employees().await.expect("list").is_empty());
    }

    #[actix_web::test]
    async fn delete_then_re_add_leaves_no_residue() {
        let store = memory_store().await;
        store.add_employee(employee("E1", "a@corp.com")).await.expect("add");
        store.delete_employee("E1").await.expect("delete");
        assert!(!store.employee_exists("E1").await.expect("exists"));

        store.add_employee(employee("E1", "a@corp.com")).await.expect("re-add");
        assert!(store.employee_exists("E1").await.expect("exists"));
    }

    #[actix_web::test]
    async fn deleting_unknown_employee_is_not_found() {
        let store = memory_store().await;
        let err = store.delete_employee("nobody").await.unwrap_err();
        assert!(matches!(err, HrmsError::NotFound));
    }

    #[actix_web::test]
    async fn insert_maps_primary_key_violation_to_duplicate_key() {
        let store = memory_store().await;
        store.add_employee(employee("E1", "a@corp.com")).await.expect("add");

        let clash = Employee::from(employee("E1", "other@corp.com"));
        let err = store.insert_employee(&clash).await.unwrap_err();
        assert!(matches!(err, HrmsError::DuplicateKey), "{err:?}");
    }

    #[actix_web::test]
    async fn insert_maps_email_violation_to_duplicate_email() {
        let store = memory_store().await;
        store.add_employee(employee("E1", "a@corp.com")).await.expect("add");

        let clash = Employee::from(employee("E2", "a@corp.com"));
        let err = store.insert_employee(&clash).await.unwrap_err();
        assert!(matches!(err, HrmsError::DuplicateEmail), "{err:?}");
    }

    #[actix_web::test]
    async fn concurrent_adds_with_same_id_yield_one_duplicate_key() {
        let (_dir, store) = file_store().await;

        for round in 0..20 {
            let id = format!("E{round}");
            let (first, second) = join(
                store.add_employee(employee(&id, &format!("first{round}@corp.com"))),
                store.add_employee(employee(&id, &format!("second{round}@corp.com"))),
            )
            .await;

            let results = [first, second];
            let added = results.iter().filter(|r| r.is_ok()).count();
            assert_eq!(added, 1, "round {round}: {results:?}");
            assert!(
                results.iter().any(|r| matches!(r, Err(HrmsError::DuplicateKey))),
                "round {round}: {results:?}"
            );
        }
    }

    #[actix_web::test]
    async fn concurrent_adds_with_same_email_yield_one_duplicate_email() {
        let (_dir, store) = file_store().await;

        for round in 0..20 {
            let email = format!("shared{round}@corp.com");
            let (first, second) = join(
                store.add_employee(employee(&format!("A{round}"), &email)),
                store.add_employee(employee(&format!("B{round}"), &email)),
            )
            .await;

            let results = [first, second];
            let added = results.iter().filter(|r| r.is_ok()).count();
            assert_eq!(added, 1, "round {round}: {results:?}");
            assert!(
                results.iter().any(|r| matches!(r, Err(HrmsError::DuplicateEmail))),
                "round {round}: {results:?}"
            );
        }
    }
}
