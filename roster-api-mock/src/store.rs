//! In-memory employee store

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::NaiveDate;
use tokio::sync::RwLock;

use shared::models::{Employee, EmployeeCreate};

/// In-memory employee store backing the mock API
///
/// Ids are sequential and never reused, mirroring the real backend's
/// auto-increment primary key.
#[derive(Debug)]
pub struct EmployeeStore {
    employees: RwLock<Vec<Employee>>,
    next_id: AtomicI64,
}

impl EmployeeStore {
    /// Empty store; the first assigned id is 1
    pub fn new() -> Self {
        Self {
            employees: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Store preloaded with a few sample records (dev server)
    pub async fn with_samples() -> Self {
        let store = Self::new();
        for payload in sample_payloads() {
            store.create(payload).await;
        }
        store
    }

    /// All employees in insertion order
    pub async fn list(&self) -> Vec<Employee> {
        self.employees.read().await.clone()
    }

    /// Insert a new record under the next sequential id
    pub async fn create(&self, payload: EmployeeCreate) -> Employee {
        let employee = payload.into_employee(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.employees.write().await.push(employee.clone());
        employee
    }

    /// Replace the record at `id`
    ///
    /// The path id is authoritative; an id inside the body is overwritten.
    /// Returns `None` when no record has that id.
    pub async fn update(&self, id: i64, mut employee: Employee) -> Option<Employee> {
        employee.id = id;
        let mut employees = self.employees.write().await;
        let slot = employees.iter_mut().find(|e| e.id == id)?;
        *slot = employee.clone();
        Some(employee)
    }

    /// Remove the record at `id`, reporting whether it existed
    pub async fn delete(&self, id: i64) -> bool {
        let mut employees = self.employees.write().await;
        let len_before = employees.len();
        employees.retain(|e| e.id != id);
        employees.len() < len_before
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_payloads() -> Vec<EmployeeCreate> {
    vec![
        EmployeeCreate {
            first_name: "Mei".to_string(),
            last_name: "Chen".to_string(),
            email: "mei.chen@example.com".to_string(),
            phone_number: "555-0132".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 14),
            date_of_joining: NaiveDate::from_ymd_opt(2018, 9, 1),
            department: "Kitchen".to_string(),
            position: "Head Chef".to_string(),
            salary: 64000.0,
            is_active: true,
        },
        EmployeeCreate {
            first_name: "Omar".to_string(),
            last_name: "Haddad".to_string(),
            email: "omar.haddad@example.com".to_string(),
            phone_number: "555-0147".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 11, 2),
            date_of_joining: NaiveDate::from_ymd_opt(2016, 4, 15),
            department: "Front of House".to_string(),
            position: "Manager".to_string(),
            salary: 58000.0,
            is_active: true,
        },
        EmployeeCreate {
            first_name: "Sofia".to_string(),
            last_name: "Marques".to_string(),
            email: "sofia.marques@example.com".to_string(),
            phone_number: "555-0158".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1998, 7, 23),
            date_of_joining: NaiveDate::from_ymd_opt(2022, 1, 10),
            department: "Front of House".to_string(),
            position: "Server".to_string(),
            salary: 36000.0,
            is_active: false,
        },
    ]
}
