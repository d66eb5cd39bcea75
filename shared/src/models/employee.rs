//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee record as served by the backend
///
/// Every field except `id` carries a serde default: the backend omits
/// fields that were never set, and records created from an empty draft
/// come back with empty strings, zero salary and no dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub is_active: bool,
}

/// Create employee payload (the server assigns the id)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_joining: Option<NaiveDate>,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub is_active: bool,
}

impl EmployeeCreate {
    /// Attach a server-assigned id, producing a full record
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            date_of_birth: self.date_of_birth,
            date_of_joining: self.date_of_joining,
            department: self.department,
            position: self.position,
            salary: self.salary,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: 7,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            date_of_birth: Some(NaiveDate::from_ymd_opt(1906, 12, 9).unwrap()),
            date_of_joining: Some(NaiveDate::from_ymd_opt(1944, 7, 1).unwrap()),
            department: "Engineering".to_string(),
            position: "Rear Admiral".to_string(),
            salary: 125000.0,
            is_active: true,
        }
    }

    #[test]
    fn test_employee_serializes_camel_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"firstName\":\"Grace\""));
        assert!(json.contains("\"phoneNumber\":\"555-0100\""));
        assert!(json.contains("\"dateOfBirth\":\"1906-12-09\""));
        assert!(json.contains("\"isActive\":true"));
        assert!(!json.contains("first_name"));
    }

    #[test]
    fn test_employee_deserializes_backend_payload() {
        let json = r#"{
            "id": 1,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "555-0101",
            "dateOfBirth": "1815-12-10",
            "dateOfJoining": "1833-06-05",
            "department": "Research",
            "position": "Analyst",
            "salary": 90000.5,
            "isActive": false
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 1);
        assert_eq!(employee.first_name, "Ada");
        assert_eq!(
            employee.date_of_birth,
            Some(NaiveDate::from_ymd_opt(1815, 12, 10).unwrap())
        );
        assert_eq!(employee.salary, 90000.5);
        assert!(!employee.is_active);
    }

    #[test]
    fn test_employee_tolerates_omitted_fields() {
        // A record created from an untouched draft has only its id
        let employee: Employee = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(employee.id, 3);
        assert_eq!(employee.first_name, "");
        assert_eq!(employee.date_of_birth, None);
        assert_eq!(employee.salary, 0.0);
        assert!(!employee.is_active);
    }

    #[test]
    fn test_create_payload_has_no_id() {
        let payload = EmployeeCreate {
            first_name: "Grace".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"firstName\":\"Grace\""));
    }

    #[test]
    fn test_into_employee_keeps_fields() {
        let payload = EmployeeCreate {
            first_name: "Grace".to_string(),
            salary: 1000.0,
            is_active: true,
            ..Default::default()
        };
        let employee = payload.into_employee(42);
        assert_eq!(employee.id, 42);
        assert_eq!(employee.first_name, "Grace");
        assert_eq!(employee.salary, 1000.0);
        assert!(employee.is_active);
    }
}
