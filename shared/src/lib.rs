//! Shared types for the roster workspace
//!
//! Wire-format models exchanged with the employee records backend. Used by
//! the API client, the mock backend and the desk console.

pub mod models;

pub use models::{Employee, EmployeeCreate};
