//! In-memory mock of the employee records backend
//!
//! The production records service is an external system; this crate stands
//! in for it during development and integration tests. It serves the same
//! four routes against an in-memory store:
//!
//! - `GET    /api/Employee`       - full employee list
//! - `POST   /api/Employee`       - create, returns 201 with assigned id
//! - `PUT    /api/Employee/{id}`  - replace, echoes the stored record
//! - `DELETE /api/Employee/{id}`  - remove, returns 204

pub mod api;
pub mod store;

pub use api::router;
pub use store::EmployeeStore;
