//! Data models
//!
//! ## Design Principles
//!
//! - Field names serialize in camelCase to match the backend's JSON contract
//! - All IDs are `i64`, assigned by the server and never reused
//! - Fields the backend may omit carry serde defaults

pub mod employee;

pub use employee::*;
