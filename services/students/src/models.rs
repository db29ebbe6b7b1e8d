//! API models for request and response payloads

pub mod student;

pub use student::{Student, StudentCreateRequest};
