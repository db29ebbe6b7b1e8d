//! Repositories for database operations

use async_trait::async_trait;
use common::error::DatabaseResult;

use crate::models::Student;

#[cfg(test)]
pub mod memory;
pub mod student;

pub use student::PgStudentRepository;

/// Store operations for the `Student` entity
///
/// "Not found" is reported as `None` or `false`, never as an error.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Get every student, in the order the store returns them
    async fn get_all(&self) -> DatabaseResult<Vec<Student>>;

    /// Find a student by ID
    async fn get(&self, id: i32) -> DatabaseResult<Option<Student>>;

    /// Insert a student, ignoring its `id`, and return the id the store assigned
    async fn create(&self, student: &Student) -> DatabaseResult<i32>;

    /// Replace every field of the student with `student.id`
    ///
    /// Returns `false` when no such student exists.
    async fn update(&self, student: &Student) -> DatabaseResult<bool>;

    /// Delete a student by ID
    ///
    /// Returns `false` when no such student exists.
    async fn delete(&self, id: i32) -> DatabaseResult<bool>;
}
