//! PostgreSQL-backed student repository

use async_trait::async_trait;
use common::database::{self, DatabaseConfig};
use common::error::{DatabaseError, DatabaseResult};
use tracing::info;

use super::StudentRepository;
use crate::models::Student;

/// Student repository for database operations
///
/// Holds only the connection settings: each call opens its own connection and
/// releases it before returning.
#[derive(Debug, Clone)]
pub struct PgStudentRepository {
    config: DatabaseConfig,
}

impl PgStudentRepository {
    /// Create a new student repository
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn get_all(&self) -> DatabaseResult<Vec<Student>> {
        info!("Listing students");

        let mut conn = database::connect(&self.config).await?;
        let result = sqlx::query_as::<_, Student>(
            r#"
            SELECT "Id", "UserName", "FirstName", "LastName", "Age", "Career"
            FROM "Student"
            "#,
        )
        .fetch_all(&mut conn)
        .await;
        database::release(conn).await;

        result.map_err(DatabaseError::Query)
    }

    async fn get(&self, id: i32) -> DatabaseResult<Option<Student>> {
        info!("Finding student by ID: {}", id);

        let mut conn = database::connect(&self.config).await?;
        let result = sqlx::query_as::<_, Student>(
            r#"
            SELECT "Id", "UserName", "FirstName", "LastName", "Age", "Career"
            FROM "Student"
            WHERE "Id" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await;
        database::release(conn).await;

        result.map_err(DatabaseError::Query)
    }

    async fn create(&self, student: &Student) -> DatabaseResult<i32> {
        info!("Creating new student: {}", student.user_name);

        let mut conn = database::connect(&self.config).await?;
        let result = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO "Student" ("UserName", "FirstName", "LastName", "Age", "Career")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING "Id"
            "#,
        )
        .bind(&student.user_name)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(student.age)
        .bind(&student.career)
        .fetch_one(&mut conn)
        .await;
        database::release(conn).await;

        result.map_err(DatabaseError::Query)
    }

    async fn update(&self, student: &Student) -> DatabaseResult<bool> {
        info!("Updating student: {}", student.id);

        let mut conn = database::connect(&self.config).await?;
        let result = sqlx::query(
            r#"
            UPDATE "Student"
            SET "UserName" = $2, "FirstName" = $3, "LastName" = $4, "Age" = $5, "Career" = $6
            WHERE "Id" = $1
            "#,
        )
        .bind(student.id)
        .bind(&student.user_name)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(student.age)
        .bind(&student.career)
        .execute(&mut conn)
        .await;
        database::release(conn).await;

        Ok(result.map_err(DatabaseError::Query)?.rows_affected() == 1)
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        info!("Deleting student: {}", id);

        let mut conn = database::connect(&self.config).await?;
        let result = sqlx::query(
            r#"
            DELETE FROM "Student"
            WHERE "Id" = $1
            "#,
        )
        .bind(id)
        .execute(&mut conn)
        .await;
        database::release(conn).await;

        Ok(result.map_err(DatabaseError::Query)?.rows_affected() > 0)
    }
}
