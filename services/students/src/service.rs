//! Student service sitting between the routes and the repository
//!
//! The service currently forwards every call unchanged. Business rules belong
//! here, so that neither the routes nor the repository contract has to change
//! when they arrive.

use std::sync::Arc;

use common::error::DatabaseResult;

use crate::models::Student;
use crate::repositories::StudentRepository;

/// Student service
#[derive(Clone)]
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentService {
    /// Create a new student service on top of a repository
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    /// Get all students
    pub async fn get_all(&self) -> DatabaseResult<Vec<Student>> {
        self.repository.get_all().await
    }

    /// Get a student by ID, `None` if it does not exist
    pub async fn get(&self, id: i32) -> DatabaseResult<Option<Student>> {
        self.repository.get(id).await
    }

    /// Create a student and return its assigned ID
    pub async fn create(&self, student: &Student) -> DatabaseResult<i32> {
        self.repository.create(student).await
    }

    /// Replace a student, `false` if it does not exist
    pub async fn update(&self, student: &Student) -> DatabaseResult<bool> {
        self.repository.update(student).await
    }

    /// Delete a student, `false` if it does not exist
    pub async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryStudentRepository;
    use common::error::DatabaseError;

    fn student(n: i32) -> Student {
        Student {
            id: 0,
            user_name: format!("UserName {}", n),
            first_name: format!("FirstName {}", n),
            last_name: format!("LastName {}", n),
            age: n,
            career: format!("Career {}", n),
        }
    }

    fn setup() -> (StudentService, Arc<InMemoryStudentRepository>) {
        let repository = Arc::new(InMemoryStudentRepository::new());
        (StudentService::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn test_get_all_returns_every_student() {
        let (service, _) = setup();
        assert!(service.get_all().await.unwrap().is_empty());

        service.create(&student(1)).await.unwrap();
        service.create(&student(2)).await.unwrap();

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], Student { id: 1, ..student(1) });
        assert_eq!(all[1], Student { id: 2, ..student(2) });
    }

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let (service, _) = setup();
        let id = service.create(&student(1)).await.unwrap();

        assert_eq!(
            service.get(id).await.unwrap(),
            Some(Student { id, ..student(1) })
        );
        assert_eq!(service.get(id + 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        let (service, _) = setup();
        let id = service
            .create(&Student {
                id: 50,
                ..student(1)
            })
            .await
            .unwrap();

        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_update_reports_existence() {
        let (service, _) = setup();
        let id = service.create(&student(1)).await.unwrap();

        assert!(service.update(&Student { id, ..student(2) }).await.unwrap());
        assert!(!service.update(&Student { id: 77, ..student(2) }).await.unwrap());
        assert_eq!(service.get(77).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let (service, _) = setup();
        let id = service.create(&student(1)).await.unwrap();

        assert!(service.delete(id).await.unwrap());
        assert!(!service.delete(id).await.unwrap());
        assert_eq!(service.get(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_errors_pass_through() {
        let (service, repository) = setup();
        repository.fail_all();

        assert!(matches!(
            service.get_all().await,
            Err(DatabaseError::Connection(_))
        ));
        assert!(matches!(
            service.delete(1).await,
            Err(DatabaseError::Connection(_))
        ));
    }
}
