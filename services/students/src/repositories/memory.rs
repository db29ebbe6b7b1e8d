//! In-memory student repository used by the service and route tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::Mutex;

use super::StudentRepository;
use crate::models::Student;

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Student>,
}

/// Student repository keeping rows in a map, with ids assigned from 1
#[derive(Default)]
pub struct InMemoryStudentRepository {
    table: Mutex<Table>,
    failing: AtomicBool,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> DatabaseResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DatabaseError::Connection(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn get_all(&self) -> DatabaseResult<Vec<Student>> {
        self.check()?;
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> DatabaseResult<Option<Student>> {
        self.check()?;
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn create(&self, student: &Student) -> DatabaseResult<i32> {
        self.check()?;
        let mut table = self.table.lock().await;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(
            id,
            Student {
                id,
                ..student.clone()
            },
        );
        Ok(id)
    }

    async fn update(&self, student: &Student) -> DatabaseResult<bool> {
        self.check()?;
        let mut table = self.table.lock().await;
        match table.rows.get_mut(&student.id) {
            Some(row) => {
                *row = student.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        self.check()?;
        Ok(self.table.lock().await.rows.remove(&id).is_some())
    }
}
