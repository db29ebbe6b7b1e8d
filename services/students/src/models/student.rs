//! Student entity and its creation payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Student entity, as stored in the `"Student"` table and returned on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Student {
    #[serde(alias = "id")]
    pub id: i32,
    #[serde(alias = "userName")]
    pub user_name: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(alias = "age")]
    pub age: i32,
    #[serde(alias = "career")]
    pub career: String,
}

/// Student creation payload
///
/// Carries no id: the store assigns one on insert. An `Id` field sent by the
/// client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudentCreateRequest {
    #[serde(alias = "userName")]
    pub user_name: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(alias = "age")]
    pub age: i32,
    #[serde(alias = "career")]
    pub career: String,
}

impl From<StudentCreateRequest> for Student {
    fn from(request: StudentCreateRequest) -> Self {
        Self {
            id: 0,
            user_name: request.user_name,
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            career: request.career,
        }
    }
}
