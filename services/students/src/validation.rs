//! Input validation for student payloads
//!
//! Only structural rules are enforced here: every text field must be present
//! and non-blank, and the age must be at least one. The controller runs these
//! checks before anything reaches the service layer.

use crate::models::{Student, StudentCreateRequest};

/// Smallest age a student may have
pub const MIN_AGE: i32 = 1;

/// Validate a required text field
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }

    Ok(())
}

/// Validate age
pub fn validate_age(age: i32) -> Result<(), String> {
    if age < MIN_AGE {
        return Err(format!("Age must be at least {}", MIN_AGE));
    }

    Ok(())
}

fn validate_fields(
    user_name: &str,
    first_name: &str,
    last_name: &str,
    age: i32,
    career: &str,
) -> Result<(), Vec<String>> {
    let errors: Vec<String> = [
        validate_required("UserName", user_name),
        validate_required("FirstName", first_name),
        validate_required("LastName", last_name),
        validate_age(age),
        validate_required("Career", career),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a creation payload, returning every violated rule
pub fn validate_create_request(request: &StudentCreateRequest) -> Result<(), Vec<String>> {
    validate_fields(
        &request.user_name,
        &request.first_name,
        &request.last_name,
        request.age,
        &request.career,
    )
}

/// Validate a full student sent for replacement, returning every violated rule
pub fn validate_student(student: &Student) -> Result<(), Vec<String>> {
    validate_fields(
        &student.user_name,
        &student.first_name,
        &student.last_name,
        student.age,
        &student.career,
    )
}
