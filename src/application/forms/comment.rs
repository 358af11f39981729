// src/application/forms/comment.rs
use serde::Deserialize;

use super::FormErrors;
use crate::domain::comment::{CommentBody, CommenterEmail, CommenterName};
use crate::domain::errors::DomainError;

/// Raw public comment submission, exactly as posted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentForm {
    pub name: String,
    pub email: String,
    pub body: String,
}

/// A form that survived validation. Carries domain values, so downstream
/// code cannot accidentally persist unchecked input.
#[derive(Debug, Clone)]
pub struct CommentSubmission {
    pub name: CommenterName,
    pub email: CommenterEmail,
    pub body: CommentBody,
}

impl CommentForm {
    pub fn validate(self) -> Result<CommentSubmission, FormErrors> {
        let mut errors = FormErrors::default();

        let name = collect(&mut errors, "name", CommenterName::new(self.name));
        let email = collect(&mut errors, "email", CommenterEmail::new(self.email));
        let body = collect(&mut errors, "body", CommentBody::new(self.body));

        match (name, email, body) {
            (Some(name), Some(email), Some(body)) if errors.is_empty() => Ok(CommentSubmission {
                name,
                email,
                body,
            }),
            _ => Err(errors),
        }
    }
}

fn collect<T>(
    errors: &mut FormErrors,
    field: &'static str,
    result: Result<T, DomainError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(DomainError::Validation(message)) => {
            errors.push(field, message);
            None
        }
        Err(other) => {
            errors.push(field, other.to_string());
            None
        }
    }
}
