use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports which unique index failed only in the message text, e.g.
// "UNIQUE constraint failed: posts.slug".
const UNIQUE_HINTS: &[(&str, &str)] = &[
    ("categories.name", "category name already exists"),
    ("categories.slug", "category slug already exists"),
    ("tags.name", "tag name already exists"),
    ("tags.slug", "tag slug already exists"),
    ("posts.slug", "post slug already exists"),
    ("users.username", "username already exists"),
];

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message().to_string();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    for (column, hint) in UNIQUE_HINTS {
                        if message.contains(column) {
                            return DomainError::Conflict((*hint).to_string());
                        }
                    }
                    DomainError::Conflict("unique constraint violated".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                _ => DomainError::Persistence(message),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
