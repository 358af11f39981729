use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::slug::check_name;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

pub const COMMENTER_NAME_MAX: usize = 80;
pub const EMAIL_MAX: usize = 254;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommenterName(String);

impl CommenterName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        check_name(&value, COMMENTER_NAME_MAX, "name")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommenterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CommenterName> for String {
    fn from(value: CommenterName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommenterEmail(String);

impl CommenterEmail {
    /// Structural check only: one `@`, a non-empty local part, and a domain
    /// with at least one dot. Deliverability is not this crate's concern.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        if trimmed.len() > EMAIL_MAX {
            return Err(DomainError::Validation(format!(
                "email must be {EMAIL_MAX} characters or fewer"
            )));
        }
        let invalid = || DomainError::Validation("enter a valid email address".into());
        let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
            || trimmed.chars().any(char::is_whitespace)
        {
            return Err(invalid());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommenterEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CommenterEmail> for String {
    fn from(value: CommenterEmail) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CommentBody> for String {
    fn from(value: CommentBody) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub name: CommenterName,
    pub email: CommenterEmail,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub name: CommenterName,
    pub email: CommenterEmail,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn set_active(&self, id: CommentId, active: bool) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    /// Comments for one post, oldest first.
    async fn list_for_post(
        &self,
        post_id: PostId,
        only_active: bool,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Comment>, u64)>;
    /// Moderation listing across all posts, oldest first.
    async fn list_page(
        &self,
        active: Option<bool>,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Comment>, u64)>;
}
