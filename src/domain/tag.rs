use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{check_name, check_slug};
use async_trait::async_trait;
use std::fmt;

pub const TAG_NAME_MAX: usize = 40;
pub const TAG_SLUG_MAX: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        check_name(&value, TAG_NAME_MAX, "tag name")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSlug(String);

impl TagSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        check_slug(&value, TAG_SLUG_MAX, "tag slug")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagSlug> for String {
    fn from(value: TagSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub slug: TagSlug,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
    pub slug: TagSlug,
}

#[derive(Debug, Clone)]
pub struct TagUpdate {
    pub id: TagId,
    pub name: Option<TagName>,
    pub slug: Option<TagSlug>,
}

impl TagUpdate {
    pub fn new(id: TagId) -> Self {
        Self {
            id,
            name: None,
            slug: None,
        }
    }

    pub fn with_name(mut self, name: TagName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: TagSlug) -> Self {
        self.slug = Some(slug);
        self
    }
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn update(&self, update: TagUpdate) -> DomainResult<Tag>;
    async fn delete(&self, id: TagId) -> DomainResult<()>;
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn find_by_slug(&self, slug: &TagSlug) -> DomainResult<Option<Tag>>;
    async fn list(&self) -> DomainResult<Vec<Tag>>;
}
