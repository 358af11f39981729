use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{check_name, check_slug};
use async_trait::async_trait;
use std::fmt;

pub const CATEGORY_NAME_MAX: usize = 60;
pub const CATEGORY_SLUG_MAX: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "category id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        check_name(&value, CATEGORY_NAME_MAX, "category name")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        check_slug(&value, CATEGORY_SLUG_MAX, "category slug")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategorySlug> for String {
    fn from(value: CategorySlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: CategorySlug,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<CategoryName>,
    pub slug: Option<CategorySlug>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId) -> Self {
        Self {
            id,
            name: None,
            slug: None,
        }
    }

    pub fn with_name(mut self, name: CategoryName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: CategorySlug) -> Self {
        self.slug = Some(slug);
        self
    }
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_empty_and_overlong() {
        assert!(CategoryName::new("").is_err());
        assert!(CategoryName::new("   ").is_err());
        assert!(CategoryName::new("a".repeat(61)).is_err());
        assert!(CategoryName::new("Software").is_ok());
    }

    #[test]
    fn slug_enforces_shape() {
        assert!(CategorySlug::new("software-engineering").is_ok());
        assert!(CategorySlug::new("Software").is_err());
        assert!(CategorySlug::new("a".repeat(81)).is_err());
    }

    #[test]
    fn id_must_be_positive() {
        assert!(CategoryId::new(0).is_err());
        assert!(CategoryId::new(-3).is_err());
        assert!(CategoryId::new(1).is_ok());
    }
}
