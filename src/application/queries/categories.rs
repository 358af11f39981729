use std::sync::Arc;

use crate::application::dto::CategoryDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::category::{CategoryRepository, CategorySlug};

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> ApplicationResult<Vec<CategoryDto>> {
        Ok(self.repo.list().await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> ApplicationResult<CategoryDto> {
        let slug = CategorySlug::new(slug)?;
        self.repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
