use std::sync::Arc;

use crate::application::dto::TagDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::tag::{TagRepository, TagSlug};

pub struct TagQueryService {
    repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> ApplicationResult<Vec<TagDto>> {
        Ok(self.repo.list().await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> ApplicationResult<TagDto> {
        let slug = TagSlug::new(slug)?;
        self.repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("tag not found"))
    }
}
