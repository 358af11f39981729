use std::sync::Arc;

use super::normalize_paging;
use crate::application::dto::{CommentDto, Page};
use crate::application::error::ApplicationResult;
use crate::domain::comment::CommentRepository;
use crate::domain::post::PostId;

pub struct CommentQueryService {
    repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    /// Comments under a post, oldest first. Public callers pass
    /// `only_active = true`; the moderation queue passes false.
    pub async fn list_for_post(
        &self,
        post_id: i64,
        only_active: bool,
        page: u32,
        page_size: u32,
    ) -> ApplicationResult<Page<CommentDto>> {
        let post_id = PostId::new(post_id)?;
        let (page, page_size) = normalize_paging(page, page_size);
        let (records, total) = self
            .repo
            .list_for_post(post_id, only_active, page, page_size)
            .await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, page_size))
    }

    pub async fn list_comments(
        &self,
        active: Option<bool>,
        page: u32,
        page_size: u32,
    ) -> ApplicationResult<Page<CommentDto>> {
        let (page, page_size) = normalize_paging(page, page_size);
        let (records, total) = self.repo.list_page(active, page, page_size).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, page_size))
    }
}
