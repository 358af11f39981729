use std::sync::Arc;

use super::normalize_paging;
use crate::application::dto::{Page, PostDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::forms::search::SearchQuery;
use crate::domain::category::CategoryId;
use crate::domain::post::{PostListFilter, PostReadRepository, PostSlug, PostStatus};
use crate::domain::tag::TagId;

/// Admin listing parameters: status/taxonomy filters, chronological
/// drill-down on the creation date, and free-text search.
#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub status: Option<String>,
    pub category_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub search: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

pub struct PostQueryService {
    read_repo: Arc<dyn PostReadRepository>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_by_slug(&self, slug: &str) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Page<PostDto>> {
        let (page, page_size) = normalize_paging(query.page, query.page_size);

        if query.month.is_some_and(|month| !(1..=12).contains(&month)) {
            return Err(ApplicationError::validation("month must be 1..=12"));
        }

        let filter = PostListFilter {
            status: query.status.as_deref().map(PostStatus::parse).transpose()?,
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            tag_id: query.tag_id.map(TagId::new).transpose()?,
            year: query.year,
            month: query.month,
            search: normalize_search(query.search),
        };

        let (records, total) = self.read_repo.list_page(&filter, page, page_size).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, page_size))
    }

    /// Public search box: published posts only, matched against title,
    /// content, and excerpt.
    pub async fn search_published(
        &self,
        query: SearchQuery,
        page: u32,
        page_size: u32,
    ) -> ApplicationResult<Page<PostDto>> {
        let (page, page_size) = normalize_paging(page, page_size);
        let filter = PostListFilter {
            status: Some(PostStatus::Published),
            search: query.q,
            ..PostListFilter::default()
        };

        let (records, total) = self.read_repo.list_page(&filter, page, page_size).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, page_size))
    }
}

fn normalize_search(search: Option<String>) -> Option<String> {
    search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
