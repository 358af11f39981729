use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug, PostStatus};
use crate::domain::tag::TagId;
use async_trait::async_trait;

/// Listing conditions for the admin surface: status, taxonomy, and
/// chronological drill-down filters plus free-text search over
/// title, content, and excerpt.
#[derive(Debug, Clone, Default)]
pub struct PostListFilter {
    pub status: Option<PostStatus>,
    pub category_id: Option<CategoryId>,
    pub tag_id: Option<TagId>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub search: Option<String>,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    /// Deleting a post cascades to its comments and tag associations.
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    /// Newest first. Returns the page plus the total match count.
    async fn list_page(
        &self,
        filter: &PostListFilter,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Post>, u64)>;
}
