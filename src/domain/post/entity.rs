// src/domain/post/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::post::value_objects::{
    PostContent, PostExcerpt, PostId, PostSlug, PostStatus, PostTitle,
};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub cover: Option<String>,
    pub excerpt: PostExcerpt,
    pub content: PostContent,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub cover: Option<String>,
    pub excerpt: PostExcerpt,
    pub content: PostContent,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update. Outer `None` leaves a field untouched; for nullable
/// fields the inner option carries the new value, so `Some(None)` clears.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub category_id: Option<Option<CategoryId>>,
    pub tag_ids: Option<Vec<TagId>>,
    pub cover: Option<Option<String>>,
    pub excerpt: Option<PostExcerpt>,
    pub content: Option<PostContent>,
    pub status: Option<PostStatus>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            category_id: None,
            tag_ids: None,
            cover: None,
            excerpt: None,
            content: None,
            status: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    pub fn with_cover(mut self, cover: Option<String>) -> Self {
        self.cover = Some(cover);
        self
    }

    pub fn with_excerpt(mut self, excerpt: PostExcerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.category_id.is_none()
            && self.tag_ids.is_none()
            && self.cover.is_none()
            && self.excerpt.is_none()
            && self.content.is_none()
            && self.status.is_none()
    }
}
