use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author_id: i64,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub cover: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            author_id: post.author_id.into(),
            category_id: post.category_id.map(Into::into),
            tag_ids: post.tag_ids.into_iter().map(Into::into).collect(),
            cover: post.cover,
            excerpt: post.excerpt.into(),
            content: post.content.into(),
            status: post.status.as_str().to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
