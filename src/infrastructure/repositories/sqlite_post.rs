use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostExcerpt, PostId, PostListFilter, PostReadRepository, PostSlug,
    PostStatus, PostTitle, PostUpdate, PostWriteRepository,
};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use super::error::map_sqlx;

const POST_COLUMNS: &str =
    "id, title, slug, author_id, category_id, cover, excerpt, content, status, created_at, updated_at";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    author_id: i64,
    category_id: Option<i64>,
    cover: Option<String>,
    excerpt: String,
    content: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, tag_ids: Vec<TagId>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            slug: PostSlug::new(self.slug)?,
            author_id: UserId::new(self.author_id)?,
            category_id: self.category_id.map(CategoryId::new).transpose()?,
            tag_ids,
            cover: self.cover,
            excerpt: PostExcerpt::new(self.excerpt)?,
            content: PostContent::new(self.content)?,
            status: PostStatus::parse(&self.status)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

async fn load_tag_ids<'e, E>(executor: E, post_id: i64) -> DomainResult<Vec<TagId>>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let ids: Vec<i64> =
        sqlx::query_scalar("SELECT tag_id FROM post_tags WHERE post_id = ? ORDER BY tag_id")
            .bind(post_id)
            .fetch_all(executor)
            .await
            .map_err(map_sqlx)?;

    ids.into_iter().map(TagId::new).collect()
}

async fn replace_tags(
    tx: &mut sqlx::Transaction<'_, Sqlite>,
    post_id: i64,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
        .bind(post_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;

    for tag_id in tag_ids {
        sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES (?, ?)")
            .bind(post_id)
            .bind(i64::from(*tag_id))
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, slug, author_id, category_id, cover, excerpt, content, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, title, slug, author_id, category_id, cover, excerpt, content, status, created_at, updated_at",
        )
        .bind(post.title.as_str())
        .bind(post.slug.as_str())
        .bind(i64::from(post.author_id))
        .bind(post.category_id.map(i64::from))
        .bind(post.cover.as_deref())
        .bind(post.excerpt.as_str())
        .bind(post.content.as_str())
        .bind(post.status.as_str())
        .bind(post.created_at)
        .bind(post.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tags(&mut tx, row.id, &post.tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(post.tag_ids)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(update.updated_at);
        if let Some(title) = &update.title {
            builder.push(", title = ");
            builder.push_bind(title.as_str());
        }
        if let Some(slug) = &update.slug {
            builder.push(", slug = ");
            builder.push_bind(slug.as_str());
        }
        if let Some(category_id) = &update.category_id {
            builder.push(", category_id = ");
            builder.push_bind(category_id.map(i64::from));
        }
        if let Some(cover) = &update.cover {
            builder.push(", cover = ");
            builder.push_bind(cover.as_deref());
        }
        if let Some(excerpt) = &update.excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt.as_str());
        }
        if let Some(content) = &update.content {
            builder.push(", content = ");
            builder.push_bind(content.as_str());
        }
        if let Some(status) = update.status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(tag_ids) = &update.tag_ids {
            replace_tags(&mut tx, row.id, tag_ids).await?;
        }
        let tag_ids = load_tag_ids(&mut *tx, row.id).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(tag_ids)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

fn apply_conditions(builder: &mut QueryBuilder<'_, Sqlite>, filter: &PostListFilter) {
    builder.push(" WHERE 1 = 1");
    if let Some(status) = filter.status {
        builder.push(" AND status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(category_id) = filter.category_id {
        builder.push(" AND category_id = ");
        builder.push_bind(i64::from(category_id));
    }
    if let Some(tag_id) = filter.tag_id {
        builder.push(" AND EXISTS (SELECT 1 FROM post_tags WHERE post_tags.post_id = posts.id AND post_tags.tag_id = ");
        builder.push_bind(i64::from(tag_id));
        builder.push(")");
    }
    if let Some(year) = filter.year {
        builder.push(" AND strftime('%Y', created_at) = ");
        builder.push_bind(format!("{year:04}"));
    }
    if let Some(month) = filter.month {
        builder.push(" AND strftime('%m', created_at) = ");
        builder.push_bind(format!("{month:02}"));
    }
    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{search}%");
        builder.push(" AND (title LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR content LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR excerpt LIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, author_id, category_id, cover, excerpt, content, status, created_at, updated_at FROM posts WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let tag_ids = load_tag_ids(&*self.pool, row.id).await?;
                Ok(Some(row.into_post(tag_ids)?))
            }
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, author_id, category_id, cover, excerpt, content, status, created_at, updated_at FROM posts WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let tag_ids = load_tag_ids(&*self.pool, row.id).await?;
                Ok(Some(row.into_post(tag_ids)?))
            }
            None => Ok(None),
        }
    }

    async fn list_page(
        &self,
        filter: &PostListFilter,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = i64::from(page - 1) * i64::from(page_size);

        let mut list_builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {POST_COLUMNS} FROM posts"
        ));
        apply_conditions(&mut list_builder, filter);
        list_builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        list_builder.push_bind(i64::from(page_size));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(offset);

        let rows = list_builder
            .build_query_as::<PostRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM posts");
        apply_conditions(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut posts = Vec::with_capacity(rows.len());
        for row in rows {
            let tag_ids = load_tag_ids(&*self.pool, row.id).await?;
            posts.push(row.into_post(tag_ids)?);
        }

        Ok((posts, total.unsigned_abs()))
    }
}
