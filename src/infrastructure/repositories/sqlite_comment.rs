use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentRepository, CommenterEmail, CommenterName, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use super::error::map_sqlx;

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    name: String,
    email: String,
    body: String,
    created_at: DateTime<Utc>,
    active: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            name: CommenterName::new(row.name)?,
            email: CommenterEmail::new(row.email)?,
            body: CommentBody::new(row.body)?,
            created_at: row.created_at,
            active: row.active != 0,
        })
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (post_id, name, email, body, created_at, active) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING id, post_id, name, email, body, created_at, active",
        )
        .bind(i64::from(comment.post_id))
        .bind(comment.name.as_str())
        .bind(comment.email.as_str())
        .bind(comment.body.as_str())
        .bind(comment.created_at)
        .bind(i64::from(comment.active))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, name, email, body, created_at, active FROM comments WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn set_active(&self, id: CommentId, active: bool) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET active = ? WHERE id = ? \
             RETURNING id, post_id, name, email, body, created_at, active",
        )
        .bind(i64::from(active))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn list_for_post(
        &self,
        post_id: PostId,
        only_active: bool,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        let active = only_active.then_some(true);
        self.list_filtered(Some(post_id), active, page, page_size)
            .await
    }

    async fn list_page(
        &self,
        active: Option<bool>,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        self.list_filtered(None, active, page, page_size).await
    }
}

impl SqliteCommentRepository {
    async fn list_filtered(
        &self,
        post_id: Option<PostId>,
        active: Option<bool>,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = i64::from(page - 1) * i64::from(page_size);

        fn apply_conditions(
            builder: &mut QueryBuilder<'_, Sqlite>,
            post_id: Option<PostId>,
            active: Option<bool>,
        ) {
            builder.push(" WHERE 1 = 1");
            if let Some(post_id) = post_id {
                builder.push(" AND post_id = ");
                builder.push_bind(i64::from(post_id));
            }
            if let Some(active) = active {
                builder.push(" AND active = ");
                builder.push_bind(i64::from(active));
            }
        }

        let mut list_builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, post_id, name, email, body, created_at, active FROM comments",
        );
        apply_conditions(&mut list_builder, post_id, active);
        // Conversation order: oldest first.
        list_builder.push(" ORDER BY created_at ASC, id ASC LIMIT ");
        list_builder.push_bind(i64::from(page_size));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(offset);

        let rows = list_builder
            .build_query_as::<CommentRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM comments");
        apply_conditions(&mut count_builder, post_id, active);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let comments = rows
            .into_iter()
            .map(Comment::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((comments, total.unsigned_abs()))
    }
}
