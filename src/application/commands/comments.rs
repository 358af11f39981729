use std::sync::Arc;

use crate::application::dto::CommentDto;
use crate::application::error::ApplicationResult;
use crate::application::forms::comment::CommentSubmission;
use crate::application::ports::time::Clock;
use crate::domain::comment::{CommentId, CommentRepository, NewComment};
use crate::domain::post::PostId;

pub struct CommentCommandService {
    repo: Arc<dyn CommentRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(repo: Arc<dyn CommentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Accepts a validated public-form submission. New comments start
    /// active; moderation happens after the fact.
    pub async fn submit_comment(
        &self,
        post_id: i64,
        submission: CommentSubmission,
    ) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(post_id)?;
        let created = self
            .repo
            .insert(NewComment {
                post_id,
                name: submission.name,
                email: submission.email,
                body: submission.body,
                created_at: self.clock.now(),
                active: true,
            })
            .await?;
        tracing::info!(
            comment_id = i64::from(created.id),
            post_id = i64::from(post_id),
            "comment submitted"
        );
        Ok(created.into())
    }

    pub async fn set_active(&self, id: i64, active: bool) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(id)?;
        let updated = self.repo.set_active(id, active).await?;
        tracing::info!(comment_id = i64::from(id), active, "comment moderated");
        Ok(updated.into())
    }

    pub async fn delete_comment(&self, id: i64) -> ApplicationResult<()> {
        let id = CommentId::new(id)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
