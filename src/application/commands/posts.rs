use std::sync::Arc;

use crate::application::dto::PostDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainError;
use crate::domain::post::{
    NewPost, PostContent, PostExcerpt, PostId, PostReadRepository, PostSlug, PostSlugService,
    PostStatus, PostTitle, PostUpdate, PostWriteRepository,
};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;

// Two concurrent creates with the same title can both resolve the same
// slug; the unique index catches the loser, which regenerates and retries.
const MAX_SLUG_ATTEMPTS: u32 = 3;

pub struct CreatePostCommand {
    pub title: String,
    pub slug: Option<String>,
    pub author_id: i64,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub cover: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub status: PostStatus,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    author_id: Option<i64>,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
    cover: Option<String>,
    excerpt: String,
    content: Option<String>,
    status: Option<PostStatus>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tag_ids(mut self, tag_ids: Vec<i64>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    pub fn cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            author_id: self.author_id.ok_or("author_id is required")?,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
            cover: self.cover,
            excerpt: self.excerpt,
            content: self.content.ok_or("content is required")?,
            status: self.status.unwrap_or_default(),
        })
    }
}

/// Partial update. `category_id` and `cover` use a double option so the
/// caller can clear them without a dedicated command.
#[derive(Default)]
pub struct UpdatePostCommand {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<Option<i64>>,
    pub tag_ids: Option<Vec<i64>>,
    pub cover: Option<Option<String>>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
}

pub struct PostCommandService {
    write_repo: Arc<dyn PostWriteRepository>,
    read_repo: Arc<dyn PostReadRepository>,
    slug_service: Arc<PostSlugService>,
    clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let author_id = UserId::new(command.author_id)?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;
        let tag_ids = parse_tag_ids(command.tag_ids)?;
        let excerpt = PostExcerpt::new(command.excerpt)?;
        let content = PostContent::new(command.content)?;

        let explicit = command.slug.filter(|s| !s.trim().is_empty());
        let has_explicit_slug = explicit.is_some();
        if let Some(value) = &explicit {
            // Fail fast before touching the repository.
            PostSlug::new(value.clone())?;
        }

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let slug = self
                .slug_service
                .resolve(&title, explicit.clone(), None)
                .await?;
            let now = self.clock.now();

            let new_post = NewPost {
                title: title.clone(),
                slug,
                author_id,
                category_id,
                tag_ids: tag_ids.clone(),
                cover: command.cover.clone(),
                excerpt: excerpt.clone(),
                content: content.clone(),
                status: command.status,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_post).await {
                Ok(created) => {
                    tracing::info!(post_id = i64::from(created.id), slug = %created.slug, "post created");
                    return Ok(created.into());
                }
                Err(DomainError::Conflict(_))
                    if !has_explicit_slug && attempts < MAX_SLUG_ATTEMPTS =>
                {
                    // Lost a race on the slug index; resolve again against
                    // the now-visible winner.
                    tracing::warn!(attempts, title = %title, "slug conflict on insert, regenerating");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// A changed title never regenerates the slug; only an explicit slug
    /// in the command replaces it.
    pub async fn update_post(
        &self,
        id: i64,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let mut update = PostUpdate::new(id, self.clock.now());
        if let Some(title) = command.title {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(slug) = command.slug {
            update = update.with_slug(PostSlug::new(slug)?);
        }
        if let Some(category) = command.category_id {
            update = update.with_category(category.map(CategoryId::new).transpose()?);
        }
        if let Some(tag_ids) = command.tag_ids {
            update = update.with_tags(parse_tag_ids(tag_ids)?);
        }
        if let Some(cover) = command.cover {
            update = update.with_cover(cover);
        }
        if let Some(excerpt) = command.excerpt {
            update = update.with_excerpt(PostExcerpt::new(excerpt)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(PostContent::new(content)?);
        }
        if let Some(status) = command.status {
            update = update.with_status(status);
        }

        if update.is_noop() {
            return Err(ApplicationError::validation("nothing to update"));
        }

        Ok(self.write_repo.update(update).await?.into())
    }

    pub async fn delete_post(&self, id: i64) -> ApplicationResult<()> {
        let id = PostId::new(id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(post_id = i64::from(id), "post deleted");
        Ok(())
    }
}

fn parse_tag_ids(raw: Vec<i64>) -> ApplicationResult<Vec<TagId>> {
    let mut tag_ids = Vec::with_capacity(raw.len());
    for id in raw {
        let tag_id = TagId::new(id)?;
        if !tag_ids.contains(&tag_id) {
            tag_ids.push(tag_id);
        }
    }
    Ok(tag_ids)
}
