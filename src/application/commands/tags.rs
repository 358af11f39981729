use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::util::SlugGenerator;
use crate::domain::tag::{NewTag, TagId, TagName, TagRepository, TagSlug, TagUpdate};

pub struct CreateTagCommand {
    pub name: String,
    pub slug: Option<String>,
}

pub struct UpdateTagCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
}

pub struct TagCommandService {
    repo: Arc<dyn TagRepository>,
    slugger: Arc<dyn SlugGenerator>,
}

impl TagCommandService {
    pub fn new(repo: Arc<dyn TagRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, slugger }
    }

    pub async fn create_tag(
        &self,
        command: CreateTagCommand,
    ) -> ApplicationResult<crate::application::dto::TagDto> {
        let name = TagName::new(command.name)?;
        let slug = match command.slug.filter(|s| !s.trim().is_empty()) {
            Some(value) => TagSlug::new(value)?,
            None => {
                let derived = self.slugger.slugify(name.as_str());
                if derived.is_empty() {
                    return Err(ApplicationError::validation(
                        "could not derive a slug from the tag name",
                    ));
                }
                TagSlug::new(derived)?
            }
        };

        let created = self.repo.insert(NewTag { name, slug }).await?;
        tracing::info!(tag = %created.name, slug = %created.slug, "tag created");
        Ok(created.into())
    }

    pub async fn update_tag(
        &self,
        command: UpdateTagCommand,
    ) -> ApplicationResult<crate::application::dto::TagDto> {
        let id = TagId::new(command.id)?;
        let mut update = TagUpdate::new(id);
        if let Some(name) = command.name {
            update = update.with_name(TagName::new(name)?);
        }
        if let Some(slug) = command.slug {
            update = update.with_slug(TagSlug::new(slug)?);
        }
        Ok(self.repo.update(update).await?.into())
    }

    pub async fn delete_tag(&self, id: i64) -> ApplicationResult<()> {
        let id = TagId::new(id)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
