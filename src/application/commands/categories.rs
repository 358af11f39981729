use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::util::SlugGenerator;
use crate::domain::category::{
    CategoryId, CategoryName, CategoryRepository, CategorySlug, CategoryUpdate, NewCategory,
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
}

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slugger: Arc<dyn SlugGenerator>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, slugger }
    }

    /// A blank slug is derived from the name. Collisions on either column
    /// surface as conflicts from the unique index; nothing is auto-resolved.
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<crate::application::dto::CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = self.resolve_slug(&name, command.slug)?;

        let created = self.repo.insert(NewCategory { name, slug }).await?;
        tracing::info!(category = %created.name, slug = %created.slug, "category created");
        Ok(created.into())
    }

    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<crate::application::dto::CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let mut update = CategoryUpdate::new(id);
        if let Some(name) = command.name {
            update = update.with_name(CategoryName::new(name)?);
        }
        if let Some(slug) = command.slug {
            update = update.with_slug(CategorySlug::new(slug)?);
        }
        Ok(self.repo.update(update).await?.into())
    }

    pub async fn delete_category(&self, id: i64) -> ApplicationResult<()> {
        let id = CategoryId::new(id)?;
        self.repo.delete(id).await?;
        tracing::info!(category_id = i64::from(id), "category deleted");
        Ok(())
    }

    fn resolve_slug(
        &self,
        name: &CategoryName,
        explicit: Option<String>,
    ) -> ApplicationResult<CategorySlug> {
        match explicit.filter(|s| !s.trim().is_empty()) {
            Some(value) => Ok(CategorySlug::new(value)?),
            None => {
                let derived = self.slugger.slugify(name.as_str());
                if derived.is_empty() {
                    return Err(ApplicationError::validation(
                        "could not derive a slug from the category name",
                    ));
                }
                Ok(CategorySlug::new(derived)?)
            }
        }
    }
}
