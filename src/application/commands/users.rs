use std::sync::Arc;

use crate::application::dto::UserDto;
use crate::application::error::ApplicationResult;
use crate::application::ports::time::Clock;
use crate::domain::user::{NewUser, UserId, UserRepository, Username};

pub struct UserCommandService {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_user(&self, username: String) -> ApplicationResult<UserDto> {
        let username = Username::new(username)?;
        let created = self
            .repo
            .insert(NewUser {
                username,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(user_id = i64::from(created.id), username = %created.username, "user created");
        Ok(created.into())
    }

    /// Cascades: the user's posts go with them, and each post takes its
    /// comments and tag associations.
    pub async fn delete_user(&self, id: i64) -> ApplicationResult<()> {
        let id = UserId::new(id)?;
        self.repo.delete(id).await?;
        tracing::info!(user_id = i64::from(id), "user deleted");
        Ok(())
    }
}
