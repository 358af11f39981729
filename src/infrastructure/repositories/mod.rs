// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_category;
mod sqlite_comment;
mod sqlite_post;
mod sqlite_tag;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_comment::SqliteCommentRepository;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
pub use sqlite_tag::SqliteTagRepository;
pub use sqlite_user::SqliteUserRepository;
