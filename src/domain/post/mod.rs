pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use repository::{PostListFilter, PostReadRepository, PostWriteRepository};
pub use services::PostSlugService;
pub use value_objects::{PostContent, PostExcerpt, PostId, PostSlug, PostStatus, PostTitle};
