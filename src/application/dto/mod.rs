pub mod categories;
pub mod comments;
pub mod pagination;
pub mod posts;
pub mod tags;
pub mod users;

pub use categories::CategoryDto;
pub use comments::CommentDto;
pub use pagination::Page;
pub use posts::PostDto;
pub use tags::TagDto;
pub use users::UserDto;
