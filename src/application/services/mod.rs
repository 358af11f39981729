// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, comments::CommentCommandService,
            posts::PostCommandService, tags::TagCommandService, users::UserCommandService,
        },
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            categories::CategoryQueryService, comments::CommentQueryService,
            posts::PostQueryService, tags::TagQueryService,
        },
    },
    domain::{
        category::CategoryRepository,
        comment::CommentRepository,
        post::{PostReadRepository, PostSlugService, PostWriteRepository},
        tag::TagRepository,
        user::UserRepository,
    },
};

/// One-stop wiring of every command and query service over a shared set of
/// repositories and ports. The embedding application builds this once at
/// startup and hands out the `Arc`s.
pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub tag_commands: Arc<TagCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub user_commands: Arc<UserCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub tag_queries: Arc<TagQueryService>,
    pub post_queries: Arc<PostQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slugger),
        ));
        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&tag_repo),
            Arc::clone(&slugger),
        ));
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&clock),
        ));
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&tag_repo)));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_repo)));

        Self {
            category_commands,
            tag_commands,
            post_commands,
            comment_commands,
            user_commands,
            category_queries,
            tag_queries,
            post_queries,
            comment_queries,
        }
    }
}
