// src/domain/post/services.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{POST_SLUG_MAX, PostId, PostSlug, PostTitle};

// Leave room for a numeric suffix when truncating a derived base.
const SUFFIX_HEADROOM: usize = 12;

/// Domain service responsible for producing unique slugs for posts.
///
/// The existence check consults persisted posts only; concurrent writers
/// are caught by the unique index and retried by the caller.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl PostSlugService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
        }
    }

    /// Resolve the slug for a post. An explicit slug is validated and
    /// returned untouched; otherwise one is derived from the title and
    /// disambiguated with `-2`, `-3`, ... until unused.
    pub async fn resolve(
        &self,
        title: &PostTitle,
        explicit: Option<String>,
        ignore_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        if let Some(value) = explicit {
            return PostSlug::new(value);
        }

        let base = self.derive_base(title.as_str());
        let mut candidate = base.clone();
        let mut counter = 2u64;

        loop {
            let slug = PostSlug::new(candidate)?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id == Some(existing.id) => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }

    fn derive_base(&self, title: &str) -> String {
        let base = self.generator.slugify(title);
        if base.is_empty() {
            // Titles with no alphanumeric content (pure punctuation) fall
            // back to a timestamped token.
            return format!("post-{}", self.clock.now().timestamp());
        }
        if base.len() > POST_SLUG_MAX - SUFFIX_HEADROOM {
            base[..POST_SLUG_MAX - SUFFIX_HEADROOM]
                .trim_end_matches('-')
                .to_string()
        } else {
            base
        }
    }
}
