// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;

use kiji_core::application::ports::time::Clock;
use kiji_core::domain::category::{
    Category, CategoryId, CategoryRepository, CategorySlug, CategoryUpdate, NewCategory,
};
use kiji_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use kiji_core::domain::errors::{DomainError, DomainResult};
use kiji_core::domain::post::{
    NewPost, Post, PostId, PostListFilter, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository,
};
use kiji_core::domain::tag::{NewTag, Tag, TagId, TagRepository, TagSlug, TagUpdate};

pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

/// Deterministic clock that tests can advance between writes.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(*FIXED_NOW),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Default)]
pub struct InMemoryPostRepo {
    inner: Mutex<HashMap<i64, Post>>,
    next_id: Mutex<i64>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Post> {
        self.inner.lock().unwrap().values().cloned().collect()
    }

    fn sorted(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.inner.lock().unwrap().values().cloned().collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        posts
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut map = self.inner.lock().unwrap();
        if map.values().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict("post slug already exists".into()));
        }
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let stored = Post {
            id: PostId::new(*next)?,
            title: post.title,
            slug: post.slug,
            author_id: post.author_id,
            category_id: post.category_id,
            tag_ids: post.tag_ids,
            cover: post.cover,
            excerpt: post.excerpt,
            content: post.content,
            status: post.status,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        map.insert(*next, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut map = self.inner.lock().unwrap();
        if let Some(slug) = &update.slug {
            let id = i64::from(update.id);
            if map
                .values()
                .any(|p| p.slug == *slug && i64::from(p.id) != id)
            {
                return Err(DomainError::Conflict("post slug already exists".into()));
            }
        }
        let post = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(category_id) = update.category_id {
            post.category_id = category_id;
        }
        if let Some(tag_ids) = update.tag_ids {
            post.tag_ids = tag_ids;
        }
        if let Some(cover) = update.cover {
            post.cover = cover;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(status) = update.status {
            post.status = status;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|p| p.slug == *slug)
            .cloned())
    }

    async fn list_page(
        &self,
        filter: &PostListFilter,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let matches = |post: &Post| -> bool {
            if let Some(status) = filter.status {
                if post.status != status {
                    return false;
                }
            }
            if let Some(category_id) = filter.category_id {
                if post.category_id != Some(category_id) {
                    return false;
                }
            }
            if let Some(tag_id) = filter.tag_id {
                if !post.tag_ids.contains(&tag_id) {
                    return false;
                }
            }
            if let Some(year) = filter.year {
                if chrono::Datelike::year(&post.created_at) != year {
                    return false;
                }
            }
            if let Some(month) = filter.month {
                if chrono::Datelike::month(&post.created_at) != month {
                    return false;
                }
            }
            if let Some(search) = filter.search.as_deref() {
                let needle = search.to_lowercase();
                let haystacks = [
                    post.title.as_str().to_lowercase(),
                    post.content.as_str().to_lowercase(),
                    post.excerpt.as_str().to_lowercase(),
                ];
                if !haystacks.iter().any(|h| h.contains(&needle)) {
                    return false;
                }
            }
            true
        };

        let filtered: Vec<Post> = self.sorted().into_iter().filter(|p| matches(p)).collect();
        let total = filtered.len() as u64;
        let start = ((page.max(1) - 1) * page_size.max(1)) as usize;
        let items = filtered
            .into_iter()
            .skip(start)
            .take(page_size.max(1) as usize)
            .collect();
        Ok((items, total))
    }
}

/// Write repository that rejects the first insert with a slug conflict,
/// mimicking a concurrent writer winning the unique index race.
pub struct ConflictOncePostRepo {
    inner: Arc<InMemoryPostRepo>,
    tripped: AtomicBool,
}

impl ConflictOncePostRepo {
    pub fn new(inner: Arc<InMemoryPostRepo>) -> Self {
        Self {
            inner,
            tripped: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl PostWriteRepository for ConflictOncePostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        if !self.tripped.swap(true, Ordering::SeqCst) {
            return Err(DomainError::Conflict("post slug already exists".into()));
        }
        self.inner.insert(post).await
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepo {
    inner: Mutex<HashMap<i64, Category>>,
    next_id: Mutex<i64>,
}

impl InMemoryCategoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut map = self.inner.lock().unwrap();
        if map.values().any(|c| c.name == category.name) {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        if map.values().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let stored = Category {
            id: CategoryId::new(*next)?,
            name: category.name,
            slug: category.slug,
        };
        map.insert(*next, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut map = self.inner.lock().unwrap();
        let category = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|c| c.slug == *slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.inner.lock().unwrap().values().cloned().collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

#[derive(Default)]
pub struct InMemoryTagRepo {
    inner: Mutex<HashMap<i64, Tag>>,
    next_id: Mutex<i64>,
}

impl InMemoryTagRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut map = self.inner.lock().unwrap();
        if map.values().any(|t| t.name == tag.name) {
            return Err(DomainError::Conflict("tag name already exists".into()));
        }
        if map.values().any(|t| t.slug == tag.slug) {
            return Err(DomainError::Conflict("tag slug already exists".into()));
        }
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let stored = Tag {
            id: TagId::new(*next)?,
            name: tag.name,
            slug: tag.slug,
        };
        map.insert(*next, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<Tag> {
        let mut map = self.inner.lock().unwrap();
        let tag = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;
        if let Some(name) = update.name {
            tag.name = name;
        }
        if let Some(slug) = update.slug {
            tag.slug = slug;
        }
        Ok(tag.clone())
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &TagSlug) -> DomainResult<Option<Tag>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|t| t.slug == *slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let mut tags: Vec<Tag> = self.inner.lock().unwrap().values().cloned().collect();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(tags)
    }
}

#[derive(Default)]
pub struct InMemoryCommentRepo {
    inner: Mutex<HashMap<i64, Comment>>,
    next_id: Mutex<i64>,
}

impl InMemoryCommentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    fn sorted(&self) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self.inner.lock().unwrap().values().cloned().collect();
        comments.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(i64::from(a.id).cmp(&i64::from(b.id)))
        });
        comments
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut map = self.inner.lock().unwrap();
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let stored = Comment {
            id: CommentId::new(*next)?,
            post_id: comment.post_id,
            name: comment.name,
            email: comment.email,
            body: comment.body,
            created_at: comment.created_at,
            active: comment.active,
        };
        map.insert(*next, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn set_active(&self, id: CommentId, active: bool) -> DomainResult<Comment> {
        let mut map = self.inner.lock().unwrap();
        let comment = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.active = active;
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }

    async fn list_for_post(
        &self,
        post_id: kiji_core::domain::post::PostId,
        only_active: bool,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        let filtered: Vec<Comment> = self
            .sorted()
            .into_iter()
            .filter(|c| c.post_id == post_id && (!only_active || c.active))
            .collect();
        Ok(paginate(filtered, page, page_size))
    }

    async fn list_page(
        &self,
        active: Option<bool>,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        let filtered: Vec<Comment> = self
            .sorted()
            .into_iter()
            .filter(|c| active.is_none_or(|a| c.active == a))
            .collect();
        Ok(paginate(filtered, page, page_size))
    }
}

fn paginate<T>(items: Vec<T>, page: u32, page_size: u32) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let start = ((page.max(1) - 1) * page_size.max(1)) as usize;
    let page_items = items
        .into_iter()
        .skip(start)
        .take(page_size.max(1) as usize)
        .collect();
    (page_items, total)
}
