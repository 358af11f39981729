// Category and tag slug derivation: derived once when blank, manual
// overrides respected, collisions surfaced instead of disambiguated.
use std::sync::Arc;

mod support;

use kiji_core::application::commands::categories::{
    CategoryCommandService, CreateCategoryCommand, UpdateCategoryCommand,
};
use kiji_core::application::commands::tags::{CreateTagCommand, TagCommandService};
use kiji_core::application::error::ApplicationError;
use kiji_core::application::ports::util::SlugGenerator;
use kiji_core::domain::errors::DomainError;
use kiji_core::infrastructure::util::DefaultSlugGenerator;
use support::{InMemoryCategoryRepo, InMemoryTagRepo};

fn category_service() -> (Arc<InMemoryCategoryRepo>, CategoryCommandService) {
    let repo = Arc::new(InMemoryCategoryRepo::new());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let service = CategoryCommandService::new(repo.clone(), slugger);
    (repo, service)
}

fn tag_service() -> TagCommandService {
    let repo = Arc::new(InMemoryTagRepo::new());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    TagCommandService::new(repo, slugger)
}

#[tokio::test]
async fn category_slug_is_derived_from_name() {
    let (_, service) = category_service();
    let category = service
        .create_category(CreateCategoryCommand {
            name: "Software Engineering".into(),
            slug: None,
        })
        .await
        .unwrap();
    assert_eq!(category.slug, "software-engineering");
}

#[tokio::test]
async fn category_explicit_slug_is_respected() {
    let (_, service) = category_service();
    let category = service
        .create_category(CreateCategoryCommand {
            name: "Software Engineering".into(),
            slug: Some("eng".into()),
        })
        .await
        .unwrap();
    assert_eq!(category.slug, "eng");
}

#[tokio::test]
async fn category_slug_collision_is_a_conflict_not_a_rename() {
    let (_, service) = category_service();
    service
        .create_category(CreateCategoryCommand {
            name: "Rust & Systems".into(),
            slug: None,
        })
        .await
        .unwrap();

    // Distinct name, identical derived slug.
    let err = service
        .create_category(CreateCategoryCommand {
            name: "Rust Systems".into(),
            slug: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn category_duplicate_name_is_a_conflict() {
    let (_, service) = category_service();
    service
        .create_category(CreateCategoryCommand {
            name: "News".into(),
            slug: Some("news-one".into()),
        })
        .await
        .unwrap();
    let err = service
        .create_category(CreateCategoryCommand {
            name: "News".into(),
            slug: Some("news-two".into()),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn category_name_with_no_alphanumerics_is_rejected() {
    let (_, service) = category_service();
    let err = service
        .create_category(CreateCategoryCommand {
            name: "!!!".into(),
            slug: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn category_update_changes_only_given_fields() {
    let (_, service) = category_service();
    let created = service
        .create_category(CreateCategoryCommand {
            name: "News".into(),
            slug: None,
        })
        .await
        .unwrap();

    let updated = service
        .update_category(UpdateCategoryCommand {
            id: created.id,
            name: Some("World News".into()),
            slug: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "World News");
    // Slug stays what creation derived; renames never cascade.
    assert_eq!(updated.slug, "news");
}

#[tokio::test]
async fn tag_slug_is_derived_and_collisions_conflict() {
    let service = tag_service();
    let tag = service
        .create_tag(CreateTagCommand {
            name: "Async IO".into(),
            slug: None,
        })
        .await
        .unwrap();
    assert_eq!(tag.slug, "async-io");

    let err = service
        .create_tag(CreateTagCommand {
            name: "Async, IO".into(),
            slug: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn tag_name_over_forty_chars_is_rejected() {
    let service = tag_service();
    let err = service
        .create_tag(CreateTagCommand {
            name: "x".repeat(41),
            slug: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}
