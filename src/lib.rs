//! Blog content backend: posts, categories, tags, and moderated comments.
//!
//! The crate is a library; routing, templating, and the admin UI itself are
//! supplied by the embedding application. See [`presentation::admin`] for
//! the metadata those outer layers consume.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
