// src/application/forms/search.rs
use serde::Deserialize;

use super::FormErrors;

pub const SEARCH_QUERY_MAX: usize = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    pub q: Option<String>,
}

/// Validated search input. A blank or missing query becomes `None`; the
/// matching strategy itself belongs to the persistence layer.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchForm {
    pub fn validate(self) -> Result<SearchQuery, FormErrors> {
        let q = self
            .q
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());

        if q.as_deref()
            .is_some_and(|q| q.chars().count() > SEARCH_QUERY_MAX)
        {
            let mut errors = FormErrors::default();
            errors.push(
                "q",
                format!("query must be {SEARCH_QUERY_MAX} characters or fewer"),
            );
            return Err(errors);
        }

        Ok(SearchQuery { q })
    }
}
