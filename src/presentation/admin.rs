// src/presentation/admin.rs
//
// Declarative configuration for an external admin-generation framework:
// which columns to list, which fields to filter and search on, and which
// related records to edit inline. Nothing here executes queries.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PrepopulatedField {
    pub field: &'static str,
    pub source: &'static str,
}

/// Inline nested editor for a related model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InlineModel {
    pub model: &'static str,
    pub min_num: Option<u32>,
    pub max_num: Option<u32>,
    pub extra: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdminModel {
    pub model: &'static str,
    pub list_display: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    pub prepopulated_fields: &'static [PrepopulatedField],
    pub autocomplete_fields: &'static [&'static str],
    pub date_hierarchy: Option<&'static str>,
    pub ordering: &'static [&'static str],
    pub inlines: &'static [InlineModel],
}

const TAG_INLINE: InlineModel = InlineModel {
    model: "tag",
    min_num: Some(3),
    max_num: Some(20),
    extra: 1,
};

const POST_INLINE: InlineModel = InlineModel {
    model: "post",
    min_num: Some(3),
    max_num: Some(20),
    extra: 1,
};

const COMMENT_INLINE: InlineModel = InlineModel {
    model: "comment",
    min_num: None,
    max_num: None,
    extra: 0,
};

pub const POST_ADMIN: AdminModel = AdminModel {
    model: "post",
    list_display: &["title", "author", "status", "created_at"],
    list_filter: &["status", "created_at", "category", "tags"],
    search_fields: &["title", "content", "excerpt"],
    prepopulated_fields: &[PrepopulatedField {
        field: "slug",
        source: "title",
    }],
    autocomplete_fields: &["tags"],
    date_hierarchy: Some("created_at"),
    ordering: &["-created_at"],
    inlines: &[COMMENT_INLINE, TAG_INLINE],
};

pub const CATEGORY_ADMIN: AdminModel = AdminModel {
    model: "category",
    list_display: &["name", "slug"],
    list_filter: &[],
    search_fields: &[],
    prepopulated_fields: &[PrepopulatedField {
        field: "slug",
        source: "name",
    }],
    autocomplete_fields: &[],
    date_hierarchy: None,
    ordering: &["name"],
    inlines: &[],
};

pub const TAG_ADMIN: AdminModel = AdminModel {
    model: "tag",
    list_display: &["name", "slug"],
    list_filter: &[],
    search_fields: &["name"],
    prepopulated_fields: &[PrepopulatedField {
        field: "slug",
        source: "name",
    }],
    autocomplete_fields: &[],
    date_hierarchy: None,
    ordering: &["name"],
    inlines: &[POST_INLINE],
};

pub const COMMENT_ADMIN: AdminModel = AdminModel {
    model: "comment",
    list_display: &["post", "name", "active", "created_at"],
    list_filter: &["active", "created_at"],
    search_fields: &["name", "email", "body"],
    prepopulated_fields: &[],
    autocomplete_fields: &[],
    date_hierarchy: None,
    ordering: &["created_at"],
    inlines: &[],
};

pub fn registry() -> &'static [AdminModel] {
    &[POST_ADMIN, CATEGORY_ADMIN, TAG_ADMIN, COMMENT_ADMIN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_all_models() {
        let models: Vec<&str> = registry().iter().map(|m| m.model).collect();
        assert_eq!(models, vec!["post", "category", "tag", "comment"]);
    }

    #[test]
    fn post_admin_matches_listing_contract() {
        assert_eq!(
            POST_ADMIN.list_display,
            &["title", "author", "status", "created_at"]
        );
        assert_eq!(POST_ADMIN.date_hierarchy, Some("created_at"));
        assert_eq!(POST_ADMIN.ordering, &["-created_at"]);
        assert_eq!(POST_ADMIN.inlines.len(), 2);
    }

    #[test]
    fn tag_association_editor_is_bounded() {
        let inline = POST_ADMIN
            .inlines
            .iter()
            .find(|i| i.model == "tag")
            .unwrap();
        assert_eq!(inline.min_num, Some(3));
        assert_eq!(inline.max_num, Some(20));
    }

    #[test]
    fn metadata_serializes_for_external_consumers() {
        let json = serde_json::to_value(registry()).unwrap();
        assert_eq!(json[0]["model"], "post");
        assert_eq!(json[0]["list_filter"][3], "tags");
        assert_eq!(json[3]["search_fields"][1], "email");
    }
}
