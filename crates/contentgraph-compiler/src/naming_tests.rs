use contentgraph_core::{ContentTypeDescriptor, ModelKind};

use crate::naming::*;

fn article() -> ContentTypeDescriptor {
    ContentTypeDescriptor::new("api::article.article", "article", ModelKind::CollectionType)
}

#[test]
fn wrapper_names_derive_from_base() {
    let ct = article();
    assert_eq!(type_name(&ct), "Article");
    assert_eq!(entity_name(&ct), "ArticleEntity");
    assert_eq!(entity_response_name(&ct), "ArticleEntityResponse");
    assert_eq!(
        entity_response_collection_name(&ct),
        "ArticleEntityResponseCollection"
    );
    assert_eq!(filters_input_name(&ct), "ArticleFiltersInput");
    assert_eq!(queries_name(&ct), "ArticleQueries");
}

#[test]
fn base_name_is_singularized_model_name() {
    let ct = ContentTypeDescriptor::new("api::category.categories", "categories", ModelKind::CollectionType);
    assert_eq!(type_name(&ct), "Category");
    assert_eq!(find_one_query_name(&ct), "category");
    assert_eq!(find_query_name(&ct), "categories");
}

#[test]
fn declared_names_win() {
    let ct = ContentTypeDescriptor::new("api::person.person", "person", ModelKind::CollectionType)
        .names("teamMember", "teamMembersList");
    assert_eq!(type_name(&ct), "TeamMember");
    assert_eq!(find_one_query_name(&ct), "teamMember");
    assert_eq!(find_query_name(&ct), "teamMembersList");
}

#[test]
fn single_type_find_uses_singular() {
    let ct = ContentTypeDescriptor::new("api::home-page.home-page", "home-page", ModelKind::SingleType);
    assert_eq!(type_name(&ct), "HomePage");
    assert_eq!(find_query_name(&ct), "homePage");
}

#[test]
fn enum_names() {
    let ct = article();
    assert_eq!(enum_name(&ct, "status", None), "ENUM_ARTICLE_STATUS");
    assert_eq!(enum_name(&ct, "Status", None), "ENUM_ARTICLE_STATUS");
    assert_eq!(enum_name(&ct, "readingLevel", None), "ENUM_ARTICLE_READING_LEVEL");
    assert_eq!(enum_name(&ct, "reading_level", None), "ENUM_ARTICLE_READING_LEVEL");
    assert_eq!(enum_name(&ct, "status", Some("ArticleState")), "ArticleState");
}

#[test]
fn attribute_scoped_names() {
    let ct = article();
    assert_eq!(dynamic_zone_name(&ct, "blocks"), "ArticleBlocksDynamicZone");
    assert_eq!(
        dynamic_zone_input_name(&ct, "blocks"),
        "ArticleBlocksDynamicZoneInput"
    );
    assert_eq!(morph_name(&ct, "relatedItems"), "ArticleRelatedItemsMorph");
}

#[test]
fn scalar_filter_input_names() {
    assert_eq!(scalar_filter_input_name("String"), "StringFilterInput");
    assert_eq!(scalar_filter_input_name("DateTime"), "DateTimeFilterInput");
}

#[test]
fn enum_value_sanitization() {
    assert_eq!(enum_value_name("draft"), "draft");
    assert_eq!(enum_value_name("in-review"), "in_review");
    assert_eq!(enum_value_name("2024"), "_2024");
    assert_eq!(enum_value_name("a b"), "a_b");
    assert_eq!(enum_value_name(""), "_");
}
