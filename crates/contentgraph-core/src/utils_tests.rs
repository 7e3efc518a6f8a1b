use crate::utils::{
    pluralize, singularize, to_camel_case, to_pascal_case, to_snake_case, to_upper_snake_case,
};

#[test]
fn pascal_case_from_snake() {
    assert_eq!(to_pascal_case("blog_post"), "BlogPost");
    assert_eq!(to_pascal_case("article"), "Article");
    assert_eq!(to_pascal_case("_article"), "Article");
    assert_eq!(to_pascal_case("article_"), "Article");
}

#[test]
fn pascal_case_from_camel() {
    assert_eq!(to_pascal_case("relatedArticles"), "RelatedArticles");
    assert_eq!(to_pascal_case("BlogPost"), "BlogPost");
    assert_eq!(to_pascal_case("QRow"), "QRow");
}

#[test]
fn pascal_case_normalizes_acronyms() {
    assert_eq!(to_pascal_case("SEO"), "Seo");
    assert_eq!(to_pascal_case("HTMLBlock"), "HtmlBlock");
    assert_eq!(to_pascal_case("FOO_BAR"), "FooBar");
}

#[test]
fn pascal_case_from_kebab_and_dotted() {
    assert_eq!(to_pascal_case("home-page"), "HomePage");
    assert_eq!(to_pascal_case("shared.seo"), "SharedSeo");
}

#[test]
fn pascal_case_keeps_digits_in_words() {
    assert_eq!(to_pascal_case("block2"), "Block2");
    assert_eq!(to_pascal_case("block2Text"), "Block2Text");
}

#[test]
fn camel_case() {
    assert_eq!(to_camel_case("Article"), "article");
    assert_eq!(to_camel_case("home-page"), "homePage");
    assert_eq!(to_camel_case("Blog Post"), "blogPost");
    assert_eq!(to_camel_case("blogPosts"), "blogPosts");
}

#[test]
fn snake_cases() {
    assert_eq!(to_snake_case("BlogPost"), "blog_post");
    assert_eq!(to_snake_case("home-page"), "home_page");
    assert_eq!(to_upper_snake_case("article"), "ARTICLE");
    assert_eq!(to_upper_snake_case("blogPost"), "BLOG_POST");
    assert_eq!(to_upper_snake_case("status"), "STATUS");
}

#[test]
fn singularize_regular() {
    assert_eq!(singularize("articles"), "article");
    assert_eq!(singularize("categories"), "category");
    assert_eq!(singularize("addresses"), "address");
    assert_eq!(singularize("boxes"), "box");
    assert_eq!(singularize("statuses"), "status");
}

#[test]
fn singularize_keeps_singulars() {
    assert_eq!(singularize("article"), "article");
    assert_eq!(singularize("status"), "status");
    assert_eq!(singularize("class"), "class");
    assert_eq!(singularize("analysis"), "analysis");
}

#[test]
fn singularize_irregular_and_uncountable() {
    assert_eq!(singularize("people"), "person");
    assert_eq!(singularize("movies"), "movie");
    assert_eq!(singularize("news"), "news");
    assert_eq!(singularize("seo"), "seo");
}

#[test]
fn singularize_last_word_only() {
    assert_eq!(singularize("blog_posts"), "blog_post");
    assert_eq!(singularize("blogPosts"), "blogPost");
    assert_eq!(singularize("BlogPosts"), "BlogPost");
}

#[test]
fn pluralize_rules() {
    assert_eq!(pluralize("article"), "articles");
    assert_eq!(pluralize("category"), "categories");
    assert_eq!(pluralize("day"), "days");
    assert_eq!(pluralize("address"), "addresses");
    assert_eq!(pluralize("church"), "churches");
    assert_eq!(pluralize("person"), "people");
    assert_eq!(pluralize("human"), "humans");
    assert_eq!(pluralize("homePage"), "homePages");
}
