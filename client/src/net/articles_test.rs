use super::*;

#[test]
fn articles_path_without_filters() {
    assert_eq!(articles_path(&ArticleQuery::default()), "/api/articles");
}

#[test]
fn articles_path_blank_search_is_omitted() {
    let query = ArticleQuery {
        search: "   ".to_owned(),
        category: None,
    };
    assert_eq!(articles_path(&query), "/api/articles");
}

#[test]
fn articles_path_encodes_search_and_category() {
    let query = ArticleQuery {
        search: " async rust & tokio ".to_owned(),
        category: Some(ArticleCategory::Backend),
    };
    assert_eq!(
        articles_path(&query),
        "/api/articles?search=async+rust+%26+tokio&category=BACKEND"
    );
}

#[test]
fn articles_path_category_only() {
    let query = ArticleQuery {
        search: String::new(),
        category: Some(ArticleCategory::Ai),
    };
    assert_eq!(articles_path(&query), "/api/articles?category=AI");
}

#[test]
fn article_path_formats_id() {
    assert_eq!(article_path(42), "/api/articles/42");
}

#[test]
fn calls_are_unavailable_off_browser() {
    let result = futures::executor::block_on(get_article(1));
    assert_eq!(result, Err(ApiError::Unavailable));
}
