mod common;

use common::*;
use news_feed::builder::{article_slug, REQUIRED_FIELDS};
use news_feed::{ArticleRecordBuilder, FeedError};
use tracing::info;

#[test]
fn test_build_complete_article() -> news_feed::Result<()> {
    init_tracing();

    let source = article_source(
        "launch",
        "image_url: https://img.example.com/launch.png\nimage_alt: Rocket on the pad\n",
        "\nWe have **lift off**.\n\nMore *soon*.\n",
    );
    let article = ArticleRecordBuilder::new().build(&document("2024-03-01-launch.md", &source))?;

    info!("Built article: {:?}", article);
    assert_eq!(article.id, "2024-03-01-launch");
    assert_eq!(article.title, "launch");
    assert_eq!(article.description, "About launch");
    assert_eq!(article.author, "Jane Doe");
    assert_eq!(article.category, "Tech");
    assert_eq!(article.blog_url, "https://example.com/launch");
    assert_eq!(article.date, "2024-03-01");
    assert_eq!(article.image.url, "https://img.example.com/launch.png");
    assert_eq!(article.image.alt, "Rocket on the pad");
    assert_eq!(
        article.content,
        "<p>We have <strong>lift off</strong>.</p><p>More <em>soon</em>.\n</p>"
    );
    assert_eq!(article.read_time, 1);
    Ok(())
}

#[test]
fn test_missing_required_fields_are_reported() {
    init_tracing();

    for missing in REQUIRED_FIELDS {
        let source = article_source("post", "", "Body");
        let stripped: String = source
            .lines()
            .filter(|line| !line.starts_with(&format!("{}:", missing)))
            .map(|line| format!("{}\n", line))
            .collect();

        let result = ArticleRecordBuilder::new().build(&document("post.md", &stripped));
        match result {
            Err(FeedError::MissingField { field, path }) => {
                assert_eq!(field, missing);
                assert!(path.ends_with("post.md"));
            }
            other => panic!("expected missing '{}', got {:?}", missing, other),
        }
    }
}

#[test]
fn test_null_and_non_scalar_required_fields() {
    let source = "---\ntitle:\ndescription: d\nauthor: a\ncategory: c\nblog_url: u\n---\nBody";
    let result = ArticleRecordBuilder::new().build(&document("post.md", source));
    assert!(matches!(result, Err(FeedError::MissingField { ref field, .. }) if field == "title"));

    let source =
        "---\ntitle: t\ndescription: d\nauthor: [a, b]\ncategory: c\nblog_url: u\n---\nBody";
    let result = ArticleRecordBuilder::new().build(&document("post.md", source));
    assert!(matches!(result, Err(FeedError::InvalidField { ref field, .. }) if field == "author"));
}

#[test]
fn test_repeated_header_key_still_builds() -> news_feed::Result<()> {
    let source = article_source("post", "title: Renamed\n", "Body");
    let article = ArticleRecordBuilder::new().build(&document("post.md", &source))?;

    assert_eq!(article.title, "Renamed");
    assert_eq!(article.image.alt, "Renamed");
    Ok(())
}

#[test]
fn test_no_frontmatter_is_rejected() {
    let result = ArticleRecordBuilder::new().build(&document("plain.md", "Just text"));
    assert!(matches!(result, Err(FeedError::MissingField { ref field, .. }) if field == "title"));
}

#[test]
fn test_date_priority() -> news_feed::Result<()> {
    let builder = ArticleRecordBuilder::new();
    let with_date = article_source("post", "date: 2023-12-25\n", "Body");
    let without_date = article_source("post", "", "Body");

    // Filename prefix beats the header
    let article = builder.build(&document("2024-01-01-post.md", &with_date))?;
    assert_eq!(article.date, "2024-01-01");

    // Header beats the file timestamp
    let article = builder.build(&document("post.md", &with_date))?;
    assert_eq!(article.date, "2023-12-25");

    // File timestamp as the last resort
    let article = builder.build(&document("post.md", &without_date))?;
    assert_eq!(article.date, "2024-05-17");
    Ok(())
}

#[test]
fn test_read_time_priority() -> news_feed::Result<()> {
    let builder = ArticleRecordBuilder::new();
    let long_body = words(400);

    let explicit = article_source("post", "read_time: 7\n", &long_body);
    assert_eq!(builder.build(&document("post.md", &explicit))?.read_time, 7);

    let quoted = article_source("post", "read_time: \"5\"\n", &long_body);
    assert_eq!(builder.build(&document("post.md", &quoted))?.read_time, 5);

    // Zero is not truthy, so the estimate is used
    let zero = article_source("post", "read_time: 0\n", &long_body);
    assert_eq!(builder.build(&document("post.md", &zero))?.read_time, 2);

    let estimated = article_source("post", "", &long_body);
    assert_eq!(builder.build(&document("post.md", &estimated))?.read_time, 2);

    let short = article_source("post", "", &words(50));
    assert_eq!(builder.build(&document("post.md", &short))?.read_time, 1);

    // Reading speed is configurable
    let slow = ArticleRecordBuilder::new().with_words_per_minute(100);
    assert_eq!(slow.build(&document("post.md", &estimated))?.read_time, 4);
    Ok(())
}

#[test]
fn test_id_and_image_defaults() -> news_feed::Result<()> {
    let builder = ArticleRecordBuilder::new();

    let explicit = article_source("post", "id: custom-id\n", "Body");
    assert_eq!(builder.build(&document("2024-01-01-post.md", &explicit))?.id, "custom-id");

    let numeric = article_source("post", "id: 42\n", "Body");
    assert_eq!(builder.build(&document("post.md", &numeric))?.id, "42");

    let empty = article_source("post", "id: \"\"\n", "Body");
    assert_eq!(builder.build(&document("2024-01-01-post.md", &empty))?.id, "2024-01-01-post");

    let article = builder.build(&document("post.md", &article_source("post", "", "Body")))?;
    assert_eq!(article.image.url, "");
    assert_eq!(article.image.alt, "post");

    assert_eq!(article_slug("notes.md.md"), "notes.md");
    assert_eq!(article_slug("readme"), "readme");
    Ok(())
}
