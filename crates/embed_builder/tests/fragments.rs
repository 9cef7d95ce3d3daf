use embed_builder::limits::{AUTHOR_NAME_LIMIT, FIELD_VALUE_LIMIT};
use embed_builder::{AuthorBuilder, BuilderError, FieldBuilder, ImageBuilder, ProviderBuilder, VideoBuilder};

#[test]
fn test_field_builder() {
    let mut field = FieldBuilder::new();
    field.set_name("name").set_value("value").inline();

    let (raw, errs) = field.finalize();
    assert_eq!(raw.name, "name");
    assert_eq!(raw.value, "value");
    assert!(raw.inline);
    assert!(errs.is_none());

    let over = "x".repeat(FIELD_VALUE_LIMIT + 1);
    let mut field = FieldBuilder::new();
    field.set_name("name").set_value(over.as_str()).outline();

    let (raw, errs) = field.finalize();
    assert_eq!(raw.value, "");
    assert!(!raw.inline);
    assert!(matches!(
        errs.unwrap()[0],
        BuilderError::TextTooLong { kind: "field value", value: None, .. }
    ));
}

#[test]
fn test_author_builder() {
    let mut author = AuthorBuilder::new();
    author
        .set_name("someone")
        .set_url("https://example.com")
        .set_icon_url("attachment://avatar.png")
        .set_proxy_icon_url("whatever");

    let (raw, errs) = author.finalize();
    assert_eq!(raw.name.as_deref(), Some("someone"));
    assert_eq!(raw.icon_url.as_deref(), Some("attachment://avatar.png"));
    assert_eq!(raw.proxy_icon_url.as_deref(), Some("whatever"));
    assert!(errs.is_none());
}

#[test]
fn test_author_rejects_bad_icon_scheme() {
    let mut author = AuthorBuilder::new();
    author.set_icon_url("javascript:alert(1)");

    let (raw, errs) = author.finalize();
    assert_eq!(raw.icon_url, None);

    let errs = errs.unwrap();
    assert_eq!(errs.len(), 1);
    assert!(matches!(
        errs[0],
        BuilderError::InvalidUrlScheme { kind: "author icon url", .. }
    ));
}

#[test]
fn test_author_name_cap() {
    let over = "x".repeat(AUTHOR_NAME_LIMIT + 1);
    let mut author = AuthorBuilder::new();
    author.set_name(over.as_str());

    let (raw, errs) = author.finalize();
    assert_eq!(raw.name, None);
    assert_eq!(errs.unwrap().len(), 1);
}

#[test]
fn test_image_dimensions() {
    let mut image = ImageBuilder::new();
    image.set_url("https://example.com/a.png").set_height(100).set_width(0);

    let (raw, errs) = image.finalize();
    assert_eq!(raw.height, Some(100));
    assert_eq!(raw.width, None);

    let errs = errs.unwrap();
    assert_eq!(errs.len(), 1);
    assert_eq!(
        errs[0],
        BuilderError::ValueOutOfRange {
            kind: "image width",
            value: 0,
            min: 1,
            max: u32::MAX as i64,
        }
    );
}

#[test]
fn test_video_builder() {
    let mut video = VideoBuilder::new();
    video.set_url("nope").set_height(480).set_width(640);

    let (raw, errs) = video.finalize();
    assert_eq!(raw.url, None);
    assert_eq!(raw.height, Some(480));
    assert_eq!(raw.width, Some(640));
    assert_eq!(errs.unwrap().len(), 1);
}

#[test]
fn test_provider_accepts_anything() {
    let mut provider = ProviderBuilder::new();
    provider.set_name("provider").set_url("not even a url");

    let (raw, errs) = provider.finalize();
    assert_eq!(raw.name.as_deref(), Some("provider"));
    assert_eq!(raw.url.as_deref(), Some("not even a url"));
    assert!(errs.is_none());
}

#[test]
fn test_finalize_purges_sub_builder_errors() {
    let mut author = AuthorBuilder::new();
    author.set_icon_url("bad");

    let (_, errs) = author.finalize();
    assert!(errs.is_some());

    let (_, errs) = author.finalize();
    assert!(errs.is_none());
}
