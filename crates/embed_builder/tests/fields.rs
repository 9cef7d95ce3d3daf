use embed_builder::limits::{FIELD_NAME_LIMIT, MAX_FIELD_COUNT};
use embed_builder::{BuilderError, EmbedBuilder, FieldBuilder};
use models::EmbedField;

fn raw_field(n: usize) -> EmbedField {
    EmbedField {
        name: format!("name {n}").into(),
        value: format!("value {n}").into(),
        inline: false,
    }
}

#[test]
fn test_field_cap() {
    let mut builder = EmbedBuilder::new();

    for n in 0..MAX_FIELD_COUNT + 1 {
        builder.add_field(FieldBuilder::new().set_name(format!("name {n}")).set_value(format!("value {n}")));
    }

    let (embed, errs) = builder.finalize();

    // the first 25 in call order survive
    assert_eq!(embed.fields.len(), MAX_FIELD_COUNT);
    assert_eq!(embed.fields[0].name, "name 0");
    assert_eq!(embed.fields[MAX_FIELD_COUNT - 1].name, format!("name {}", MAX_FIELD_COUNT - 1));

    let errs = errs.unwrap();
    assert_eq!(errs.len(), 1);
    assert_eq!(
        errs[0],
        BuilderError::FieldLimitReached {
            name: format!("name {MAX_FIELD_COUNT}").into(),
            limit: MAX_FIELD_COUNT,
        }
    );
}

#[test]
fn test_overflowing_batch_rejects_each_field() {
    let mut builder = EmbedBuilder::new();
    builder.add_raw_fields((0..MAX_FIELD_COUNT - 1).map(raw_field));

    let mut a = FieldBuilder::new();
    let mut b = FieldBuilder::new();
    let mut c = FieldBuilder::new();
    a.set_name("a").set_value("1");
    b.set_name("b").set_value("2");
    c.set_name("c").set_value("3");

    // one slot left, three fields offered
    let (embed, errs) = builder.add_fields([&mut a, &mut b, &mut c]).finalize();

    assert_eq!(embed.fields.len(), MAX_FIELD_COUNT);
    assert_eq!(embed.fields.last().unwrap().name, "a");

    let errs = errs.unwrap();
    assert_eq!(errs.len(), 2);
    for (err, name) in errs.iter().zip(["b", "c"]) {
        assert_eq!(
            *err,
            BuilderError::FieldLimitReached {
                name: name.into(),
                limit: MAX_FIELD_COUNT,
            }
        );
    }
}

#[test]
fn test_sub_builder_errors_absorbed_before_cap_error() {
    let mut builder = EmbedBuilder::new();
    builder.add_raw_fields((0..MAX_FIELD_COUNT).map(raw_field));

    // rejected twice over: bad name, and no room left
    let over = "x".repeat(FIELD_NAME_LIMIT + 1);
    let (embed, errs) = builder
        .add_field(FieldBuilder::new().set_name(over.as_str()).set_value("v"))
        .finalize();

    assert_eq!(embed.fields.len(), MAX_FIELD_COUNT);

    let errs = errs.unwrap();
    assert_eq!(errs.len(), 2);
    assert!(matches!(errs[0], BuilderError::TextTooLong { kind: "field name", .. }));
    assert!(matches!(errs[1], BuilderError::FieldLimitReached { .. }));
}

#[test]
fn test_inline_outline_all_fields() {
    let mut builder = EmbedBuilder::new();

    // no fields attached: no effect, no error
    builder.inline_all_fields().outline_all_fields();

    builder.add_field(FieldBuilder::new().set_name("a").set_value("1").inline());
    builder.add_field(FieldBuilder::new().set_name("b").set_value("2"));

    builder.inline_all_fields();
    let (embed, errs) = builder.finalize();
    assert!(embed.fields.iter().all(|f| f.inline));
    assert!(errs.is_none());

    builder.outline_all_fields();
    let (embed, _) = builder.finalize();
    assert!(embed.fields.iter().all(|f| !f.inline));
}

#[test]
fn test_raw_fields_skip_absorption() {
    // a raw fragment may violate limits the builders would have caught
    let over = "x".repeat(FIELD_NAME_LIMIT + 1);
    let (embed, errs) = EmbedBuilder::new()
        .add_raw_field(EmbedField {
            name: over.as_str().into(),
            value: "v".into(),
            inline: false,
        })
        .finalize();

    assert_eq!(embed.fields.len(), 1);
    assert!(errs.is_none());
}
