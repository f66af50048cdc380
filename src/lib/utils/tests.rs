use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{escape_text, slugify};

#[test]
fn escape_text_removes_angle_and_quotes() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |s| {
            let escaped = escape_text(&s);
            for ch in ['<', '>', '"', '\''] {
                prop_assert!(!escaped.contains(ch));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn escape_text_noops_when_safe() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[^<>'\"&]*", |s| {
            let escaped = escape_text(&s);
            prop_assert_eq!(escaped, s);
            Ok(())
        })
        .unwrap();
}

#[test]
fn slugify_constrains_charset() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |input| {
            let slug = slugify(&input);
            prop_assert!(!slug.contains(char::is_whitespace));
            prop_assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
                "unexpected character in {:?}",
                slug
            );
            Ok(())
        })
        .unwrap();
}

#[test]
fn slugify_is_idempotent() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |input| {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once);
            Ok(())
        })
        .unwrap();
}

#[test]
fn slugify_examples() {
    assert_eq!(slugify("Hello World!"), "hello-world");
    assert_eq!(slugify("This & That"), "this-that");
    assert_eq!(slugify("123 Numbers"), "123-numbers");
    assert_eq!(slugify("Special-Characters_Here"), "special-characters_here");
}

#[test]
fn slugify_keeps_hyphen_runs() {
    assert_eq!(slugify("A - B"), "a---b");
    assert_eq!(slugify("  padded  "), "-padded-");
}

#[test]
fn slugify_drops_non_ascii_letters() {
    assert_eq!(slugify("Café au lait"), "caf-au-lait");
    assert_eq!(slugify("???"), "");
}
