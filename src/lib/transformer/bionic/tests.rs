use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};
use pulldown_cmark::{Event, Parser, html::push_html};

use crate::transformer::{WithTransformer, bionic::BionicTransformer};

fn render(markdown: &str) -> String {
    let mut out = String::new();
    push_html(
        &mut out,
        Parser::new(markdown).with_transformer::<BionicTransformer<'_, _>>(),
    );
    out
}

#[test]
fn paragraph_text_is_emphasised() {
    assert_eq!(render("Hello world"), "<p><b>He</b>llo <b>wo</b>rld</p>\n");
}

#[test]
fn text_is_escaped() {
    assert_eq!(
        render("fish & chips"),
        "<p><b>fi</b>sh <b>&amp;</b> <b>ch</b>ips</p>\n"
    );
}

#[test]
fn code_is_left_alone() {
    assert_eq!(
        render("```\ncode here\n```\n"),
        "<pre><code>code here\n</code></pre>\n"
    );
    assert!(render("run `cargo test` now").contains("<code>cargo test</code>"));
}

#[test]
fn image_alt_text_is_left_alone() {
    let html = render("![alt text](a.png)");
    assert!(html.contains(r#"alt="alt text""#), "{html}");
}

#[test]
fn emphasis_resumes_after_code_block() {
    let html = render("```\nx\n```\n\nafter");
    assert!(html.ends_with("<p><b>af</b>ter</p>\n"), "{html}");
}

#[test]
fn non_text_events_pass_through() {
    let events = vec![Event::SoftBreak, Event::Rule];
    let out: Vec<_> = events
        .clone()
        .into_iter()
        .with_transformer::<BionicTransformer<'_, _>>()
        .collect();
    assert_eq!(out, events);
}

#[test]
fn entity_does_not_split_a_word() {
    assert_eq!(
        render("AT&amp;T rocks"),
        "<p><b>AT</b>&amp;T <b>ro</b>cks</p>\n"
    );
}

#[test]
fn backslash_escape_does_not_split_a_word() {
    assert_eq!(render("foo\\*bar baz"), "<p><b>foo</b>*bar <b>ba</b>z</p>\n");
}

#[test]
fn brackets_do_not_split_a_word() {
    assert_eq!(
        render("a [x] b"),
        "<p><b>a</b> <b>[x</b>] <b>b</b></p>\n"
    );
}

#[test]
fn one_emphasis_per_word() {
    let mut runner = TestRunner::new(Config {
        cases: 256,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(
            &proptest::collection::vec(r"[a-z]{1,4}(&amp;|\\\*|\[|\])[a-z]{1,4}", 1..8),
            |words| {
                let html = render(&words.join(" "));
                prop_assert_eq!(html.matches("<b>").count(), words.len(), "{}", html);
                Ok(())
            },
        )
        .unwrap();
}
