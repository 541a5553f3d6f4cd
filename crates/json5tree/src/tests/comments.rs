use alloc::string::String;

use crate::{ParserOptions, Value, parse};

fn strip() -> ParserOptions {
    ParserOptions {
        strip_comments: true,
        ..ParserOptions::default()
    }
}

#[test]
fn leading_line_comment() {
    let mut text = String::from("// c\n{\"a\":1}");
    let root = parse(&mut text, strip()).unwrap();

    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].value, Value::Integer(1));
}

#[test]
fn block_comment_between_tokens() {
    let mut text = String::from("{\"a\": /* forty-two */ 42}");
    let root = parse(&mut text, strip()).unwrap();
    assert_eq!(root.children()[0].value, Value::Integer(42));
}

#[test]
fn comment_markers_inside_strings_are_preserved() {
    let mut text = String::from("{\"url\":\"http://example\"}");
    let root = parse(&mut text, strip()).unwrap();
    assert_eq!(root.children()[0].value.as_str(), Some("http://example"));
}

#[test]
fn block_comment_containing_quotes_and_stars() {
    let mut text = String::from("{\"a\": /* \" ' * / */ 1}");
    let root = parse(&mut text, strip()).unwrap();
    assert_eq!(root.children()[0].value, Value::Integer(1));
}

#[test]
fn multi_line_block_comment() {
    let mut text = String::from("{\n/*\n  disabled: true,\n*/\n  a: 1,\n}");
    let root = parse(&mut text, strip()).unwrap();

    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].name, Some("a"));
}

#[test]
fn line_comments_after_members() {
    let mut text = String::from("{a: 1, // first\nb: 2 // second\n}");
    let root = parse(&mut text, strip()).unwrap();
    assert_eq!(root.children().len(), 2);
}

#[test]
fn stripping_is_a_noop_without_comments() {
    let mut text = String::from("{a: 'b'}");
    let root = parse(&mut text, strip()).unwrap();
    assert_eq!(root.children()[0].value.as_str(), Some("b"));
}
