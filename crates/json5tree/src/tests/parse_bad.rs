use alloc::string::String;

use rstest::rstest;

use crate::{Error, ParserOptions, parse};

fn parse_err(text: &str) -> Error {
    let mut text = String::from(text);
    parse(&mut text, ParserOptions::default()).unwrap_err()
}

#[rstest]
#[case("{@bad:1}")]
#[case("{#x:1}")]
#[case(r#"{"a\qb":1}"#)]
#[case("{a 1}")]
#[case(r#"{"a" 1}"#)]
#[case(r#"{"unclosed"#)]
fn malformed_names(#[case] text: &str) {
    assert_eq!(parse_err(text), Error::InvalidName);
}

#[rstest]
#[case(r#"{"a":tru}"#)]
#[case(r#"{"a":verdad}"#)]
#[case(r#"{"a":-.5}"#)]
#[case(r#"{"a":}"#)]
#[case(r#"{"a":"#)]
#[case(r#"{"a":1 2}"#)]
#[case(r#"{"a":truex}"#)]
#[case("{a:1")]
#[case("a:1")]
fn malformed_values(#[case] text: &str) {
    assert_eq!(parse_err(text), Error::InvalidValue);
}

// A numeric literal that runs to the very end of the buffer has no
// terminating character and is rejected, even though the digits themselves
// are fine.
#[test]
fn number_at_end_of_input() {
    assert_eq!(parse_err("{a:0x1F"), Error::InvalidValue);
    assert_eq!(parse_err("[1"), Error::InvalidValue);
}

// With comment stripping off the reader has no comment handling, so a
// leading comment is document content and fails. This is required behavior,
// not a defect.
#[test]
fn comments_without_stripping_fail() {
    let mut text = String::from("// c\n{\"a\":1}");
    let err = parse(&mut text, ParserOptions::default()).unwrap_err();
    assert_eq!(err, Error::InvalidName);
}

#[test]
fn depth_limit_is_enforced() {
    let mut text = "[".repeat(200);
    let err = parse(&mut text, ParserOptions::default()).unwrap_err();
    assert_eq!(err, Error::InvalidValue);
}

#[test]
fn depth_limit_is_configurable() {
    let options = ParserOptions {
        max_depth: 2,
        ..ParserOptions::default()
    };

    let mut text = String::from("[[1]]");
    assert!(parse(&mut text, options).is_ok());

    let mut text = String::from("[[[1]]]");
    assert_eq!(parse(&mut text, options).unwrap_err(), Error::InvalidValue);
}

// The first error unwinds the whole descent; members parsed before the
// error are dropped on the way out without issue.
#[test]
fn partially_built_tree_is_torn_down_on_error() {
    let err = parse_err(r#"{"a":[1,2,{"b":3}],@:1}"#);
    assert_eq!(err, Error::InvalidName);

    let err = parse_err(r#"{"a":{"deep":[[[1]]]},"b":tru}"#);
    assert_eq!(err, Error::InvalidValue);
}

#[test]
fn error_in_nested_array_propagates() {
    assert_eq!(parse_err("[1,@,3]"), Error::InvalidValue);
    assert_eq!(parse_err(r#"{"a":[1,{b:@}]}"#), Error::InvalidValue);
}
