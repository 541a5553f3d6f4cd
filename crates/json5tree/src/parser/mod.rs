//! The recursive-descent JSON5 reader.
//!
//! The reader scans the buffer byte-by-byte with length-bounded indexing and
//! dispatches on one character of lookahead. Every structural delimiter in
//! the grammar is ASCII, so byte positions used for slicing always land on
//! character boundaries; multi-byte text can only occur inside string
//! payloads and is carried through untouched.
//!
//! The top level of a document is treated as an implicit object: an outer
//! `{` is accepted but not required, and a bare array at member position
//! becomes an unnamed child of the root.
//!
//! Known gap, kept deliberately: an unterminated quoted string does not
//! error. It scans to the end of the buffer and silently yields the
//! truncated payload.

mod comments;
mod error;
mod numbers;
mod options;


use alloc::{borrow::Cow, string::String, vec::Vec};

pub use error::Error;
use numbers::Number;
pub use options::ParserOptions;

use crate::value::{Node, QuoteStyle, Value};

/// Parses a JSON5 document in place.
///
/// When [`ParserOptions::strip_comments`] is set, comment regions of
/// `source` are overwritten with spaces before reading; the caller's buffer
/// is mutated. The returned root is a synthetic [`Value::Object`] node whose
/// children are the document's top-level members, and whose string payloads
/// borrow from `source`.
///
/// # Errors
///
/// Returns the first [`Error`] encountered; the descent unwinds immediately
/// and no partial tree escapes.
///
/// # Examples
///
/// ```
/// use json5tree::{parse, ParserOptions, Value};
///
/// let mut text = String::from(r#"{"a": 1, b: [true, null]}"#);
/// let root = parse(&mut text, ParserOptions::default()).unwrap();
/// assert_eq!(root.children().len(), 2);
/// assert_eq!(root.children()[0].value, Value::Integer(1));
/// ```
pub fn parse<'doc>(source: &'doc mut str, options: ParserOptions) -> Result<Node<'doc>, Error> {
    if options.strip_comments {
        // SAFETY: the stripper only overwrites whole comment regions with
        // ASCII spaces, which keeps the buffer valid UTF-8.
        comments::strip_comments(unsafe { source.as_bytes_mut() });
    }
    let src: &'doc str = source;

    let mut parser = Parser {
        src,
        pos: 0,
        depth: 0,
        max_depth: options.max_depth,
    };
    let mut children = Vec::new();
    parser.skip_whitespace();
    if parser.peek() == Some(b'{') {
        parser.bump();
    }
    parser.parse_object_body(&mut children)?;

    Ok(Node {
        name: None,
        quote_style: QuoteStyle::Bare,
        value: Value::Object(children),
    })
}

struct Parser<'doc> {
    src: &'doc str,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'doc> Parser<'doc> {
    #[inline]
    fn bytes(&self) -> &'doc [u8] {
        self.src.as_bytes()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.pos + offset).copied()
    }

    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if is_whitespace(c)) {
            self.pos += 1;
        }
    }

    fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::InvalidValue);
        }
        Ok(())
    }

    /// Parses one value at the current position, dispatching on lookahead.
    fn parse_value(&mut self) -> Result<Value<'doc>, Error> {
        let Some(c) = self.peek() else {
            return Err(Error::InvalidValue);
        };

        if c == b'[' {
            self.enter()?;
            self.bump();
            let mut children = Vec::new();
            self.parse_array_body(&mut children)?;
            if self.peek() == Some(b']') {
                self.bump();
            }
            self.depth -= 1;
            Ok(Value::Array(children))
        } else if c == b'{' {
            self.enter()?;
            self.bump();
            let mut children = Vec::new();
            self.parse_object_body(&mut children)?;
            if self.peek() == Some(b'}') {
                self.bump();
            }
            self.depth -= 1;
            Ok(Value::Object(children))
        } else if c == b'"' || c == b'\'' {
            self.bump();
            Ok(Value::String(self.scan_quoted(c)))
        } else if c == b'`' {
            self.bump();
            Ok(Value::MultiString(Cow::Borrowed(self.scan_backtick())))
        } else if c.is_ascii_alphabetic()
            || (c == b'-' && !matches!(self.peek_at(1), Some(d) if d.is_ascii_digit()))
        {
            self.parse_keyword()
        } else if c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.') {
            let (number, next) = numbers::scan_number(self.bytes(), self.pos)?;
            self.pos = next;
            Ok(match number {
                Number::Integer(n) => Value::Integer(n),
                Number::Real(n) => Value::Real(n),
            })
        } else {
            Err(Error::InvalidValue)
        }
    }

    /// One of `true`, `false`, `null`, `Infinity`, `-Infinity`, `NaN`,
    /// `-NaN`; matched by prefix, anything else is an error.
    fn parse_keyword(&mut self) -> Result<Value<'doc>, Error> {
        let rest = &self.bytes()[self.pos..];
        let (len, value) = if rest.starts_with(b"true") {
            (4, Value::Boolean(true))
        } else if rest.starts_with(b"false") {
            (5, Value::Boolean(false))
        } else if rest.starts_with(b"null") {
            (4, Value::Null)
        } else if rest.starts_with(b"Infinity") {
            (8, Value::Real(f64::INFINITY))
        } else if rest.starts_with(b"-Infinity") {
            (9, Value::Real(f64::NEG_INFINITY))
        } else if rest.starts_with(b"NaN") {
            (3, Value::Real(f64::NAN))
        } else if rest.starts_with(b"-NaN") {
            (4, Value::Real(-f64::NAN))
        } else {
            return Err(Error::InvalidValue);
        };
        self.pos += len;
        Ok(value)
    }

    /// Scans a quoted string body; `self.pos` is just past the opening
    /// quote. Returns a borrowed slice unless an escape forced rewriting.
    ///
    /// `\<quote>` unescapes to the quote character and an escaped line break
    /// collapses to a single space; all other backslash sequences are kept
    /// verbatim. An unterminated string yields the remainder of the buffer.
    fn scan_quoted(&mut self, quote: u8) -> Cow<'doc, str> {
        let bytes = self.bytes();
        let start = self.pos;
        let mut i = start;
        let mut segment = start;
        let mut owned: Option<String> = None;

        while i < bytes.len() && bytes[i] != quote {
            if bytes[i] == b'\\' {
                match bytes.get(i + 1) {
                    Some(&c) if c == quote => {
                        let buf = owned.get_or_insert_with(String::new);
                        buf.push_str(&self.src[segment..i]);
                        buf.push(char::from(quote));
                        i += 2;
                        segment = i;
                        continue;
                    }
                    Some(&(brk @ (b'\r' | b'\n'))) => {
                        let buf = owned.get_or_insert_with(String::new);
                        buf.push_str(&self.src[segment..i]);
                        buf.push(' ');
                        i += 2;
                        // A CRLF pair is one line break.
                        if brk == b'\r' && bytes.get(i) == Some(&b'\n') {
                            i += 1;
                        }
                        segment = i;
                        continue;
                    }
                    _ => {}
                }
            }
            i += 1;
        }

        self.pos = if i < bytes.len() { i + 1 } else { i };

        match owned {
            Some(mut buf) => {
                buf.push_str(&self.src[segment..i]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(&self.src[start..i]),
        }
    }

    /// Scans a backtick string body to the unescaped closing backtick.
    /// Escape pairs are kept verbatim, so the payload is always borrowed.
    fn scan_backtick(&mut self) -> &'doc str {
        let bytes = self.bytes();
        let start = self.pos;
        let mut i = start;
        while i < bytes.len() && bytes[i] != b'`' {
            if bytes[i] == b'\\' && bytes.get(i + 1) == Some(&b'`') {
                i += 2;
            } else {
                i += 1;
            }
        }
        self.pos = if i < bytes.len() { i + 1 } else { i };
        &self.src[start..i]
    }

    /// Consumes comma-separated values up to (not including) the closing
    /// `]` or the end of input. Re-checking for `]` at the top of the loop
    /// is what makes empty arrays and trailing commas work.
    fn parse_array_body(&mut self, children: &mut Vec<Node<'doc>>) -> Result<(), Error> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some(b']') => return Ok(()),
                Some(_) => {}
            }

            let value = self.parse_value()?;
            children.push(Node::unnamed(value));

            self.skip_whitespace();
            if self.peek() == Some(b',') {
                self.bump();
            } else {
                return Ok(());
            }
        }
    }

    /// Consumes `name: value` members up to (not including) the closing `}`
    /// or the end of input.
    fn parse_object_body(&mut self, children: &mut Vec<Node<'doc>>) -> Result<(), Error> {
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else {
                return Ok(());
            };
            if c == b'}' {
                return Ok(());
            }

            let mut node = Node::unnamed(Value::Null);
            if c == b'[' {
                // Unnamed array shorthand at member position.
                node.value = self.parse_value()?;
            } else {
                let (name, quote_style) = self.parse_member_name(c)?;
                validate_name(name)?;
                node.name = Some(name);
                node.quote_style = quote_style;

                self.skip_whitespace();
                node.value = self.parse_value()?;
            }
            children.push(node);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.bump(),
                None | Some(b'}') => return Ok(()),
                Some(_) => return Err(Error::InvalidValue),
            }
        }
    }

    /// Parses a member name in one of its two named forms and consumes the
    /// `:` separator; `c` is the current lookahead byte.
    fn parse_member_name(&mut self, c: u8) -> Result<(&'doc str, QuoteStyle), Error> {
        let (name, quote_style) = if c == b'"' || c == b'\'' {
            let quote_style = if c == b'"' {
                QuoteStyle::Double
            } else {
                QuoteStyle::Single
            };
            self.bump();
            (self.scan_name(c), quote_style)
        } else if c.is_ascii_alphabetic() || c == b'_' || c == b'$' {
            let bytes = self.bytes();
            let start = self.pos;
            let mut i = start + 1;
            while i < bytes.len() && (bytes[i] == b'_' || bytes[i].is_ascii_alphanumeric()) {
                i += 1;
            }
            self.pos = i;
            (&self.src[start..i], QuoteStyle::Bare)
        } else {
            return Err(Error::InvalidName);
        };

        self.skip_whitespace();
        if self.peek() == Some(b':') {
            self.bump();
            Ok((name, quote_style))
        } else {
            Err(Error::InvalidName)
        }
    }

    /// Scans a quoted member name to the matching unescaped quote. The raw
    /// text, escapes included, becomes the name slice; `validate_name`
    /// decides whether the escapes were legal.
    fn scan_name(&mut self, quote: u8) -> &'doc str {
        let bytes = self.bytes();
        let start = self.pos;
        let mut i = start;
        while i < bytes.len() && bytes[i] != quote {
            if bytes[i] == b'\\' && bytes.get(i + 1) == Some(&quote) {
                i += 2;
            } else {
                i += 1;
            }
        }
        self.pos = if i < bytes.len() { i + 1 } else { i };
        &self.src[start..i]
    }
}

fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

fn is_control_escape(c: u8) -> bool {
    matches!(c, b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't')
}

/// A backslash in a member name must introduce a recognized control escape,
/// a `\uXXXX` unicode escape, or a bare run of four hex digits.
fn validate_name(name: &str) -> Result<(), Error> {
    let bytes = name.as_bytes();
    let hex_run =
        |at: usize| bytes.len() > at + 3 && bytes[at..at + 4].iter().all(u8::is_ascii_hexdigit);
    for (i, &c) in bytes.iter().enumerate() {
        if c != b'\\' {
            continue;
        }
        let control = matches!(bytes.get(i + 1), Some(&next) if is_control_escape(next));
        let hex = hex_run(i + 1) || (bytes.get(i + 1) == Some(&b'u') && hex_run(i + 2));
        if !control && !hex {
            return Err(Error::InvalidName);
        }
    }
    Ok(())
}
