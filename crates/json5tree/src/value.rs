//! The parsed value tree.
//!
//! This module defines [`Node`], one instance of which is produced per JSON5
//! value in a document, together with its [`Value`] payload and the
//! [`QuoteStyle`] diagnostic tag recorded for object member names.

use alloc::{borrow::Cow, vec::Vec};
use core::fmt;

/// How an object member name was written in the source document.
///
/// Recorded purely for diagnostics and round-trip fidelity; it never affects
/// value semantics. Nodes that carry no name (array elements, the synthetic
/// root) are tagged [`QuoteStyle::Bare`].
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `"name"`
    Double,
    /// `'name'`
    Single,
    /// `name`
    #[default]
    Bare,
}

/// One parsed JSON5 value.
///
/// Object members carry their key in `name`; array elements and the root
/// returned by [`parse`](crate::parse) have `name: None`. String payloads
/// inside `value` borrow from the input buffer, which ties the whole tree to
/// the buffer's lifetime `'doc`.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Node<'doc> {
    /// Member key, present only inside an object's children.
    pub name: Option<&'doc str>,
    /// How `name` was quoted in the source.
    pub quote_style: QuoteStyle,
    /// The tagged payload.
    pub value: Value<'doc>,
}

/// The payload of a [`Node`], tagged by JSON5 value kind.
///
/// `Integer` and `Real` are kept apart: a literal without a fractional part
/// or exponent stays a 64-bit integer, everything else becomes a double.
/// Backtick-delimited strings get their own `MultiString` tag so consumers
/// can tell them from ordinary quoted strings.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'doc> {
    Object(Vec<Node<'doc>>),
    Array(Vec<Node<'doc>>),
    String(Cow<'doc, str>),
    MultiString(Cow<'doc, str>),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Null,
}

impl Default for Value<'_> {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl<'doc> From<&'doc str> for Value<'doc> {
    fn from(v: &'doc str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl<'doc> Node<'doc> {
    /// Creates a node with no name, as produced for array elements.
    #[must_use]
    pub fn unnamed(value: Value<'doc>) -> Self {
        Self {
            name: None,
            quote_style: QuoteStyle::Bare,
            value,
        }
    }

    /// Returns the node's children, or an empty slice for scalar payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use json5tree::{parse, ParserOptions};
    ///
    /// let mut text = String::from("{a: 1, b: 2}");
    /// let root = parse(&mut text, ParserOptions::default()).unwrap();
    /// assert_eq!(root.children().len(), 2);
    /// assert_eq!(root.children()[1].name, Some("b"));
    /// ```
    #[must_use]
    pub fn children(&self) -> &[Node<'doc>] {
        match &self.value {
            Value::Object(children) | Value::Array(children) => children,
            _ => &[],
        }
    }
}

impl Value<'_> {
    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`String`] or [`MultiString`].
    ///
    /// [`String`]: Value::String
    /// [`MultiString`]: Value::MultiString
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..) | Self::MultiString(..))
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use json5tree::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string payload of a [`String`] or [`MultiString`].
    ///
    /// [`String`]: Value::String
    /// [`MultiString`]: Value::MultiString
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::MultiString(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the payload of an [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the payload of a [`Real`].
    ///
    /// [`Real`]: Value::Real
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(n) => Some(*n),
            _ => None,
        }
    }
}

/// Escapes a string for re-emission inside a double-quoted literal.
fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_ascii_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(n) => write!(f, "{n}"),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            // Multi-line strings are re-emitted verbatim between backticks;
            // their escape pairs were never rewritten during parsing.
            Value::MultiString(s) => write!(f, "`{s}`"),
            Value::Array(children) => {
                f.write_str("[")?;
                let mut first = true;
                for child in children {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    write!(f, "{child}")?;
                }
                f.write_str("]")
            }
            Value::Object(children) => {
                f.write_str("{")?;
                let mut first = true;
                for child in children {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    write!(f, "{child}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name {
            f.write_str("\"")?;
            write_escaped_string(name, f)?;
            f.write_str("\": ")?;
        }
        write!(f, "{}", self.value)
    }
}
