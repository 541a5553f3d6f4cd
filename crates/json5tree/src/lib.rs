//! An in-place JSON5 document parser.
//!
//! The parser takes a mutable text buffer, optionally blanks comments out of
//! it in a single forward pass, and then runs a recursive-descent reader over
//! the result, producing a tree of [`Node`]s. String payloads borrow from the
//! input buffer wherever the source text needs no rewriting, so a parse of a
//! typical document allocates only the children vectors of its objects and
//! arrays.
//!
//! Supported grammar (a JSON5 superset of JSON): unquoted, single-quoted, or
//! double-quoted object keys; trailing commas before `}` and `]`; `/* ... */`
//! and `// ...` comments; decimal and hex integers; reals with fractional
//! and/or exponent parts; signed values; `Infinity`, `-Infinity`, `NaN`, and
//! `-NaN`; backslash escapes in quoted strings; and backtick-delimited
//! strings spanning multiple lines.
//!
//! ```
//! use json5tree::{parse, ParserOptions, Value};
//!
//! let mut text = String::from("// config\n{ retries: 3, name: 'svc' }");
//! let root = parse(
//!     &mut text,
//!     ParserOptions {
//!         strip_comments: true,
//!         ..ParserOptions::default()
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(root.children().len(), 2);
//! assert_eq!(root.children()[0].value, Value::Integer(3));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use parser::{Error, ParserOptions, parse};
pub use value::{Node, QuoteStyle, Value};
