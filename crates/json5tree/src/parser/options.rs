/// Configuration options for the JSON5 parser.
///
/// # Default
///
/// Comment stripping is off and the nesting depth limit is 128.
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Whether to blank `/* ... */` and `// ...` comments out of the buffer
    /// before parsing.
    ///
    /// Comment regions are overwritten with spaces in place; the buffer
    /// passed to [`parse`](crate::parse) is mutated. When this is `false`, a
    /// document containing comments will fail to parse, since the reader has
    /// no comment handling of its own.
    ///
    /// # Default
    ///
    /// `false`
    pub strip_comments: bool,

    /// Maximum nesting depth of objects and arrays.
    ///
    /// The reader is recursive; this bounds its stack use on adversarial
    /// input. Exceeding the limit aborts the parse with
    /// [`Error::InvalidValue`](crate::Error::InvalidValue).
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strip_comments: false,
            max_depth: 128,
        }
    }
}
