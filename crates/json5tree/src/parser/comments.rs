//! The comment-stripping pre-pass.
//!
//! A single forward scan that overwrites comment regions with spaces so the
//! reader never has to know about them. The pass is stateful over string
//! literals: comment markers inside a `"..."` or `'...'` literal are left
//! alone, and an escaped quote does not close the literal. Backtick strings
//! are not tracked; comment markers inside them will be blanked.
//!
//! All writes are single ASCII space bytes and every blanked region is
//! delimited by ASCII marker bytes, so a valid UTF-8 buffer stays valid:
//! any multi-byte character inside a comment is replaced wholesale.

/// Blanks `/* ... */` and `// ...` regions in place.
///
/// Block comments are blanked through the closing `*/` inclusive; the
/// terminator must be the exact two-byte sequence. Line comments are blanked
/// through the end of the line inclusive. An unterminated comment is blanked
/// to the end of the buffer; the scan never reads past it.
pub(crate) fn strip_comments(buf: &mut [u8]) {
    let mut literal: Option<u8> = None;
    let mut i = 0;

    while i < buf.len() {
        let c = buf[i];

        if let Some(quote) = literal {
            if c == b'\\' && buf.get(i + 1) == Some(&quote) {
                i += 2;
            } else {
                if c == quote {
                    literal = None;
                }
                i += 1;
            }
            continue;
        }

        if c == b'"' || c == b'\'' {
            literal = Some(c);
            i += 1;
            continue;
        }

        if c == b'/' && buf.get(i + 1) == Some(&b'*') {
            let start = i;
            i += 2;
            while i < buf.len() && !(buf[i] == b'*' && buf.get(i + 1) == Some(&b'/')) {
                i += 1;
            }
            // Past the closing "*/", or at the buffer end if unterminated.
            let end = if i < buf.len() { i + 2 } else { buf.len() };
            buf[start..end].fill(b' ');
            i = end;
            continue;
        }

        if c == b'/' && buf.get(i + 1) == Some(&b'/') {
            let start = i;
            i += 2;
            while i < buf.len() && buf[i] != b'\n' {
                i += 1;
            }
            let end = if i < buf.len() { i + 1 } else { buf.len() };
            buf[start..end].fill(b' ');
            i = end;
            continue;
        }

        i += 1;
    }
}
