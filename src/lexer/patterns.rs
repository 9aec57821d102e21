//! Hand-built matchers for the three recognizable span shapes.
//!
//! Each matcher inspects the remaining input and returns how many bytes it
//! consumed, or `None` when the shape does not start at the current offset.
//! Matching whole statements/lines only; partial matches are failures.

/// Successful import match: consumed length plus every comment seen inside
/// the statement (trailing comments and comments inside a parenthesized
/// name list).
pub(crate) struct ImportMatch {
    pub(crate) len: usize,
    pub(crate) comments: Vec<String>,
}

/// Match an `import`/`from` statement starting at the beginning of `rest`.
///
/// The body may mix names, `.` `,` `*`, whitespace, backslash-newline
/// continuations, and at most nested balanced parenthesized groups. The
/// statement ends at the first newline outside a parenthesized group.
pub(crate) fn match_import(rest: &str) -> Option<ImportMatch> {
    let bytes = rest.as_bytes();

    let keyword_len = if rest.starts_with("import") {
        6
    } else if rest.starts_with("from") {
        4
    } else {
        return None;
    };
    // The keyword must be followed by horizontal whitespace, otherwise this
    // is an ordinary name like `important` or `fromage`.
    if !matches!(bytes.get(keyword_len).copied(), Some(b' ' | b'\t')) {
        return None;
    }

    let mut i = keyword_len + 1;
    let mut comments = Vec::new();

    loop {
        match bytes.get(i).copied() {
            // Statement ends at EOF or at a newline outside parentheses.
            None => break,
            Some(b'\n') => {
                i += 1;
                break;
            }
            Some(b' ' | b'\t') => i += 1,
            Some(b'\\') => {
                // A backslash is only valid as a line continuation here.
                if bytes.get(i + 1).copied() == Some(b'\n') {
                    i += 2;
                } else {
                    return None;
                }
            }
            Some(b'#') => {
                let start = i;
                while let Some(b) = bytes.get(i).copied() {
                    if b == b'\n' {
                        break;
                    }
                    i += 1;
                }
                comments.push(rest[start..i].to_string());
            }
            Some(b'(') => {
                i = match_paren_group(rest, i, &mut comments)?;
            }
            Some(b'.' | b',' | b'*') => i += 1,
            Some(b) if is_name_byte(b) => i += 1,
            Some(_) => return None,
        }
    }

    Some(ImportMatch { len: i, comments })
}

/// Match a line holding only optional whitespace and an optional comment.
pub(crate) fn match_blank_line(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;

    while matches!(bytes.get(i).copied(), Some(b' ' | b'\t')) {
        i += 1;
    }
    if bytes.get(i).copied() == Some(b'#') {
        while let Some(b) = bytes.get(i).copied() {
            if b == b'\n' {
                break;
            }
            i += 1;
        }
    }

    match bytes.get(i).copied() {
        Some(b'\n') => Some(i + 1),
        None if i > 0 => Some(i),
        _ => None,
    }
}

/// Match a line (or lines) holding only a string literal.
///
/// An optional single letter prefix is allowed (`r"..."`, `b'...'`, ...).
/// Triple-quoted literals may span lines; single-quoted literals must close
/// before the next newline. After the literal only whitespace, continuations,
/// a comment, and the line ending may follow.
pub(crate) fn match_string_literal(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;

    if let Some(b) = bytes.first().copied() {
        if b.is_ascii_alphabetic() && matches!(bytes.get(1).copied(), Some(b'\'' | b'"')) {
            i = 1;
        }
    }

    let quote = match bytes.get(i).copied() {
        Some(q @ (b'\'' | b'"')) => q,
        _ => return None,
    };

    let literal_end =
        if bytes.get(i + 1).copied() == Some(quote) && bytes.get(i + 2).copied() == Some(quote) {
            scan_triple_quoted(bytes, i + 3, quote)?
        } else {
            scan_single_quoted(bytes, i + 1, quote)?
        };

    match_statement_tail(bytes, literal_end)
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || !b.is_ascii()
}

/// Consume a balanced parenthesized group starting at `open` (which must be
/// a `(`). Comments inside the group run to end of line, so a `)` inside a
/// comment never closes the group. Returns the offset one past the closing
/// parenthesis, or `None` if the group never closes.
fn match_paren_group(rest: &str, open: usize, comments: &mut Vec<String>) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut depth = 0usize;
    let mut i = open;

    while let Some(b) = bytes.get(i).copied() {
        match b {
            b'(' => {
                depth += 1;
                i += 1;
            }
            b')' => {
                depth -= 1;
                i += 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            b'#' => {
                let start = i;
                while let Some(c) = bytes.get(i).copied() {
                    if c == b'\n' {
                        break;
                    }
                    i += 1;
                }
                comments.push(rest[start..i].to_string());
            }
            _ => i += 1,
        }
    }

    // Unbalanced before EOF: unrecoverable, no guessing.
    None
}

fn scan_triple_quoted(bytes: &[u8], mut i: usize, quote: u8) -> Option<usize> {
    loop {
        match bytes.get(i).copied() {
            None => return None,
            Some(b'\\') => i += 2,
            Some(b)
                if b == quote
                    && bytes.get(i + 1).copied() == Some(quote)
                    && bytes.get(i + 2).copied() == Some(quote) =>
            {
                return Some(i + 3);
            }
            Some(_) => i += 1,
        }
    }
}

fn scan_single_quoted(bytes: &[u8], mut i: usize, quote: u8) -> Option<usize> {
    loop {
        match bytes.get(i).copied() {
            None | Some(b'\n') => return None,
            Some(b'\\') => i += 2,
            Some(b) if b == quote => return Some(i + 1),
            Some(_) => i += 1,
        }
    }
}

/// Whitespace / continuation / comment / newline tail shared by the string
/// pattern. Anything else after the literal fails the whole match.
fn match_statement_tail(bytes: &[u8], mut i: usize) -> Option<usize> {
    loop {
        match bytes.get(i).copied() {
            None => return Some(i),
            Some(b'\n') => return Some(i + 1),
            Some(b' ' | b'\t') => i += 1,
            Some(b'\\') if bytes.get(i + 1).copied() == Some(b'\n') => i += 2,
            Some(b'#') => {
                while let Some(b) = bytes.get(i).copied() {
                    if b == b'\n' {
                        break;
                    }
                    i += 1;
                }
            }
            Some(_) => return None,
        }
    }
}
