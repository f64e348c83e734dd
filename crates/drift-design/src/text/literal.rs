//! Literal-level helpers: quotes, comments, casing.

use super::balanced::top_level_positions;

/// A quoted string literal found in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLiteral<'a> {
    /// Byte offset of the first content byte (just past the opening quote)
    pub offset: usize,
    pub content: &'a str,
    pub quote: char,
}

/// Strip one pair of matching surrounding quotes, if present.
pub fn strip_quotes_once(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && matches!(first, b'"' | b'\'' | b'`') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// All string and template literals in `text`, skipping comments.
pub fn string_literals(text: &str) -> Vec<StringLiteral<'_>> {
    let bytes = text.as_bytes();
    let mut literals = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = text[i + 2..].find("*/").map(|p| i + 2 + p + 2).unwrap_or(bytes.len());
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') && (i == 0 || !matches!(bytes[i - 1], b':' | b'(')) => {
                i = text[i..].find('\n').map(|p| i + p).unwrap_or(bytes.len());
            }
            q @ (b'"' | b'\'' | b'`') => {
                let start = i + 1;
                let mut j = start;
                let mut closed = false;
                while j < bytes.len() {
                    match bytes[j] {
                        b'\\' => j += 2,
                        c if c == q => {
                            closed = true;
                            break;
                        }
                        b'\n' if q != b'`' => break,
                        _ => j += 1,
                    }
                }
                let end = j.min(bytes.len());
                if closed {
                    literals.push(StringLiteral {
                        offset: start,
                        content: &text[start..end],
                        quote: q as char,
                    });
                }
                i = end + 1;
            }
            _ => i += 1,
        }
    }
    literals
}

/// Replace `/* ... */` comments with spaces, keeping newlines and offsets.
pub fn blank_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let end = after.find("*/").map(|p| p + 2).unwrap_or(after.len());
        for c in after[..end].chars() {
            if c == '\n' {
                out.push('\n');
            } else {
                // Keep the byte width so offsets stay valid.
                out.extend(std::iter::repeat(' ').take(c.len_utf8()));
            }
        }
        rest = &after[end..];
    }
    out.push_str(rest);
    out
}

/// `backgroundColor` -> `background-color`; custom properties are kept verbatim.
pub fn camel_to_kebab(name: &str) -> String {
    if name.starts_with("--") || !name.chars().any(|c| c.is_ascii_uppercase()) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `12`, `-4`, `0.5`, `.5`
pub fn is_numeric_literal(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit() || c == '.')
        && s.chars().filter(|&c| c == '.').count() <= 1
        && s.chars().any(|c| c.is_ascii_digit())
}

/// True if the expression has a conditional `a ? b : c` at depth zero.
pub fn has_top_level_ternary(expr: &str) -> bool {
    let bytes = expr.as_bytes();
    top_level_positions(expr, b'?').into_iter().any(|i| {
        let next = bytes.get(i + 1).copied();
        let prev = if i > 0 { Some(bytes[i - 1]) } else { None };
        next != Some(b'.') && next != Some(b'?') && prev != Some(b'?')
    }) && !top_level_positions(expr, b':').is_empty()
}
