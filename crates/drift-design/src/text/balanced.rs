//! Balanced-delimiter scanning.
//!
//! Delimiters are ASCII, so the scan works on bytes without splitting UTF-8
//! sequences. String literals and comments are skipped so braces inside
//! them never affect depth.

fn closer_for(open: u8) -> Option<u8> {
    match open {
        b'{' => Some(b'}'),
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        _ => None,
    }
}

/// Returns the end (exclusive) of a string literal or comment starting at `i`,
/// or `None` if no literal/comment starts there.
fn skip_opaque(bytes: &[u8], i: usize) -> Option<usize> {
    match bytes[i] {
        q @ (b'"' | b'\'' | b'`') => {
            let mut j = i + 1;
            while j < bytes.len() {
                match bytes[j] {
                    b'\\' => j += 2,
                    c if c == q => return Some(j + 1),
                    b'\n' if q != b'`' => return Some(j),
                    _ => j += 1,
                }
            }
            Some(bytes.len())
        }
        b'/' if bytes.get(i + 1) == Some(&b'*') => {
            let mut j = i + 2;
            while j + 1 < bytes.len() {
                if bytes[j] == b'*' && bytes[j + 1] == b'/' {
                    return Some(j + 2);
                }
                j += 1;
            }
            Some(bytes.len())
        }
        // `//` after `:` or `(` is a URL, not a comment.
        b'/' if bytes.get(i + 1) == Some(&b'/') && (i == 0 || !matches!(bytes[i - 1], b':' | b'(')) => {
            let mut j = i + 2;
            while j < bytes.len() && bytes[j] != b'\n' {
                j += 1;
            }
            Some(j)
        }
        _ => None,
    }
}

/// Index of the delimiter matching the opener at `open_idx`.
///
/// Only the opener's own delimiter pair is counted. Returns `None` when
/// `open_idx` is not an opener or the block is unterminated.
pub fn find_matching(text: &str, open_idx: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let open = *bytes.get(open_idx)?;
    let close = closer_for(open)?;
    let mut depth = 0usize;
    let mut i = open_idx;
    while i < bytes.len() {
        if i > open_idx {
            if let Some(end) = skip_opaque(bytes, i) {
                i = end;
                continue;
            }
        }
        let b = bytes[i];
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}

/// Byte offsets of `target` occurring at nesting depth zero,
/// outside strings and comments.
pub fn top_level_positions(text: &str, target: u8) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut positions = Vec::new();
    let mut depth = 0i32;
    let mut i = 0;
    while i < bytes.len() {
        if let Some(end) = skip_opaque(bytes, i) {
            i = end;
            continue;
        }
        let b = bytes[i];
        if depth == 0 && b == target {
            positions.push(i);
        }
        match b {
            b'{' | b'(' | b'[' => depth += 1,
            b'}' | b')' | b']' => depth = (depth - 1).max(0),
            _ => {}
        }
        i += 1;
    }
    positions
}

/// Split on a top-level separator, returning `(offset, segment)` pairs.
pub fn split_top_level(text: &str, sep: u8) -> Vec<(usize, &str)> {
    let mut parts = Vec::new();
    let mut start = 0;
    for pos in top_level_positions(text, sep) {
        parts.push((start, &text[start..pos]));
        start = pos + 1;
    }
    parts.push((start, &text[start..]));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_braces() {
        let css = "@layer base { :root { --a: 1px; } .dark { --a: 2px; } } body {}";
        let open = css.find('{').unwrap();
        let close = find_matching(css, open).unwrap();
        assert_eq!(css[open + 1..close].trim(), ":root { --a: 1px; } .dark { --a: 2px; }");
    }

    #[test]
    fn test_braces_in_strings_ignored() {
        let js = r#"cva("a { b", { variants: { size: { sm: "}" } } })"#;
        let open = js.find('(').unwrap();
        let close = find_matching(js, open).unwrap();
        assert_eq!(close, js.len() - 1);
    }

    #[test]
    fn test_line_comments_skipped_but_urls_kept() {
        let js = "{ a: 1, // don't { \n b: 'http://x' }";
        assert_eq!(find_matching(js, 0), Some(js.len() - 1));
    }

    #[test]
    fn test_unterminated_block() {
        assert_eq!(find_matching("{ { }", 0), None);
        assert_eq!(find_matching("no braces", 0), None);
    }

    #[test]
    fn test_split_top_level() {
        let parts: Vec<&str> = split_top_level("a: f(1, 2), b: { c: 1, d: 2 }, e", b',')
            .into_iter()
            .map(|(_, s)| s.trim())
            .collect();
        assert_eq!(parts, vec!["a: f(1, 2)", "b: { c: 1, d: 2 }", "e"]);
    }
}
