//! Cleaning up text for display inside HTML.

/// Column at which `plain_text_to_html` wraps lines.
pub const WRAP_WIDTH: usize = 75;

/// Escapes `&`, `<`, `>`, `"` and `'`, re-escaping existing entities.
pub fn escape(text: &str) -> String {
    escape_with(text, true)
}

/// Escapes `&`, `<`, `>`, `"` and `'`.
///
/// With `double_encode == false`, character references already present
/// (`&amp;`, `&#39;`, `&#x27;`) are copied through unchanged.
pub fn escape_with(text: &str, double_encode: bool) -> String {
    if double_encode {
        return html_escape::encode_quoted_attribute(text).into_owned();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&html_escape::encode_quoted_attribute(&rest[..idx]));
        let tail = &rest[idx..];
        match reference_len(tail) {
            Some(len) => {
                out.push_str(&tail[..len]);
                rest = &tail[len..];
            }
            None => {
                out.push_str("&amp;");
                rest = &tail[1..];
            }
        }
    }
    out.push_str(&html_escape::encode_quoted_attribute(rest));
    out
}

/// Length of the character reference at the start of `s` (which begins
/// with `&`), if it is one.
fn reference_len(s: &str) -> Option<usize> {
    let body = &s[1..];
    let end = body.find(';')?;
    let name = &body[..end];
    let valid = match name.strip_prefix('#') {
        Some(num) => match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()),
        },
        None => {
            name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                && name.chars().all(|c| c.is_ascii_alphanumeric())
        }
    };
    valid.then_some(end + 2)
}

/// Inserts `<br />` before every line break (`\r\n`, `\n\r`, `\n`, `\r`).
pub fn nl2br(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' | '\n' => {
                out.push_str("<br />");
                out.push(c);
                let pair = if c == '\r' { '\n' } else { '\r' };
                if chars.peek() == Some(&pair) {
                    out.push(pair);
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Drops backslash escapes: `\x` becomes `x`, `\\` becomes `\`.
pub fn strip_slashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Breaks lines at spaces so none exceeds `width` columns. Words longer
/// than `width` are left whole.
pub fn word_wrap(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut current = 0usize;
    for (i, word) in line.split(' ').enumerate() {
        let len = word.chars().count();
        if i > 0 {
            if current > 0 && current + 1 + len > width {
                out.push('\n');
                current = 0;
            } else {
                out.push(' ');
                current += 1;
            }
        }
        out.push_str(word);
        current += len;
    }
    out
}

/// Plain text to display-ready HTML: escaped, backslashes stripped,
/// line breaks kept as `<br />`, wrapped for readable source.
pub fn plain_text_to_html(text: &str) -> String {
    let para = nl2br(&strip_slashes(&escape_with(text, false)));
    // keep `<br />` from being split by the wrapper
    let para = para.replace("<br />", "<br/>");
    word_wrap(&para, WRAP_WIDTH).replace("<br/>", "<br />")
}

/// Each line of `text` becomes an item of an unordered list.
pub fn bullets_html(text: &str) -> String {
    let escaped = escape_with(text, false);
    let para = nl2br(&strip_slashes(escaped.trim())).replace("<br />", "</li>\n<li>");
    format!("<ul>\n<li>\n{para}\n</li>\n</ul>\n")
}
