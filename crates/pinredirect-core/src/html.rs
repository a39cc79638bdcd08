//! Static HTML redirect page.
//!
//! The page replaces the current history entry with the destination via
//! `window.location.replace`, so the back button skips the redirect page.
//! A meta refresh and a plain link cover clients without scripting.

use std::fmt::Write as _;

/// Renders a complete redirect page for `destination`.
pub fn render_redirect_page(destination: &str) -> String {
    let js = js_string_literal(destination);
    let attr = escape_html(destination);
    let mut page = String::with_capacity(320 + js.len() + 3 * attr.len());
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Redirecting</title>\n");
    let _ = writeln!(page, "<meta http-equiv=\"refresh\" content=\"0; url={attr}\">");
    let _ = writeln!(page, "<link rel=\"canonical\" href=\"{attr}\">");
    let _ = writeln!(page, "<script>window.location.replace({js});</script>");
    page.push_str("</head>\n<body>\n");
    let _ = writeln!(page, "<p>Redirecting to <a href=\"{attr}\">{attr}</a>.</p>");
    page.push_str("</body>\n</html>\n");
    page
}

/// Double-quoted JavaScript string literal that is also safe inside a
/// `<script>` element.
pub fn js_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\'' | '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
