//! Input hygiene for the relay: markup is escaped (never stripped) and
//! email addresses get a syntactic check before anything is sent.

/// Escapes `& < > " '` so user text can be embedded in an HTML mail body.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Syntactic address check: one `@`, non-empty local part, a dotted domain
/// with non-empty labels, and none of the characters that would need
/// escaping in an HTML body or a mail header.
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.is_empty()
        || candidate
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }
    if candidate
        .chars()
        .any(|c| matches!(c, '<' | '>' | '"' | '\'' | '\\' | ',' | ';' | '(' | ')'))
    {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
