// Tooltip markup. Target names go into `innerHTML`, so they are escaped first.

/// Tooltip body for a hovered target.
#[inline]
pub fn tooltip_html(name: &str) -> String {
    format!("<strong>{}</strong>", escape_html(name))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
