// src/core/escape.rs

/// Escape free text for insertion into HTML body or attribute position.
/// Every snapshot field passes through here before emission.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Smith & Sons"), "Smith &amp; Sons");
        assert_eq!(escape_html("O'Brien"), "O&#39;Brien");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Cherokee 45-30"), "Cherokee 45-30");
        assert_eq!(escape_html(""), "");
    }
}
