//! Server-rendered HTML pages.

pub mod history;
pub mod index;

pub use history::render_history;
pub use index::INDEX_HTML;

/// Shared page styling
pub(crate) const BASE_STYLE: &str = r#"
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background: #f5f5f5;
            color: #333;
        }
        .container {
            max-width: 960px;
            margin: 40px auto;
            padding: 20px;
            background: #fff;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
        }
        h1 { text-align: center; }
        nav { text-align: center; margin-bottom: 20px; }
        nav a { margin: 0 10px; color: #0066cc; }
"#;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Optional numbers render as "N/A" when absent
pub(crate) fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value
        .filter(|v| v.is_finite())
        .map(|v| format!("{v:.decimals$}"))
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
        assert_eq!(escape_html("São Paulo"), "São Paulo");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(0.8234), 2), "0.82");
        assert_eq!(format_optional(Some(21.0), 1), "21.0");
        assert_eq!(format_optional(None, 2), "N/A");
        assert_eq!(format_optional(Some(f64::NAN), 2), "N/A");
    }
}
