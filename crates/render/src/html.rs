//! Small HTML helpers shared by the section renderers: escaping and
//! tolerant prop access over the open property bag.

use serde_json::{Map, Value};

/// Escape text for element content.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// String prop with a default for missing, null, or empty values.
pub fn prop_str<'a>(props: &'a Map<String, Value>, key: &str, default: &'a str) -> &'a str {
    props
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

/// Array prop; missing or non-array values yield an empty slice.
pub fn prop_items<'a>(props: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    props
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_attr(r#"x" onload='y'"#), "x&quot; onload=&#39;y&#39;");
    }

    #[test]
    fn prop_str_defaults_on_missing_null_and_empty() {
        let props = json!({"a": "x", "b": "", "c": null, "d": 7})
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(prop_str(&props, "a", "dflt"), "x");
        assert_eq!(prop_str(&props, "b", "dflt"), "dflt");
        assert_eq!(prop_str(&props, "c", "dflt"), "dflt");
        assert_eq!(prop_str(&props, "d", "dflt"), "dflt");
        assert_eq!(prop_str(&props, "missing", "dflt"), "dflt");
    }

    #[test]
    fn prop_items_tolerates_non_arrays() {
        let props = json!({"items": [1, 2], "nope": "x"})
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(prop_items(&props, "items").len(), 2);
        assert!(prop_items(&props, "nope").is_empty());
        assert!(prop_items(&props, "missing").is_empty());
    }
}
