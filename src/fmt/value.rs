//! Readable, multi-line export of arbitrary JSON values.
//!
//! Used for table rows holding structured content (caller context maps,
//! detail-group annotations) where `serde_json`'s own formatting would be
//! too dense to scan in a log file.

use serde_json::Value;

/// Top-level maps and lists render as `key = value` lines; everything else
/// falls through to [`export`].
#[must_use]
pub fn nice_export(value: &Value, top_prefix: &str, second_prefix: &str, indent: &str) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{top_prefix}{key} = {}", export(value, second_prefix, indent, 0)))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, value)| format!("{top_prefix}{index} = {}", export(value, second_prefix, indent, 0)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => export(other, top_prefix, indent, 0),
    }
}

/// Nested values render in a `[index => value]` style; scalars as literals.
#[must_use]
pub fn export(value: &Value, prefix: &str, indent: &str, depth: usize) -> String {
    match value {
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Object(map) if map.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let mut out = String::from("[\n");
            for (index, item) in items.iter().enumerate() {
                out.push_str(&format!(
                    "{prefix}{}{index} => {},\n",
                    indent.repeat(depth + 1),
                    export(item, prefix, indent, depth + 1)
                ));
            }
            out.push_str(&format!("{prefix}{}]", indent.repeat(depth)));
            out
        }
        Value::Object(map) => {
            let mut out = String::from("[\n");
            for (key, item) in map {
                out.push_str(&format!(
                    "{prefix}{}'{key}' => {},\n",
                    indent.repeat(depth + 1),
                    export(item, prefix, indent, depth + 1)
                ));
            }
            out.push_str(&format!("{prefix}{}]", indent.repeat(depth)));
            out
        }
        Value::String(s) => format!("'{s}'"),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::nice_export;
    use serde_json::json;

    #[test]
    fn scalar_list_renders_indexed_lines() {
        assert_eq!(nice_export(&json!(["a"]), "", "", "  "), "0 = 'a'");
    }

    #[test]
    fn flat_map_renders_key_value_lines() {
        let value = json!({"id1": 1, "id2": 2});
        assert_eq!(nice_export(&value, "", "", "  "), "id1 = 1\nid2 = 2");
    }

    #[test]
    fn nested_map_indents_children() {
        let value = json!({"outer": {"inner": true}});
        assert_eq!(
            nice_export(&value, "", "", "  "),
            "outer = [\n  'inner' => true,\n]"
        );
    }

    #[test]
    fn prefixes_apply_to_nested_lines() {
        let value = json!({"a": [1]});
        assert_eq!(
            nice_export(&value, "- ", "  ", "  "),
            "- a = [\n    0 => 1,\n  ]"
        );
    }
}
