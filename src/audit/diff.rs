//! One-line change summaries for audit updates

use serde_json::Value;

/// Bookkeeping fields that change on every write and say nothing useful
const IGNORED_FIELDS: [&str; 2] = ["created_at", "updated_at"];

const MAX_SHOWN_CHARS: usize = 40;

/// Summarise the top-level fields that differ between two snapshots
///
/// Returns `None` when nothing but timestamps changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", show(before), show(after)));
    };

    let changes: Vec<String> = before_obj
        .iter()
        .filter(|(key, _)| !IGNORED_FIELDS.contains(&key.as_str()))
        .filter_map(|(key, old)| {
            let new = after_obj.get(key).unwrap_or(&Value::Null);
            (old != new).then(|| format!("{}: {} -> {}", key, show(old), show(new)))
        })
        .chain(
            after_obj
                .iter()
                .filter(|(key, _)| !before_obj.contains_key(*key))
                .map(|(key, new)| format!("{}: (none) -> {}", key, show(new))),
        )
        .collect();

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn show(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_SHOWN_CHARS => {
            let head: String = s.chars().take(MAX_SHOWN_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}
