//! HTML entity escaping for user-supplied text.
//!
//! Applied both when data is persisted and when it is serialized back out.
//! The encoder is idempotent over its own entity set: an `&` that already
//! begins one of the entities below is left untouched, so the second
//! application is a no-op and the observable output equals a single pass.

/// Entities produced by [`escape`].
const ENTITIES: [&str; 5] = ["amp;", "lt;", "gt;", "quot;", "#x27;"];

/// HTML-entity-encode `&`, `<`, `>`, `"` and `'`.
///
/// Null bytes are dropped. All other characters pass through unchanged.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (i, c) in input.char_indices() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '\0' => {}
            '&' => {
                let rest = &input[i + 1..];
                if ENTITIES.iter().any(|entity| rest.starts_with(entity)) {
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            c => out.push(c),
        }
    }

    out
}
