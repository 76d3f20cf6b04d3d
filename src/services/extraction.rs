//! Locating the JSON payload inside free-text model output.

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Picks the JSON candidate out of a raw model reply.
///
/// Precedence:
/// 1. content after the first "```json" up to the next "```"
/// 2. content between the first and second "```"
/// 3. the whole reply
///
/// A reply that quotes fence markers inside its own example text will yield
/// the wrong span; `first_balanced_object` is the recovery for that case.
pub fn extract_json_candidate(raw: &str) -> &str {
    if let Some(start) = raw.find(JSON_FENCE) {
        let rest = &raw[start + JSON_FENCE.len()..];
        return until_fence(rest).trim();
    }

    if let Some(start) = raw.find(FENCE) {
        let rest = &raw[start + FENCE.len()..];
        return until_fence(rest).trim();
    }

    raw
}

fn until_fence(text: &str) -> &str {
    match text.find(FENCE) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Returns the first `{ ... }` span whose braces balance, ignoring braces
/// inside JSON string literals.
pub fn first_balanced_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&raw[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_json_fence() {
        let raw = "```json\n{\"a\":1}\n```";
        assert_eq!(extract_json_candidate(raw), "{\"a\":1}");
    }

    #[test]
    fn test_plain_fence() {
        let raw = "```\n{\"a\":1}\n```";
        assert_eq!(extract_json_candidate(raw), "{\"a\":1}");
    }

    #[test]
    fn test_no_fence_returns_whole_text() {
        let raw = "{\"a\":1}";
        assert_eq!(extract_json_candidate(raw), "{\"a\":1}");
        let parsed: Value = serde_json::from_str(extract_json_candidate(raw)).unwrap();
        assert_eq!(parsed, json!({ "a": 1 }));
    }

    #[test]
    fn test_json_fence_with_surrounding_prose() {
        let raw = "Here are your courses:\n```json\n{\"a\":1}\n```\nGood luck!";
        assert_eq!(extract_json_candidate(raw), "{\"a\":1}");
    }

    #[test]
    fn test_json_fence_wins_over_earlier_plain_fence() {
        let raw = "```\nignored\n```\n```json\n{\"a\":2}\n```";
        assert_eq!(extract_json_candidate(raw), "{\"a\":2}");
    }

    #[test]
    fn test_unterminated_json_fence_runs_to_end() {
        let raw = "```json\n{\"a\":1}\n";
        assert_eq!(extract_json_candidate(raw), "{\"a\":1}");
    }

    #[test]
    fn test_trailing_fence_only_yields_empty_candidate() {
        assert_eq!(extract_json_candidate("no json here```"), "");
    }

    #[test]
    fn test_balanced_object_skips_prose() {
        let raw = "Sure! {\"a\": {\"b\": 1}} hope that helps {\"c\": 2}";
        assert_eq!(first_balanced_object(raw), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_balanced_object_ignores_braces_in_strings() {
        let raw = r#"x {"tip": "use {braces} and \"quotes\" }"} y"#;
        assert_eq!(
            first_balanced_object(raw),
            Some(r#"{"tip": "use {braces} and \"quotes\" }"}"#)
        );
    }

    #[test]
    fn test_balanced_object_unclosed() {
        assert_eq!(first_balanced_object("{\"a\": 1"), None);
        assert_eq!(first_balanced_object("not json at all"), None);
    }
}
