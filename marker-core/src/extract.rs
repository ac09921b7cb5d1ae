//! JSON extraction from free-form agent output
//!
//! Agent replies are unreliable prose-wrapped JSON. Extraction is an ordered
//! list of strategies, tried first-success-wins: once a strategy produces a
//! candidate span, that candidate is parsed and no later strategy is
//! consulted. Parse failures are loud, never papered over by falling back.

use serde_json::{Map, Value};

use crate::{Error, Result};

type Strategy = fn(&str) -> Option<&str>;

/// Candidate-locating strategies, in priority order
const STRATEGIES: &[Strategy] = &[fenced_block, bare_object, outer_braces];

/// Locate and parse the JSON object embedded in `text`
pub fn extract_json(text: &str) -> Result<Map<String, Value>> {
    let candidate = STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text))
        .ok_or_else(|| Error::Extraction("no JSON located".to_string()))?;

    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| Error::Extraction(format!("parse failed: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::Extraction(
            "parsed JSON is not an object".to_string(),
        )),
    }
}

/// A code fence tagged `json` (case-insensitive) whose trimmed body is `{...}`
fn fenced_block(text: &str) -> Option<&str> {
    let lower = text.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(rel) = lower[search_from..].find("```json") {
        let body_start = search_from + rel + "```json".len();
        let body = &text[body_start..];
        let close = body.find("```")?;

        let candidate = body[..close].trim();
        if candidate.starts_with('{') && candidate.ends_with('}') {
            return Some(candidate);
        }

        search_from = body_start + close + 3;
    }

    None
}

/// The whole trimmed input is `{...}`
fn bare_object(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        Some(trimmed)
    } else {
        None
    }
}

/// Greedy span from the first `{` to the last `}`
fn outer_braces(text: &str) -> Option<&str> {
    let first = text.find('{')?;
    let last = text.rfind('}')?;
    if last > first {
        Some(&text[first..=last])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_with_prose() {
        let text = "Here is the info you asked for:\n```json\n{\"repo\": \"a/b\"}\n```\nLet me know if you need more.";
        let map = extract_json(text).unwrap();
        assert_eq!(map.get("repo").unwrap(), "a/b");
    }

    #[test]
    fn test_fenced_block_tag_case_insensitive() {
        let text = "```JSON\n{\"branch\": \"main\"}\n```";
        let map = extract_json(text).unwrap();
        assert_eq!(map.get("branch").unwrap(), "main");
    }

    #[test]
    fn test_fenced_block_wins_over_outer_braces() {
        let text = "Intro {not json}\n```json\n{\"key\": 1}\n```\ntrailing {also not json}";
        let map = extract_json(text).unwrap();
        assert_eq!(map.get("key").unwrap(), 1);
    }

    #[test]
    fn test_second_fence_is_found() {
        let text = "```python\nprint('hi')\n```\n```json\n{\"key\": 2}\n```";
        let map = extract_json(text).unwrap();
        assert_eq!(map.get("key").unwrap(), 2);
    }

    #[test]
    fn test_bare_object() {
        let text = "  \n{\"url\": \"https://example.com\"}\n  ";
        let map = extract_json(text).unwrap();
        assert_eq!(map.get("url").unwrap(), "https://example.com");
    }

    #[test]
    fn test_outer_braces_in_prose() {
        let text = "The answer is {\"a\": true} as requested.";
        let map = extract_json(text).unwrap();
        assert_eq!(map.get("a").unwrap(), true);
    }

    #[test]
    fn test_no_braces_fails() {
        let err = extract_json("no json here at all").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(err.to_string().contains("no JSON located"));
    }

    #[test]
    fn test_unparseable_candidate_fails() {
        let err = extract_json("{not: valid json}").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(err.to_string().contains("parse failed"));
    }

    #[test]
    fn test_candidate_failure_does_not_fall_through() {
        // The bare-object strategy produces a candidate; even though a later
        // strategy would find the same broken span, parsing fails loudly.
        let text = "{broken}";
        assert!(extract_json(text).is_err());
    }

    #[test]
    fn test_fence_with_trailing_prose_falls_back() {
        // Fence body is not a clean object, so the outer-brace span is used
        let text = "```json\nsee below\n```\n{\"x\": 3}";
        let map = extract_json(text).unwrap();
        assert_eq!(map.get("x").unwrap(), 3);
    }

    #[test]
    fn test_nested_object() {
        let text = "```json\n{\"outer\": {\"inner\": \"v\"}}\n```";
        let map = extract_json(text).unwrap();
        assert_eq!(map.get("outer").unwrap().get("inner").unwrap(), "v");
    }
}
