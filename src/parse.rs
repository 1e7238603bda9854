use std::collections::HashMap;
use url::Url;

/// Parses a raw header blob of newline-separated "Key: Value" lines.
/// Lines without a separator are skipped; duplicate keys keep the value
/// from the last line they appear on.
pub fn parse_headers(raw: &str) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    for line in raw.lines() {
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    headers
}

/// Splits a URL into its path and multi-valued query parameters, keeping
/// keys in first-appearance order. Relative references are resolved against
/// a placeholder base so log lines like `/1/indexes/foo?x=1` still
/// decompose. On parse failure the original string is returned as the path
/// with no query parameters.
pub fn decompose_url(raw: &str) -> (String, Vec<(String, Vec<String>)>) {
    let base = Url::parse("http://log.invalid/").ok();
    let parsed = match Url::options().base_url(base.as_ref()).parse(raw) {
        Ok(url) => url,
        Err(_) => return (raw.to_string(), Vec::new()),
    };

    let mut params: Vec<(String, Vec<String>)> = Vec::new();
    for (key, value) in parsed.query_pairs() {
        match params.iter_mut().find(|(k, _)| k.as_str() == key.as_ref()) {
            Some((_, values)) => values.push(value.into_owned()),
            None => params.push((key.into_owned(), vec![value.into_owned()])),
        }
    }

    (parsed.path().to_string(), params)
}

/// Normalizes a request body for display. Returns `None` when the body is
/// empty, which omits the section entirely. A body that collapses to
/// exactly two characters once newlines and surrounding whitespace are
/// removed is displayed as the literal empty object.
pub fn normalize_body(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    let collapsed = body.replace('\n', "");
    if collapsed.trim().len() == 2 {
        return Some("{}".to_string());
    }
    Some(body.trim_matches('\n').to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
