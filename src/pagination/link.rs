//! `Link` header parsing

use reqwest::header::{HeaderMap, LINK};

/// URL of the `next` relation, if the response links one
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| parse_link_header(v, "next"))
}

/// Whether the response signals another page
pub fn has_next_page(headers: &HeaderMap) -> bool {
    next_link(headers).is_some()
}

/// Parse a Link header and extract the URL for the given rel
fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    // <url>; rel="next", <url>; rel="prev"
    for part in header.split(',') {
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if let Some(inner) = segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
                url = Some(inner);
            } else if let Some(value) = segment.strip_prefix("rel=") {
                rel = Some(value.trim_matches('"').trim_matches('\''));
            }
        }

        if let (Some(url), Some(rel)) = (url, rel) {
            if rel.split_whitespace().any(|r| r.eq_ignore_ascii_case(target_rel)) {
                return Some(url.to_string());
            }
        }
    }

    None
}
