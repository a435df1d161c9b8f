//! Pagination `Link` header parsing
//!
//! The events API advertises related pages as
//! `<https://host/...?page=3>; rel="next", <https://host/...?page=5>; rel="last"`.
//! Only the `next` and `last` relations matter here: the current page is one
//! before `next`, and `last` is the total page count.

use crate::errors::FeedError;
use reqwest::Url;

const REL_NEXT: &str = r#"rel="next""#;
const REL_LAST: &str = r#"rel="last""#;

/// Parse a `Link` header into `(current_page, last_page)`.
///
/// Entries without a `;` are skipped, as are entries whose URL has no `page`
/// parameter. When neither a `next` nor a `last` link is present both values
/// are zero.
pub fn parse_links(header: &str) -> Result<(u32, u32), FeedError> {
    let mut current_page = 0;
    let mut last_page = 0;

    for entry in header.split(',') {
        let entry = entry.trim();
        let Some((target, params)) = entry.split_once(';') else {
            continue;
        };

        let raw_url = target.trim().trim_matches(&['<', '>'][..]);
        let url = Url::parse(raw_url)
            .map_err(|e| FeedError::LinkHeader(format!("failed to parse URL '{}': {}", raw_url, e)))?;

        let Some(page) = page_param(&url) else {
            continue;
        };
        let page: i64 = page
            .parse()
            .map_err(|_| FeedError::LinkHeader(format!("invalid page number: {}", page)))?;

        if params.contains(REL_NEXT) {
            current_page = clamp_page(page.saturating_sub(1));
        } else if params.contains(REL_LAST) {
            last_page = clamp_page(page);
        }
    }

    Ok((current_page, last_page))
}

/// Negative page numbers count as absent.
fn clamp_page(page: i64) -> u32 {
    u32::try_from(page.max(0)).unwrap_or(u32::MAX)
}

fn page_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_last() {
        let header = r#"<https://x/?page=3>; rel="next", <https://x/?page=5>; rel="last""#;
        assert_eq!(parse_links(header).unwrap(), (2, 5));
    }

    #[test]
    fn test_github_style_header() {
        let header = concat!(
            r#"<https://api.github.com/user/583231/events?page=1&per_page=10>; rel="prev", "#,
            r#"<https://api.github.com/user/583231/events?page=3&per_page=10>; rel="next", "#,
            r#"<https://api.github.com/user/583231/events?page=10&per_page=10>; rel="last", "#,
            r#"<https://api.github.com/user/583231/events?page=1&per_page=10>; rel="first""#
        );
        assert_eq!(parse_links(header).unwrap(), (2, 10));
    }

    #[test]
    fn test_unrelated_rels_default_to_zero() {
        let header = r#"<https://x/?page=1>; rel="prev", <https://x/?page=1>; rel="first""#;
        assert_eq!(parse_links(header).unwrap(), (0, 0));
    }

    #[test]
    fn test_entries_without_rel_are_skipped() {
        let header = r#"<https://x/?page=9>, <https://x/?page=4>; rel="last""#;
        assert_eq!(parse_links(header).unwrap(), (0, 4));
    }

    #[test]
    fn test_missing_page_param_contributes_nothing() {
        let header = r#"<https://x/?per_page=10>; rel="next", <https://x/?page=7>; rel="last""#;
        assert_eq!(parse_links(header).unwrap(), (0, 7));
    }

    #[test]
    fn test_extra_attributes_are_ignored() {
        let header = r#"<https://x/?page=2>; rel="next"; title="more""#;
        assert_eq!(parse_links(header).unwrap(), (1, 0));
    }

    #[test]
    fn test_malformed_url_fails() {
        let header = r#"<https://x/?page=2>; rel="next", <://broken>; rel="last""#;
        let err = parse_links(header).unwrap_err();
        assert!(matches!(err, FeedError::LinkHeader(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_non_numeric_page_fails() {
        let header = r#"<https://x/?page=two>; rel="next""#;
        let err = parse_links(header).unwrap_err();
        assert!(err.to_string().contains("invalid page number: two"));
    }

    #[test]
    fn test_negative_pages_clamp_to_zero() {
        let header = r#"<https://x/?page=-1>; rel="next", <https://x/?page=-4>; rel="last""#;
        assert_eq!(parse_links(header).unwrap(), (0, 0));
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(parse_links("").unwrap(), (0, 0));
    }
}
