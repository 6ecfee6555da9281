//! Public Content Helpers
//!
//! Pure rendering decisions for the public site.

use crate::models::Notice;

pub const NO_NOTICES: &str = "No new notices at the moment.";
pub const NOTICES_FAILED: &str = "Could not load notices.";
pub const LINKS_FAILED: &str = "Could not load resources.";
pub const GALLERY_EMPTY: &str = "No gallery images have been uploaded yet.";
pub const GALLERY_FAILED: &str = "Could not load the gallery at this time.";

/// Progress of a fetch/render cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed,
}

impl<T> From<Result<T, String>> for FetchState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(_) => FetchState::Failed,
        }
    }
}

/// Ticker entries: the list played twice for a seamless loop,
/// or a single placeholder when there is nothing to show
pub fn ticker_items(notices: &[Notice]) -> Vec<String> {
    if notices.is_empty() {
        return vec![NO_NOTICES.to_string()];
    }
    notices.iter().chain(notices.iter()).map(|n| n.text.clone()).collect()
}

/// Href safe to put on an anchor. Script-capable schemes become "#".
pub fn safe_href(url: &str) -> String {
    let url = url.trim();
    let Some(colon) = url.find(':') else { return url.to_string() };
    // A ':' after a path, query or fragment start is not a scheme separator
    if url[..colon].contains(&['/', '?', '#'][..]) {
        return url.to_string();
    }

    let scheme = url[..colon]
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if matches!(scheme.as_str(), "javascript" | "data" | "vbscript") {
        "#".to_string()
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u64, text: &str) -> Notice {
        Notice { id, text: text.to_string() }
    }

    #[test]
    fn test_empty_ticker_has_one_placeholder() {
        assert_eq!(ticker_items(&[]), vec![NO_NOTICES.to_string()]);
    }

    #[test]
    fn test_ticker_plays_list_twice() {
        let notices = vec![notice(1, "a"), notice(2, "b"), notice(3, "c")];
        let items = ticker_items(&notices);
        assert_eq!(items.len(), 6);
        assert_eq!(items, vec!["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("https://example.org/a?b=c"), "https://example.org/a?b=c");
        assert_eq!(safe_href(" http://example.org "), "http://example.org");
        assert_eq!(safe_href("mailto:office@example.org"), "mailto:office@example.org");
        assert_eq!(safe_href("/docs/guide"), "/docs/guide");
        assert_eq!(safe_href("#contact"), "#contact");
        assert_eq!(safe_href("page?next=javascript:x"), "page?next=javascript:x");
        assert_eq!(safe_href("javascript:alert(1)"), "#");
        assert_eq!(safe_href("JavaScript:alert(1)"), "#");
        assert_eq!(safe_href("java\tscript:alert(1)"), "#");
        assert_eq!(safe_href("data:text/html,<b>x</b>"), "#");
        assert_eq!(safe_href("vbscript:msgbox"), "#");
    }

    #[test]
    fn test_fetch_state_from_result() {
        assert_eq!(FetchState::from(Ok::<u32, String>(3)), FetchState::Ready(3));
        assert_eq!(FetchState::from(Err::<u32, String>("x".into())), FetchState::Failed);
        assert_eq!(FetchState::<u32>::default(), FetchState::Loading);
    }
}
