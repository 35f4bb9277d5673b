//! Extraction of members and pagination links from category pages.
//!
//! Category pages list members as `<li><a …>title</a></li>` items inside
//! `mw-category` blocks. Further pages are reached through an anchor whose
//! text is a fixed navigational marker.

use regex::Regex;
use std::sync::LazyLock;

/// Start of the member listing.
const LISTING_MARKER: &str = "class=\"mw-category";

/// Start of the footer that follows the listing.
const FOOTER_MARKER: &str = "class=\"printfooter\"";

/// A list item holding a single link; captures the link text.
static MEMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<li[^>]*>\s*<a\b[^>]*>([^<]+)</a>").expect("valid regex")
});

/// Build the pattern matching an anchor with the given text; captures `href`.
pub fn next_link_pattern(marker: &str) -> Regex {
    Regex::new(&format!(
        r#"<a\b[^>]*?\bhref="([^"]+)"[^>]*>\s*{}\s*</a>"#,
        regex::escape(marker)
    ))
    .expect("escaped marker is a valid pattern")
}

/// Titles of all members listed on a category page.
pub fn category_members(html: &str) -> Vec<String> {
    let Some(start) = html.find(LISTING_MARKER) else {
        return Vec::new();
    };
    let listing = &html[start..];
    let listing = listing
        .find(FOOTER_MARKER)
        .map_or(listing, |end| &listing[..end]);

    MEMBER_PATTERN
        .captures_iter(listing)
        .map(|caps| decode_entities(caps[1].trim()))
        .filter(|title| !title.is_empty())
        .collect()
}

/// The `href` of the next-page link, if the page has one.
pub fn next_page_href(pattern: &Regex, html: &str) -> Option<String> {
    pattern.captures(html).map(|caps| decode_entities(&caps[1]))
}

/// Decode the handful of entities MediaWiki emits in titles and URLs.
fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
