//! YouTube URL parsing
//!
//! Extracts the 11-character video id from the URL shapes users actually
//! paste: full watch URLs, short youtu.be links, shorts, embeds, live
//! pages, and bare ids.

use regex::Regex;
use std::sync::LazyLock;

/// `v=` query parameter form: `youtube.com/watch?v=<id>`
static QUERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([A-Za-z0-9_-]{11})(?:[&#]|$)").unwrap());

/// Path forms: `youtu.be/<id>`, `/shorts/<id>`, `/embed/<id>`, `/live/<id>`
static PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/shorts/|/embed/|/live/)([A-Za-z0-9_-]{11})(?:[?&#/]|$)").unwrap()
});

/// Bare 11-character id with no URL around it
static BARE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// Extract a YouTube video id from a URL or bare id string
///
/// Returns `None` when no recognizable id is present. Pure and total;
/// callers decide whether a missing id is an error.
///
/// # Examples
///
/// ```
/// use tubemind_core::utils::parse_video_id;
///
/// assert_eq!(
///     parse_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
///     Some("dQw4w9WgXcQ".to_string())
/// );
/// assert_eq!(
///     parse_video_id("https://youtu.be/dQw4w9WgXcQ"),
///     Some("dQw4w9WgXcQ".to_string())
/// );
/// assert_eq!(parse_video_id("not a url"), None);
/// ```
pub fn parse_video_id(url: &str) -> Option<String> {
    let url = url.trim();

    if let Some(caps) = QUERY_RE.captures(url) {
        return Some(caps[1].to_string());
    }

    if let Some(caps) = PATH_RE.captures(url) {
        return Some(caps[1].to_string());
    }

    if BARE_RE.is_match(url) {
        return Some(url.to_string());
    }

    None
}
