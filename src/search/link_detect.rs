use crate::models::LinkSource;
use regex::Regex;
use std::sync::LazyLock;

/// A provider + id pair recognized from pasted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub source: LinkSource,
    pub id: String,
}

// Track references we accept, anchored so partial matches inside longer
// text stay plain search queries.
static ITUNES_TRACK_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://itun\.es/[a-z]+/[\w-]+\?i=(\d+)$").unwrap());
static SPOTIFY_TRACK_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://open\.spotify\.com/\w+/(\w+)$").unwrap());
static SPOTIFY_URI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^spotify:track:([\w-]+)$").unwrap());
static SPOTIFY_PLAY_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://play\.spotify\.com/\w+/(\w+).*$").unwrap());

/// Classify raw input text as an external track reference.
///
/// Patterns are tried in fixed order; the first match wins. Anything that
/// matches none of them is treated as a plain text query.
pub fn detect_link(text: &str) -> Option<LinkRef> {
    if let Some(caps) = ITUNES_TRACK_LINK.captures(text) {
        return Some(LinkRef {
            source: LinkSource::Itunes,
            id: caps[1].to_string(),
        });
    }
    if let Some(caps) = SPOTIFY_TRACK_LINK.captures(text) {
        return Some(LinkRef {
            source: LinkSource::Spotify,
            id: caps[1].to_string(),
        });
    }
    if let Some(caps) = SPOTIFY_URI.captures(text) {
        return Some(LinkRef {
            source: LinkSource::Spotify,
            id: caps[1].to_string(),
        });
    }
    if let Some(caps) = SPOTIFY_PLAY_LINK.captures(text) {
        return Some(LinkRef {
            source: LinkSource::Spotify,
            id: caps[1].to_string(),
        });
    }
    None
}
