use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External music service a track reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkSource {
    Itunes,
    Spotify,
}

impl LinkSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkSource::Itunes => "itunes",
            LinkSource::Spotify => "spotify",
        }
    }
}

impl std::fmt::Display for LinkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A song returned by the link service's text search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongResult {
    pub id: String,
    pub source: LinkSource,
    pub source_id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub artwork_url: Option<String>,
}

/// A created link resource referencing an external track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackLink {
    pub id: String,
    pub source: LinkSource,
    pub source_id: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>, // Canonical track page, filled in by the service
    pub created_at: DateTime<Utc>,
}

impl TrackLink {
    /// Best-effort external URL for the track page.
    ///
    /// The service usually resolves one; Spotify ids can be rebuilt locally
    /// when it did not, iTunes short links cannot (region and slug are gone).
    pub fn external_url(&self) -> Option<String> {
        if self.url.is_some() {
            return self.url.clone();
        }
        match self.source {
            LinkSource::Spotify => {
                Some(format!("https://open.spotify.com/track/{}", self.source_id))
            }
            LinkSource::Itunes => None,
        }
    }
}

/// Payload for a create-link request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewLink {
    pub source: LinkSource,
    pub source_id: String,
}
