use crate::models::{NewLink, SongResult, TrackLink};
use reqwest::{Client, Error as ReqwestError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Source rejected the track id")]
    InvalidSourceId,
}

/// Song search response wrapper
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SongResult>,
}

/// Create-link response wrapper
#[derive(Debug, Deserialize)]
struct CreateLinkResponse {
    link: TrackLink,
}

#[derive(Clone)]
pub struct LinkApiClient {
    client: Client,
    base_url: String,
}

impl LinkApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Free-text song search against the backend.
    pub async fn search_songs(&self, query: &str) -> Result<Vec<SongResult>, LinkApiError> {
        let url = format!("{}/songs/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .header("User-Agent", "droptune/0.1")
            .send()
            .await?;

        if response.status().is_success() {
            let search_response: SearchResponse = response.json().await?;
            Ok(search_response.results)
        } else {
            Err(LinkApiError::Request(
                response.error_for_status().unwrap_err(),
            ))
        }
    }

    /// Create a shared link from a source track id. The backend answers 422
    /// when the source does not know the id; callers flag that link as
    /// invalid rather than treating it as a transport failure.
    pub async fn create_link(&self, new_link: &NewLink) -> Result<TrackLink, LinkApiError> {
        let url = format!("{}/links", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(new_link)
            .header("User-Agent", "droptune/0.1")
            .send()
            .await?;

        if response.status().is_success() {
            let create_response: CreateLinkResponse = response.json().await?;
            Ok(create_response.link)
        } else if response.status() == 422 {
            Err(LinkApiError::InvalidSourceId)
        } else {
            Err(LinkApiError::Request(
                response.error_for_status().unwrap_err(),
            ))
        }
    }
}
