//! Client for the Metropolitan Museum of Art collection API.

use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::{debug, instrument, trace, warn};

pub const MET_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// How many object IDs the random picker draws from.
const RANDOM_POOL_SIZE: usize = 1000;

/// A single displayable artwork record.
///
/// Records without an image URL never leave this module; `object_details`
/// filters them out before anything downstream can see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub date: String,
    pub culture: String,
    pub department: String,
    pub medium: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "objectIDs")]
    object_ids: Option<Vec<i64>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ObjectResponse {
    title: String,
    #[serde(rename = "artistDisplayName")]
    artist_display_name: String,
    #[serde(rename = "primaryImage")]
    primary_image: String,
    #[serde(rename = "objectDate")]
    object_date: String,
    culture: String,
    department: String,
    medium: String,
}

impl ObjectResponse {
    fn into_artwork(self) -> Option<Artwork> {
        if self.primary_image.is_empty() {
            return None;
        }
        Some(Artwork {
            title: non_empty_or(self.title, "Untitled"),
            artist: non_empty_or(self.artist_display_name, "Unknown Artist"),
            image_url: self.primary_image,
            date: self.object_date,
            culture: self.culture,
            department: self.department,
            medium: self.medium,
        })
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

#[derive(Clone)]
pub struct MetClient {
    client: reqwest::Client,
    base_url: String,
}

impl MetClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search the collection and return up to `max_results` displayable
    /// artworks. Only the first `max_results` IDs are fetched, so an imageless
    /// or failing record reduces the result count rather than triggering a
    /// walk over the whole ID list. Any API failure is logged and yields an
    /// empty list; a search that fails and a search that finds nothing look
    /// the same to callers.
    #[instrument(level = "debug", skip(self))]
    pub async fn search_artworks(&self, query: &str, max_results: usize) -> Vec<Artwork> {
        let ids = match self.search_ids(query).await {
            Ok(ids) => ids,
            Err(err) => {
                warn!(error = %err, query, "Met search failed");
                return Vec::new();
            }
        };

        let mut artworks = Vec::new();
        for id in ids.into_iter().take(max_results) {
            match self.object_details(id).await {
                Ok(Some(artwork)) => artworks.push(artwork),
                Ok(None) => trace!(id, "skipping object without image"),
                Err(err) => warn!(error = %err, id, "failed to fetch object details"),
            }
        }

        debug!(query, found = artworks.len(), "Met search finished");
        artworks
    }

    /// Pick a random displayable artwork from the collection.
    #[instrument(level = "debug", skip(self))]
    pub async fn random_artwork(&self) -> Option<Artwork> {
        let ids = match self.search_ids("art").await {
            Ok(ids) => ids,
            Err(err) => {
                warn!(error = %err, "Met random search failed");
                return None;
            }
        };

        let pool = &ids[..ids.len().min(RANDOM_POOL_SIZE)];
        let id = *pool.choose(&mut rand::thread_rng())?;

        match self.object_details(id).await {
            Ok(artwork) => artwork,
            Err(err) => {
                warn!(error = %err, id, "failed to fetch random object");
                None
            }
        }
    }

    async fn search_ids(&self, query: &str) -> Result<Vec<i64>> {
        let url = format!("{}/search", self.base_url);
        debug!(url, query, "sending Met search request");

        let resp = self
            .client
            .get(&url)
            .query(&[("q", query), ("hasImages", "true")])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(anyhow!("Met API error {status}"));
        }

        let raw = resp.text().await?;
        trace!(raw = %raw, "Met search response");
        let search: SearchResponse = serde_json::from_str(&raw)?;
        Ok(search.object_ids.unwrap_or_default())
    }

    /// Fetch details for one object. Returns `None` for records that lack a
    /// primary image and are therefore unusable for display.
    pub async fn object_details(&self, id: i64) -> Result<Option<Artwork>> {
        let url = format!("{}/objects/{}", self.base_url, id);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(anyhow!("Met API error {status} for object {id}"));
        }

        let object: ObjectResponse = resp.json().await?;
        Ok(object.into_artwork())
    }
}
