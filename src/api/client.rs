// SPDX-License-Identifier: MPL-2.0
//! Backend client built on `reqwest`.

use crate::api::{create_shot_cache, SharedShotCache};
use crate::domain::{AuthorId, CommentPage, Shot, ShotId};
use crate::error::{Error, Result};
use reqwest::StatusCode;

const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

/// Client for the portfolio backend. Cheap to share behind an `Arc`; all
/// methods take `&self` and are safe to call concurrently.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    cache: SharedShotCache,
}

impl Client {
    /// Builds a client against `base_url`. A missing trailing slash is added
    /// so endpoint joining stays predictable.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
            cache: create_shot_cache(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches a single shot. `Ok(None)` means the backend has no such shot.
    /// Cache hits skip the network entirely.
    pub async fn shot_by_id(&self, id: &ShotId) -> Result<Option<Shot>> {
        if let Some(shot) = self.cache.lock().await.get(id).cloned() {
            return Ok(Some(shot));
        }

        let url = format!("{}shots/{}", self.base_url, id);
        let response = self.http.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let shot: Shot = response.json().await?;
                self.cache.lock().await.put(shot.id.clone(), shot.clone());
                Ok(Some(shot))
            }
            status => Err(Error::Status(status.as_u16())),
        }
    }

    /// Other shots by the same author. The currently open shot is always
    /// filtered out, whether or not the backend honors the `exclude` hint.
    pub async fn more_shots_by_author(
        &self,
        author_id: &AuthorId,
        exclude: &ShotId,
    ) -> Result<Vec<Shot>> {
        let url = format!(
            "{}authors/{}/shots?exclude={}",
            self.base_url, author_id, exclude
        );
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status().as_u16()));
        }

        let shots: Vec<Shot> = response.json().await?;
        let shots = filter_excluded(shots, exclude);

        let mut cache = self.cache.lock().await;
        for shot in &shots {
            cache.put(shot.id.clone(), shot.clone());
        }

        Ok(shots)
    }

    /// Comments left on a shot. `Ok(None)` mirrors a backend 404.
    pub async fn comments_by_shot(&self, id: &ShotId) -> Result<Option<CommentPage>> {
        let url = format!("{}shots/{}/comments", self.base_url, id);
        let response = self.http.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(Error::Status(status.as_u16())),
        }
    }

    /// Most recent shots for the feed screen.
    pub async fn recent_shots(&self, limit: usize) -> Result<Vec<Shot>> {
        let url = format!("{}shots?limit={}", self.base_url, limit);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status().as_u16()));
        }

        let shots: Vec<Shot> = response.json().await?;

        let mut cache = self.cache.lock().await;
        for shot in &shots {
            cache.put(shot.id.clone(), shot.clone());
        }

        Ok(shots)
    }

    /// Raw bytes of an avatar image. `url` is absolute, as stored on the
    /// author record.
    pub async fn avatar_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status().as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_owned()
    } else {
        format!("{base_url}/")
    }
}

fn filter_excluded(shots: Vec<Shot>, exclude: &ShotId) -> Vec<Shot> {
    shots.into_iter().filter(|s| &s.id != exclude).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Author;
    use chrono::Utc;

    fn sample_shot(id: &str) -> Shot {
        Shot {
            id: ShotId::from(id),
            title: format!("shot {id}"),
            body: String::new(),
            created_at: Utc::now(),
            author: Author {
                id: AuthorId::from("a1"),
                name: "mira".to_owned(),
                avatar_url: None,
            },
        }
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:3000/api"),
            "http://localhost:3000/api/"
        );
        assert_eq!(
            normalize_base_url("http://localhost:3000/api/"),
            "http://localhost:3000/api/"
        );
    }

    #[test]
    fn excluded_shot_is_filtered_out() {
        let shots = vec![sample_shot("s1"), sample_shot("s2"), sample_shot("s3")];
        let filtered = filter_excluded(shots, &ShotId::from("s2"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.id != ShotId::from("s2")));
    }

    #[test]
    fn filtering_without_match_keeps_everything() {
        let shots = vec![sample_shot("s1"), sample_shot("s2")];
        let filtered = filter_excluded(shots, &ShotId::from("absent"));
        assert_eq!(filtered.len(), 2);
    }
}
