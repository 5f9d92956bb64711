use async_trait::async_trait;
use serde::Deserialize;

use crate::{ImageError, ImageSearch};

#[derive(Clone)]
pub struct UnsplashClient {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
    orientation: String,
    content_filter: String,
}

impl UnsplashClient {
    pub fn new(
        base_url: String,
        access_key: String,
        orientation: String,
        content_filter: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            access_key,
            orientation,
            content_filter,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search/photos", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Deserialize)]
struct Photo {
    urls: Option<PhotoUrls>,
}

#[derive(Deserialize)]
struct PhotoUrls {
    regular: Option<String>,
}

impl SearchResponse {
    fn first_regular_url(self) -> Option<String> {
        self.results
            .into_iter()
            .next()
            .and_then(|photo| photo.urls)
            .and_then(|urls| urls.regular)
            .filter(|url| !url.is_empty())
    }
}

#[async_trait]
impl ImageSearch for UnsplashClient {
    async fn search(&self, query: &str) -> Result<Option<String>, ImageError> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("query", query),
                ("client_id", self.access_key.as_str()),
                ("per_page", "1"),
                ("orientation", self.orientation.as_str()),
                ("content_filter", self.content_filter.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ImageError::ApiError(format!("HTTP {}", response.status())));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ImageError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(body.first_regular_url())
    }
}
