// =============================================================================
// GOOGLE SLIDES CLIENT
// =============================================================================
//
// Thin reqwest wrapper over the three Slides REST calls the core needs:
// create a presentation, read one back, and apply a batch update. The bearer
// token is supplied per call; the client keeps no state between calls.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::core::slides::{
    BatchUpdateResponse, Presentation, SlideMutation, SlidesApi, SlidesError,
};

const SLIDES_API_BASE: &str = "https://slides.googleapis.com/v1";

pub struct GoogleSlidesClient {
    client: Client,
    base_url: String,
}

impl GoogleSlidesClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: SLIDES_API_BASE.to_string(),
        }
    }

    /// Override the base URL (for testing with wiremock).
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// `{base}/presentations`, plus one trailing segment when given. The
    /// segment is percent-encoded as a whole, so ids carrying `/` or `?`
    /// stay inside `/presentations/`.
    fn presentations_url(&self, segment: Option<&str>) -> Result<Url, String> {
        let invalid = || format!("invalid Slides API base URL '{}'", self.base_url);
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| invalid())?;
            segments.pop_if_empty().push("presentations");
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    fn presentation_url(&self, presentation_id: &str, suffix: &str) -> Result<Url, String> {
        if presentation_id.is_empty() || presentation_id == "." || presentation_id == ".." {
            return Err(format!("invalid presentation id '{}'", presentation_id));
        }
        self.presentations_url(Some(&format!("{}{}", presentation_id, suffix)))
    }

    /// Sends the request and decodes a success body. Any failure comes back
    /// as a message holding the upstream status and body where there is one.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        access_token: &str,
    ) -> Result<T, String> {
        let response = request
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Google Slides API error ({}): {}", status, body);
            return Err(format!("Google Slides API error ({}): {}", status, body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("unexpected response: {}", e))
    }
}

impl Default for GoogleSlidesClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlidesApi for GoogleSlidesClient {
    async fn create_presentation(
        &self,
        access_token: &str,
        title: &str,
    ) -> Result<Presentation, SlidesError> {
        tracing::debug!("Creating presentation '{}'", title);

        let url = self.presentations_url(None).map_err(SlidesError::Create)?;
        let request = self.client.post(url).json(&json!({ "title": title }));
        self.send_json(request, access_token)
            .await
            .map_err(SlidesError::Create)
    }

    async fn get_presentation(
        &self,
        access_token: &str,
        presentation_id: &str,
    ) -> Result<Presentation, SlidesError> {
        let url = self
            .presentation_url(presentation_id, "")
            .map_err(SlidesError::Fetch)?;
        let request = self.client.get(url);
        self.send_json(request, access_token)
            .await
            .map_err(SlidesError::Fetch)
    }

    async fn batch_update(
        &self,
        access_token: &str,
        presentation_id: &str,
        requests: &[SlideMutation],
    ) -> Result<BatchUpdateResponse, SlidesError> {
        let url = self
            .presentation_url(presentation_id, ":batchUpdate")
            .map_err(SlidesError::BatchSubmit)?;
        let request = self.client.post(url).json(&json!({ "requests": requests }));
        self.send_json(request, access_token)
            .await
            .map_err(SlidesError::BatchSubmit)
    }
}
