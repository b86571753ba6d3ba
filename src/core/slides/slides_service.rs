use super::batch_builder::{BatchBuilder, ObjectIdGenerator, SequentialIds, TextBoxGeometry};
use super::slides_models::{BatchUpdateResponse, CreatedDeck, Presentation, SlideMutation};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Errors raised while talking to the document service.
///
/// Each variant carries the upstream response body (or transport error) as is.
#[derive(Debug, Error)]
pub enum SlidesError {
    #[error("Failed to create presentation: {0}")]
    Create(String),
    #[error("Failed to fetch presentation: {0}")]
    Fetch(String),
    #[error("Failed to submit batch update: {0}")]
    BatchSubmit(String),
}

/// The remote presentation API. Every call takes the caller's bearer token.
#[async_trait]
pub trait SlidesApi: Send + Sync {
    async fn create_presentation(
        &self,
        access_token: &str,
        title: &str,
    ) -> Result<Presentation, SlidesError>;

    async fn get_presentation(
        &self,
        access_token: &str,
        presentation_id: &str,
    ) -> Result<Presentation, SlidesError>;

    /// Applied by the remote side as a whole or not at all.
    async fn batch_update(
        &self,
        access_token: &str,
        presentation_id: &str,
        requests: &[SlideMutation],
    ) -> Result<BatchUpdateResponse, SlidesError>;
}

#[async_trait]
impl SlidesApi for Box<dyn SlidesApi> {
    async fn create_presentation(
        &self,
        access_token: &str,
        title: &str,
    ) -> Result<Presentation, SlidesError> {
        (**self).create_presentation(access_token, title).await
    }

    async fn get_presentation(
        &self,
        access_token: &str,
        presentation_id: &str,
    ) -> Result<Presentation, SlidesError> {
        (**self).get_presentation(access_token, presentation_id).await
    }

    async fn batch_update(
        &self,
        access_token: &str,
        presentation_id: &str,
        requests: &[SlideMutation],
    ) -> Result<BatchUpdateResponse, SlidesError> {
        (**self)
            .batch_update(access_token, presentation_id, requests)
            .await
    }
}

/// Browser URL for editing a presentation.
pub fn presentation_url(presentation_id: &str) -> String {
    format!(
        "https://docs.google.com/presentation/d/{}/edit",
        presentation_id
    )
}

/// Title used when the caller does not name the presentation.
pub fn default_title(now: DateTime<Utc>) -> String {
    format!(
        "Dynalist Import - {}",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

pub struct SlidesService<A: SlidesApi, G: ObjectIdGenerator = SequentialIds> {
    api: A,
    builder: BatchBuilder<G>,
}

impl<A: SlidesApi> SlidesService<A> {
    pub fn new(api: A) -> Self {
        Self::with_id_generator(api, SequentialIds::new())
    }
}

impl<A, G> SlidesService<A, G>
where
    A: SlidesApi,
    G: ObjectIdGenerator,
{
    pub fn with_id_generator(api: A, ids: G) -> Self {
        Self {
            api,
            builder: BatchBuilder::new(ids),
        }
    }

    /// Creates a presentation and fills it with one slide per bullet in a
    /// single batch. Nothing is submitted for an empty list.
    pub async fn create_from_bullets(
        &self,
        access_token: &str,
        title: &str,
        bullets: &[String],
    ) -> Result<CreatedDeck, SlidesError> {
        let presentation = self.api.create_presentation(access_token, title).await?;
        let presentation_id = presentation.presentation_id;
        tracing::info!("Created presentation {}", presentation_id);

        let requests = self.builder.creation_batch(bullets);
        if !requests.is_empty() {
            self.api
                .batch_update(access_token, &presentation_id, &requests)
                .await?;
            tracing::info!(
                "Submitted {} operations to presentation {}",
                requests.len(),
                presentation_id
            );
        }

        Ok(CreatedDeck {
            presentation_url: presentation_url(&presentation_id),
            presentation_id,
            slides_created: bullets.len(),
        })
    }

    pub async fn get_presentation(
        &self,
        access_token: &str,
        presentation_id: &str,
    ) -> Result<Presentation, SlidesError> {
        self.api
            .get_presentation(access_token, presentation_id)
            .await
    }

    /// Adds a text box to an existing slide and returns the new shape id.
    pub async fn add_text_to_slide(
        &self,
        access_token: &str,
        presentation_id: &str,
        slide_id: &str,
        text: &str,
    ) -> Result<String, SlidesError> {
        let (shape_id, requests) =
            self.builder
                .text_box_batch(slide_id, text, TextBoxGeometry::NOTE);
        self.api
            .batch_update(access_token, presentation_id, &requests)
            .await?;

        tracing::debug!("Added text box {} to slide {}", shape_id, slide_id);
        Ok(shape_id)
    }
}
