pub mod batch_builder;
pub mod slides_models;
pub mod slides_service;

pub use slides_models::{BatchUpdateResponse, Presentation, SlideMutation};
pub use slides_service::{
    default_title, presentation_url, SlidesApi, SlidesError, SlidesService,
};
