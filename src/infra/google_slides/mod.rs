pub mod google_slides_client;

pub use google_slides_client::GoogleSlidesClient;
