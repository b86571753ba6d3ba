// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "google_auth/mod.rs"]
pub mod google_auth;

#[path = "google_slides/mod.rs"]
pub mod google_slides;
