mod auth;
mod bot;
pub mod client;
pub mod resource;
pub mod types;

pub use client::{use_api, ApiClient, FormField};
pub use resource::{Identified, ResourceClient};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
