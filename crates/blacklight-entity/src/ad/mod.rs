//! Promotional banners shown on the storefront.

pub mod model;

pub use model::{Ad, CreateAd};
