//! Promotional banners.

pub mod service;

pub use service::AdService;
