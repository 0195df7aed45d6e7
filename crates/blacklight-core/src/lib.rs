//! # blacklight-core
//!
//! Core crate for the BlackLight lounge service. Contains the unified error
//! system, configuration schemas, and pagination types.
//!
//! This crate has **no** internal dependencies on other BlackLight crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
