//! # blacklight-entity
//!
//! Domain entity models for the BlackLight lounge. Every struct in this crate
//! is either a table row (deriving `sqlx::FromRow`) or a value object used by
//! the booking and ordering operations. Status fields are closed enums that
//! carry their own transition tables.

pub mod ad;
pub mod booking;
pub mod order;
pub mod payment;
pub mod product;
pub mod report;
pub mod room;
pub mod user;
