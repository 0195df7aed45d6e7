//! Route handlers organized by domain.

pub mod ad;
pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod health;
pub mod order;
pub mod payment;
pub mod product;
pub mod room;
pub mod user;
