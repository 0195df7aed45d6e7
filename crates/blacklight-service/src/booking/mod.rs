//! Room booking: slot selection, pricing, and the booking lifecycle.

pub mod policy;
pub mod service;

pub use policy::{BookingPolicy, Quote};
pub use service::{BookingService, HourSlot, ProposeBooking, RoomAvailability, SlotState};
