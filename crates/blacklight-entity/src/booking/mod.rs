//! Room bookings.

pub mod model;
pub mod status;
pub mod window;

pub use model::{Booking, NewBooking};
pub use status::BookingStatus;
pub use window::HourWindow;
