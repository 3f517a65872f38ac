pub mod bookings;
pub mod serde_time;

pub use bookings::{AppointmentDto, BusinessDto};
