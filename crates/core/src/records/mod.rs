//! The three record types of the directory.
//!
//! Records are plain mutable data: getters plus the specific mutators the
//! directory operations need. Relationship maintenance (who may add a patient
//! to which doctor, when a back-reference must be cleared) lives in
//! [`crate::session`], not here.

mod appointment;
mod doctor;
mod patient;

pub use appointment::{Appointment, MonthKey};
pub use doctor::Doctor;
pub use patient::Patient;
