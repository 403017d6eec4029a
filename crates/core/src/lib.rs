//! # Clinic Core
//!
//! Data management and relationship consistency for a small clinic
//! directory: doctors, patients, their assignment relationships,
//! appointments and discharge status.
//!
//! The crate owns the rules: single-owner assignment, cascade on doctor
//! deletion, validate-before-mutate operations and the flat-file roster
//! round-trip. **No presentation concerns**: prompting, menu text, table
//! layout and charting belong to the shells, which drive this crate through
//! [`Session`] and render what it returns.

pub mod admin;
pub mod config;
pub mod constants;
pub mod error;
pub mod records;
pub mod report;
pub mod session;
pub mod storage;

pub use admin::AdminAccount;
pub use config::CoreConfig;
pub use error::{DirectoryError, DirectoryResult, StorageError};
pub use records::{Appointment, Doctor, MonthKey, Patient};
pub use report::{DoctorLoad, DoctorSchedule, ManagementReport, MonthlyCount, SurnameGroup, SymptomCount};
pub use session::Session;
pub use storage::StoredPatient;

// Shared reference types are re-exported so shells depend on one crate.
pub use clinic_types::{AppointmentId, DoctorField, DoctorId, DoctorRef, FieldError, PatientId};
