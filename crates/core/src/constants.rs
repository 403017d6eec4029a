//! Constants used throughout the clinic core crate.

/// Default roster file when no explicit path is configured.
pub const DEFAULT_DATA_FILE: &str = "patients.txt";

/// Appointment date format accepted from shells (ISO calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month-key format used by the management report.
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Years of experience a newly registered doctor starts with.
pub const DEFAULT_EXPERIENCE_YEARS: u32 = 5;

/// Field separator in the roster file.
pub const FIELD_SEPARATOR: &str = ",";

/// Sub-separator between symptoms within the last roster-file field.
pub const SYMPTOM_SEPARATOR: &str = ";";
