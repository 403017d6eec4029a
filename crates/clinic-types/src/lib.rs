//! Shared identifier and reference types for the clinic directory.
//!
//! These types carry no business logic. They exist so that the core crate and
//! the presentation shells agree on how records refer to one another: opaque
//! session-allocated ids, the denormalized doctor-name back-reference with its
//! "unassigned" sentinel, and the tagged field selector for doctor updates.

use serde::{Deserialize, Serialize};

/// The literal written to storage (and shown to users) for a patient with no
/// doctor. Kept for compatibility with previously saved roster files.
pub const UNASSIGNED_LABEL: &str = "None";

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw id value. Allocation order is the session's concern.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw id value.
            pub const fn as_u32(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type! {
    /// Identity of a patient record for the lifetime of a session.
    ///
    /// Ids are never reused, so references held by doctors and appointments
    /// stay unambiguous even after the patient moves to the discharged roster.
    PatientId
}

id_type! {
    /// Identity of a doctor record for the lifetime of a session.
    DoctorId
}

id_type! {
    /// Identity of an appointment in the session-wide log.
    ///
    /// Appointments are never removed, so the id doubles as the log position.
    AppointmentId
}

/// Denormalized doctor-name back-reference carried on each patient.
///
/// This is display data, not a relation: linking does not validate that such
/// a doctor exists, and the name is stored verbatim in the roster file. The
/// unassigned state serialises as the literal `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DoctorRef {
    /// No doctor; rendered and stored as [`UNASSIGNED_LABEL`].
    #[default]
    Unassigned,
    /// The full name of the (nominally) owning doctor.
    Named(String),
}

impl DoctorRef {
    /// Parses a storage field. Empty text and the literal `None` both mean
    /// unassigned; anything else is taken verbatim as a doctor name.
    pub fn parse(field: &str) -> Self {
        let field = field.trim();
        if field.is_empty() || field == UNASSIGNED_LABEL {
            Self::Unassigned
        } else {
            Self::Named(field.to_owned())
        }
    }

    pub fn is_unassigned(&self) -> bool {
        matches!(self, Self::Unassigned)
    }

    /// True when this reference names exactly `full_name` (case-sensitive).
    pub fn names(&self, full_name: &str) -> bool {
        matches!(self, Self::Named(name) if name == full_name)
    }
}

impl std::fmt::Display for DoctorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() so table columns can centre the name with `{:^30}`.
        match self {
            Self::Unassigned => f.pad(UNASSIGNED_LABEL),
            Self::Named(name) => f.pad(name),
        }
    }
}

impl serde::Serialize for DoctorRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for DoctorRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DoctorRef::parse(&s))
    }
}

/// Errors that can occur when selecting a doctor field to update.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The selector did not name any updatable field
    #[error("no updatable field with selector {0:?}")]
    UnknownSelector(String),
}

/// The updatable fields of a doctor record.
///
/// Replaces a raw numeric field code: shells parse their input into this enum
/// and the core matches on it, so an invalid selector cannot reach an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctorField {
    FirstName,
    Surname,
    Speciality,
}

impl DoctorField {
    /// Human-readable label, used by menu prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::Surname => "Surname",
            Self::Speciality => "Speciality",
        }
    }
}

impl TryFrom<u8> for DoctorField {
    type Error = FieldError;

    /// Maps the 1-based menu choice used by the console shell.
    fn try_from(choice: u8) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Self::FirstName),
            2 => Ok(Self::Surname),
            3 => Ok(Self::Speciality),
            other => Err(FieldError::UnknownSelector(other.to_string())),
        }
    }
}

impl std::str::FromStr for DoctorField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first name" | "first_name" | "firstname" => Ok(Self::FirstName),
            "surname" => Ok(Self::Surname),
            "speciality" => Ok(Self::Speciality),
            _ => Err(FieldError::UnknownSelector(s.to_owned())),
        }
    }
}
