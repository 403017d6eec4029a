//! Flat-file roster persistence.
//!
//! The entire storage layer is one delimited text file, one patient per line:
//!
//! ```text
//! firstName,surname,age,mobile,postcode,doctorName,symptom1;symptom2;...
//! ```
//!
//! The doctor field holds the literal `None` when the patient is unassigned,
//! and the trailing symptom field may be empty. Loading is tolerant: lines
//! with fewer than six comma fields are skipped with a warning, an
//! unparseable age defaults to 0, and a missing file means "no prior data"
//! rather than an error. Nothing is persisted incrementally: saving writes
//! the whole active roster on an explicit call.

use crate::constants::{FIELD_SEPARATOR, SYMPTOM_SEPARATOR};
use crate::error::StorageError;
use crate::records::Patient;
use clinic_types::DoctorRef;
use std::fs;
use std::path::Path;

/// The field data of one roster-file line.
///
/// This is a patient as the file knows it, with no session identity yet. The
/// session allocates an id and re-attaches the doctor relation when it adopts
/// the record, so loading never mutates state on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPatient {
    pub first_name: String,
    pub surname: String,
    pub age: u32,
    pub mobile: String,
    pub postcode: String,
    pub doctor: DoctorRef,
    pub symptoms: Vec<String>,
}

/// Serialises the active roster to `path`, one line per patient.
///
/// # Errors
///
/// Returns [`StorageError::Write`] when the file cannot be written. The
/// roster itself is untouched either way.
pub fn save_patients(patients: &[Patient], path: &Path) -> Result<(), StorageError> {
    let mut contents = String::new();
    for patient in patients {
        contents.push_str(&format_line(patient));
        contents.push('\n');
    }

    fs::write(path, contents).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(count = patients.len(), path = %path.display(), "roster saved");
    Ok(())
}

/// Reads a roster file back into [`StoredPatient`] records.
///
/// A missing file is not an error: it is reported as no prior data and an
/// empty list is returned. Malformed lines are skipped with a warning.
///
/// # Errors
///
/// Returns [`StorageError::Read`] for any I/O failure other than the file
/// not existing.
pub fn load_patients(path: &Path) -> Result<Vec<StoredPatient>, StorageError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no prior roster data");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut records = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(record) => records.push(record),
            None => {
                tracing::warn!(line = number + 1, path = %path.display(), "skipping malformed roster line");
            }
        }
    }

    tracing::info!(count = records.len(), path = %path.display(), "roster loaded");
    Ok(records)
}

fn format_line(patient: &Patient) -> String {
    format!(
        "{first},{surname},{age},{mobile},{postcode},{doctor},{symptoms}",
        first = patient.first_name(),
        surname = patient.surname(),
        age = patient.age(),
        mobile = patient.mobile(),
        postcode = patient.postcode(),
        doctor = patient.doctor(),
        symptoms = patient.symptoms().join(SYMPTOM_SEPARATOR),
    )
}

/// Parses one line; `None` means the line does not have the six mandatory
/// comma fields.
fn parse_line(line: &str) -> Option<StoredPatient> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < 6 {
        return None;
    }

    // Everything past the postcode/doctor fields is rejoined before the
    // symptom split, in case the raw symptom text contained commas.
    let symptom_field = parts[6..].join(FIELD_SEPARATOR);
    let symptoms = symptom_field
        .split(SYMPTOM_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();

    Some(StoredPatient {
        first_name: parts[0].to_owned(),
        surname: parts[1].to_owned(),
        age: parts[2].trim().parse().unwrap_or(0),
        mobile: parts[3].to_owned(),
        postcode: parts[4].to_owned(),
        doctor: DoctorRef::parse(parts[5]),
        symptoms,
    })
}
