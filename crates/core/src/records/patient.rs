use clinic_types::{DoctorRef, PatientId};
use serde::Serialize;

/// A patient record.
///
/// Identity is the session-allocated [`PatientId`]; the record itself carries
/// no uniqueness guarantees. The `doctor` field is a denormalized back-
/// reference kept for display and storage. [`Patient::link`] overwrites it
/// unconditionally, with no validation that such a doctor exists.
#[derive(Debug, Clone, Serialize)]
pub struct Patient {
    id: PatientId,
    first_name: String,
    surname: String,
    age: u32,
    mobile: String,
    postcode: String,
    doctor: DoctorRef,
    symptoms: Vec<String>,
}

impl Patient {
    /// Creates an unassigned patient with no symptoms recorded.
    pub fn new(
        id: PatientId,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        age: u32,
        mobile: impl Into<String>,
        postcode: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            surname: surname.into(),
            age,
            mobile: mobile.into(),
            postcode: postcode.into(),
            doctor: DoctorRef::Unassigned,
            symptoms: Vec::new(),
        }
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    pub fn doctor(&self) -> &DoctorRef {
        &self.doctor
    }

    /// Points the back-reference at `doctor_full_name`, replacing any
    /// previous value.
    pub fn link(&mut self, doctor_full_name: impl Into<String>) {
        self.doctor = DoctorRef::Named(doctor_full_name.into());
    }

    /// Reverts the back-reference to the unassigned sentinel.
    pub fn unlink(&mut self) {
        self.doctor = DoctorRef::Unassigned;
    }

    /// Appends a symptom. Symptoms are an ordered log: no deduplication.
    pub fn add_symptom(&mut self, symptom: impl Into<String>) {
        self.symptoms.push(symptom.into());
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:^30}|{:^30}|{:^5}|{:^15}|{:^10}",
            self.full_name(),
            self.doctor,
            self.age,
            self.mobile,
            self.postcode
        )
    }
}
