use crate::constants::DEFAULT_EXPERIENCE_YEARS;
use clinic_types::{AppointmentId, DoctorId, PatientId};
use serde::Serialize;

/// A doctor record.
///
/// Owns two collections of references: the ids of patients currently assigned
/// (set semantics: adding is idempotent, removing an absent id is a no-op)
/// and the ids of appointments scheduled against this doctor (an append-only
/// log).
#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    id: DoctorId,
    first_name: String,
    surname: String,
    speciality: String,
    experience_years: u32,
    patients: Vec<PatientId>,
    appointments: Vec<AppointmentId>,
}

impl Doctor {
    /// Creates a doctor with the default years of experience and no patients
    /// or appointments.
    pub fn new(
        id: DoctorId,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        speciality: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            surname: surname.into(),
            speciality: speciality.into(),
            experience_years: DEFAULT_EXPERIENCE_YEARS,
            patients: Vec::new(),
            appointments: Vec::new(),
        }
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn set_surname(&mut self, surname: impl Into<String>) {
        self.surname = surname.into();
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    pub fn speciality(&self) -> &str {
        &self.speciality
    }

    pub fn set_speciality(&mut self, speciality: impl Into<String>) {
        self.speciality = speciality.into();
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    /// Adds a patient to the assigned set. Idempotent.
    pub fn add_patient(&mut self, patient: PatientId) {
        if !self.patients.contains(&patient) {
            self.patients.push(patient);
        }
    }

    /// Removes a patient from the assigned set. No-op when absent.
    pub fn remove_patient(&mut self, patient: PatientId) {
        self.patients.retain(|id| *id != patient);
    }

    pub fn has_patient(&self, patient: PatientId) -> bool {
        self.patients.contains(&patient)
    }

    pub fn patients(&self) -> &[PatientId] {
        &self.patients
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Appends to the appointment log. Appointments are never removed.
    pub fn add_appointment(&mut self, appointment: AppointmentId) {
        self.appointments.push(appointment);
    }

    pub fn appointments(&self) -> &[AppointmentId] {
        &self.appointments
    }
}

impl std::fmt::Display for Doctor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:^30}|{:^15}", self.full_name(), self.speciality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smith() -> Doctor {
        Doctor::new(DoctorId::new(0), "John", "Smith", "Internal Med.")
    }

    #[test]
    fn test_new_doctor_defaults() {
        let d = smith();
        assert_eq!(d.experience_years(), DEFAULT_EXPERIENCE_YEARS);
        assert_eq!(d.patient_count(), 0);
        assert!(d.appointments().is_empty());
    }

    #[test]
    fn test_add_patient_is_idempotent() {
        let mut d = smith();
        let p = PatientId::new(3);
        d.add_patient(p);
        d.add_patient(p);
        assert_eq!(d.patients(), [p]);
    }

    #[test]
    fn test_remove_absent_patient_is_noop() {
        let mut d = smith();
        d.add_patient(PatientId::new(1));
        d.remove_patient(PatientId::new(9));
        assert_eq!(d.patient_count(), 1);
        d.remove_patient(PatientId::new(1));
        assert_eq!(d.patient_count(), 0);
    }
}
