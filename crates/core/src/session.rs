//! The session: explicit, shell-owned directory state.
//!
//! A [`Session`] owns the four live collections (doctor roster, active
//! patient roster, discharged roster, appointment log) and every directory
//! operation is a method on it. There is no ambient global state: shells
//! create a session at startup, thread it through their event loop, and tests
//! create as many independent sessions as they need.
//!
//! Operations validate their arguments before touching anything, so an `Err`
//! always leaves the session exactly as it was. Index arguments address
//! positions in the current rosters (what a shell displays); cross-references
//! between records are held as stable ids and resolved through the session.

use crate::constants::DATE_FORMAT;
use crate::error::{DirectoryError, DirectoryResult, StorageError};
use crate::records::{Appointment, Doctor, Patient};
use crate::report::{self, ManagementReport, SurnameGroup};
use crate::storage::{self, StoredPatient};
use chrono::NaiveDate;
use clinic_types::{AppointmentId, DoctorField, DoctorId, PatientId};
use std::path::Path;

/// Process-lifetime mutable directory state.
#[derive(Debug, Default)]
pub struct Session {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    discharged: Vec<Patient>,
    appointments: Vec<Appointment>,
    next_doctor: u32,
    next_patient: u32,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn discharged(&self) -> &[Patient] {
        &self.discharged
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Resolves a doctor id. `None` when the doctor has been deleted.
    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == id)
    }

    /// Resolves a patient id, searching the active roster and then the
    /// discharged roster.
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients
            .iter()
            .chain(self.discharged.iter())
            .find(|p| p.id() == id)
    }

    /// Position of the doctor with this exact full name, if any.
    pub fn find_doctor(&self, full_name: &str) -> Option<usize> {
        self.doctors.iter().position(|d| d.full_name() == full_name)
    }

    /// Position of the active patient with this exact full name, if any.
    pub fn find_patient(&self, full_name: &str) -> Option<usize> {
        self.patients.iter().position(|p| p.full_name() == full_name)
    }

    // ------------------------------------------------------------------
    // Doctor management
    // ------------------------------------------------------------------

    /// Registers a new doctor.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateDoctor`] if a doctor with the same
    /// first name and surname (case-sensitive exact match) already exists;
    /// the roster is unchanged.
    pub fn register_doctor(
        &mut self,
        first_name: &str,
        surname: &str,
        speciality: &str,
    ) -> DirectoryResult<DoctorId> {
        if self
            .doctors
            .iter()
            .any(|d| d.first_name() == first_name && d.surname() == surname)
        {
            return Err(DirectoryError::DuplicateDoctor(format!(
                "{first_name} {surname}"
            )));
        }

        let id = DoctorId::new(self.next_doctor);
        self.next_doctor += 1;
        self.doctors
            .push(Doctor::new(id, first_name, surname, speciality));
        tracing::info!(first_name, surname, "doctor registered");
        Ok(id)
    }

    /// Updates one field of the doctor at `index`.
    pub fn update_doctor(
        &mut self,
        index: usize,
        field: DoctorField,
        value: &str,
    ) -> DirectoryResult<()> {
        let doctor = self
            .doctors
            .get_mut(index)
            .ok_or(DirectoryError::DoctorNotFound(index))?;
        match field {
            DoctorField::FirstName => doctor.set_first_name(value),
            DoctorField::Surname => doctor.set_surname(value),
            DoctorField::Speciality => doctor.set_speciality(value),
        }
        Ok(())
    }

    /// Removes the doctor at `index` from the roster.
    ///
    /// Every patient, active or discharged, whose back-reference names the
    /// deleted doctor reverts to unassigned, so no stale name survives the
    /// deletion. The doctor's appointments stay in the session log.
    pub fn delete_doctor(&mut self, index: usize) -> DirectoryResult<Doctor> {
        if index >= self.doctors.len() {
            return Err(DirectoryError::DoctorNotFound(index));
        }

        let doctor = self.doctors.remove(index);
        let name = doctor.full_name();
        for patient in self.patients.iter_mut().chain(self.discharged.iter_mut()) {
            if patient.doctor().names(&name) {
                patient.unlink();
            }
        }
        tracing::info!(doctor = %name, "doctor deleted");
        Ok(doctor)
    }

    // ------------------------------------------------------------------
    // Patient management
    // ------------------------------------------------------------------

    /// Registers a new patient on the active roster.
    pub fn register_patient(
        &mut self,
        first_name: &str,
        surname: &str,
        age: u32,
        mobile: &str,
        postcode: &str,
    ) -> PatientId {
        let id = PatientId::new(self.next_patient);
        self.next_patient += 1;
        self.patients
            .push(Patient::new(id, first_name, surname, age, mobile, postcode));
        id
    }

    /// Appends a symptom to the active patient at `index`.
    pub fn add_symptom(&mut self, index: usize, symptom: &str) -> DirectoryResult<()> {
        let patient = self
            .patients
            .get_mut(index)
            .ok_or(DirectoryError::PatientNotFound(index))?;
        patient.add_symptom(symptom);
        Ok(())
    }

    /// Moves the patient at `patient_index` to the doctor at `doctor_index`.
    ///
    /// The patient is removed from every doctor's assigned set before being
    /// added to the new one, so after this call the patient is a member of
    /// exactly one set and the back-reference names its owner.
    pub fn relocate_patient(
        &mut self,
        patient_index: usize,
        doctor_index: usize,
    ) -> DirectoryResult<()> {
        if patient_index >= self.patients.len() {
            return Err(DirectoryError::PatientNotFound(patient_index));
        }
        if doctor_index >= self.doctors.len() {
            return Err(DirectoryError::DoctorNotFound(doctor_index));
        }

        let patient_id = self.patients[patient_index].id();
        for doctor in &mut self.doctors {
            doctor.remove_patient(patient_id);
        }

        let doctor = &mut self.doctors[doctor_index];
        doctor.add_patient(patient_id);
        let name = doctor.full_name();
        self.patients[patient_index].link(name);
        Ok(())
    }

    /// Assigns the doctor at `doctor_index` to the patient at
    /// `patient_index`.
    ///
    /// Assignment is a relocation from "no doctor": it carries the same
    /// single-owner guarantee as [`Session::relocate_patient`].
    pub fn assign_doctor(
        &mut self,
        patient_index: usize,
        doctor_index: usize,
    ) -> DirectoryResult<()> {
        self.relocate_patient(patient_index, doctor_index)
    }

    /// Discharges the patient at `index`: removes it from the active roster
    /// and from its doctor's assigned set, and appends it to the discharged
    /// roster with all fields (including the doctor-name text) intact.
    pub fn discharge_patient(&mut self, index: usize) -> DirectoryResult<()> {
        if index >= self.patients.len() {
            return Err(DirectoryError::PatientNotFound(index));
        }

        let patient = self.patients.remove(index);
        for doctor in &mut self.doctors {
            doctor.remove_patient(patient.id());
        }
        tracing::info!(patient = %patient.full_name(), "patient discharged");
        self.discharged.push(patient);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    /// Schedules an appointment between the doctor at `doctor_index` and the
    /// active patient at `patient_index` on `date_str` (ISO `YYYY-MM-DD`).
    ///
    /// The appointment is appended to the session log and its id to the
    /// doctor's own log.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::MalformedDate`] when `date_str` is not a
    /// valid calendar date; nothing is scheduled in that case.
    pub fn schedule_appointment(
        &mut self,
        doctor_index: usize,
        patient_index: usize,
        date_str: &str,
    ) -> DirectoryResult<AppointmentId> {
        if doctor_index >= self.doctors.len() {
            return Err(DirectoryError::DoctorNotFound(doctor_index));
        }
        if patient_index >= self.patients.len() {
            return Err(DirectoryError::PatientNotFound(patient_index));
        }
        let date = NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).map_err(|source| {
            DirectoryError::MalformedDate {
                value: date_str.to_owned(),
                source,
            }
        })?;

        let id = AppointmentId::new(self.appointments.len() as u32);
        let appointment = Appointment::new(
            id,
            self.doctors[doctor_index].id(),
            self.patients[patient_index].id(),
            date,
        );
        self.appointments.push(appointment);
        self.doctors[doctor_index].add_appointment(id);
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Reporting
    // ------------------------------------------------------------------

    /// Builds the four management aggregates. See [`ManagementReport`].
    pub fn management_report(&self) -> ManagementReport {
        report::build(self)
    }

    /// Partitions the active roster by surname, preserving roster order
    /// within each group.
    pub fn patients_by_surname(&self) -> Vec<SurnameGroup<'_>> {
        report::group_by_surname(&self.patients)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Saves the active roster to `path`. The session is never modified.
    pub fn save_roster(&self, path: &Path) -> Result<(), StorageError> {
        storage::save_patients(&self.patients, path)
    }

    /// Loads a roster file and adopts every record. Returns the number of
    /// patients adopted; a missing file adopts nothing.
    pub fn load_roster(&mut self, path: &Path) -> Result<usize, StorageError> {
        let records = storage::load_patients(path)?;
        let count = records.len();
        for record in records {
            self.adopt_stored(record);
        }
        Ok(count)
    }

    /// Adopts one stored record: allocates an id, restores the doctor-name
    /// back-reference and symptoms, and, when the named doctor exists in
    /// this session, re-attaches the patient to that doctor's assigned set.
    pub fn adopt_stored(&mut self, record: StoredPatient) {
        let id = self.register_patient(
            &record.first_name,
            &record.surname,
            record.age,
            &record.mobile,
            &record.postcode,
        );
        let patient = self
            .patients
            .last_mut()
            .expect("patient was just registered");
        for symptom in record.symptoms {
            patient.add_symptom(symptom);
        }

        if let clinic_types::DoctorRef::Named(name) = record.doctor {
            patient.link(name.clone());
            match self.doctors.iter_mut().find(|d| d.full_name() == name) {
                Some(doctor) => doctor.add_patient(id),
                None => {
                    tracing::warn!(patient = %id, doctor = %name, "loaded patient names an unknown doctor");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_types::DoctorRef;

    /// Three doctors and three unassigned patients, as the shells seed them.
    fn session() -> Session {
        let mut s = Session::new();
        s.register_doctor("John", "Smith", "Internal Med.").unwrap();
        s.register_doctor("Jone", "Smith", "Pediatrics").unwrap();
        s.register_doctor("Jone", "Carlos", "Cardiology").unwrap();
        s.register_patient("Sara", "Smith", 20, "07012345678", "B1 234");
        s.register_patient("Mike", "Jones", 37, "07555551234", "L2 2AB");
        s.register_patient("David", "Smith", 15, "07123456789", "C1 ABC");
        s
    }

    fn membership_count(s: &Session, patient_index: usize) -> usize {
        let id = s.patients()[patient_index].id();
        s.doctors().iter().filter(|d| d.has_patient(id)).count()
    }

    #[test]
    fn test_register_duplicate_doctor_rejected() {
        let mut s = session();
        let before = s.doctors().len();
        let result = s.register_doctor("John", "Smith", "Dermatology");
        assert!(matches!(result, Err(DirectoryError::DuplicateDoctor(_))));
        assert_eq!(s.doctors().len(), before);
    }

    #[test]
    fn test_register_doctor_comparison_is_case_sensitive() {
        let mut s = session();
        assert!(s.register_doctor("john", "smith", "Dermatology").is_ok());
    }

    #[test]
    fn test_update_doctor_field() {
        let mut s = session();
        s.update_doctor(0, DoctorField::Speciality, "Oncology").unwrap();
        assert_eq!(s.doctors()[0].speciality(), "Oncology");
        assert!(matches!(
            s.update_doctor(9, DoctorField::Surname, "X"),
            Err(DirectoryError::DoctorNotFound(9))
        ));
    }

    #[test]
    fn test_assign_links_full_name_and_set_membership() {
        let mut s = session();
        s.assign_doctor(0, 2).unwrap();
        assert!(s.patients()[0].doctor().names("Jone Carlos"));
        let id = s.patients()[0].id();
        assert!(s.doctors()[2].has_patient(id));
    }

    #[test]
    fn test_assign_out_of_range_leaves_state_unchanged() {
        let mut s = session();
        assert!(matches!(
            s.assign_doctor(7, 0),
            Err(DirectoryError::PatientNotFound(7))
        ));
        assert!(matches!(
            s.assign_doctor(0, 7),
            Err(DirectoryError::DoctorNotFound(7))
        ));
        assert!(s.patients()[0].doctor().is_unassigned());
        assert_eq!(membership_count(&s, 0), 0);
    }

    #[test]
    fn test_reassignment_keeps_single_owner() {
        let mut s = session();
        s.assign_doctor(0, 0).unwrap();
        s.assign_doctor(0, 1).unwrap();
        s.assign_doctor(0, 2).unwrap();
        assert_eq!(membership_count(&s, 0), 1);
        assert!(s.patients()[0].doctor().names("Jone Carlos"));
    }

    #[test]
    fn test_relocate_leaves_exactly_one_membership() {
        let mut s = session();
        s.assign_doctor(1, 0).unwrap();
        s.relocate_patient(1, 2).unwrap();
        assert_eq!(membership_count(&s, 1), 1);
        let id = s.patients()[1].id();
        assert!(s.doctors()[2].has_patient(id));
        assert!(!s.doctors()[0].has_patient(id));
    }

    #[test]
    fn test_discharge_moves_patient_and_unassigns() {
        let mut s = session();
        s.assign_doctor(0, 0).unwrap();
        let id = s.patients()[0].id();

        s.discharge_patient(0).unwrap();

        assert_eq!(s.patients().len(), 2);
        assert_eq!(s.discharged().len(), 1);
        assert!(!s.doctors()[0].has_patient(id));
        // Fields, including the doctor-name text, are preserved.
        let gone = &s.discharged()[0];
        assert_eq!(gone.full_name(), "Sara Smith");
        assert!(gone.doctor().names("John Smith"));
    }

    #[test]
    fn test_discharge_invalid_index() {
        let mut s = session();
        assert!(matches!(
            s.discharge_patient(3),
            Err(DirectoryError::PatientNotFound(3))
        ));
        assert_eq!(s.patients().len(), 3);
        assert!(s.discharged().is_empty());
    }

    #[test]
    fn test_delete_doctor_clears_back_references() {
        let mut s = session();
        s.assign_doctor(0, 0).unwrap();
        s.assign_doctor(1, 0).unwrap();
        s.discharge_patient(0).unwrap();

        s.delete_doctor(0).unwrap();

        assert_eq!(s.doctors().len(), 2);
        // Both the still-active and the discharged patient are cleared.
        assert!(s.patients().iter().all(|p| p.doctor().is_unassigned()));
        assert!(s.discharged()[0].doctor().is_unassigned());
    }

    #[test]
    fn test_delete_doctor_keeps_unrelated_links() {
        let mut s = session();
        s.assign_doctor(0, 2).unwrap();
        s.delete_doctor(0).unwrap();
        assert!(s.patients()[0].doctor().names("Jone Carlos"));
    }

    #[test]
    fn test_schedule_rejects_impossible_calendar_date() {
        let mut s = session();
        let result = s.schedule_appointment(0, 0, "2024-02-30");
        assert!(matches!(result, Err(DirectoryError::MalformedDate { .. })));
        assert!(s.appointments().is_empty());
        assert!(s.doctors()[0].appointments().is_empty());
    }

    #[test]
    fn test_schedule_accepts_leap_day() {
        let mut s = session();
        let id = s.schedule_appointment(0, 0, "2024-02-29").unwrap();
        let appt = &s.appointments()[id.as_u32() as usize];
        assert_eq!(appt.month_key().as_str(), "2024-02");
        assert_eq!(s.doctors()[0].appointments(), [id]);
    }

    #[test]
    fn test_appointments_survive_patient_discharge() {
        let mut s = session();
        s.schedule_appointment(1, 0, "2025-01-15").unwrap();
        s.discharge_patient(0).unwrap();
        assert_eq!(s.appointments().len(), 1);
        let appt = &s.appointments()[0];
        // The id still resolves via the discharged roster.
        assert!(s.patient(appt.patient()).is_some());
    }

    #[test]
    fn test_find_doctor_and_patient_by_name() {
        let s = session();
        assert_eq!(s.find_doctor("Jone Smith"), Some(1));
        assert_eq!(s.find_doctor("Nobody Here"), None);
        assert_eq!(s.find_patient("Mike Jones"), Some(1));
    }

    #[test]
    fn test_adopt_stored_reattaches_known_doctor() {
        let mut s = session();
        s.adopt_stored(StoredPatient {
            first_name: "Anna".into(),
            surname: "Lee".into(),
            age: 44,
            mobile: "07111".into(),
            postcode: "M1 1AA".into(),
            doctor: DoctorRef::Named("Jone Smith".into()),
            symptoms: vec!["flu".into()],
        });

        let adopted = s.patients().last().unwrap();
        assert!(adopted.doctor().names("Jone Smith"));
        assert_eq!(adopted.symptoms(), ["flu"]);
        assert!(s.doctors()[1].has_patient(adopted.id()));
    }

    #[test]
    fn test_adopt_stored_unknown_doctor_keeps_name_without_membership() {
        let mut s = session();
        s.adopt_stored(StoredPatient {
            first_name: "Omar".into(),
            surname: "Khan".into(),
            age: 51,
            mobile: "07222".into(),
            postcode: "M2 2BB".into(),
            doctor: DoctorRef::Named("Gone Doctor".into()),
            symptoms: vec![],
        });

        let adopted = s.patients().last().unwrap();
        assert!(adopted.doctor().names("Gone Doctor"));
        assert_eq!(membership_count(&s, s.patients().len() - 1), 0);
    }

    #[test]
    fn test_roster_round_trip_through_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("patients.txt");

        let mut s = session();
        s.assign_doctor(0, 0).unwrap();
        s.add_symptom(0, "flu").unwrap();
        s.add_symptom(0, "cough").unwrap();
        s.save_roster(&path).unwrap();

        let mut restored = Session::new();
        restored.register_doctor("John", "Smith", "Internal Med.").unwrap();
        let count = restored.load_roster(&path).unwrap();

        assert_eq!(count, 3);
        let sara = &restored.patients()[0];
        assert_eq!(sara.full_name(), "Sara Smith");
        assert_eq!(sara.age(), 20);
        assert_eq!(sara.mobile(), "07012345678");
        assert_eq!(sara.postcode(), "B1 234");
        assert!(sara.doctor().names("John Smith"));
        assert_eq!(sara.symptoms(), ["flu", "cough"]);
        assert!(restored.doctors()[0].has_patient(sara.id()));
        // Unassigned patients stay unassigned after the trip.
        assert!(restored.patients()[1].doctor().is_unassigned());
    }
}
