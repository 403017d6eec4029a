//! Management report aggregation.
//!
//! Aggregates are plain rows in first-seen insertion order; no sorting is
//! applied, so shells can display or chart them exactly as produced. Rows
//! serialise with `serde` for shells that chart from structured data.

use crate::records::{MonthKey, Patient};
use crate::session::Session;
use serde::Serialize;

/// Assigned-patient count for one doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorLoad {
    pub doctor: String,
    pub patients: usize,
}

/// Appointment count for one month of one doctor's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub month: MonthKey,
    pub appointments: usize,
}

/// A doctor's appointment counts bucketed by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorSchedule {
    pub doctor: String,
    pub months: Vec<MonthlyCount>,
}

/// Number of active patients exhibiting one symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomCount {
    pub symptom: String,
    pub patients: usize,
}

/// The four management aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagementReport {
    /// Total number of registered doctors.
    pub total_doctors: usize,
    /// Assigned-patient count per doctor, in roster order.
    pub patients_per_doctor: Vec<DoctorLoad>,
    /// Appointments per doctor per `YYYY-MM` month, in first-seen order.
    pub appointments_per_month: Vec<DoctorSchedule>,
    /// Patient count per symptom; a patient with N symptoms contributes to
    /// N buckets.
    pub patients_per_symptom: Vec<SymptomCount>,
}

/// One surname's patients, in roster order.
#[derive(Debug, Clone, Serialize)]
pub struct SurnameGroup<'a> {
    pub surname: &'a str,
    pub members: Vec<&'a Patient>,
}

pub(crate) fn build(session: &Session) -> ManagementReport {
    let mut patients_per_doctor = Vec::new();
    for doctor in session.doctors() {
        patients_per_doctor.push(DoctorLoad {
            doctor: doctor.full_name(),
            patients: doctor.patient_count(),
        });
    }

    let mut appointments_per_month: Vec<DoctorSchedule> = Vec::new();
    for appointment in session.appointments() {
        let Some(doctor) = session.doctor(appointment.doctor()) else {
            tracing::warn!(appointment = %appointment.id(), "appointment references a deleted doctor; skipping");
            continue;
        };
        let name = doctor.full_name();
        let month = appointment.month_key();

        let schedule = match appointments_per_month.iter_mut().find(|s| s.doctor == name) {
            Some(schedule) => schedule,
            None => {
                appointments_per_month.push(DoctorSchedule {
                    doctor: name,
                    months: Vec::new(),
                });
                appointments_per_month.last_mut().expect("just pushed")
            }
        };
        match schedule.months.iter_mut().find(|m| m.month == month) {
            Some(entry) => entry.appointments += 1,
            None => schedule.months.push(MonthlyCount {
                month,
                appointments: 1,
            }),
        }
    }

    let mut patients_per_symptom: Vec<SymptomCount> = Vec::new();
    for patient in session.patients() {
        for symptom in patient.symptoms() {
            match patients_per_symptom
                .iter_mut()
                .find(|c| c.symptom == *symptom)
            {
                Some(entry) => entry.patients += 1,
                None => patients_per_symptom.push(SymptomCount {
                    symptom: symptom.clone(),
                    patients: 1,
                }),
            }
        }
    }

    ManagementReport {
        total_doctors: session.doctors().len(),
        patients_per_doctor,
        appointments_per_month,
        patients_per_symptom,
    }
}

pub(crate) fn group_by_surname(patients: &[Patient]) -> Vec<SurnameGroup<'_>> {
    let mut groups: Vec<SurnameGroup<'_>> = Vec::new();
    for patient in patients {
        match groups
            .iter_mut()
            .find(|g| g.surname == patient.surname())
        {
            Some(group) => group.members.push(patient),
            None => groups.push(SurnameGroup {
                surname: patient.surname(),
                members: vec![patient],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut s = Session::new();
        s.register_doctor("John", "Smith", "Internal Med.").unwrap();
        s.register_doctor("Jone", "Carlos", "Cardiology").unwrap();
        s.register_patient("Sara", "Smith", 20, "07012345678", "B1 234");
        s.register_patient("Mike", "Jones", 37, "07555551234", "L2 2AB");
        s.register_patient("David", "Smith", 15, "07123456789", "C1 ABC");
        s
    }

    #[test]
    fn test_symptom_buckets_count_patients() {
        let mut s = session();
        s.add_symptom(0, "flu").unwrap();
        s.add_symptom(1, "flu").unwrap();
        s.add_symptom(1, "cough").unwrap();

        let report = s.management_report();
        assert_eq!(
            report.patients_per_symptom,
            vec![
                SymptomCount { symptom: "flu".into(), patients: 2 },
                SymptomCount { symptom: "cough".into(), patients: 1 },
            ]
        );
    }

    #[test]
    fn test_patients_per_doctor_follows_roster_order() {
        let mut s = session();
        s.assign_doctor(0, 1).unwrap();
        s.assign_doctor(1, 1).unwrap();

        let report = s.management_report();
        assert_eq!(report.total_doctors, 2);
        assert_eq!(report.patients_per_doctor[0].doctor, "John Smith");
        assert_eq!(report.patients_per_doctor[0].patients, 0);
        assert_eq!(report.patients_per_doctor[1].doctor, "Jone Carlos");
        assert_eq!(report.patients_per_doctor[1].patients, 2);
    }

    #[test]
    fn test_monthly_buckets_truncate_dates_in_first_seen_order() {
        let mut s = session();
        s.schedule_appointment(1, 0, "2024-02-29").unwrap();
        s.schedule_appointment(1, 1, "2024-02-01").unwrap();
        s.schedule_appointment(0, 1, "2024-03-05").unwrap();
        s.schedule_appointment(1, 2, "2024-01-10").unwrap();

        let report = s.management_report();
        // Jone Carlos appears first: his appointment was scheduled first.
        assert_eq!(report.appointments_per_month[0].doctor, "Jone Carlos");
        assert_eq!(
            report.appointments_per_month[0]
                .months
                .iter()
                .map(|m| (m.month.as_str(), m.appointments))
                .collect::<Vec<_>>(),
            vec![("2024-02", 2), ("2024-01", 1)]
        );
        assert_eq!(report.appointments_per_month[1].doctor, "John Smith");
    }

    #[test]
    fn test_deleted_doctor_appointments_are_skipped() {
        let mut s = session();
        s.schedule_appointment(0, 0, "2024-05-01").unwrap();
        s.delete_doctor(0).unwrap();

        let report = s.management_report();
        assert_eq!(s.appointments().len(), 1);
        assert!(report.appointments_per_month.is_empty());
    }

    #[test]
    fn test_group_by_surname_preserves_roster_order() {
        let s = session();
        let groups = s.patients_by_surname();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].surname, "Smith");
        assert_eq!(
            groups[0]
                .members
                .iter()
                .map(|p| p.first_name())
                .collect::<Vec<_>>(),
            vec!["Sara", "David"]
        );
        assert_eq!(groups[1].surname, "Jones");
    }

    #[test]
    fn test_report_serialises_for_charting_shells() {
        let mut s = session();
        s.add_symptom(0, "flu").unwrap();
        s.schedule_appointment(0, 0, "2024-02-29").unwrap();

        let json = serde_json::to_value(s.management_report()).unwrap();
        assert_eq!(json["total_doctors"], 2);
        assert_eq!(json["patients_per_symptom"][0]["symptom"], "flu");
        assert_eq!(
            json["appointments_per_month"][0]["months"][0]["month"],
            "2024-02"
        );
    }
}
