use crate::constants::MONTH_FORMAT;
use chrono::NaiveDate;
use clinic_types::{AppointmentId, DoctorId, PatientId};
use serde::Serialize;

/// A `YYYY-MM` month key, derived by truncating an appointment date.
///
/// Used to bucket appointments in the management report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MonthKey(String);

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(MONTH_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scheduled appointment: one doctor, one patient, one calendar date.
///
/// Immutable once created. The session-wide log owns the record; the
/// referenced doctor's own log holds the id (duplicate membership of the same
/// entity, not duplicate data).
#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    id: AppointmentId,
    doctor: DoctorId,
    patient: PatientId,
    date: NaiveDate,
}

impl Appointment {
    pub(crate) fn new(
        id: AppointmentId,
        doctor: DoctorId,
        patient: PatientId,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            doctor,
            patient,
            date,
        }
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn doctor(&self) -> DoctorId {
        self.doctor
    }

    pub fn patient(&self) -> PatientId {
        self.patient
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_truncates_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let appt = Appointment::new(
            AppointmentId::new(0),
            DoctorId::new(1),
            PatientId::new(2),
            date,
        );
        assert_eq!(appt.month_key().as_str(), "2024-02");
    }

    #[test]
    fn test_month_key_pads_single_digit_months() {
        let key = MonthKey::from_date(NaiveDate::from_ymd_opt(2023, 3, 7).unwrap());
        assert_eq!(key.to_string(), "2023-03");
    }
}
