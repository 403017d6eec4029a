//! Table rendering for the console shell.

use clinic_core::{Doctor, ManagementReport, Patient, Session, SurnameGroup};

pub const PATIENT_HEADER: &str =
    "ID |          Full Name            |      Doctor`s Full Name       | Age |    Mobile     | Postcode ";
pub const DOCTOR_HEADER: &str = "ID |          Full Name            |  Speciality   ";

fn numbered<T: std::fmt::Display>(items: &[T]) {
    for (index, item) in items.iter().enumerate() {
        println!("{:3}|{item}", index + 1);
    }
}

pub fn doctor_table(doctors: &[Doctor]) {
    println!("{DOCTOR_HEADER}");
    numbered(doctors);
}

pub fn patient_table(patients: &[Patient]) {
    println!("{PATIENT_HEADER}");
    numbered(patients);
}

pub fn symptoms(patient: &Patient) {
    if patient.symptoms().is_empty() {
        println!("None");
    } else {
        println!("{}", patient.symptoms().join(", "));
    }
}

pub fn report(report: &ManagementReport) {
    println!("-----Management Report-----");
    println!("1. Total Doctors: {}", report.total_doctors);

    println!("2. Patients per Doctor:");
    for load in &report.patients_per_doctor {
        println!("   - {}: {}", load.doctor, load.patients);
    }
    println!();

    println!("3. Appointments per Month per Doctor:");
    if report.appointments_per_month.is_empty() {
        println!("   No appointments have been scheduled yet.");
    } else {
        for schedule in &report.appointments_per_month {
            println!("   - {}:", schedule.doctor);
            for month in &schedule.months {
                println!("       {}: {} appointment(s)", month.month, month.appointments);
            }
        }
    }
    println!();

    println!("4. Patients by Illness Type:");
    if report.patients_per_symptom.is_empty() {
        println!("   No symptoms/illness data recorded yet.");
    } else {
        for count in &report.patients_per_symptom {
            println!("   - {}: {} patient(s)", count.symptom, count.patients);
        }
    }
    println!();
}

pub fn families(groups: &[SurnameGroup<'_>]) {
    println!("-----Patients Grouped by Surname (Family)-----");
    if groups.is_empty() {
        println!("No patients to display.");
        return;
    }
    for group in groups {
        println!();
        println!("Family: {}", group.surname);
        println!("{PATIENT_HEADER}");
        for (index, patient) in group.members.iter().enumerate() {
            println!("{:3}|{patient}", index + 1);
        }
    }
    println!();
}

/// One confirmation line for a scheduled appointment, with names resolved
/// through the session.
pub fn appointment_line(session: &Session, doctor_index: usize, patient_index: usize, date: &str) {
    let doctor = session.doctors()[doctor_index].full_name();
    let patient = session.patients()[patient_index].full_name();
    println!("{date} | {doctor} | {patient}");
}
