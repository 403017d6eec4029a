//! Interactive console shell.
//!
//! All prompting, menu text and table layout live here; every mutation goes
//! through a [`Session`] method. The shell owns the session for the lifetime
//! of the process and saves the roster only on the explicit quit action;
//! nothing is persisted incrementally.

pub mod prompts;
pub mod views;

use clinic_core::{AdminAccount, CoreConfig, DirectoryError, DoctorField, Session};
use std::io;

/// Runs login and the main menu loop until the user quits.
pub fn run(config: &CoreConfig, admin: &mut AdminAccount, session: &mut Session) -> io::Result<()> {
    loop {
        println!("-----Login-----");
        let username = prompts::line("Enter the username: ")?;
        let password = prompts::line("Enter the password: ")?;
        if admin.verify(&username, &password) {
            break;
        }
        println!("Incorrect username or password.");
    }

    loop {
        println!();
        println!("Choose the operation:");
        println!(" 1- Register/view/update/delete doctor");
        println!(" 2- Discharge patients");
        println!(" 3- View discharged patient");
        println!(" 4- Assign doctor to a patient");
        println!(" 5- Update admin details");
        println!(" 6- Relocate Patient");
        println!(" 7- Management Report");
        println!(" 8- Schedule Appointment");
        println!(" 9- View patients grouped by surname (family)");
        println!("10- Quit");

        match prompts::line("Option: ")?.as_str() {
            "1" => doctor_management(session)?,
            "2" => discharge_loop(session)?,
            "3" => {
                println!("-----Discharged Patients-----");
                views::patient_table(session.discharged());
            }
            "4" => assign(session)?,
            "5" => update_admin(admin)?,
            "6" => relocate(session)?,
            "7" => {
                views::report(&session.management_report());
                prompts::line("Press Enter to return to the menu...")?;
            }
            "8" => schedule(session)?,
            "9" => views::families(&session.patients_by_surname()),
            "10" => {
                println!("Saving data...");
                match session.save_roster(config.data_file()) {
                    Ok(()) => println!("Data Saved Successfully."),
                    Err(e) => println!("Error saving file: {e}"),
                }
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid option. Try again"),
        }
    }
}

fn doctor_management(session: &mut Session) -> io::Result<()> {
    println!("-----Doctor Management-----");
    println!("Choose the operation:");
    println!(" 1 - Register");
    println!(" 2 - View");
    println!(" 3 - Update");
    println!(" 4 - Delete");

    match prompts::line("Input: ")?.as_str() {
        "1" => {
            println!("-----Register-----");
            let first_name = prompts::line("Enter First Name: ")?;
            let surname = prompts::line("Enter Surname: ")?;
            let speciality = prompts::line("Enter Speciality: ")?;
            match session.register_doctor(&first_name, &surname, &speciality) {
                Ok(_) => println!("Doctor registered."),
                Err(DirectoryError::DuplicateDoctor(_)) => println!("Name already exists."),
                Err(e) => println!("{e}"),
            }
        }
        "2" => {
            println!("-----List of Doctors-----");
            views::doctor_table(session.doctors());
        }
        "3" => update_doctor(session)?,
        "4" => {
            println!("-----Delete Doctor-----");
            views::doctor_table(session.doctors());
            match prompts::index("Enter the ID of the doctor to be deleted: ")? {
                Some(index) => match session.delete_doctor(index) {
                    Ok(_) => println!("Doctor deleted."),
                    Err(_) => println!("Doctor not found."),
                },
                None => println!("The id entered is incorrect"),
            }
        }
        _ => println!("Invalid operation chosen. Check your spelling!"),
    }
    Ok(())
}

fn update_doctor(session: &mut Session) -> io::Result<()> {
    let index = loop {
        println!("-----Update Doctor`s Details-----");
        views::doctor_table(session.doctors());
        match prompts::index("Enter the ID of the doctor: ")? {
            Some(index) if index < session.doctors().len() => break index,
            Some(_) => println!("Doctor not found"),
            None => println!("The ID entered is incorrect"),
        }
    };

    println!("Choose the field to be updated:");
    for field in [DoctorField::FirstName, DoctorField::Surname, DoctorField::Speciality] {
        println!(" {} {}", field as u8 + 1, field.label());
    }
    let choice = prompts::line("Input: ")?;
    let field = match choice.parse::<u8>().ok().map(DoctorField::try_from) {
        Some(Ok(field)) => field,
        _ => {
            println!("Invalid selection");
            return Ok(());
        }
    };

    let value = prompts::line(&format!("Enter new {}: ", field.label().to_lowercase()))?;
    match session.update_doctor(index, field, &value) {
        Ok(()) => println!("Doctor updated."),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn discharge_loop(session: &mut Session) -> io::Result<()> {
    println!("-----View Patients-----");
    views::patient_table(session.patients());
    loop {
        match prompts::line("Do you want to discharge a patient(Y/N):")?
            .to_lowercase()
            .as_str()
        {
            "y" | "yes" => {
                println!("-----Discharge Patient-----");
                views::patient_table(session.patients());
                match prompts::index("Please enter the patient ID: ")? {
                    Some(index) => match session.discharge_patient(index) {
                        Ok(()) => println!("Patient Discharged."),
                        Err(_) => println!("Patient not found."),
                    },
                    None => println!("Invalid ID"),
                }
            }
            "n" | "no" => return Ok(()),
            _ => println!("Please answer by yes or no."),
        }
    }
}

fn assign(session: &mut Session) -> io::Result<()> {
    println!("-----Assign-----");
    println!("-----Patients-----");
    views::patient_table(session.patients());

    let Some(patient_index) = prompts::index("Please enter the patient ID: ")? else {
        println!("The id entered is incorrect");
        return Ok(());
    };
    if patient_index >= session.patients().len() {
        println!("The id entered was not found.");
        return Ok(());
    }

    println!("-----Doctors Select-----");
    println!("Select the doctor that fits these symptoms:");
    views::symptoms(&session.patients()[patient_index]);
    println!("--------------------------------------------------");
    views::doctor_table(session.doctors());

    match prompts::index("Please enter the doctor ID: ")? {
        Some(doctor_index) => match session.assign_doctor(patient_index, doctor_index) {
            Ok(()) => println!("The patient is now assigned to the doctor."),
            Err(_) => println!("The id entered was not found."),
        },
        None => println!("The id entered is incorrect"),
    }
    Ok(())
}

fn relocate(session: &mut Session) -> io::Result<()> {
    println!("-----Relocate Patient-----");
    println!("Select Patient to Relocate:");
    views::patient_table(session.patients());

    let Some(patient_index) = prompts::index("Enter Patient ID: ")? else {
        println!("Invalid Input");
        return Ok(());
    };
    if patient_index >= session.patients().len() {
        println!("Patient not found.");
        return Ok(());
    }

    println!("Select New Doctor:");
    views::doctor_table(session.doctors());
    match prompts::index("Enter New Doctor ID: ")? {
        Some(doctor_index) => match session.relocate_patient(patient_index, doctor_index) {
            Ok(()) => println!("Patient Relocated Successfully."),
            Err(_) => println!("Doctor not found."),
        },
        None => println!("Invalid Input"),
    }
    Ok(())
}

fn update_admin(admin: &mut AdminAccount) -> io::Result<()> {
    println!("Choose the field to be updated:");
    println!(" 1 Username");
    println!(" 2 Password");
    println!(" 3 Address");
    match prompts::line("Input: ")?.as_str() {
        "1" => {
            let username = prompts::line("Enter new username: ")?;
            admin.set_username(username);
        }
        "2" => {
            let password = prompts::line("Enter the new password: ")?;
            if password == prompts::line("Enter the new password again: ")? {
                admin.set_password(password);
            } else {
                println!("Passwords do not match.");
            }
        }
        "3" => {
            let address = prompts::line("Enter new address: ")?;
            admin.set_address(address);
        }
        _ => println!("Invalid option"),
    }
    Ok(())
}

fn schedule(session: &mut Session) -> io::Result<()> {
    println!("-----Schedule Appointment-----");
    if session.doctors().is_empty() {
        println!("No doctors available.");
        return Ok(());
    }
    if session.patients().is_empty() {
        println!("No patients available.");
        return Ok(());
    }

    println!("Select Patient:");
    views::patient_table(session.patients());
    let Some(patient_index) = prompts::index("Enter Patient ID: ")? else {
        println!("Invalid input.");
        return Ok(());
    };
    if patient_index >= session.patients().len() {
        println!("Patient not found.");
        return Ok(());
    }

    println!("Select Doctor:");
    views::doctor_table(session.doctors());
    let Some(doctor_index) = prompts::index("Enter Doctor ID: ")? else {
        println!("Invalid input.");
        return Ok(());
    };
    if doctor_index >= session.doctors().len() {
        println!("Doctor not found.");
        return Ok(());
    }

    let date = prompts::line("Enter appointment date (YYYY-MM-DD): ")?;
    match session.schedule_appointment(doctor_index, patient_index, &date) {
        Ok(_) => {
            println!("Appointment scheduled:");
            views::appointment_line(session, doctor_index, patient_index, &date);
        }
        Err(DirectoryError::MalformedDate { .. }) => {
            println!("Invalid date format. Use YYYY-MM-DD.");
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}
