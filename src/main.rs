use clap::Parser;
use clinic_core::{AdminAccount, CoreConfig, Session};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Doctors every fresh session starts with.
const DEFAULT_DOCTORS: [(&str, &str, &str); 3] = [
    ("John", "Smith", "Internal Med."),
    ("Jone", "Smith", "Pediatrics"),
    ("Jone", "Carlos", "Cardiology"),
];

/// Patients seeded when no roster file exists yet.
const DEFAULT_PATIENTS: [(&str, &str, u32, &str, &str); 3] = [
    ("Sara", "Smith", 20, "07012345678", "B1 234"),
    ("Mike", "Jones", 37, "07555551234", "L2 2AB"),
    ("David", "Smith", 15, "07123456789", "C1 ABC"),
];

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic directory: doctors, patients, appointments")]
struct Cli {
    /// Roster file to load at startup and save on quit
    #[arg(long, default_value = clinic_core::constants::DEFAULT_DATA_FILE)]
    data_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = CoreConfig::new(cli.data_file);
    let mut admin = AdminAccount::default();

    let mut session = Session::new();
    for (first_name, surname, speciality) in DEFAULT_DOCTORS {
        session.register_doctor(first_name, surname, speciality)?;
    }

    match session.load_roster(config.data_file()) {
        Ok(0) => {
            for (first_name, surname, age, mobile, postcode) in DEFAULT_PATIENTS {
                session.register_patient(first_name, surname, age, mobile, postcode);
            }
        }
        Ok(count) => tracing::info!(count, "resumed roster from prior session"),
        Err(e) => tracing::error!("could not load roster: {e}"),
    }

    clinic_cli::run(&config, &mut admin, &mut session)?;
    Ok(())
}
