use super::load_dataset;
use crate::cli::{DatasetFormat, ObservedArgs};
use crate::error::Result;
use couplings::analysis::observed_contacts;
use couplings::core::io::contact_csv::MonomerContactsFile;
use couplings::core::io::coupling_csv::CouplingScoresFile;
use couplings::core::models::CouplingRecord;
use std::path::Path;

pub fn run(args: ObservedArgs) -> Result<()> {
    let container = match args.format {
        DatasetFormat::Couplings => {
            load_dataset::<CouplingScoresFile>(&args.input, "coupling scores")?
        }
        DatasetFormat::Contacts => {
            load_dataset::<MonomerContactsFile>(&args.input, "monomer contacts")?
        }
    };

    let observed = observed_contacts(&container, args.distance_cutoff)?;

    if let Some(path) = &args.output {
        write_contacts(path, &observed)?;
        println!("Observed contacts written to {}", path.display());
    }

    println!(
        "Observed contacts: {} of {} records within {:.1} Å",
        observed.len(),
        container.len(),
        args.distance_cutoff
    );
    Ok(())
}

fn write_contacts(path: &Path, observed: &[&CouplingRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["i", "j", "dist"])?;
    for record in observed {
        let pair = record.pair();
        writer.write_record([
            pair.lo().to_string(),
            pair.hi().to_string(),
            record
                .contact_distance()
                .map(|d| d.to_string())
                .unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
