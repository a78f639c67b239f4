use super::load_dataset;
use crate::cli::ClassifyArgs;
use crate::config::PartialClassifyConfig;
use crate::error::Result;
use couplings::analysis::{
    ClassificationParams, ClassificationResult, PredictionLimit, predicted_contacts,
};
use couplings::core::io::contact_csv::MonomerContactsFile;
use couplings::core::io::coupling_csv::CouplingScoresFile;
use couplings::core::models::CouplingContainer;
use std::path::Path;
use tracing::info;

pub fn run(args: ClassifyArgs) -> Result<()> {
    let settings = match &args.config {
        Some(path) => PartialClassifyConfig::from_file(path)?.merge_with_cli(&args),
        None => PartialClassifyConfig::default().merge_with_cli(&args),
    };
    info!("Effective classification settings: {:?}", settings);

    let scores = load_dataset::<CouplingScoresFile>(&args.input, "coupling scores")?;

    // A PDB-derived contact file, when given, supplies the structural
    // distances; ranking still comes from the coupling probabilities.
    let mut classified = match &args.contacts {
        Some(path) => {
            let contacts = load_dataset::<MonomerContactsFile>(path, "monomer contacts")?;
            with_contact_distances(&scores, &contacts)
        }
        None => scores.clone(),
    };
    if let Some(length) = settings.chain_length {
        classified.set_chain_length(length);
    }

    let chain_length = classified.chain_length();
    let limit = match settings.top_n {
        Some(n) => PredictionLimit::from(n),
        None => PredictionLimit::Top(chain_length / 2),
    };
    info!(
        "Classifying with limit {:?}, separation >= {}, cutoff {} Å.",
        limit, settings.min_separation, settings.distance_cutoff
    );

    let params = ClassificationParams {
        distance_cutoff: settings.distance_cutoff,
    };
    let result = predicted_contacts(&classified, limit, settings.min_separation, &params)?;

    if let Some(path) = &args.output {
        write_predictions(path, &result, &scores)?;
        println!("Predictions written to {}", path.display());
    }

    println!(
        "Predicted contacts: {} (chain length {}, |i - j| >= {})",
        result.predicted.len(),
        chain_length,
        settings.min_separation
    );
    println!(
        "Correct predictions: {} ({:.1}%) at {:.1} Å",
        result.correct.len(),
        result.percent_correct(),
        settings.distance_cutoff
    );
    Ok(())
}

/// Copies the score records with their `dist` replaced by the PDB-derived
/// contact distance, where one exists for the pair.
fn with_contact_distances(
    scores: &CouplingContainer,
    contacts: &CouplingContainer,
) -> CouplingContainer {
    scores
        .iter()
        .cloned()
        .map(|mut record| {
            if let Some(contact) = contacts.get_score(record.i, record.j) {
                record.dist = contact.dist;
            }
            record
        })
        .collect()
}

fn write_predictions(
    path: &Path,
    result: &ClassificationResult,
    scores: &CouplingContainer,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["i", "j", "A_i", "A_j", "probability", "dist", "correct"])?;

    for record in &result.predicted {
        // Residue labels come from the scores file, like the chart
        // annotations in the contact-map view.
        let annotated = scores.get_score(record.i, record.j).unwrap_or(record);
        let correct = result.correct.iter().any(|c| c.pair() == record.pair());
        writer.write_record([
            record.i.to_string(),
            record.j.to_string(),
            annotated.residue_i.map(String::from).unwrap_or_default(),
            annotated.residue_j.map(String::from).unwrap_or_default(),
            record
                .probability
                .map(|p| p.to_string())
                .unwrap_or_default(),
            record.dist.map(|d| d.to_string()).unwrap_or_default(),
            correct.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const SCORES_HEADER: &str =
        "i,A_i,j,A_j,fn,cn,segment_i,segment_j,probability,dist_intra,dist_multimer,dist,precision";

    fn classify_args(extra: &[&str]) -> ClassifyArgs {
        let mut argv = vec!["couplings", "classify"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Classify(args) => args,
            _ => panic!("Expected 'classify' subcommand"),
        }
    }

    #[test]
    fn classify_writes_a_predictions_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scores.csv");
        let output = dir.path().join("predictions.csv");
        fs::write(
            &input,
            format!(
                "{SCORES_HEADER}\n\
                 50,L,56,A,0.5,1.2,A,A,0.95,2.2,8.1,2.4,0.9\n\
                 50,G,42,V,0.1,0.4,A,A,0.40,19.8,25.0,20.4,0.3\n"
            ),
        )
        .unwrap();

        let args = classify_args(&[
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "-1",
        ]);
        run(args).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "i,j,A_i,A_j,probability,dist,correct");
        // Ranked by descending probability.
        assert!(lines[1].starts_with("50,56"));
        assert!(lines[1].ends_with("true"));
        assert!(lines[2].starts_with("50,42"));
        assert!(lines[2].ends_with("false"));
    }

    #[test]
    fn contact_file_overrides_the_score_distances() {
        let scores = {
            let mut record = couplings::core::models::CouplingRecord::new(50, 56);
            record.probability = Some(0.9);
            record.dist = Some(20.0);
            CouplingContainer::from_records([record])
        };
        let contacts = CouplingContainer::from_records([
            couplings::core::models::CouplingRecord::from_contact(56, 50, 2.4),
        ]);

        let merged = with_contact_distances(&scores, &contacts);
        assert_eq!(merged.get_score(50, 56).unwrap().dist, Some(2.4));
        assert_eq!(merged.get_score(50, 56).unwrap().probability, Some(0.9));
    }

    #[test]
    fn missing_input_file_fails_the_command() {
        let args = classify_args(&["-i", "/nonexistent/scores.csv"]);
        assert!(run(args).is_err());
    }
}
