use crate::cli::ClassifyArgs;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialClassificationSection {
    #[serde(rename = "top-n")]
    top_n: Option<isize>,
    #[serde(rename = "min-separation")]
    min_separation: Option<usize>,
    #[serde(rename = "distance-cutoff")]
    distance_cutoff: Option<f64>,
    #[serde(rename = "chain-length")]
    chain_length: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialClassifyConfig {
    classification: Option<PartialClassificationSection>,
}

/// Fully merged settings for a `classify` run. CLI arguments take
/// precedence over the config file, which takes precedence over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifySettings {
    /// `None` means "not specified": the command falls back to half the
    /// chain length of the loaded dataset.
    pub top_n: Option<isize>,
    pub min_separation: usize,
    pub distance_cutoff: f64,
    pub chain_length: Option<usize>,
}

impl PartialClassifyConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(self, args: &ClassifyArgs) -> ClassifySettings {
        let section = self.classification.unwrap_or_default();
        ClassifySettings {
            top_n: args.top_n.or(section.top_n),
            min_separation: args.min_separation.or(section.min_separation).unwrap_or(5),
            distance_cutoff: args
                .distance_cutoff
                .or(section.distance_cutoff)
                .unwrap_or(5.0),
            chain_length: args.chain_length.or(section.chain_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn classify_args(extra: &[&str]) -> ClassifyArgs {
        let mut argv = vec!["couplings", "classify", "-i", "scores.csv"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Classify(args) => args,
            _ => panic!("Expected 'classify' subcommand"),
        }
    }

    #[test]
    fn defaults_apply_without_a_config_file() {
        let settings = PartialClassifyConfig::default().merge_with_cli(&classify_args(&[]));
        assert_eq!(
            settings,
            ClassifySettings {
                top_n: None,
                min_separation: 5,
                distance_cutoff: 5.0,
                chain_length: None,
            }
        );
    }

    #[test]
    fn config_file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("classify.toml");
        fs::write(
            &path,
            r#"
            [classification]
            top-n = 40
            min-separation = 8
            distance-cutoff = 8.5
            chain-length = 120
            "#,
        )
        .unwrap();

        let settings = PartialClassifyConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&classify_args(&[]));
        assert_eq!(settings.top_n, Some(40));
        assert_eq!(settings.min_separation, 8);
        assert_eq!(settings.distance_cutoff, 8.5);
        assert_eq!(settings.chain_length, Some(120));
    }

    #[test]
    fn cli_args_override_config_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("classify.toml");
        fs::write(
            &path,
            r#"
            [classification]
            top-n = 40
            min-separation = 8
            "#,
        )
        .unwrap();

        let args = classify_args(&["-n", "-1", "-l", "3"]);
        let settings = PartialClassifyConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args);
        assert_eq!(settings.top_n, Some(-1));
        assert_eq!(settings.min_separation, 3);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("classify.toml");
        fs::write(
            &path,
            r#"
            [classification]
            top-m = 40
            "#,
        )
        .unwrap();

        let result = PartialClassifyConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
