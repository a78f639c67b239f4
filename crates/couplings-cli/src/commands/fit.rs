use crate::cli::FitArgs;
use crate::error::{CliError, Result};
use couplings::analysis::{FitParams, ViewportFit, compute_fit};
use couplings::core::models::EmbeddingNode;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct NodeRow {
    x: f64,
    y: f64,
    category: Option<String>,
}

pub fn run(args: FitArgs) -> Result<()> {
    let nodes = read_nodes(&args.input)?;
    info!("Loaded {} layout nodes.", nodes.len());

    let params = FitParams {
        padding: args.padding,
        target_fraction: args.target_fraction,
        y_offset: args.y_offset,
    };
    let fit = compute_fit(&nodes, args.width, args.height, &params)?;

    if let Some(path) = &args.apply {
        write_transformed(path, &nodes, &fit)?;
        println!("Transformed coordinates written to {}", path.display());
    }

    println!("scale: {}", fit.scale);
    println!("translate-x: {}", fit.translate_x);
    println!("translate-y: {}", fit.translate_y);
    Ok(())
}

fn read_nodes(path: &Path) -> Result<Vec<EmbeddingNode>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut nodes = Vec::new();
    for result in reader.deserialize::<NodeRow>() {
        let row = result.map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        nodes.push(match row.category {
            Some(category) => EmbeddingNode::with_category(row.x, row.y, category),
            None => EmbeddingNode::new(row.x, row.y),
        });
    }
    Ok(nodes)
}

fn write_transformed(path: &Path, nodes: &[EmbeddingNode], fit: &ViewportFit) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["x", "y", "category"])?;
    for node in nodes {
        let rendered = fit.apply(&node.position);
        writer.write_record([
            rendered.x.to_string(),
            rendered.y.to_string(),
            node.category.clone().unwrap_or_default(),
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

    fn fit_args(extra: &[&str]) -> FitArgs {
        let mut argv = vec!["couplings", "fit"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Fit(args) => args,
            _ => panic!("Expected 'fit' subcommand"),
        }
    }

    #[test]
    fn fit_applies_the_transform_to_every_node() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("nodes.csv");
        let output = dir.path().join("rendered.csv");
        fs::write(&input, "x,y,category\n0,0,HSC\n100,100,Meg\n").unwrap();

        let args = fit_args(&[
            "-i",
            input.to_str().unwrap(),
            "-W",
            "440",
            "-H",
            "440",
            "--apply",
            output.to_str().unwrap(),
        ]);
        run(args).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "x,y,category");
        assert!(lines[1].ends_with("HSC"));
        assert!(lines[2].ends_with("Meg"));
    }

    #[test]
    fn nodes_without_a_category_column_are_accepted() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("nodes.csv");
        fs::write(&input, "x,y\n0,0\n100,100\n").unwrap();

        let args = fit_args(&["-i", input.to_str().unwrap(), "-W", "440", "-H", "440"]);
        assert!(run(args).is_ok());
    }

    #[test]
    fn malformed_node_row_fails_the_command() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("nodes.csv");
        fs::write(&input, "x,y\nnot-a-number,0\n").unwrap();

        let args = fit_args(&["-i", input.to_str().unwrap(), "-W", "440", "-H", "440"]);
        assert!(matches!(run(args), Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn empty_node_file_fails_the_command() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("nodes.csv");
        fs::write(&input, "x,y\n").unwrap();

        let args = fit_args(&["-i", input.to_str().unwrap(), "-W", "440", "-H", "440"]);
        assert!(matches!(run(args), Err(CliError::Projection(_))));
    }
}
