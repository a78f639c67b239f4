pub mod classify;
pub mod fit;
pub mod observed;

use crate::error::Result;
use crate::utils::progress::LoadSpinner;
use couplings::core::io::traits::DatasetFile;
use couplings::core::models::CouplingContainer;
use std::path::Path;
use tracing::warn;

/// Loads a dataset behind a spinner, logging one warning per skipped row.
fn load_dataset<F: DatasetFile>(path: &Path, kind: &str) -> Result<CouplingContainer> {
    let spinner = LoadSpinner::start(format!("Loading {} from {}...", kind, path.display()));
    match F::read_from_path(path) {
        Ok((container, warnings)) => {
            spinner.finish(format!(
                "✓ Loaded {} {} records ({} rows skipped)",
                container.len(),
                kind,
                warnings.len()
            ));
            for warning in &warnings {
                warn!("Skipped {} row: {}", kind, warning);
            }
            Ok(container)
        }
        Err(e) => {
            spinner.finish(format!("✗ Failed to load {}", kind));
            Err(e.into())
        }
    }
}
