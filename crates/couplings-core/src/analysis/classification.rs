use crate::core::models::{CouplingContainer, CouplingRecord};
use thiserror::Error;

/// How many top-ranked predictions to keep.
///
/// The original dataset tooling used `-1` for "show everything"; the
/// `From<isize>` conversion preserves that calling convention by mapping
/// every negative count to [`PredictionLimit::Unlimited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionLimit {
    Unlimited,
    Top(usize),
}

impl From<isize> for PredictionLimit {
    fn from(count: isize) -> Self {
        if count < 0 {
            Self::Unlimited
        } else {
            Self::Top(count as usize)
        }
    }
}

/// Parameters shared by classification calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationParams {
    /// Maximum structural distance (Å) for a prediction to count as
    /// correct. The default of 5.0 matches the usual Cα–Cα contact
    /// definition.
    pub distance_cutoff: f64,
}

impl Default for ClassificationParams {
    fn default() -> Self {
        Self {
            distance_cutoff: 5.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ClassificationError {
    #[error("Distance cutoff must be finite and non-negative, got {0}")]
    InvalidCutoff(f64),
}

/// Result of a contact-prediction call.
///
/// `correct` is always a subsequence of `predicted`, and `predicted` never
/// exceeds the requested limit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationResult {
    pub predicted: Vec<CouplingRecord>,
    pub correct: Vec<CouplingRecord>,
}

impl ClassificationResult {
    /// Share of predictions that are correct, in percent. An empty
    /// prediction set yields 0.0, never NaN.
    pub fn percent_correct(&self) -> f64 {
        if self.predicted.is_empty() {
            return 0.0;
        }
        self.correct.len() as f64 / self.predicted.len() as f64 * 100.0
    }
}

fn check_cutoff(cutoff: f64) -> Result<(), ClassificationError> {
    if !cutoff.is_finite() || cutoff < 0.0 {
        return Err(ClassificationError::InvalidCutoff(cutoff));
    }
    Ok(())
}

/// Every record whose structural distance is within `cutoff`, ordered by
/// ascending residue pair.
///
/// The distance used per record follows the precedence documented on
/// [`CouplingRecord::contact_distance`]; records reporting no distance are
/// never observed.
pub fn observed_contacts(
    scores: &CouplingContainer,
    cutoff: f64,
) -> Result<Vec<&CouplingRecord>, ClassificationError> {
    check_cutoff(cutoff)?;

    let mut observed: Vec<&CouplingRecord> = scores
        .iter()
        .filter(|record| record.contact_distance().is_some_and(|d| d <= cutoff))
        .collect();
    observed.sort_by_key(|record| record.pair());
    Ok(observed)
}

/// Top-ranked contact predictions with their correctness subset.
///
/// Records closer than `min_separation` along the chain are discarded, the
/// remainder is ranked by descending probability (ties by ascending pair),
/// and the ranking is truncated to `limit`. A prediction is correct when
/// its structural distance is within `params.distance_cutoff`.
pub fn predicted_contacts(
    scores: &CouplingContainer,
    limit: PredictionLimit,
    min_separation: usize,
    params: &ClassificationParams,
) -> Result<ClassificationResult, ClassificationError> {
    check_cutoff(params.distance_cutoff)?;

    let ranked = scores.ranked_contacts();
    let eligible = ranked
        .into_iter()
        .filter(|record| record.pair().separation() >= min_separation);

    let predicted: Vec<CouplingRecord> = match limit {
        PredictionLimit::Unlimited => eligible.cloned().collect(),
        PredictionLimit::Top(n) => eligible.take(n).cloned().collect(),
    };

    let correct: Vec<CouplingRecord> = predicted
        .iter()
        .filter(|record| {
            record
                .contact_distance()
                .is_some_and(|d| d <= params.distance_cutoff)
        })
        .cloned()
        .collect();

    Ok(ClassificationResult { predicted, correct })
}
