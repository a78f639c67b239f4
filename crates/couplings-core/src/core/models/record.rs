use super::pair::ResiduePair;
use serde::{Deserialize, Serialize};

/// One row of a coupling-score dataset: a pair of residues with the scores
/// and distances reported for it.
///
/// A record is logically keyed by the unordered pair `{i, j}` and is
/// immutable once constructed. All score and distance fields are optional;
/// sparse datasets (e.g. PDB-derived contact lists) populate only `dist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouplingRecord {
    pub i: usize,
    pub j: usize,
    /// One-letter amino-acid code of residue `i`, if reported.
    pub residue_i: Option<char>,
    /// One-letter amino-acid code of residue `j`, if reported.
    pub residue_j: Option<char>,
    pub fn_score: Option<f64>,
    pub cn: Option<f64>,
    pub probability: Option<f64>,
    pub dist_intra: Option<f64>,
    pub dist_multimer: Option<f64>,
    pub dist: Option<f64>,
    pub precision: Option<f64>,
}

impl CouplingRecord {
    /// A record carrying only the pair identity, with every score absent.
    pub fn new(i: usize, j: usize) -> Self {
        Self {
            i,
            j,
            residue_i: None,
            residue_j: None,
            fn_score: None,
            cn: None,
            probability: None,
            dist_intra: None,
            dist_multimer: None,
            dist: None,
            precision: None,
        }
    }

    /// A record from a known-structure contact list, carrying only `dist`.
    pub fn from_contact(i: usize, j: usize, dist: f64) -> Self {
        Self {
            dist: Some(dist),
            ..Self::new(i, j)
        }
    }

    pub fn pair(&self) -> ResiduePair {
        ResiduePair::new(self.i, self.j)
    }

    /// The distance used for observed-contact classification.
    ///
    /// Precedence: `dist` (PDB-derived overall distance), then
    /// `dist_intra`, then `dist_multimer`. A record reporting none of the
    /// three has no structural distance and can never count as observed.
    pub fn contact_distance(&self) -> Option<f64> {
        self.dist.or(self.dist_intra).or(self.dist_multimer)
    }
}
