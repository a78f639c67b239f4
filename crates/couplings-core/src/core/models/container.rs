use super::pair::ResiduePair;
use super::record::CouplingRecord;
use std::collections::HashMap;

/// An ordered, deduplicated store of coupling-score records keyed by
/// unordered residue pair.
///
/// Records keep their insertion order for deterministic iteration, while
/// lookups go through the pair index and are symmetric in `(i, j)`. A
/// populated container is treated as read-only by the analysis layer; a new
/// dataset is represented by constructing a new container.
#[derive(Debug, Clone, Default)]
pub struct CouplingContainer {
    records: Vec<CouplingRecord>,
    index: HashMap<ResiduePair, usize>,
    chain_length_override: Option<usize>,
}

impl CouplingContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = CouplingRecord>) -> Self {
        let mut container = Self::new();
        for record in records {
            container.add_record(record);
        }
        container
    }

    /// Overrides the derived chain length, e.g. when the full sequence is
    /// longer than the highest residue index with a score.
    pub fn with_chain_length(mut self, chain_length: usize) -> Self {
        self.chain_length_override = Some(chain_length);
        self
    }

    pub fn set_chain_length(&mut self, chain_length: usize) {
        self.chain_length_override = Some(chain_length);
    }

    /// Inserts a record under its unordered pair key.
    ///
    /// Duplicate keys overwrite the stored record (last write wins) while
    /// keeping the original insertion position, so iteration order is
    /// stable across re-insertions.
    pub fn add_record(&mut self, record: CouplingRecord) {
        let key = record.pair();
        match self.index.get(&key) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Looks up the record for the unordered pair `(i, j)`.
    ///
    /// An absent pair is an expected condition in sparse datasets and
    /// yields `None`, never an error.
    pub fn get_score(&self, i: usize, j: usize) -> Option<&CouplingRecord> {
        self.index
            .get(&ResiduePair::new(i, j))
            .map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.index.contains_key(&ResiduePair::new(i, j))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CouplingRecord> {
        self.records.iter()
    }

    /// One more than the maximum residue index seen, unless an explicit
    /// override was configured. An empty container has chain length 0.
    pub fn chain_length(&self) -> usize {
        if let Some(length) = self.chain_length_override {
            return length;
        }
        self.records
            .iter()
            .map(|r| r.pair().hi() + 1)
            .max()
            .unwrap_or(0)
    }

    /// All records ordered by descending `probability`, ties broken by
    /// ascending residue pair. Records without a probability rank last.
    pub fn ranked_contacts(&self) -> Vec<&CouplingRecord> {
        let mut ranked: Vec<&CouplingRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| {
            let pa = a.probability.unwrap_or(f64::NEG_INFINITY);
            let pb = b.probability.unwrap_or(f64::NEG_INFINITY);
            pb.total_cmp(&pa).then_with(|| a.pair().cmp(&b.pair()))
        });
        ranked
    }
}

impl FromIterator<CouplingRecord> for CouplingContainer {
    fn from_iter<T: IntoIterator<Item = CouplingRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}
