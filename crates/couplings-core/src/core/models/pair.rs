use serde::{Deserialize, Serialize};

/// An order-independent identity for a residue pair `(i, j)`.
///
/// Construction normalizes the two indices so that `lo <= hi`, which makes
/// the pair usable as a map key symmetric in its arguments. The derived
/// `Ord` (lexicographic on `(lo, hi)`) is the deterministic tie-breaker used
/// by every ranking in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResiduePair {
    lo: usize,
    hi: usize,
}

impl ResiduePair {
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { lo: i, hi: j }
        } else {
            Self { lo: j, hi: i }
        }
    }

    pub fn lo(&self) -> usize {
        self.lo
    }

    pub fn hi(&self) -> usize {
        self.hi
    }

    /// Separation along the chain, `|i - j|`.
    pub fn separation(&self) -> usize {
        self.hi - self.lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn construction_is_order_independent() {
        assert_eq!(ResiduePair::new(3, 7), ResiduePair::new(7, 3));
        assert_eq!(ResiduePair::new(3, 7).lo(), 3);
        assert_eq!(ResiduePair::new(3, 7).hi(), 7);
    }

    #[test]
    fn both_argument_orders_hash_to_the_same_key() {
        let mut map = HashMap::new();
        map.insert(ResiduePair::new(10, 2), "value");
        assert_eq!(map.get(&ResiduePair::new(2, 10)), Some(&"value"));
    }

    #[test]
    fn ordering_is_lexicographic_on_normalized_indices() {
        let mut pairs = vec![
            ResiduePair::new(5, 1),
            ResiduePair::new(1, 2),
            ResiduePair::new(4, 2),
        ];
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ResiduePair::new(1, 2),
                ResiduePair::new(1, 5),
                ResiduePair::new(2, 4),
            ]
        );
    }

    #[test]
    fn separation_is_absolute_difference() {
        assert_eq!(ResiduePair::new(50, 56).separation(), 6);
        assert_eq!(ResiduePair::new(56, 50).separation(), 6);
        assert_eq!(ResiduePair::new(8, 8).separation(), 0);
    }
}
