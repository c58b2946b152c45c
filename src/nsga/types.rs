//! Candidate solutions and the run-wide genome uniqueness registry.

use crate::assembly::ScoreMatrix;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// A candidate contig ordering.
///
/// The genome is a permutation of `0..fragment_count`; each value is a
/// fragment index, and the order proposes how the fragments are laid out
/// along the contig. Objective values are populated by
/// [`evaluate_oaf`](Solution::evaluate_oaf) /
/// [`evaluate_odf`](Solution::evaluate_odf) before the ranking engines
/// run; `rank` and `crowding_distance` are written by those engines.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Ordered fragment indices, a permutation of `0..fragment_count`.
    pub genome: Vec<usize>,

    /// Overlap of Adjacent Fragments — maximized.
    pub oaf: f64,

    /// Overlap of Distant Fragments — minimized.
    pub odf: f64,

    /// Front index assigned by the non-dominated sort; 1 is the best
    /// front, 0 means not yet ranked.
    pub rank: usize,

    /// Crowding density score; `-1.0` marks a front boundary or a
    /// degenerate front ("preserve regardless of crowding").
    pub crowding_distance: f64,

    /// Generation in which this solution was created.
    pub generation: usize,
}

impl Solution {
    /// Creates an unevaluated solution from a genome and generation tag.
    pub fn new(genome: Vec<usize>, generation: usize) -> Self {
        Self {
            genome,
            oaf: 0.0,
            odf: 0.0,
            rank: 0,
            crowding_distance: 0.0,
            generation,
        }
    }

    /// Number of fragments in the genome.
    pub fn genome_size(&self) -> usize {
        self.genome.len()
    }

    /// Computes and stores the OAF objective: twice the summed overlap
    /// score of every consecutive fragment pair in the ordering.
    pub fn evaluate_oaf(&mut self, scores: &ScoreMatrix) {
        let mut value = 0i64;
        for pair in self.genome.windows(2) {
            value += i64::from(scores.get(pair[0], pair[1])) * 2;
        }
        self.oaf = value as f64;
    }

    /// Computes and stores the ODF objective: twice the distance-weighted
    /// summed overlap of every fragment pair at least two positions
    /// apart. A pair `(i, j)` with `j > i + 1` contributes
    /// `(j - i) * score * 2`.
    pub fn evaluate_odf(&mut self, scores: &ScoreMatrix) {
        let n = self.genome.len();
        let mut value = 0i64;
        for i in 0..n.saturating_sub(2) {
            for j in (i + 2)..n {
                let weight = (j - i) as i64;
                value += weight * i64::from(scores.get(self.genome[i], self.genome[j])) * 2;
            }
        }
        self.odf = value as f64;
    }

    /// Number of contigs this ordering assembles into: adjacent fragments
    /// with no overlap start a new contig.
    pub fn contig_count(&self, scores: &ScoreMatrix) -> usize {
        if self.genome.is_empty() {
            return 0;
        }
        let breaks = self
            .genome
            .windows(2)
            .filter(|pair| scores.get(pair[0], pair[1]) == 0)
            .count();
        breaks + 1
    }
}

/// Canonical hash of a genome's ordered index sequence.
///
/// Two genomes hash equal exactly when their orderings are identical;
/// the registry uses this value to detect duplicates.
pub fn genome_hash(genome: &[usize]) -> u64 {
    let mut hasher = DefaultHasher::new();
    genome.hash(&mut hasher);
    hasher.finish()
}

/// Run-wide registry of every genome ever produced.
///
/// Threaded by reference through population initialization and the
/// variation operators so that no two solutions in a whole run share a
/// genome. Insertion is the only mutation; entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct GenomeRegistry {
    seen: HashSet<u64>,
}

impl GenomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a genome, returning `true` if it was not seen before.
    pub fn register(&mut self, genome: &[usize]) -> bool {
        self.seen.insert(genome_hash(genome))
    }

    /// Whether this exact ordering has been registered.
    pub fn contains(&self, genome: &[usize]) -> bool {
        self.seen.contains(&genome_hash(genome))
    }

    /// Number of registered genomes.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::{overlap_scores, Fragment};

    fn matrix(seqs: &[&str]) -> ScoreMatrix {
        let frags: Vec<Fragment> = seqs
            .iter()
            .enumerate()
            .map(|(i, s)| Fragment::new(*s, i))
            .collect();
        overlap_scores(&frags)
    }

    // ---- Objectives ----

    #[test]
    fn test_oaf_sums_adjacent_pairs() {
        // Adjacent overlaps: (0,1) share "CGT", (1,2) share "GTA".
        let scores = matrix(&["ACGT", "CGTA", "GTAC"]);
        let mut sol = Solution::new(vec![0, 1, 2], 0);
        sol.evaluate_oaf(&scores);
        assert_eq!(sol.oaf, (3 + 3) as f64 * 2.0);
    }

    #[test]
    fn test_odf_weights_by_distance() {
        let scores = matrix(&["ACGT", "CGTA", "GTAC"]);
        // Only the (0, 2) pair is distant; weight j - i = 2.
        // "ACGT" vs "GTAC" share "GT" (and "AC"), overlap 2.
        let mut sol = Solution::new(vec![0, 1, 2], 0);
        sol.evaluate_odf(&scores);
        assert_eq!(sol.odf, (2 * 2 * 2) as f64);
    }

    #[test]
    fn test_objectives_on_short_genomes() {
        let scores = matrix(&["ACGT", "CGTA"]);
        let mut sol = Solution::new(vec![1, 0], 0);
        sol.evaluate_oaf(&scores);
        sol.evaluate_odf(&scores);
        assert_eq!(sol.oaf, 6.0);
        assert_eq!(sol.odf, 0.0); // no pair is two apart

        let mut single = Solution::new(vec![0], 0);
        single.evaluate_oaf(&scores);
        single.evaluate_odf(&scores);
        assert_eq!(single.oaf, 0.0);
        assert_eq!(single.odf, 0.0);
    }

    #[test]
    fn test_contig_count_breaks_on_zero_overlap() {
        // (0,1) share "AA"; (1,2) share nothing, so a break opens there.
        let scores = matrix(&["AAAA", "AACC", "GGTT"]);
        let sol = Solution::new(vec![0, 1, 2], 0);
        assert_eq!(sol.contig_count(&scores), 2);

        let connected = Solution::new(vec![0, 1], 0);
        assert_eq!(connected.contig_count(&scores), 1);

        let empty = Solution::new(vec![], 0);
        assert_eq!(empty.contig_count(&scores), 0);
    }

    // ---- Genome hash and registry ----

    #[test]
    fn test_hash_depends_on_order() {
        assert_ne!(genome_hash(&[0, 1, 2]), genome_hash(&[2, 1, 0]));
        assert_eq!(genome_hash(&[0, 1, 2]), genome_hash(&[0, 1, 2]));
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = GenomeRegistry::new();
        assert!(registry.register(&[0, 1, 2]));
        assert!(!registry.register(&[0, 1, 2]));
        assert!(registry.register(&[2, 1, 0]));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_contains() {
        let mut registry = GenomeRegistry::new();
        assert!(registry.is_empty());
        registry.register(&[3, 1, 0, 2]);
        assert!(registry.contains(&[3, 1, 0, 2]));
        assert!(!registry.contains(&[3, 1, 2, 0]));
    }
}
