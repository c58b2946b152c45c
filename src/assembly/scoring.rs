//! Pairwise fragment overlap scoring.
//!
//! The overlap between two fragments is the length of their longest
//! common substring, computed once per unordered pair and stored in a
//! symmetric matrix. A fragment has no meaningful overlap with itself, so
//! the diagonal holds the sentinel `-1` and is never read for
//! same-index pairs.

use super::fragment::Fragment;

/// Sentinel stored on the [`ScoreMatrix`] diagonal.
const DIAGONAL_SENTINEL: i32 = -1;

/// Symmetric N×N matrix of pairwise fragment overlap scores.
///
/// Backed by a flat row-major `Vec`; `get(i, j) == get(j, i)` for all
/// off-diagonal pairs, and `get(i, i)` is the `-1` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreMatrix {
    size: usize,
    values: Vec<i32>,
}

impl ScoreMatrix {
    /// Number of fragments (rows/columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Overlap score between fragments `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> i32 {
        assert!(i < self.size && j < self.size, "score index out of bounds");
        self.values[i * self.size + j]
    }

    fn set(&mut self, i: usize, j: usize, value: i32) {
        self.values[i * self.size + j] = value;
    }
}

/// Length of the longest common substring of `a` and `b`.
///
/// Classic dynamic program over byte positions: a match extends the run
/// ending at the previous diagonal cell, a mismatch resets it to zero,
/// and the result is the maximum run seen anywhere in the table. Only
/// the previous row is kept.
///
/// # Complexity
/// O(|a| · |b|) time, O(|b|) space
pub fn longest_common_substring(a: &str, b: &str) -> i32 {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0i32; b.len() + 1];
    let mut curr = vec![0i32; b.len() + 1];
    let mut best = 0i32;

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            best = best.max(curr[j + 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Builds the symmetric overlap score matrix for a fragment set.
///
/// The upper triangle is computed and mirrored; the diagonal is the
/// `-1` sentinel.
pub fn overlap_scores(fragments: &[Fragment]) -> ScoreMatrix {
    let n = fragments.len();
    let mut scores = ScoreMatrix {
        size: n,
        values: vec![DIAGONAL_SENTINEL; n * n],
    };

    for i in 0..n {
        for j in (i + 1)..n {
            let score = longest_common_substring(&fragments[i].sequence, &fragments[j].sequence);
            scores.set(i, j, score);
            scores.set(j, i, score);
        }
    }

    scores
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_identical() {
        assert_eq!(longest_common_substring("ACGT", "ACGT"), 4);
    }

    #[test]
    fn test_lcs_partial_overlap() {
        // Longest shared run is "CGT".
        assert_eq!(longest_common_substring("ACGT", "CGTA"), 3);
    }

    #[test]
    fn test_lcs_no_overlap() {
        assert_eq!(longest_common_substring("AAAA", "CCCC"), 0);
    }

    #[test]
    fn test_lcs_is_substring_not_subsequence() {
        // As a subsequence "AC" (length 2) is common, but the longest
        // common contiguous run is a single base.
        assert_eq!(longest_common_substring("AXC", "AC"), 1);
    }

    #[test]
    fn test_lcs_empty_input() {
        assert_eq!(longest_common_substring("", "ACGT"), 0);
        assert_eq!(longest_common_substring("ACGT", ""), 0);
    }

    #[test]
    fn test_lcs_symmetric() {
        let pairs = [("ACGTAC", "GTACGG"), ("TTAA", "AATT"), ("G", "GGGG")];
        for (a, b) in pairs {
            assert_eq!(
                longest_common_substring(a, b),
                longest_common_substring(b, a),
                "lcs not symmetric for {a:?} / {b:?}"
            );
        }
    }

    fn frags(seqs: &[&str]) -> Vec<Fragment> {
        seqs.iter()
            .enumerate()
            .map(|(i, s)| Fragment::new(*s, i))
            .collect()
    }

    #[test]
    fn test_matrix_diagonal_sentinel() {
        let m = overlap_scores(&frags(&["ACGT", "CGTA", "GTAC"]));
        for i in 0..3 {
            assert_eq!(m.get(i, i), -1);
        }
    }

    #[test]
    fn test_matrix_symmetric() {
        let m = overlap_scores(&frags(&["ACGTT", "CGTAA", "GTACC", "TACGG"]));
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn test_matrix_values() {
        let m = overlap_scores(&frags(&["ACGT", "CGTA"]));
        assert_eq!(m.get(0, 1), 3); // "CGT"
        assert_eq!(m.size(), 2);
    }

    #[test]
    fn test_matrix_empty_fragment_set() {
        let m = overlap_scores(&[]);
        assert_eq!(m.size(), 0);
    }
}
