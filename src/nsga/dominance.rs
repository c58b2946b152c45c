//! Pairwise dominance test over the two assembly objectives.

use super::types::Solution;

/// Outcome of a dominance comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The first solution dominates the second.
    First,
    /// The second solution dominates the first.
    Second,
    /// Neither dominates the other (includes exact ties on both
    /// objectives).
    Neither,
}

/// Tests dominance between two solutions: OAF is maximized, ODF is
/// minimized.
///
/// A solution dominates when its OAF is at least as large **and** its ODF
/// is strictly smaller. The first branch is checked first, so with equal
/// OAF values the solution with the strictly smaller ODF wins.
///
/// Note the deliberate asymmetry: `>=` on the maximized objective paired
/// with strict `<` on the minimized one. Downstream ranking depends on
/// this exact rule; it is not the textbook strict Pareto relation.
pub fn dominates(a: &Solution, b: &Solution) -> Dominance {
    if a.oaf >= b.oaf && a.odf < b.odf {
        Dominance::First
    } else if b.oaf >= a.oaf && b.odf < a.odf {
        Dominance::Second
    } else {
        Dominance::Neither
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sol(oaf: f64, odf: f64) -> Solution {
        let mut s = Solution::new(vec![], 0);
        s.oaf = oaf;
        s.odf = odf;
        s
    }

    #[test]
    fn test_strictly_better_dominates() {
        let a = sol(20.0, 3.0);
        let b = sol(10.0, 5.0);
        assert_eq!(dominates(&a, &b), Dominance::First);
        assert_eq!(dominates(&b, &a), Dominance::Second);
    }

    #[test]
    fn test_equal_oaf_smaller_odf_dominates() {
        let a = sol(10.0, 5.0);
        let b = sol(10.0, 3.0);
        assert_eq!(dominates(&a, &b), Dominance::Second);
        assert_eq!(dominates(&b, &a), Dominance::First);
    }

    #[test]
    fn test_trade_off_is_mutual_nondomination() {
        // a is better on OAF, b is better on ODF.
        let a = sol(20.0, 5.0);
        let b = sol(10.0, 3.0);
        assert_eq!(dominates(&a, &b), Dominance::Neither);
        assert_eq!(dominates(&b, &a), Dominance::Neither);
    }

    #[test]
    fn test_identical_solutions_do_not_dominate() {
        let a = sol(10.0, 5.0);
        let b = sol(10.0, 5.0);
        assert_eq!(dominates(&a, &b), Dominance::Neither);
        assert_eq!(dominates(&a, &a), Dominance::Neither);
    }

    #[test]
    fn test_equal_odf_never_dominates() {
        // Strict < on ODF: a tie there blocks domination even with a
        // large OAF gap.
        let a = sol(100.0, 4.0);
        let b = sol(1.0, 4.0);
        assert_eq!(dominates(&a, &b), Dominance::Neither);
    }

    #[test]
    fn test_antisymmetry() {
        let cases = [
            (sol(10.0, 5.0), sol(10.0, 3.0)),
            (sol(30.0, 1.0), sol(10.0, 9.0)),
            (sol(5.0, 2.0), sol(8.0, 1.0)),
        ];
        for (a, b) in &cases {
            match dominates(a, b) {
                Dominance::First => assert_eq!(dominates(b, a), Dominance::Second),
                Dominance::Second => assert_eq!(dominates(b, a), Dominance::First),
                Dominance::Neither => assert_eq!(dominates(b, a), Dominance::Neither),
            }
        }
    }
}
