//! Crowding-distance density estimation within ranked fronts.

use super::types::Solution;

/// Sentinel distance for front boundaries and degenerate fronts.
///
/// Downstream selection treats a sentinel as "preserve regardless of
/// crowding".
pub const BOUNDARY_SENTINEL: f64 = -1.0;

/// Assigns every solution a crowding distance and returns the distances
/// as an array parallel to `population`.
///
/// Applied independently per front:
///
/// - Each front of size ≥ 2 is ordered twice over position indices:
///   by OAF descending and by ODF ascending. Both sorts are stable, so
///   OAF ties keep front order and ODF ties keep the OAF ordering.
/// - The extremes of each ordering get the `-1` sentinel for that
///   objective's component; size-1 fronts are all boundary.
/// - Interior members accumulate a running sum of the normalized
///   neighbor gap `(value[before] - value[after]) / (front range)` as the
///   scan proceeds. A zero range marks every interior component `-1`
///   instead of dividing.
/// - The final distance is the component sum, or `-1` when either
///   component is the sentinel.
///
/// Distances are only comparable within one front; higher means less
/// crowded.
pub fn crowding_distance(population: &mut [Solution], fronts: &[Vec<usize>]) -> Vec<f64> {
    let n = population.len();

    let mut oaf_sorted: Vec<Vec<usize>> = Vec::with_capacity(fronts.len());
    let mut odf_sorted: Vec<Vec<usize>> = Vec::with_capacity(fronts.len());

    for front in fronts {
        if front.len() == 1 {
            oaf_sorted.push(front.clone());
            odf_sorted.push(front.clone());
        }
        if front.len() > 1 {
            // OAF descending; stable, so ties keep front order.
            let mut ordering = front.clone();
            ordering.sort_by(|&a, &b| {
                population[b]
                    .oaf
                    .partial_cmp(&population[a].oaf)
                    .expect("objective values are never NaN")
            });
            oaf_sorted.push(ordering.clone());

            // ODF ascending, re-sorting the OAF ordering; stable, so ODF
            // ties keep the OAF-descending order.
            ordering.sort_by(|&a, &b| {
                population[a]
                    .odf
                    .partial_cmp(&population[b].odf)
                    .expect("objective values are never NaN")
            });
            odf_sorted.push(ordering);
        }
    }

    let mut oaf_component = vec![0.0f64; n];
    for ordering in &oaf_sorted {
        let first = ordering[0];
        let last = ordering[ordering.len() - 1];
        oaf_component[first] = BOUNDARY_SENTINEL;
        let range = population[first].oaf - population[last].oaf;
        if ordering.len() > 1 {
            oaf_component[last] = BOUNDARY_SENTINEL;
            if range == 0.0 {
                for &p in &ordering[1..ordering.len() - 1] {
                    oaf_component[p] = BOUNDARY_SENTINEL;
                }
            } else {
                let mut running = 0.0;
                for q in 1..ordering.len() - 1 {
                    let before = population[ordering[q - 1]].oaf;
                    let after = population[ordering[q + 1]].oaf;
                    running += (before - after) / range;
                    oaf_component[ordering[q]] = running;
                }
            }
        }
    }

    let mut odf_component = vec![0.0f64; n];
    for ordering in &odf_sorted {
        let first = ordering[0];
        let last = ordering[ordering.len() - 1];
        odf_component[first] = BOUNDARY_SENTINEL;
        let range = population[last].odf - population[first].odf;
        if ordering.len() > 1 {
            odf_component[last] = BOUNDARY_SENTINEL;
            if range == 0.0 {
                for &p in &ordering[1..ordering.len() - 1] {
                    odf_component[p] = BOUNDARY_SENTINEL;
                }
            } else {
                let mut running = 0.0;
                for q in 1..ordering.len() - 1 {
                    let before = population[ordering[q - 1]].odf;
                    let after = population[ordering[q + 1]].odf;
                    running += (after - before) / range;
                    odf_component[ordering[q]] = running;
                }
            }
        }
    }

    let mut distances = vec![0.0f64; n];
    for p in 0..n {
        // A boundary in either ordering marks the whole solution as
        // boundary.
        if oaf_component[p] == BOUNDARY_SENTINEL || odf_component[p] == BOUNDARY_SENTINEL {
            distances[p] = BOUNDARY_SENTINEL;
        } else {
            distances[p] = oaf_component[p] + odf_component[p];
        }
        population[p].crowding_distance = distances[p];
    }

    distances
}

// ============================================================================
// Tests
// ============================================================================
