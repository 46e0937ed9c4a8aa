//! Rank aggregation and comparison
//!
//! Both engines emit a probability vector indexed by node id; this module
//! turns those vectors into orderings and measures how much two of them
//! agree. Two metrics are provided: total-variation distance (how far apart
//! the distributions are) and Spearman rank correlation (how similar the
//! induced orderings are). Both are symmetric in their arguments.

use crate::error::RankError;
use crate::graph::csr::DiGraph;

fn check_domain(a: &[f64], b: &[f64]) -> Result<(), RankError> {
    if a.len() != b.len() {
        return Err(RankError::DomainMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Total-variation distance between two distributions: `0.5 * Σ|aᵢ - bᵢ|`.
///
/// Zero iff the distributions are identical, 1 for disjoint support. Fails
/// with [`RankError::DomainMismatch`] if the vectors cover different node
/// sets.
pub fn total_variation(a: &[f64], b: &[f64]) -> Result<f64, RankError> {
    check_domain(a, b)?;
    let distance = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .sum::<f64>()
        / 2.0;
    Ok(distance)
}

/// Spearman rank correlation of the two induced orderings.
///
/// Tied scores receive their average rank. Returns 1 for identical
/// orderings, -1 for exactly reversed ones, and 0 when either input induces
/// no ordering at all (fewer than two nodes, or all scores tied).
pub fn spearman(a: &[f64], b: &[f64]) -> Result<f64, RankError> {
    check_domain(a, b)?;

    let n = a.len();
    if n < 2 {
        return Ok(0.0);
    }

    let ranks_a = average_ranks(a);
    let ranks_b = average_ranks(b);

    // Pearson correlation over the rank vectors
    let mean = (n as f64 + 1.0) / 2.0;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (ra, rb) in ranks_a.iter().zip(ranks_b.iter()) {
        let da = ra - mean;
        let db = rb - mean;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok(cov / denom)
}

/// Ascending 1-based ranks with ties averaged.
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // Positions i..=j hold one tie group; all get the average rank
        let avg = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg;
        }
        i = j + 1;
    }
    ranks
}

/// Top `k` nodes by score, as `(label, score)` pairs.
///
/// Sorted by descending score; ties break by ascending node label, so the
/// output is deterministic. Fails with [`RankError::DomainMismatch`] if the
/// score vector does not cover the graph's node set.
pub fn top_k(graph: &DiGraph, scores: &[f64], k: usize) -> Result<Vec<(String, f64)>, RankError> {
    if scores.len() != graph.num_nodes() {
        return Err(RankError::DomainMismatch {
            left: scores.len(),
            right: graph.num_nodes(),
        });
    }

    let mut indexed: Vec<(u32, f64)> = scores
        .iter()
        .enumerate()
        .map(|(i, &s)| (i as u32, s))
        .collect();
    indexed.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| graph.label(a.0).cmp(graph.label(b.0)))
    });
    indexed.truncate(k);

    Ok(indexed
        .into_iter()
        .map(|(id, score)| (graph.label(id).to_string(), score))
        .collect())
}

/// Full ordering of all nodes, highest score first.
pub fn ranking(graph: &DiGraph, scores: &[f64]) -> Result<Vec<(String, f64)>, RankError> {
    top_k(graph, scores, graph.num_nodes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    #[test]
    fn test_total_variation_identical() {
        let a = [0.5, 0.3, 0.2];
        assert_eq!(total_variation(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_total_variation_disjoint() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        assert_eq!(total_variation(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn test_total_variation_symmetric() {
        let a = [0.7, 0.2, 0.1];
        let b = [0.1, 0.3, 0.6];
        assert_eq!(
            total_variation(&a, &b).unwrap(),
            total_variation(&b, &a).unwrap()
        );
    }

    #[test]
    fn test_domain_mismatch() {
        let a = [0.5, 0.5];
        let b = [1.0];
        assert_eq!(
            total_variation(&a, &b).unwrap_err(),
            RankError::DomainMismatch { left: 2, right: 1 }
        );
        assert!(spearman(&a, &b).is_err());
    }

    #[test]
    fn test_spearman_identical_ordering() {
        let a = [0.1, 0.2, 0.3, 0.4];
        let b = [0.15, 0.2, 0.3, 0.35]; // same ordering, different values
        assert!((spearman(&a, &b).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_spearman_reversed_ordering() {
        let a = [0.1, 0.2, 0.3];
        let b = [0.3, 0.2, 0.1];
        assert!((spearman(&a, &b).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_spearman_degenerate() {
        let flat = [0.25, 0.25, 0.25, 0.25];
        let other = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(spearman(&flat, &other).unwrap(), 0.0);
        assert_eq!(spearman(&[0.5], &[0.5]).unwrap(), 0.0);
    }

    #[test]
    fn test_average_ranks_with_ties() {
        // 0.2 appears twice at sorted positions 2 and 3 -> both rank 2.5
        let ranks = average_ranks(&[0.2, 0.1, 0.2, 0.5]);
        assert_eq!(ranks, vec![2.5, 1.0, 2.5, 4.0]);
    }

    #[test]
    fn test_top_k_tie_break_by_label() {
        let graph = GraphBuilder::from_edge_list(&[("B", "A"), ("A", "B")])
            .build()
            .unwrap();
        // Tied maximum at both nodes: ascending label order wins
        let top = top_k(&graph, &[0.5, 0.5], 2).unwrap();
        assert_eq!(top[0].0, "A");
        assert_eq!(top[1].0, "B");
    }

    #[test]
    fn test_top_k_truncates() {
        let graph = GraphBuilder::from_edge_list(&[("a", "b"), ("b", "c"), ("c", "a")])
            .build()
            .unwrap();
        let top = top_k(&graph, &[0.2, 0.5, 0.3], 2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], ("b".to_string(), 0.5));
        assert_eq!(top[1], ("c".to_string(), 0.3));
    }

    #[test]
    fn test_top_k_domain_mismatch() {
        let graph = GraphBuilder::from_edge_list(&[("a", "b")]).build().unwrap();
        assert!(top_k(&graph, &[0.5], 1).is_err());
    }

    #[test]
    fn test_ranking_covers_all_nodes() {
        let graph = GraphBuilder::from_edge_list(&[("a", "b"), ("b", "c"), ("c", "a")])
            .build()
            .unwrap();
        let full = ranking(&graph, &[0.2, 0.5, 0.3]).unwrap();
        assert_eq!(full.len(), 3);
    }
}
