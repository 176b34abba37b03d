//! Pearson, Spearman, and Kendall correlation over aligned annual series.
//!
//! Alignment uses standard pairwise deletion: only years present and
//! finite in both series enter the computation. Fewer than two pairs, or
//! a constant series, yields NaN rather than an error; the presentation
//! layer renders NaN as-is.

use crate::annual::AnnualSeries;
use serde::Serialize;
use std::cmp::Ordering;

/// The three coefficients reported for a selection, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlations {
    pub pearson: f64,
    pub spearman: f64,
    pub kendall: f64,
}

/// Correlate two annual series. Coefficients are computed on the
/// full-precision values and rounded only on the way out.
pub fn correlate(a: &AnnualSeries, b: &AnnualSeries) -> Correlations {
    let (xs, ys) = paired_values(a, b);
    Correlations {
        pearson: round2(pearson(&xs, &ys)),
        spearman: round2(spearman(&xs, &ys)),
        kendall: round2(kendall(&xs, &ys)),
    }
}

/// Join on year, keeping pairs where both values exist and are finite.
fn paired_values(a: &AnnualSeries, b: &AnnualSeries) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for &(year, x) in a.points() {
        if let Some(y) = b.value_for(year) {
            if x.is_finite() && y.is_finite() {
                xs.push(x);
                ys.push(y);
            }
        }
    }
    (xs, ys)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson product-moment coefficient.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let mx = mean(xs);
    let my = mean(ys);
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    if vx == 0.0 || vy == 0.0 {
        return f64::NAN;
    }
    cov / (vx.sqrt() * vy.sqrt())
}

/// Spearman rank coefficient: Pearson on average-ranked values.
pub fn spearman(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    pearson(&rank(xs), &rank(ys))
}

/// Average ranks (1-based), ties sharing the mean of their positions.
fn rank(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));
    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let average = (i + j) as f64 / 2.0 + 1.0;
        for &position in &order[i..=j] {
            ranks[position] = average;
        }
        i = j + 1;
    }
    ranks
}

/// Kendall tau-b, with tie correction in the denominator.
pub fn kendall(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let mut concordant: i64 = 0;
    let mut discordant: i64 = 0;
    let mut ties_x: i64 = 0;
    let mut ties_y: i64 = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let ox = xs[i].total_cmp(&xs[j]);
            let oy = ys[i].total_cmp(&ys[j]);
            if ox == Ordering::Equal {
                ties_x += 1;
            }
            if oy == Ordering::Equal {
                ties_y += 1;
            }
            if ox == Ordering::Equal || oy == Ordering::Equal {
                continue;
            }
            if ox == oy {
                concordant += 1;
            } else {
                discordant += 1;
            }
        }
    }
    let n0 = (n * (n - 1) / 2) as f64;
    let denominator = ((n0 - ties_x as f64) * (n0 - ties_y as f64)).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    (concordant - discordant) as f64 / denominator
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{correlate, kendall, pearson, rank, spearman};
    use crate::annual::AnnualSeries;

    fn annual(values: &[(i32, f64)]) -> AnnualSeries {
        AnnualSeries::from_points(values.to_vec())
    }

    #[test]
    fn test_perfect_monotone_agreement() {
        let a = annual(&[(1979, 1.0), (1980, 2.0), (1981, 3.0)]);
        let b = annual(&[(1979, 2.0), (1980, 4.0), (1981, 6.0)]);
        let c = correlate(&a, &b);
        assert_eq!(c.pearson, 1.0);
        assert_eq!(c.spearman, 1.0);
        assert_eq!(c.kendall, 1.0);
    }

    #[test]
    fn test_perfect_inversion() {
        let a = annual(&[(1979, 1.0), (1980, 2.0), (1981, 3.0)]);
        let b = annual(&[(1979, 9.0), (1980, 5.0), (1981, 1.0)]);
        let c = correlate(&a, &b);
        assert_eq!(c.pearson, -1.0);
        assert_eq!(c.spearman, -1.0);
        assert_eq!(c.kendall, -1.0);
    }

    #[test]
    fn test_known_coefficients() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 1.0, 4.0, 3.0, 5.0];
        assert!((pearson(&xs, &ys) - 0.8).abs() < 1e-12);
        assert!((spearman(&xs, &ys) - 0.8).abs() < 1e-12);
        assert!((kendall(&xs, &ys) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let a = annual(&[(1979, 3.2), (1980, 1.1), (1981, 4.7), (1982, 2.0)]);
        let b = annual(&[(1979, 0.5), (1980, 2.2), (1981, 1.9), (1982, 3.3)]);
        assert_eq!(correlate(&a, &b), correlate(&b, &a));
    }

    #[test]
    fn test_pairwise_deletion_drops_unmatched_years() {
        // 1980 only exists in a; 1983 only in b; the rest align perfectly
        let a = annual(&[(1979, 1.0), (1980, 99.0), (1981, 2.0), (1982, 3.0)]);
        let b = annual(&[(1979, 10.0), (1981, 20.0), (1982, 30.0), (1983, -5.0)]);
        let c = correlate(&a, &b);
        assert_eq!(c.pearson, 1.0);
    }

    #[test]
    fn test_degenerate_inputs_are_nan() {
        let empty = annual(&[]);
        let single = annual(&[(1979, 1.0)]);
        let c = correlate(&empty, &empty);
        assert!(c.pearson.is_nan() && c.spearman.is_nan() && c.kendall.is_nan());
        let c = correlate(&single, &single);
        assert!(c.pearson.is_nan());
        // zero variance on one side
        let flat = annual(&[(1979, 2.0), (1980, 2.0), (1981, 2.0)]);
        let rising = annual(&[(1979, 1.0), (1980, 2.0), (1981, 3.0)]);
        let c = correlate(&flat, &rising);
        assert!(c.pearson.is_nan() && c.spearman.is_nan() && c.kendall.is_nan());
    }

    #[test]
    fn test_rank_with_ties() {
        assert_eq!(rank(&[1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.5, 2.5, 4.0]);
        assert_eq!(rank(&[5.0, 1.0, 3.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_kendall_tau_b_with_ties() {
        // x has one tied pair; tau-b corrects the denominator
        let xs = [1.0, 2.0, 2.0, 3.0];
        let ys = [1.0, 2.0, 3.0, 4.0];
        // pairs: C=5, D=0, ties_x=1; n0=6
        let expected = 5.0 / ((6.0 - 1.0) * 6.0f64).sqrt();
        assert!((kendall(&xs, &ys) - expected).abs() < 1e-12);
    }
}
