//! Probability distributions over the lattice.
//!
//! Dense tables spanning the full representable coordinate range of a
//! [`RegisterLayout`] — positions never observed are present with
//! probability 0. Smoothing returns a new table; no table is mutated
//! after construction.

use ndarray::Array2;

use crate::layout::RegisterLayout;

/// Truncation radius of the smoothing kernel, in standard deviations.
const KERNEL_RADIUS_SIGMAS: f64 = 3.0;

fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (KERNEL_RADIUS_SIGMAS * sigma).ceil().max(1.0) as usize;
    let mut weights = Vec::with_capacity(2 * radius + 1);
    for k in -(radius as i64)..=(radius as i64) {
        let k = k as f64;
        weights.push((-k * k / (2.0 * sigma * sigma)).exp());
    }
    let total: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    weights
}

/// Convolve one axis with a normalized kernel, dropping contributions
/// that fall outside the table (edge truncation, accepted by design).
fn convolve(values: &[f64], kernel: &[f64]) -> Vec<f64> {
    let radius = (kernel.len() / 2) as i64;
    let n = values.len() as i64;
    let mut out = vec![0.0; values.len()];
    for (i, slot) in out.iter_mut().enumerate() {
        for (ki, w) in kernel.iter().enumerate() {
            let j = i as i64 + ki as i64 - radius;
            if (0..n).contains(&j) {
                *slot += w * values[j as usize];
            }
        }
    }
    out
}

/// A 1D position probability table.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    min: i64,
    probs: Vec<f64>,
}

impl Distribution {
    /// Build the dense table from decoded `(position, count)` samples.
    ///
    /// Probabilities are counts over the sample total; every representable
    /// position is present, zero-filled when unobserved.
    pub fn from_samples(layout: &RegisterLayout, samples: &[(i64, u64)]) -> Self {
        let total: u64 = samples.iter().map(|&(_, c)| c).sum();
        let mut probs = vec![0.0; layout.num_positions()];
        if total > 0 {
            for &(position, count) in samples {
                let idx = (position - layout.min_position()) as usize;
                probs[idx] += count as f64 / total as f64;
            }
        }
        Self {
            min: layout.min_position(),
            probs,
        }
    }

    /// Smallest tabulated coordinate.
    pub fn min_position(&self) -> i64 {
        self.min
    }

    /// Largest tabulated coordinate.
    pub fn max_position(&self) -> i64 {
        self.min + self.probs.len() as i64 - 1
    }

    /// Probability at a coordinate (0 outside the table).
    pub fn probability(&self, position: i64) -> f64 {
        let idx = position - self.min;
        if idx < 0 || idx as usize >= self.probs.len() {
            return 0.0;
        }
        self.probs[idx as usize]
    }

    /// Iterate over `(position, probability)` in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.probs
            .iter()
            .enumerate()
            .map(move |(i, &p)| (self.min + i as i64, p))
    }

    /// Sum of all tabulated probabilities.
    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// A new table smoothed by a Gaussian of standard deviation `sigma`,
    /// truncated at three standard deviations. Total probability is
    /// preserved up to truncation at the table's edges.
    pub fn smoothed(&self, sigma: f64) -> Distribution {
        Distribution {
            min: self.min,
            probs: convolve(&self.probs, &gaussian_kernel(sigma)),
        }
    }
}

/// A 2D position probability table.
///
/// Both axes share one register layout, so the grid is square and spans
/// the same coordinate range in x and y. Storage is row-major with rows
/// indexed by y.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    min: i64,
    probs: Array2<f64>,
}

impl Grid {
    /// Build the dense grid from decoded `((x, y), count)` samples.
    pub fn from_samples(layout: &RegisterLayout, samples: &[((i64, i64), u64)]) -> Self {
        let total: u64 = samples.iter().map(|&(_, c)| c).sum();
        let n = layout.num_positions();
        let mut probs = Array2::zeros((n, n));
        if total > 0 {
            for &((x, y), count) in samples {
                let xi = (x - layout.min_position()) as usize;
                let yi = (y - layout.min_position()) as usize;
                probs[[yi, xi]] += count as f64 / total as f64;
            }
        }
        Self {
            min: layout.min_position(),
            probs,
        }
    }

    /// Smallest tabulated coordinate (both axes).
    pub fn min_position(&self) -> i64 {
        self.min
    }

    /// Largest tabulated coordinate (both axes).
    pub fn max_position(&self) -> i64 {
        self.min + self.probs.nrows() as i64 - 1
    }

    /// Probability at `(x, y)` (0 outside the grid).
    pub fn probability(&self, x: i64, y: i64) -> f64 {
        let xi = x - self.min;
        let yi = y - self.min;
        if xi < 0 || yi < 0 || xi as usize >= self.probs.ncols() || yi as usize >= self.probs.nrows()
        {
            return 0.0;
        }
        self.probs[[yi as usize, xi as usize]]
    }

    /// Iterate over `((x, y), probability)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((i64, i64), f64)> + '_ {
        self.probs.indexed_iter().map(move |((yi, xi), &p)| {
            ((self.min + xi as i64, self.min + yi as i64), p)
        })
    }

    /// Sum of all tabulated probabilities.
    pub fn total(&self) -> f64 {
        self.probs.sum()
    }

    /// A new grid smoothed by a separable Gaussian of standard deviation
    /// `sigma` per axis, truncated at three standard deviations.
    pub fn smoothed(&self, sigma: f64) -> Grid {
        let kernel = gaussian_kernel(sigma);
        let (rows, cols) = self.probs.dim();
        let mut out = Array2::zeros((rows, cols));

        // Rows (along x), then columns (along y).
        for (yi, row) in self.probs.outer_iter().enumerate() {
            let smoothed = convolve(&row.to_vec(), &kernel);
            for (xi, v) in smoothed.into_iter().enumerate() {
                out[[yi, xi]] = v;
            }
        }
        for xi in 0..cols {
            let column: Vec<f64> = (0..rows).map(|yi| out[[yi, xi]]).collect();
            let smoothed = convolve(&column, &kernel);
            for (yi, v) in smoothed.into_iter().enumerate() {
                out[[yi, xi]] = v;
            }
        }

        Grid {
            min: self.min,
            probs: out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_dense_table_spans_representable_range() {
        let layout = RegisterLayout::for_steps(5).unwrap();
        let dist = Distribution::from_samples(&layout, &[(-1, 512), (1, 512)]);

        assert_eq!(dist.min_position(), -8);
        assert_eq!(dist.max_position(), 7);
        assert_eq!(dist.iter().count(), 16);
        assert!((dist.probability(-1) - 0.5).abs() < TOL);
        assert!((dist.probability(1) - 0.5).abs() < TOL);
        assert_eq!(dist.probability(0), 0.0);
        assert_eq!(dist.probability(100), 0.0);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let layout = RegisterLayout::for_steps(3).unwrap();
        let dist = Distribution::from_samples(&layout, &[(-3, 100), (0, 200), (2, 724)]);
        assert!((dist.total() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_empty_samples_yield_zero_table() {
        let layout = RegisterLayout::for_steps(2).unwrap();
        let dist = Distribution::from_samples(&layout, &[]);
        assert_eq!(dist.total(), 0.0);
    }

    #[test]
    fn test_smoothing_preserves_interior_mass() {
        let layout = RegisterLayout::for_steps(5).unwrap();
        // All mass at the center, kernel radius 3 < 8: nothing reaches an edge.
        let dist = Distribution::from_samples(&layout, &[(0, 1000)]);
        let smoothed = dist.smoothed(1.0);

        assert!((smoothed.total() - 1.0).abs() < TOL);
        // The original table is untouched.
        assert!((dist.probability(0) - 1.0).abs() < TOL);
        // Mass spread symmetrically.
        assert!((smoothed.probability(-1) - smoothed.probability(1)).abs() < TOL);
        assert!(smoothed.probability(0) < 1.0);
        assert!(smoothed.probability(1) > 0.0);
    }

    #[test]
    fn test_smoothing_truncates_at_edges() {
        let layout = RegisterLayout::for_steps(1).unwrap();
        // Mass at the table's lowest cell: part of the kernel falls off.
        let dist = Distribution::from_samples(&layout, &[(layout.min_position(), 100)]);
        let smoothed = dist.smoothed(1.0);
        assert!(smoothed.total() < 1.0);
        assert!(smoothed.total() > 0.5);
    }

    #[test]
    fn test_grid_dense_and_normalized() {
        let layout = RegisterLayout::for_steps(1).unwrap();
        let grid = Grid::from_samples(&layout, &[((0, 0), 600), ((1, -1), 424)]);

        assert_eq!(grid.iter().count(), 16);
        assert!((grid.total() - 1.0).abs() < TOL);
        assert!((grid.probability(0, 0) - 600.0 / 1024.0).abs() < TOL);
        assert!((grid.probability(1, -1) - 424.0 / 1024.0).abs() < TOL);
        assert_eq!(grid.probability(-2, -2), 0.0);
    }

    #[test]
    fn test_grid_smoothing_symmetric_around_center() {
        let layout = RegisterLayout::for_steps(5).unwrap();
        let grid = Grid::from_samples(&layout, &[((0, 0), 1)]);
        let smoothed = grid.smoothed(1.0);

        assert!((smoothed.total() - 1.0).abs() < TOL);
        let p = smoothed.probability(1, 0);
        assert!((smoothed.probability(-1, 0) - p).abs() < TOL);
        assert!((smoothed.probability(0, 1) - p).abs() < TOL);
        assert!((smoothed.probability(0, -1) - p).abs() < TOL);
    }
}
