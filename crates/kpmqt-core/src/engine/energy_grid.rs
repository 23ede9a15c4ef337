//! Derivation of the Chebyshev-compatible energy grid and the normalization
//! volume.
//!
//! The Chebyshev recursion is numerically stable only for a Hamiltonian
//! spectrum rescaled into `[-1, 1]`; `energy_max` is the half-width of that
//! mapping, so every grid sample satisfies `|e| <= energy_max`. The grid is
//! uniform, ascending, includes both endpoints, and is fixed for the run:
//! correlation evaluation indexes into it positionally.

/// Builds the ascending energy grid over `[-energy_max, energy_max]`.
///
/// A single-sample grid degenerates to the band center.
pub(crate) fn build(number_of_points: usize, energy_max: f64) -> Vec<f64> {
    let grid: Vec<f64> = if number_of_points == 1 {
        vec![0.0]
    } else {
        let spacing = 2.0 * energy_max / (number_of_points - 1) as f64;
        (0..number_of_points)
            .map(|i| -energy_max + spacing * i as f64)
            .collect()
    };
    tracing::debug!(
        points = grid.len(),
        energy_max,
        "energy grid spans the spectral window"
    );
    grid
}

/// Derives the normalization volume from the periodic cell edge lengths.
///
/// Stochastic-trace estimates are divided by this to become intensive
/// quantities; the product form covers 1 to 3 periodic dimensions.
pub(crate) fn volume(box_lengths: &[f64]) -> f64 {
    box_lengths.iter().product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_point_grid_spans_both_endpoints() {
        let grid = build(5, 10.0);
        assert_eq!(grid, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn grid_is_ascending_and_bounded_by_the_half_width() {
        let energy_max = 3.7;
        let grid = build(64, energy_max);

        assert_eq!(grid.len(), 64);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
        assert!(grid.iter().all(|&e| e.abs() <= energy_max + 1e-12));
        assert_eq!(grid[0], -energy_max);
        assert_eq!(*grid.last().unwrap(), energy_max);
    }

    #[test]
    fn single_point_grid_sits_at_the_band_center() {
        assert_eq!(build(1, 10.0), vec![0.0]);
    }

    #[test]
    fn volume_is_the_product_of_the_box_edges() {
        assert_eq!(volume(&[4.0]), 4.0);
        assert_eq!(volume(&[4.0, 3.0]), 12.0);
        assert_eq!(volume(&[4.0, 3.0, 2.0]), 24.0);
    }
}
