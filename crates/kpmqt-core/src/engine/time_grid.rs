//! Derivation of the correlation time axis for VAC/MSD accumulation.
//!
//! The axis is uniform, `t_k = (k + 1) * dt`: strictly increasing, starting
//! one spacing above zero (a literal `t = 0` sample carries no correlation
//! information). It is built only when VAC or MSD accumulation is requested.

/// Builds the strictly increasing correlation time axis.
pub(crate) fn build(number_of_steps: usize, dt: f64) -> Vec<f64> {
    let axis: Vec<f64> = (0..number_of_steps).map(|k| (k + 1) as f64 * dt).collect();
    tracing::debug!(
        steps = axis.len(),
        dt,
        "correlation time axis derived"
    );
    axis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_is_uniform_and_starts_one_spacing_above_zero() {
        let axis = build(4, 0.5);
        assert_eq!(axis, vec![0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn axis_is_strictly_increasing_and_non_negative() {
        let axis = build(100, 0.01);
        assert_eq!(axis.len(), 100);
        assert!(axis.iter().all(|&t| t >= 0.0));
        assert!(axis.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_steps_yields_an_empty_axis() {
        assert!(build(0, 0.5).is_empty());
    }
}
