//! Linear and logarithmic sweep axis generation.
//!
//! Both generators include their endpoints exactly, so callers can assert
//! that an operating point lies inside `[first, last]` without tolerance
//! games at the boundary.

/// `points` linearly spaced values over `[start, stop]`, endpoints included.
#[must_use]
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (stop - start) / (points - 1) as f64;
            let mut axis: Vec<f64> = (0..points)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let i = i as f64;
                    step.mul_add(i, start)
                })
                .collect();
            // Pin the endpoint: accumulated rounding must not push the last
            // sample outside the requested range.
            axis[points - 1] = stop;
            axis
        }
    }
}

/// `points` logarithmically spaced values over `[10^start_exp, 10^stop_exp]`,
/// endpoints included.
#[must_use]
pub fn logspace(start_exp: f64, stop_exp: f64, points: usize) -> Vec<f64> {
    linspace(start_exp, stop_exp, points)
        .into_iter()
        .map(|e| 10.0_f64.powf(e))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_exact() {
        let axis = linspace(0.0, 6.0, 30);
        assert_eq!(axis.len(), 30);
        assert!((axis[0] - 0.0).abs() < f64::EPSILON);
        assert!((axis[29] - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn linspace_uniform_step() {
        let axis = linspace(1.0, 2.0, 5);
        for pair in axis.windows(2) {
            assert!((pair[1] - pair[0] - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_monotone() {
        let axis = linspace(-3.0, 9.0, 100);
        for pair in axis.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        let one = linspace(5.0, 9.0, 1);
        assert_eq!(one.len(), 1);
        assert!((one[0] - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn logspace_endpoints_are_powers() {
        let axis = logspace(-5.0, -3.0, 30);
        assert_eq!(axis.len(), 30);
        assert!((axis[0] - 1e-5).abs() < 1e-18);
        assert!((axis[29] - 1e-3).abs() < 1e-16);
    }

    #[test]
    fn logspace_monotone_and_positive() {
        let axis = logspace(-2.0, 1.0, 50);
        for pair in axis.windows(2) {
            assert!(pair[0] > 0.0);
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn logspace_geometric_ratio_constant() {
        let axis = logspace(0.0, 3.0, 4);
        for pair in axis.windows(2) {
            assert!((pair[1] / pair[0] - 10.0).abs() < 1e-9);
        }
    }
}
