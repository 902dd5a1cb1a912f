use crate::core::data::complex::Complex;

/// Escape-time classification of one plane point: iterates `z ← z² + c` from
/// `z₀ = 0` and returns the iteration at which the orbit left the radius-2
/// disk, or `None` if it stayed inside for the whole budget.
///
/// The threshold compares the squared magnitude against 4.0. The two forms
/// are mathematically equivalent but break ties differently at the boundary,
/// so the squared form is kept deliberately.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u64) -> Option<u64> {
    let mut z = Complex::ZERO;

    for iteration in 1..=max_iterations {
        z = z * z + c;
        if z.magnitude_squared() > 4.0 {
            return Some(iteration);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 100, 10_000] {
            assert_eq!(escape_time(Complex::ZERO, max_iterations), None);
        }
    }

    #[test]
    fn test_three_escapes_at_iteration_one() {
        let c = Complex {
            real: 3.0,
            imag: 0.0,
        };

        // |0² + 3| = 3 > 2 already on the first step, even with a cap of 1
        assert_eq!(escape_time(c, 1), Some(1));
        assert_eq!(escape_time(c, 100), Some(1));
    }

    #[test]
    fn test_point_inside_main_cardioid_never_escapes() {
        let c = Complex {
            real: -0.1,
            imag: 0.1,
        };

        assert_eq!(escape_time(c, 5_000), None);
    }

    #[test]
    fn test_boundary_point_escapes_eventually() {
        let c = Complex {
            real: 0.3,
            imag: 0.6,
        };

        let escaped = escape_time(c, 10_000);

        assert!(escaped.is_some());
        assert!(escaped.unwrap() >= 1);
    }

    #[test]
    fn test_escape_count_is_monotonic_in_cap() {
        let c = Complex {
            real: -0.75,
            imag: 0.3,
        };

        if let Some(n) = escape_time(c, 1_000) {
            // once escaped, a larger cap reports the same iteration
            assert_eq!(escape_time(c, 10_000), Some(n));
        }
    }
}
