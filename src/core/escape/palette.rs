use crate::core::data::colour::Colour;

/// Maps escape counts to colours. Points that never escape get the in-set
/// colour (solid black); escaped points follow a polynomial gradient over the
/// normalized escape fraction.
#[derive(Debug, Copy, Clone)]
pub struct Palette {
    max_iterations: u64,
}

impl Palette {
    #[must_use]
    pub fn new(max_iterations: u64) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn colour(&self, escape: Option<u64>) -> Colour {
        match escape {
            None => Colour::BLACK,
            Some(iterations) => {
                let t = iterations as f64 / self.max_iterations as f64;

                let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
                let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
                let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

                Colour { r, g, b }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_set_is_black() {
        let palette = Palette::new(100);

        assert_eq!(palette.colour(None), Colour::BLACK);
    }

    #[test]
    fn test_escaped_points_are_not_black_mid_gradient() {
        let palette = Palette::new(100);

        let colour = palette.colour(Some(50));

        assert_ne!(colour, Colour::BLACK);
    }

    #[test]
    fn test_gradient_is_deterministic() {
        let palette = Palette::new(200);

        for n in [1, 7, 100, 199] {
            assert_eq!(palette.colour(Some(n)), palette.colour(Some(n)));
        }
    }

    #[test]
    fn test_escape_at_cap_fades_to_black() {
        // t = 1 zeroes every gradient term, blending the slowest escapes
        // into the in-set colour
        let palette = Palette::new(100);

        assert_eq!(palette.colour(Some(100)), Colour::BLACK);
    }
}
