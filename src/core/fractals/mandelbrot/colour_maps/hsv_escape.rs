use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

/// Colours escaped points by hue (`360 * n / max`) at full brightness and
/// bounded points black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotHsvColourMap {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotHsvColourMap {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        let fraction = iterations as f64 / self.max_iterations as f64;
        let value = if iterations < self.max_iterations {
            1.0
        } else {
            0.0
        };

        hsv_to_rgb(360.0 * fraction, 1.0, value)
    }
}

impl MandelbrotHsvColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = MandelbrotHsvColourMap::new(500);

        assert_eq!(mapper.map(500), Colour::BLACK);
    }

    #[test]
    fn test_map_returns_black_beyond_max_iterations() {
        let mapper = MandelbrotHsvColourMap::new(500);

        assert_eq!(mapper.map(501), Colour::BLACK);
    }

    #[test]
    fn test_map_zero_iterations_is_red() {
        let mapper = MandelbrotHsvColourMap::new(500);

        assert_eq!(mapper.map(0), Colour::opaque(255, 0, 0));
    }

    #[test]
    fn test_map_hue_follows_escape_fraction() {
        let mapper = MandelbrotHsvColourMap::new(6);

        // 360 * n / 6 lands exactly on each sector boundary
        assert_eq!(mapper.map(1), Colour::opaque(255, 255, 0));
        assert_eq!(mapper.map(2), Colour::opaque(0, 255, 0));
        assert_eq!(mapper.map(3), Colour::opaque(0, 255, 255));
        assert_eq!(mapper.map(4), Colour::opaque(0, 0, 255));
        assert_eq!(mapper.map(5), Colour::opaque(255, 0, 255));
    }

    #[test]
    fn test_map_is_always_opaque() {
        let mapper = MandelbrotHsvColourMap::new(500);

        assert!((0..=500).all(|n| mapper.map(n).a == 255));
    }
}
