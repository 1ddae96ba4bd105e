/// An RGBA colour. Every colour produced by the renderer is opaque.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_sets_full_alpha() {
        let colour = Colour::opaque(1, 2, 3);

        assert_eq!(colour.a, 255);
        assert_eq!(colour.to_rgba(), [1, 2, 3, 255]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::BLACK.to_rgba(), [0, 0, 0, 255]);
        assert_eq!(Colour::WHITE.to_rgba(), [255, 255, 255, 255]);
    }
}
