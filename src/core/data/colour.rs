#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    /// Builds a colour from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Linear interpolation between two colours, `t` clamped to [0, 1].
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
        };

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_splits_channels() {
        let colour = Colour::from_hex(0x440154);

        assert_eq!(colour, Colour { r: 0x44, g: 0x01, b: 0x54 });
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(Colour::BLACK.lerp(Colour::WHITE, 0.0), Colour::BLACK);
        assert_eq!(Colour::BLACK.lerp(Colour::WHITE, 1.0), Colour::WHITE);
    }

    #[test]
    fn test_lerp_midpoint_rounds() {
        let mid = Colour::BLACK.lerp(Colour::WHITE, 0.5);

        assert_eq!(mid, Colour { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_lerp_clamps_out_of_range() {
        assert_eq!(Colour::BLACK.lerp(Colour::WHITE, 2.0), Colour::WHITE);
        assert_eq!(Colour::BLACK.lerp(Colour::WHITE, -1.0), Colour::BLACK);
    }

    #[test]
    fn test_to_rgba_is_opaque() {
        assert_eq!(Colour::from_hex(0x102030).to_rgba(), [0x10, 0x20, 0x30, 255]);
    }
}
