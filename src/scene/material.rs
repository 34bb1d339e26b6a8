/// An sRGB color stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Creates a color from a `0xRRGGBB` literal. Bits above 24 are dropped.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    /// Red, green and blue channels in `[0, 1]`.
    #[must_use]
    pub fn to_rgb(self) -> [f64; 3] {
        let channel = |shift: u32| f64::from((self.0 >> shift) & 0xff) / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

/// Which triangle faces a material renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Counter-clockwise (outward) faces only.
    #[default]
    Front,
    /// Inward faces only.
    Back,
    /// Both sides.
    Double,
}

/// Physically based surface description for a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color.
    pub color: Color,
    /// Microfacet roughness in `[0, 1]`; 1 is fully matte.
    pub roughness: f64,
    /// Metalness in `[0, 1]`.
    pub metalness: f64,
    /// Rendered faces.
    pub side: Side,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::from_hex(0xffffff),
            roughness: 1.0,
            metalness: 0.0,
            side: Side::Front,
        }
    }
}

impl Material {
    /// A default material with the given color.
    #[must_use]
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn hex_channels() {
        let [r, g, b] = Color::from_hex(0x0077ff).to_rgb();
        assert_abs_diff_eq!(r, 0.0);
        assert_abs_diff_eq!(g, f64::from(0x77) / 255.0);
        assert_abs_diff_eq!(b, 1.0);
    }

    #[test]
    fn high_bits_are_dropped() {
        assert_eq!(Color::from_hex(0xff33_3333), Color(0x0033_3333));
    }
}
