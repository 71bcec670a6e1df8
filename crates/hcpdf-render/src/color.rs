//! RGB colors.

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::rgb(192, 192, 192);
    pub const DARK_GRAY: Self = Self::rgb(64, 64, 64);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const ORANGE: Self = Self::rgb(255, 200, 0);
    pub const PINK: Self = Self::rgb(255, 175, 175);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a `0xRRGGBB` value. The top byte is ignored.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Components scaled to `0.0..=1.0`, as PDF color operators expect them.
    pub fn components(&self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex() {
        assert_eq!(Color::from_hex(0xFF8000), Color::rgb(255, 128, 0));
        assert_eq!(Color::from_hex(0x12_345678), Color::rgb(0x34, 0x56, 0x78));
    }

    #[test]
    fn components_are_normalized() {
        assert_eq!(Color::BLACK.components(), [0.0, 0.0, 0.0]);
        assert_eq!(Color::WHITE.components(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLUE.components(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Color::ORANGE).unwrap();
        assert_eq!(json, r#"{"r":255,"g":200,"b":0}"#);
    }
}
