use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("malformed color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    Malformed(String),
}

/// An 8-bit-per-channel color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Packs the channels so that the value's bytes in memory read R, G, B, A.
    pub fn pack(self) -> u32 {
        u32::from_ne_bytes([self.r, self.g, self.b, self.a])
    }

    pub fn unpack(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_ne_bytes();
        Self { r, g, b, a }
    }

    /// Blends each channel independently; `t` is clamped to `[0, 1]`.
    pub fn lerp(from: Self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
            a: channel(from.a, to.a),
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ColorError::Malformed(s.to_owned());

        let hex = s.strip_prefix('#').ok_or_else(malformed)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| malformed());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };

        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex_as_opaque() {
        assert_eq!("#000764".parse(), Ok(Rgba::opaque(0x00, 0x07, 0x64)));
        assert_eq!("#2068cb".parse(), Ok(Rgba::opaque(0x20, 0x68, 0xcb)));
    }

    #[test]
    fn parses_eight_digit_hex_with_alpha() {
        assert_eq!("#FFAA0080".parse(), Ok(Rgba::new(0xff, 0xaa, 0x00, 0x80)));
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["000764", "#00076", "#0007644", "#GG0764", "", "#"] {
            assert!(input.parse::<Rgba>().is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn packed_bytes_are_rgba_in_memory() {
        let packed = Rgba::new(1, 2, 3, 4).pack();
        assert_eq!(packed.to_ne_bytes(), [1, 2, 3, 4]);
        assert_eq!(Rgba::unpack(packed), Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let black = Rgba::new(0, 0, 0, 0);
        let white = Rgba::new(255, 255, 255, 255);

        assert_eq!(Rgba::lerp(black, white, 0.0), black);
        assert_eq!(Rgba::lerp(black, white, 1.0), white);
        assert_eq!(Rgba::lerp(black, white, 0.5), Rgba::new(128, 128, 128, 128));
        assert_eq!(Rgba::lerp(white, black, 7.0), black);
    }
}
