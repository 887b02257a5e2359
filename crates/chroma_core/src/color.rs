//! Color types and utilities

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Packed color in `0xAARRGGBB` order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argb(u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Fully opaque color from RGB bytes
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xFF, r, g, b)
    }

    /// Create from a packed `0xAARRGGBB` value
    pub const fn from_argb_u32(value: u32) -> Self {
        Self(value)
    }

    /// Create from a packed `0xRRGGBBAA` value (CSS byte order)
    pub const fn from_rgba_u32(value: u32) -> Self {
        Self(value.rotate_right(8))
    }

    pub const fn to_argb_u32(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }
}

/// Renders as eight uppercase hex digits, `AARRGGBB`
impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("`{0}` is not a color literal")]
pub struct ParseColorError(pub String);

impl FromStr for Argb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_color(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}
