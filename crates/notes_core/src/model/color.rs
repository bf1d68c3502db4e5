//! Packed ARGB note colors.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A 32-bit `0xAARRGGBB` color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteColor(pub u32);

impl NoteColor {
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const YELLOW: Self = Self(0xFFFF_FF00);
    pub const CYAN: Self = Self(0xFF00_FFFF);
    pub const GREEN: Self = Self(0xFF00_FF00);
    pub const RED: Self = Self(0xFFFF_0000);
    pub const BLUE: Self = Self(0xFF00_00FF);
    /// Placeholder tint shown before a detail view has resolved its note.
    pub const LIGHT_GRAY: Self = Self(0xFFCC_CCCC);

    /// Colors offered by the editor and the listing filter chips.
    pub const PALETTE: [Self; 6] = [
        Self::YELLOW,
        Self::CYAN,
        Self::GREEN,
        Self::RED,
        Self::BLUE,
        Self::WHITE,
    ];

    /// Builds a color from the signed 32-bit form used by older stored data.
    pub fn from_signed(value: i32) -> Self {
        Self(value as u32)
    }

    pub fn to_signed(self) -> i32 {
        self.0 as i32
    }

    pub fn argb(self) -> u32 {
        self.0
    }
}

impl Default for NoteColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Display for NoteColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::NoteColor;

    #[test]
    fn default_is_white() {
        assert_eq!(NoteColor::default(), NoteColor::WHITE);
    }

    #[test]
    fn signed_form_roundtrips_high_alpha() {
        let red = NoteColor::RED;
        assert!(red.to_signed() < 0);
        assert_eq!(NoteColor::from_signed(red.to_signed()), red);
        assert_eq!(red.argb() >> 24, 0xFF);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(NoteColor::GREEN.to_string(), "#FF00FF00");
    }
}
