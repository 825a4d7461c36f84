use crate::error::ConvertError;

/// Default palette — 10 characters, darkest to brightest.
pub const DEFAULT_CHARSET: &str = " .:-=+*#%@";

/// Ordered character palette, darkest → brightest.
///
/// Insertion order is significant; length ≥ 1 is enforced at construction so
/// the mapper never sees an empty set.
///
/// # Example
/// ```
/// use px_core::palette::Palette;
/// let p = Palette::new(" .:-=+*#%@").unwrap();
/// assert_eq!(p.len(), 10);
/// assert!(Palette::new("").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Build a palette from an ordered character sequence.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidPalette` if `charset` is empty.
    pub fn new(charset: &str) -> Result<Self, ConvertError> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.is_empty() {
            return Err(ConvertError::InvalidPalette);
        }
        Ok(Self { chars })
    }

    /// Number of characters in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the palette is empty. Never true for a constructed value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in darkest → brightest order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// Lookup table mapping intensity [0..255] → palette character.
///
/// Pre-computed once so the per-pixel cost is a single index. The build uses
/// `index = intensity * (len - 1) / 255` with truncating division: 0 always
/// maps to the first character, 255 to the last, and interior boundaries are
/// unevenly spaced when `len - 1` does not divide 255. That spacing is a
/// reproducible property of the quantization, not a defect.
///
/// # Example
/// ```
/// use px_core::palette::{Palette, PaletteLut};
/// let lut = PaletteLut::new(&Palette::new(" .:-=+*#%@").unwrap());
/// assert_eq!(lut.map(0), ' ');
/// assert_eq!(lut.map(128), '=');
/// assert_eq!(lut.map(255), '@');
/// ```
pub struct PaletteLut {
    lut: [char; 256],
}

impl PaletteLut {
    /// Build the LUT from a validated palette.
    ///
    /// A single-character palette maps every intensity to that character.
    #[must_use]
    pub fn new(palette: &Palette) -> Self {
        let chars = palette.chars();
        let len = chars.len();
        let mut lut = [chars[0]; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = chars[i * (len - 1) / 255];
        }
        Self { lut }
    }

    /// Map an intensity value [0..255] to a character.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, intensity: u8) -> char {
        self.lut[intensity as usize]
    }
}
