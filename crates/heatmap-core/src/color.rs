//! sRGB color values and channel-wise linear interpolation.
//!
//! Colors enter and leave the engine as `#RRGGBB` hex strings, the format
//! the editor's color pickers produce. Internally a color is three 8-bit
//! channels; interpolation happens per channel in f64 and rounds back.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A color as three 8-bit sRGB channels.
///
/// Parsed from and formatted as `#rrggbb` (exactly `#` plus six hex digits).
///
/// # Example
/// ```
/// use heatmap_core::Rgb;
///
/// let red: Rgb = "#ff0000".parse().unwrap();
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from three 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolate between `self` and `other` at position `t`.
    ///
    /// Each channel is blended independently: `round(a + t * (b - a))`.
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the
    /// same line, saturating only at the 0..=255 channel boundary. Callers
    /// that need a bounded result clamp `t` upstream.
    ///
    /// # Example
    /// ```
    /// use heatmap_core::Rgb;
    ///
    /// let grey = Rgb::new(0, 0, 0).lerp(Rgb::new(255, 255, 255), 0.5);
    /// assert_eq!(grey, Rgb::new(128, 128, 128));
    /// ```
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| {
            let v = a as f64 + t * (b as f64 - a as f64);
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        // byte length alone is not enough: multibyte input would make the
        // channel slices straddle a char boundary and panic
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        Ok(Rgb {
            r: u8::from_str_radix(&hex[0..2], 16)?,
            g: u8::from_str_radix(&hex[2..4], 16)?,
            b: u8::from_str_radix(&hex[4..6], 16)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error type for hex color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// String does not start with '#'
    MissingHash,
    /// Hex part is not exactly 6 characters
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingHash => {
                write!(f, "hex color must start with '#'")
            }
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected '#' + 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}
