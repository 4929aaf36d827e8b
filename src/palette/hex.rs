//! `#RRGGBB` color values

use std::fmt;

/// Reasons a string is not a `#RRGGBB` color
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    MissingHash,
    InvalidLength(usize),
    InvalidDigit(char),
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexColorError::MissingHash => write!(f, "color must start with '#'"),
            HexColorError::InvalidLength(len) => {
                write!(f, "expected 6 hex digits, found {}", len)
            }
            HexColorError::InvalidDigit(c) => write!(f, "invalid hex digit '{}'", c),
        }
    }
}

impl std::error::Error for HexColorError {}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

/// A validated 6-digit hex color, keeping the original spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor<'a> {
    text: &'a str,
    rgb: (u8, u8, u8),
}

impl<'a> HexColor<'a> {
    pub fn parse(text: &'a str) -> Result<Self, HexColorError> {
        let digits = text.strip_prefix('#').ok_or(HexColorError::MissingHash)?;
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigit(c));
        }
        if digits.len() != 6 {
            return Err(HexColorError::InvalidLength(digits.len()));
        }

        // Six ASCII hex digits, so slicing and radix parsing cannot fail
        let bytes = digits.as_bytes();
        let channel = |i: usize| (hex_value(bytes[i]) << 4) | hex_value(bytes[i + 1]);
        let rgb = (channel(0), channel(2), channel(4));

        Ok(Self { text, rgb })
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    pub fn red(&self) -> u8 {
        self.rgb.0
    }

    pub fn green(&self) -> u8 {
        self.rgb.1
    }

    pub fn blue(&self) -> u8 {
        self.rgb.2
    }

    /// Relative luminance (Rec. 709 weights), 0.0 = black, 1.0 = white
    pub fn luminance(&self) -> f64 {
        let (r, g, b) = self.rgb;
        (0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64) / 255.0
    }

    /// Black or white, whichever reads better on top of this color
    pub fn contrast_text(&self) -> &'static str {
        if self.luminance() > 0.55 {
            "#000000"
        } else {
            "#FFFFFF"
        }
    }
}

impl fmt::Display for HexColor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
