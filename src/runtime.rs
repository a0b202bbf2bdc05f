// Copyright (c) 2026 rezky_nightky

use std::str::FromStr;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Mono,
    Color16,
    Color256,
    TrueColor,
}

impl ColorMode {
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::TrueColor => "24-bit truecolor",
            ColorMode::Color256 => "8-bit (256-color)",
            ColorMode::Color16 => "16-color",
            ColorMode::Mono => "mono",
        }
    }

    /// Maps the `--colormode` number onto a mode.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(ColorMode::Mono),
            16 => Some(ColorMode::Color16),
            8 | 256 => Some(ColorMode::Color256),
            24 | 32 => Some(ColorMode::TrueColor),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Red,
    Pink,
    Rose,
    Crimson,
    Purple,
    Gold,
    Green,
    Cyan,
    Snow,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 9] = [
        ColorScheme::Red,
        ColorScheme::Pink,
        ColorScheme::Rose,
        ColorScheme::Crimson,
        ColorScheme::Purple,
        ColorScheme::Gold,
        ColorScheme::Green,
        ColorScheme::Cyan,
        ColorScheme::Snow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Red => "red",
            ColorScheme::Pink => "pink",
            ColorScheme::Rose => "rose",
            ColorScheme::Crimson => "crimson",
            ColorScheme::Purple => "purple",
            ColorScheme::Gold => "gold",
            ColorScheme::Green => "green",
            ColorScheme::Cyan => "cyan",
            ColorScheme::Snow => "snow",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ColorScheme::Red => "Coral red on midnight blue (default)",
            ColorScheme::Pink => "Candy pink",
            ColorScheme::Rose => "Dusty rose on plum",
            ColorScheme::Crimson => "Deep crimson on black",
            ColorScheme::Purple => "Violet (alias: violet)",
            ColorScheme::Gold => "Gold on dark brown",
            ColorScheme::Green => "Classic terminal green (alias: matrix)",
            ColorScheme::Cyan => "Ice cyan",
            ColorScheme::Snow => "White on slate (alias: white)",
        }
    }
}

impl FromStr for ColorScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "coral" => Ok(ColorScheme::Red),
            "pink" => Ok(ColorScheme::Pink),
            "rose" => Ok(ColorScheme::Rose),
            "crimson" => Ok(ColorScheme::Crimson),
            "purple" | "violet" => Ok(ColorScheme::Purple),
            "gold" => Ok(ColorScheme::Gold),
            "green" | "matrix" => Ok(ColorScheme::Green),
            "cyan" => Ok(ColorScheme::Cyan),
            "snow" | "white" => Ok(ColorScheme::Snow),
            _ => Err(Error::UnknownColor(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_scheme_parses_names_and_aliases() {
        assert_eq!("Red".parse::<ColorScheme>().unwrap(), ColorScheme::Red);
        assert_eq!(" violet ".parse::<ColorScheme>().unwrap(), ColorScheme::Purple);
        assert!("plaid".parse::<ColorScheme>().is_err());
        for s in ColorScheme::ALL {
            assert_eq!(s.name().parse::<ColorScheme>().unwrap(), s);
        }
    }

    #[test]
    fn colormode_bits() {
        assert_eq!(ColorMode::from_bits(0), Some(ColorMode::Mono));
        assert_eq!(ColorMode::from_bits(256), Some(ColorMode::Color256));
        assert_eq!(ColorMode::from_bits(32), Some(ColorMode::TrueColor));
        assert_eq!(ColorMode::from_bits(12), None);
    }
}
