//! Symbolic colour names used to tint product embeds.

use serde::{Deserialize, Serialize};

/// Embed colour used for unknown palette names (Discord blurple).
pub const FALLBACK_COLOUR: u32 = 0x0058_65F2;

/// Palette entry attached to a product.
///
/// Unknown names are kept verbatim so the catalogue round-trips its seed,
/// and resolve to [`FALLBACK_COLOUR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorIndicator {
    Red,
    Orange,
    Purple,
    Blue,
    Green,
    Teal,
    Yellow,
    Pink,
    Indigo,
    Other(String),
}

impl ColorIndicator {
    /// Resolve a palette name; never fails.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "red" => Self::Red,
            "orange" => Self::Orange,
            "purple" => Self::Purple,
            "blue" => Self::Blue,
            "green" => Self::Green,
            "teal" => Self::Teal,
            "yellow" => Self::Yellow,
            "pink" => Self::Pink,
            "indigo" => Self::Indigo,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Palette name as seeded.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Other(name) => name.as_str(),
        }
    }

    /// 24-bit RGB value used for embeds.
    #[must_use]
    pub const fn rgb(&self) -> u32 {
        match self {
            Self::Red => 0x00FF_0000,
            Self::Orange => 0x00FF_8C00,
            Self::Purple => 0x0080_0080,
            Self::Blue => 0x0000_00FF,
            Self::Green => 0x0000_FF00,
            Self::Teal => 0x0000_8080,
            Self::Yellow => 0x00FF_FF00,
            Self::Pink => 0x00FF_C0CB,
            Self::Indigo => 0x004B_0082,
            Self::Other(_) => FALLBACK_COLOUR,
        }
    }
}

impl From<String> for ColorIndicator {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<ColorIndicator> for String {
    fn from(value: ColorIndicator) -> Self {
        value.name().to_owned()
    }
}
