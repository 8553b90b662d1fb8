//! Closed product category set and its fixed presentation tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CatalogueValidationError;

/// Feature bullets for categories without a dedicated list.
///
/// Labels outside [`Category::ALL`] never reach rendering; seed validation
/// rejects them, so this is the only fallback table.
pub const FALLBACK_FEATURES: &[&str] = &["⭐ Premium Features", "🔧 Advanced Tools", "💎 High Quality"];

const EXTERNAL_TOOL_FEATURES: &[&str] =
    &["🎯 Aimbot", "👁️ ESP/Wallhack", "🔍 No Recoil", "⚡ Speed Hack"];
const LOADER_FEATURES: &[&str] = &["🚀 Fast Injection", "🛡️ Bypass Protection", "🔧 Easy Setup"];
const SPOOFER_FEATURES: &[&str] = &["🔄 HWID Spoofing", "🛡️ Anti-Detection", "🔒 Secure Method"];

/// Product category.
///
/// Serialised with its display label, for example `"External Tool"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "Game Cheat")]
    GameCheat,
    #[serde(rename = "External Tool")]
    ExternalTool,
    Loader,
    Spoofer,
    Utility,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [
        Self::GameCheat,
        Self::ExternalTool,
        Self::Loader,
        Self::Spoofer,
        Self::Utility,
    ];

    /// Display label; also the wire representation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GameCheat => "Game Cheat",
            Self::ExternalTool => "External Tool",
            Self::Loader => "Loader",
            Self::Spoofer => "Spoofer",
            Self::Utility => "Utility",
        }
    }

    /// Emoji shown before product names of this category.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::GameCheat => "🎮",
            Self::ExternalTool => "🔧",
            Self::Loader => "📦",
            Self::Spoofer => "🔒",
            Self::Utility => "⚙️",
        }
    }

    /// Feature bullets advertised for this category.
    #[must_use]
    pub const fn features(self) -> &'static [&'static str] {
        match self {
            Self::ExternalTool => EXTERNAL_TOOL_FEATURES,
            Self::Loader => LOADER_FEATURES,
            Self::Spoofer => SPOOFER_FEATURES,
            Self::GameCheat | Self::Utility => FALLBACK_FEATURES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogueValidationError;

    /// Exact, case-sensitive label match.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .ok_or_else(|| CatalogueValidationError::UnknownCategory {
                label: label.to_owned(),
            })
    }
}
