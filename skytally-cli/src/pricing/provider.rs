use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

/// Cloud platform covered by the rate table.
///
/// Declaration order is display order: rate tables, result sets, and charts
/// all enumerate platforms in this exact sequence.
#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Provider {
    #[serde(rename = "AWS")]
    Aws,

    #[serde(rename = "Azure")]
    Azure,

    #[serde(rename = "GCP")]
    Gcp,

    #[serde(rename = "Oracle")]
    Oracle,
}

impl Provider {
    pub const ALL: [Self; 4] = [Self::Aws, Self::Azure, Self::Gcp, Self::Oracle];

    /// Accent color for tables and chart bars.
    pub const fn color(self) -> Color {
        match self {
            Self::Aws => Color::Red,
            Self::Azure => Color::Blue,
            Self::Gcp => Color::Yellow,
            Self::Oracle => Color::Cyan,
        }
    }

    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Aws => "Amazon AWS",
            Self::Azure => "Microsoft Azure",
            Self::Gcp => "Google GCP",
            Self::Oracle => "Oracle OCI",
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aws => write!(f, "AWS"),
            Self::Azure => write!(f, "Azure"),
            Self::Gcp => write!(f, "GCP"),
            Self::Oracle => write!(f, "Oracle"),
        }
    }
}
