//! Item category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad classification of an item.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    /// Reagents and other chemicals.
    #[default]
    Chemical,
    /// Glassware.
    Glassware,
    /// Measuring instruments.
    Instrument,
    /// Larger equipment.
    Equipment,
    /// Single-use consumables.
    Consumable,
    /// Hand tools.
    Tool,
    /// Electronic parts and devices.
    Electronic,
    /// Safety gear.
    Safety,
}

impl Category {
    /// Every category, in form display order.
    pub const ALL: [Category; 8] = [
        Self::Chemical,
        Self::Glassware,
        Self::Instrument,
        Self::Equipment,
        Self::Consumable,
        Self::Tool,
        Self::Electronic,
        Self::Safety,
    ];

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chemical => "Chemical",
            Self::Glassware => "Glassware",
            Self::Instrument => "Instrument",
            Self::Equipment => "Equipment",
            Self::Consumable => "Consumable",
            Self::Tool => "Tool",
            Self::Electronic => "Electronic",
            Self::Safety => "Safety",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = labinv_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                labinv_core::AppError::validation(format!("Invalid category: '{s}'"))
            })
    }
}
