//! Storage type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of physical container a storage represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// A drawer.
    Drawer,
    /// A cupboard.
    Cupboard,
    /// A free-standing wardrobe-style cabinet.
    Almirah,
    /// An open shelf.
    Shelf,
    /// A closed cabinet.
    Cabinet,
    /// A rack.
    Rack,
    /// A refrigerator.
    Fridge,
    /// A freezer.
    Freezer,
}

impl StorageKind {
    /// Every storage kind, in form display order.
    pub const ALL: [StorageKind; 8] = [
        Self::Drawer,
        Self::Cupboard,
        Self::Almirah,
        Self::Shelf,
        Self::Cabinet,
        Self::Rack,
        Self::Fridge,
        Self::Freezer,
    ];

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drawer => "drawer",
            Self::Cupboard => "cupboard",
            Self::Almirah => "almirah",
            Self::Shelf => "shelf",
            Self::Cabinet => "cabinet",
            Self::Rack => "rack",
            Self::Fridge => "fridge",
            Self::Freezer => "freezer",
        }
    }

    /// Title-cased label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Drawer => "Drawer",
            Self::Cupboard => "Cupboard",
            Self::Almirah => "Almirah",
            Self::Shelf => "Shelf",
            Self::Cabinet => "Cabinet",
            Self::Rack => "Rack",
            Self::Fridge => "Fridge",
            Self::Freezer => "Freezer",
        }
    }

    /// Icon shown next to the storage name.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Drawer => "🗃️",
            Self::Cupboard => "📦",
            Self::Almirah => "🗄️",
            Self::Shelf => "📚",
            Self::Cabinet => "🚪",
            Self::Rack => "🛒",
            Self::Fridge => "🧊",
            Self::Freezer => "❄️",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageKind {
    type Err = labinv_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                labinv_core::AppError::validation(format!(
                    "Invalid storage type: '{s}'. Expected one of: drawer, cupboard, almirah, \
                     shelf, cabinet, rack, fridge, freezer"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Drawer".parse::<StorageKind>().unwrap(), StorageKind::Drawer);
        assert_eq!(" fridge ".parse::<StorageKind>().unwrap(), StorageKind::Fridge);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "bucket".parse::<StorageKind>().unwrap_err();
        assert_eq!(err.kind, labinv_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&StorageKind::Almirah).unwrap();
        assert_eq!(json, "\"almirah\"");
    }
}
