//! Item status enumeration and per-status tallies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::Item;

/// Availability of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Available for use.
    Free,
    /// Currently taken.
    Occupied,
    /// On order, not yet delivered.
    Ordered,
    /// Out for maintenance.
    Maintenance,
    /// Broken.
    Broken,
}

impl ItemStatus {
    /// Every status, in form display order.
    pub const ALL: [ItemStatus; 5] = [
        Self::Free,
        Self::Occupied,
        Self::Ordered,
        Self::Maintenance,
        Self::Broken,
    ];

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Occupied => "Occupied",
            Self::Ordered => "Ordered",
            Self::Maintenance => "Maintenance",
            Self::Broken => "Broken",
        }
    }

    /// Icon shown next to items with this status.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Free => "🟢",
            Self::Occupied => "🔴",
            Self::Ordered => "🟡",
            Self::Maintenance => "🔧",
            Self::Broken => "❌",
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = labinv_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                labinv_core::AppError::validation(format!(
                    "Invalid status: '{s}'. Expected one of: Free, Occupied, Ordered, \
                     Maintenance, Broken"
                ))
            })
    }
}

/// Number of items carrying one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// The status.
    pub status: ItemStatus,
    /// How many items have it.
    pub count: usize,
}

/// Tally `items` per status. Every status is present, zero counts included.
pub fn count_by_status<'a, I>(items: I) -> Vec<StatusCount>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut counts = [0usize; ItemStatus::ALL.len()];
    for item in items {
        counts[item.status.ordinal()] += 1;
    }
    ItemStatus::ALL
        .into_iter()
        .zip(counts)
        .map(|(status, count)| StatusCount { status, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_ignores_case() {
        assert_eq!("occupied".parse::<ItemStatus>().unwrap(), ItemStatus::Occupied);
        assert!("In Stock".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn test_ordinals_follow_all() {
        for (i, status) in ItemStatus::ALL.into_iter().enumerate() {
            assert_eq!(status.ordinal(), i);
        }
    }
}
