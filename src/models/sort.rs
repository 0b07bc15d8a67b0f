use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering applied to each of the pinned/unpinned lists.
///
/// `Latest` and `Edited` are two names for the same order (descending by
/// update time); both exist because the UI offers both labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Latest,
    Created,
    Edited,
    PriorityHighLow,
    PriorityLowHigh,
}

impl SortMode {
    /// All modes in the order the sort selector cycles through them.
    pub const ALL: [SortMode; 5] = [
        SortMode::Latest,
        SortMode::Created,
        SortMode::Edited,
        SortMode::PriorityHighLow,
        SortMode::PriorityLowHigh,
    ];

    /// Human-readable label for the sort indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Created => "Created",
            Self::Edited => "Edited",
            Self::PriorityHighLow => "Priority: high to low",
            Self::PriorityLowHigh => "Priority: low to high",
        }
    }

    /// Returns the next mode in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Latest => Self::Created,
            Self::Created => Self::Edited,
            Self::Edited => Self::PriorityHighLow,
            Self::PriorityHighLow => Self::PriorityLowHigh,
            Self::PriorityLowHigh => Self::Latest,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Created => write!(f, "created"),
            Self::Edited => write!(f, "edited"),
            Self::PriorityHighLow => write!(f, "priority-high-low"),
            Self::PriorityLowHigh => write!(f, "priority-low-high"),
        }
    }
}
