//! Category labels and the read-side category filter.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Fixed set of task categories.
///
/// Serialized as the exact label; deserialized through [`FromStr`], so saved
/// labels are matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Errands, appointments and the like.
    #[default]
    Personal,
    /// Meetings, deadlines and other work items.
    Work,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 2] = [Category::Personal, Category::Work];

    /// The label used both for display and in the persisted layout.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category '{s}' (expected Personal or Work)"))
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}

/// Which tasks a list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every task, grouped by category.
    #[default]
    All,
    /// Only tasks in the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if a task in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Categories a grouped view renders, in display order.
    #[must_use]
    pub fn categories(self) -> Vec<Category> {
        match self {
            Self::All => Category::ALL.to_vec(),
            Self::Only(selected) => vec![selected],
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| format!("Unknown filter '{s}' (expected All, Personal or Work)"))
    }
}
