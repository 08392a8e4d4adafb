//! The task record held by the store and written to storage.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A single to-do entry.
///
/// The serialized form is the persisted layout: `id`, `title`, `category`
/// and `completed`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation and never reassigned.
    pub id: String,
    /// Human-readable title. Never empty once validated by the front end.
    pub title: String,
    /// Grouping label; has no behavioral effect.
    pub category: Category,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a task that is not yet completed.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Self { id: id.into(), title: title.into(), category, completed: false }
    }

    /// Returns a copy with the completion flag flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self { completed: !self.completed, ..self.clone() }
    }
}
