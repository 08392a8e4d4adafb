//! State store: actions, the pure reducer, the owning store and read-side views.
//!
//! All mutation of the task sequence flows through [`TaskStore::dispatch`],
//! which applies [`reduce`] and then notifies subscribed observers.

pub mod action;
pub mod reducer;
pub mod store;
pub mod view;

pub use action::Action;
pub use reducer::reduce;
pub use store::{TaskObserver, TaskStore};
pub use view::{count_tasks, filter_tasks, group_by_category, TaskCounts};
