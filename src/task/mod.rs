//! Task domain types.

pub mod category;
pub mod item;

pub use category::{Category, CategoryFilter};
pub use item::Task;
