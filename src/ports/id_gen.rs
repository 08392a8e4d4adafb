//! ID generator port for new task identifiers.

use crate::task::Task;

/// Generates unique task identifiers.
///
/// Ids are produced by the front end before an add is dispatched, so the
/// reducer itself never touches a clock or a random source.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;

    /// Informs the generator of tasks that already exist, once they are
    /// loaded. Generators whose ids cannot collide with stored ones ignore it.
    fn seed(&self, _existing: &[Task]) {}
}
