use crate::di::Container;
use crate::error::Result;

/// Trait for application modules
///
/// A module registers the providers of one feature area into the container.
/// Infrastructure it depends on (storage, configuration) must already be
/// registered when `register` runs.
pub trait Module {
    /// Register all providers in this module
    fn register(container: &mut Container) -> Result<()>;
}
