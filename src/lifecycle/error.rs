use std::time::Duration;
use thiserror::Error;

/// Failures while bringing the catalog's stores up or down.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A store could not be prepared (seed file, database ping, wiring).
    #[error("Startup failed: {0}")]
    Startup(String),

    /// A store could not release its resources.
    #[error("Teardown failed: {0}")]
    Teardown(String),

    #[error("Startup hooks did not finish within {0:?}")]
    InitTimeout(Duration),

    /// Raised by the manager with the name the hook was registered under.
    #[error("{hook} failed to start: {message}")]
    Hook { hook: String, message: String },
}

impl LifecycleError {
    pub fn startup(msg: impl Into<String>) -> Self {
        Self::Startup(msg.into())
    }

    pub fn teardown(msg: impl Into<String>) -> Self {
        Self::Teardown(msg.into())
    }

    pub fn hook(hook: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Hook {
            hook: hook.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LifecycleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_error_names_the_store() {
        let err = LifecycleError::hook("InMemoryProductRepository", "seed.json: not found");
        assert_eq!(
            err.to_string(),
            "InMemoryProductRepository failed to start: seed.json: not found"
        );
        assert_eq!(
            LifecycleError::InitTimeout(Duration::from_secs(30)).to_string(),
            "Startup hooks did not finish within 30s"
        );
    }
}
