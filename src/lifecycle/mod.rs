//! Lifecycle Hooks Module
//!
//! Storage backends often need work before the first request (open a pool,
//! load fixtures) and after the last one (close connections). Services opt in
//! by implementing the hook traits and being registered with the
//! [`ApplicationBuilder`].
//!
//! # Lifecycle Phases
//!
//! ```text
//! 1. Configuration Loading
//!    ↓
//! 2. DI Container Creation
//!    ↓
//! 3. Module Registration
//!    ↓
//! 4. OnModuleInit (each service, registration order)
//!    ↓
//! 5. Server Start
//!    ↓
//! [Running...]
//!    ↓
//! 6. Shutdown Signal (SIGTERM/SIGINT)
//!    ↓
//! 7. OnModuleDestroy (each service, reverse order)
//! ```

mod application;
mod error;
mod manager;
mod shutdown;
mod traits;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use manager::LifecycleManager;
pub use shutdown::shutdown_signal;
pub use traits::{OnModuleDestroy, OnModuleInit};
