//! Lifecycle Manager
//!
//! Manages the registration and execution of lifecycle hooks.

use super::{LifecycleError, OnModuleDestroy, OnModuleInit, Result};
use std::sync::Arc;
use std::time::Duration;

struct LifecycleHook<T: ?Sized> {
    service: Arc<T>,
    name: String,
}

impl<T: ?Sized> LifecycleHook<T> {
    fn new(service: Arc<T>, name: impl Into<String>) -> Self {
        Self {
            service,
            name: name.into(),
        }
    }
}

/// Manages lifecycle hooks for all registered services
///
/// Init hooks run in registration order and stop at the first failure.
/// Destroy hooks run in reverse order; a failing hook is logged and the
/// remaining hooks still run.
#[derive(Default)]
pub struct LifecycleManager {
    on_init_hooks: Vec<LifecycleHook<dyn OnModuleInit>>,
    on_destroy_hooks: Vec<LifecycleHook<dyn OnModuleDestroy>>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_init<T>(&mut self, service: Arc<T>, name: impl Into<String>)
    where
        T: OnModuleInit + 'static,
    {
        self.on_init_hooks
            .push(LifecycleHook::new(service as Arc<dyn OnModuleInit>, name));
    }

    pub fn register_destroy<T>(&mut self, service: Arc<T>, name: impl Into<String>)
    where
        T: OnModuleDestroy + 'static,
    {
        self.on_destroy_hooks
            .push(LifecycleHook::new(service as Arc<dyn OnModuleDestroy>, name));
    }

    /// Execute all OnModuleInit hooks
    pub async fn call_module_init(&self) -> Result<()> {
        tracing::info!("Calling OnModuleInit hooks...");

        for hook in &self.on_init_hooks {
            tracing::debug!("Initializing: {}", hook.name);
            hook.service.on_module_init().await.map_err(|e| {
                tracing::error!("OnModuleInit failed for {}: {}", hook.name, e);
                LifecycleError::hook(&hook.name, e.to_string())
            })?;
            tracing::debug!("Initialized: {}", hook.name);
        }

        tracing::info!(
            "OnModuleInit complete ({} hooks executed)",
            self.on_init_hooks.len()
        );
        Ok(())
    }

    /// Execute all OnModuleInit hooks with a timeout
    pub async fn call_module_init_with_timeout(&self, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, self.call_module_init())
            .await
            .map_err(|_| LifecycleError::InitTimeout(timeout))?
    }

    /// Execute all OnModuleDestroy hooks in **reverse order**
    pub async fn call_module_destroy(&self) -> Result<()> {
        tracing::info!("Calling OnModuleDestroy hooks...");

        for hook in self.on_destroy_hooks.iter().rev() {
            tracing::debug!("Destroying: {}", hook.name);
            if let Err(e) = hook.service.on_module_destroy().await {
                tracing::error!("OnModuleDestroy failed for {}: {}", hook.name, e);
            }
            tracing::debug!("Destroyed: {}", hook.name);
        }

        tracing::info!(
            "OnModuleDestroy complete ({} hooks executed)",
            self.on_destroy_hooks.len()
        );
        Ok(())
    }

    pub fn init_hook_count(&self) -> usize {
        self.on_init_hooks.len()
    }

    pub fn destroy_hook_count(&self) -> usize {
        self.on_destroy_hooks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct TestService {
        initialized: AtomicBool,
        destroyed: AtomicBool,
    }

    #[async_trait::async_trait]
    impl OnModuleInit for TestService {
        async fn on_module_init(&self) -> Result<()> {
            self.initialized.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl OnModuleDestroy for TestService {
        async fn on_module_destroy(&self) -> Result<()> {
            self.destroyed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingService;

    #[async_trait::async_trait]
    impl OnModuleInit for FailingService {
        async fn on_module_init(&self) -> Result<()> {
            Err(LifecycleError::startup("seed file missing"))
        }
    }

    struct SlowService;

    #[async_trait::async_trait]
    impl OnModuleInit for SlowService {
        async fn on_module_init(&self) -> Result<()> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_lifecycle_hooks() {
        let service = Arc::new(TestService::default());

        let mut manager = LifecycleManager::new();
        manager.register_init(Arc::clone(&service), "TestService");
        manager.register_destroy(Arc::clone(&service), "TestService");
        assert_eq!(manager.init_hook_count(), 1);
        assert_eq!(manager.destroy_hook_count(), 1);

        manager.call_module_init().await.unwrap();
        assert!(service.initialized.load(Ordering::SeqCst));

        manager.call_module_destroy().await.unwrap();
        assert!(service.destroyed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_init_failure_names_the_service() {
        let mut manager = LifecycleManager::new();
        manager.register_init(Arc::new(FailingService), "Seeder");

        let err = manager.call_module_init().await.unwrap_err();
        assert!(matches!(err, LifecycleError::Hook { hook, .. } if hook == "Seeder"));
    }

    #[tokio::test]
    async fn test_init_timeout() {
        let mut manager = LifecycleManager::new();
        manager.register_init(Arc::new(SlowService), "Slow");

        let err = manager
            .call_module_init_with_timeout(Duration::from_millis(20))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::InitTimeout(_)));
    }

    #[tokio::test]
    async fn test_destroy_reverse_order() {
        let order = Arc::new(Mutex::new(Vec::new()));

        struct OrderedService {
            id: usize,
            order: Arc<Mutex<Vec<usize>>>,
        }

        #[async_trait::async_trait]
        impl OnModuleDestroy for OrderedService {
            async fn on_module_destroy(&self) -> Result<()> {
                self.order.lock().await.push(self.id);
                Ok(())
            }
        }

        let mut manager = LifecycleManager::new();
        for i in 0..3 {
            let service = Arc::new(OrderedService {
                id: i,
                order: Arc::clone(&order),
            });
            manager.register_destroy(service, format!("Service{}", i));
        }

        manager.call_module_destroy().await.unwrap();

        assert_eq!(*order.lock().await, vec![2, 1, 0]);
    }
}
