use crate::error::{CatalogError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

type AnyService = Arc<dyn Any + Send + Sync>;

/// Casts a registered implementation into an `Arc<Arc<dyn Trait>>` boxed as `Any`.
/// Returns `None` when the stored instance is not the bound implementation.
type CasterFn = Arc<dyn Fn(AnyService) -> Option<AnyService> + Send + Sync>;

/// Thread-safe dependency injection container.
///
/// Services are keyed by their concrete `TypeId`; trait bindings map a
/// `dyn Trait` to the implementation registered for it.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, AnyService>,
    trait_mappings: DashMap<TypeId, TypeId>,
    casters: DashMap<TypeId, CasterFn>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.register_arc(Arc::new(instance))
    }

    pub fn register_arc<T: 'static + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        self.services.insert(TypeId::of::<T>(), instance);
        self
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let trait_id = TypeId::of::<Trait>();
        self.trait_mappings.insert(trait_id, TypeId::of::<Impl>());

        let caster: CasterFn = Arc::new(move |instance: AnyService| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as AnyService)
        });

        self.casters.insert(trait_id, caster);
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let entry = self
            .services
            .get(&TypeId::of::<T>())
            .ok_or_else(|| CatalogError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            })?;
        entry
            .value()
            .clone()
            .downcast::<T>()
            .map_err(|_| CatalogError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let requested_type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        let caster = self.casters.get(&requested_type_id).ok_or_else(|| {
            CatalogError::DependencyNotFound {
                type_name: type_name.to_string(),
            }
        })?;

        let impl_type_id = *self
            .trait_mappings
            .get(&requested_type_id)
            .ok_or_else(|| CatalogError::DependencyNotFound {
                type_name: format!("No implementation mapping found for trait '{type_name}'"),
            })?;

        let instance = self
            .services
            .get(&impl_type_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| CatalogError::DependencyNotFound {
                type_name: format!("Implementation for trait '{type_name}' not registered"),
            })?;

        let downcast_failed = || CatalogError::DowncastFailed {
            type_name: type_name.to_string(),
        };

        // The caster hands back an Arc<dyn Any> wrapping the Arc<T>.
        let wrapper = (caster.value())(instance)
            .ok_or_else(downcast_failed)?
            .downcast::<Arc<T>>()
            .map_err(|_| downcast_failed())?;
        Ok(wrapper.as_ref().clone())
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.trait_mappings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
