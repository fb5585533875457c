//! Typed singleton registry.
//!
//! [`Registry`] is filled once at startup by
//! [`build_container`](crate::core::container::build_container) and frozen
//! into a read-only [`Container`], which controllers query by type.

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    sync::Arc,
};

use thiserror::Error;

type Instance = Arc<dyn Any + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("no provider registered for {type_name}")]
    MissingProvider { type_name: &'static str },
}

/// Mutable builder for a [`Container`].
#[derive(Default)]
pub struct Registry {
    instances: HashMap<TypeId, Instance>,
}

impl Registry {
    /// Register `value` as the single instance of `T` and hand back a shared
    /// handle so it can be injected into later providers. Registering the
    /// same type twice replaces the earlier instance.
    pub fn singleton<T: Send + Sync + 'static>(&mut self, value: T) -> Arc<T> {
        let instance = Arc::new(value);
        self.instances
            .insert(TypeId::of::<T>(), instance.clone() as Instance);
        instance
    }

    pub fn into_container(self) -> Container {
        Container {
            instances: self.instances,
        }
    }
}

/// Frozen set of singletons.
#[derive(Default)]
pub struct Container {
    instances: HashMap<TypeId, Instance>,
}

impl Container {
    pub fn resolve<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    pub fn require<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, ContainerError> {
        self.resolve::<T>().ok_or(ContainerError::MissingProvider {
            type_name: type_name::<T>(),
        })
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("providers", &self.instances.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Counter(u32);
    struct Wrapper(Arc<Counter>);

    #[test]
    fn singleton_is_shared_between_registry_and_container() {
        let mut registry = Registry::default();
        let counter = registry.singleton(Counter(7));
        registry.singleton(Wrapper(counter.clone()));
        let container = registry.into_container();

        let resolved = container.require::<Counter>().unwrap();
        assert!(Arc::ptr_eq(&counter, &resolved));
        assert_eq!(container.require::<Wrapper>().unwrap().0.0, 7);
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn missing_provider_names_the_type() {
        let container = Registry::default().into_container();
        let err = container.require::<Counter>().unwrap_err();
        assert!(err.to_string().contains("Counter"));
        assert!(container.resolve::<Counter>().is_none());
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut registry = Registry::default();
        registry.singleton(Counter(1));
        registry.singleton(Counter(2));
        let container = registry.into_container();
        assert_eq!(container.require::<Counter>().unwrap().0, 2);
    }
}
