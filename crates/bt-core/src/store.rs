use std::any::Any;
use std::collections::BTreeMap;

use crate::Key;

/// Flat typed map backing one blackboard scope (and the global store).
///
/// A type mismatch between a key and the stored value is a programmer
/// error, not a domain outcome, and panics with a diagnostic.
#[derive(Default)]
pub struct Store {
    values: BTreeMap<u64, Box<dyn Any>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains<T: 'static>(&self, key: Key<T>) -> bool {
        self.values.contains_key(&key.id())
    }

    pub fn set<T: 'static>(&mut self, key: Key<T>, value: T) {
        self.values.insert(key.id(), Box::new(value));
    }

    pub fn get<T: 'static>(&self, key: Key<T>) -> Option<&T> {
        let value = self.values.get(&key.id())?;
        value.downcast_ref::<T>().or_else(|| {
            panic!(
                "store type mismatch for key id={} (stored type differs from requested)",
                key.id()
            )
        })
    }

    pub fn get_mut<T: 'static>(&mut self, key: Key<T>) -> Option<&mut T> {
        let value = self.values.get_mut(&key.id())?;
        value.downcast_mut::<T>().or_else(|| {
            panic!(
                "store type mismatch for key id={} (stored type differs from requested)",
                key.id()
            )
        })
    }

    pub fn remove<T: 'static>(&mut self, key: Key<T>) -> Option<T> {
        let value = self.values.remove(&key.id())?;
        value.downcast::<T>().map(|b| *b).ok().or_else(|| {
            panic!(
                "store type mismatch for key id={} (stored type differs from requested)",
                key.id()
            )
        })
    }
}
