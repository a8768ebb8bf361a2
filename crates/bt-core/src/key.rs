use std::marker::PhantomData;

/// Phantom-typed blackboard key over a stable `u64` id.
///
/// Keys carry the stored type in their signature, so a lookup can never
/// silently read a value of the wrong type (mismatch is a panic, see
/// [`crate::Store`]).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key<T: 'static> {
    id: u64,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for Key<T> {}

impl<T: 'static> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Key<T> {
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    pub fn id(self) -> u64 {
        self.id
    }
}
