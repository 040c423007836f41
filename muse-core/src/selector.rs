use std::{fmt, marker::PhantomData};

/// Typed name of an event. The payload type is fixed by the constant that
/// declares the selector, so a publisher and its subscribers can't disagree
/// about what travels under a given name.
///
/// Selectors are only constructed inside this crate, which keeps the set of
/// events closed. See [`crate::cmd`] for the full list.
pub struct Selector<T = ()> {
    name: &'static str,
    payload: PhantomData<fn() -> T>,
}

impl<T> Selector<T> {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Selector<T> {}

impl<T> PartialEq for Selector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Selector<T> {}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selector").field(&self.name).finish()
    }
}

impl<T> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
