use std::marker::PhantomData;

use crate::{cast::SwitchCast, types::TypeList};

/// One step of a switch: a match rule paired with a handler.
///
/// A clause is consumed by its single attempt. It returns `true` when it matched, in which case
/// its handler (if any) has already run.
pub trait Clause<V: ?Sized> {
    fn try_match(self, value: &V) -> bool;
}

/// A clause that always matches and may therefore end a switch.
///
/// Only [`Otherwise`] and [`IgnoreOthers`] are terminal.
pub trait Terminal<V: ?Sized>: Clause<V> + sealed::Sealed {}

mod sealed {
    pub trait Sealed {}

    impl<V: ?Sized, F> Sealed for super::Otherwise<V, F> {}
    impl Sealed for super::IgnoreOthers {}
}

/// Built by [`case_of`].
pub struct Case<T: ?Sized, F> {
    handler: F,
    _target: PhantomData<fn(&T)>,
}

/// Matches when the value can be viewed as a `T`; the handler receives that view.
pub fn case_of<T: ?Sized>(handler: impl FnOnce(&T)) -> Case<T, impl FnOnce(&T)> {
    Case {
        handler,
        _target: PhantomData,
    }
}

impl<V, T, F> Clause<V> for Case<T, F>
where
    V: ?Sized + SwitchCast<T>,
    T: ?Sized,
    F: FnOnce(&T),
{
    #[inline]
    fn try_match(self, value: &V) -> bool {
        match <V as SwitchCast<T>>::switch_cast(value) {
            Some(target) => {
                (self.handler)(target);
                true
            }
            None => false,
        }
    }
}

/// Built by [`one_of`].
pub struct OneOf<L, V: ?Sized, F> {
    handler: F,
    _types: PhantomData<fn() -> L>,
    _value: PhantomData<fn(&V)>,
}

/// Matches when the value holds any type of the list `L`, tried in order.
///
/// The handler receives the original value, not the matched view; it can run a nested
/// [`dispatch`](crate::dispatch) if it needs to tell the candidates apart. An empty list never
/// matches.
pub fn one_of<L, V: ?Sized>(handler: impl FnOnce(&V)) -> OneOf<L, V, impl FnOnce(&V)> {
    OneOf {
        handler,
        _types: PhantomData,
        _value: PhantomData,
    }
}

impl<L, V, F> Clause<V> for OneOf<L, V, F>
where
    L: TypeList<V>,
    V: ?Sized,
    F: FnOnce(&V),
{
    #[inline]
    fn try_match(self, value: &V) -> bool {
        if !L::contains(value) {
            return false;
        }
        (self.handler)(value);
        true
    }
}

/// Built by [`otherwise`].
pub struct Otherwise<V: ?Sized, F> {
    handler: F,
    _value: PhantomData<fn(&V)>,
}

/// Always matches; the handler receives the original value.
pub fn otherwise<V: ?Sized>(handler: impl FnOnce(&V)) -> Otherwise<V, impl FnOnce(&V)> {
    Otherwise {
        handler,
        _value: PhantomData,
    }
}

impl<V: ?Sized, F: FnOnce(&V)> Clause<V> for Otherwise<V, F> {
    #[inline]
    fn try_match(self, value: &V) -> bool {
        (self.handler)(value);
        true
    }
}

impl<V: ?Sized, F: FnOnce(&V)> Terminal<V> for Otherwise<V, F> {}

/// Built by [`ignore_others`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreOthers;

/// Always matches and does nothing: explicitly leaves every remaining type unhandled.
#[inline]
pub fn ignore_others() -> IgnoreOthers {
    IgnoreOthers
}

impl<V: ?Sized> Clause<V> for IgnoreOthers {
    #[inline]
    fn try_match(self, _value: &V) -> bool {
        true
    }
}

impl<V: ?Sized> Terminal<V> for IgnoreOthers {}

#[cfg(test)]
mod tests {
    use std::{any::Any, cell::Cell};

    use super::*;

    #[test]
    fn case_runs_handler_only_on_match() {
        let seen = Cell::new(0u32);
        let value: &dyn Any = &41u32;

        assert!(!case_of::<i32>(|_| seen.set(1)).try_match(value));
        assert_eq!(seen.get(), 0);

        assert!(case_of::<u32>(|n| seen.set(*n + 1)).try_match(value));
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn one_of_passes_the_original_value() {
        let seen = Cell::new(None);
        let value: &dyn Any = &'x';

        let matched = one_of::<(u8, char), _>(|v: &dyn Any| {
            seen.set(v.downcast_ref::<char>().copied())
        })
        .try_match(value);

        assert!(matched);
        assert_eq!(seen.get(), Some('x'));
    }

    #[test]
    fn empty_one_of_never_matches() {
        let value: &dyn Any = &();
        assert!(!one_of::<(), _>(|_: &dyn Any| unreachable!()).try_match(value));
    }

    #[test]
    fn catch_alls_always_match() {
        let seen = Cell::new(false);
        let value: &dyn Any = &"anything";

        assert!(otherwise(|_: &dyn Any| seen.set(true)).try_match(value));
        assert!(seen.get());
        assert!(Clause::<dyn Any>::try_match(ignore_others(), value));
    }
}
