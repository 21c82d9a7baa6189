use crate::clause::{Clause, Terminal};

/// An ordered sequence of clauses ending in a [`Terminal`] clause.
///
/// Implemented for tuples of up to 12 clauses whose last element is terminal, and for
/// [`Chain`], which [`switch!`](crate::switch) uses for sequences of any length.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a complete switch over `{V}`",
    note = "every switch must end with `otherwise(..)` or `ignore_others()`, and every other \
            clause must be able to match a `{V}`"
)]
pub trait Clauses<V: ?Sized> {
    fn run(self, value: &V);
}

/// Runs the handler of the first clause in `clauses` that matches `value`.
///
/// At most one handler runs. None runs only when the sequence reaches
/// [`ignore_others`](crate::ignore_others).
///
/// ```
/// use std::any::Any;
/// use std::cell::Cell;
///
/// use typeswitch::{case_of, dispatch, ignore_others};
///
/// let hits = Cell::new(0);
/// let value: &dyn Any = &'c';
/// dispatch(value, (case_of::<u8>(|_| hits.set(hits.get() + 1)), ignore_others()));
/// assert_eq!(hits.get(), 0);
/// ```
#[inline]
pub fn dispatch<V: ?Sized, C: Clauses<V>>(value: &V, clauses: C) {
    clauses.run(value)
}

/// A clause followed by the rest of a sequence.
pub struct Chain<H, T>(pub H, pub T);

impl<V: ?Sized, H: Clause<V>, T: Clauses<V>> Clauses<V> for Chain<H, T> {
    #[inline]
    fn run(self, value: &V) {
        let Chain(head, tail) = self;
        if !head.try_match(value) {
            tail.run(value);
        }
    }
}

macro_rules! impl_clauses_for_tuple {
    ($($head:ident),* ; $last:ident) => {
        impl<V: ?Sized, $($head: Clause<V>,)* $last: Terminal<V>> Clauses<V>
            for ($($head,)* $last,)
        {
            #[inline]
            #[allow(non_snake_case)]
            fn run(self, value: &V) {
                let ($($head,)* $last,) = self;
                $(
                    if $head.try_match(value) {
                        return;
                    }
                )*
                $last.try_match(value);
            }
        }
    };
}

impl_clauses_for_tuple!(; C0);
impl_clauses_for_tuple!(C0; C1);
impl_clauses_for_tuple!(C0, C1; C2);
impl_clauses_for_tuple!(C0, C1, C2; C3);
impl_clauses_for_tuple!(C0, C1, C2, C3; C4);
impl_clauses_for_tuple!(C0, C1, C2, C3, C4; C5);
impl_clauses_for_tuple!(C0, C1, C2, C3, C4, C5; C6);
impl_clauses_for_tuple!(C0, C1, C2, C3, C4, C5, C6; C7);
impl_clauses_for_tuple!(C0, C1, C2, C3, C4, C5, C6, C7; C8);
impl_clauses_for_tuple!(C0, C1, C2, C3, C4, C5, C6, C7, C8; C9);
impl_clauses_for_tuple!(C0, C1, C2, C3, C4, C5, C6, C7, C8, C9; C10);
impl_clauses_for_tuple!(C0, C1, C2, C3, C4, C5, C6, C7, C8, C9, C10; C11);

/// Dispatches on a value with any number of clauses.
///
/// `switch!(value => a, b, c)` is `dispatch(value, Chain(a, Chain(b, (c,))))`. The last clause
/// must be [`otherwise`](crate::otherwise) or [`ignore_others`](crate::ignore_others).
///
/// ```
/// use std::any::Any;
/// use std::cell::Cell;
///
/// use typeswitch::{case_of, otherwise, switch};
///
/// let label = Cell::new("");
/// let value: &dyn Any = &2.5f32;
/// switch!(value =>
///     case_of::<f64>(|_| label.set("double")),
///     case_of::<f32>(|_| label.set("float")),
///     otherwise(|_| label.set("unknown")),
/// );
/// assert_eq!(label.get(), "float");
/// ```
#[macro_export]
macro_rules! switch {
    ($value:expr => $($clause:expr),+ $(,)?) => {
        $crate::dispatch($value, $crate::__chain!($($clause),+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __chain {
    ($last:expr) => {
        ($last,)
    };
    ($head:expr, $($tail:expr),+) => {
        $crate::Chain($head, $crate::__chain!($($tail),+))
    };
}
