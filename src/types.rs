use std::marker::PhantomData;

use crate::cast::SwitchCast;

/// An ordered list of candidate types for [`one_of`](crate::one_of) and [`is_one_of`].
///
/// Tuples of sized types are lists. Lists containing trait objects are spelled with
/// [`types!`](crate::types), since a tuple can't hold `dyn Trait`. The empty list matches
/// nothing, which turns a `one_of` over it into a clause that never fires.
pub trait TypeList<V: ?Sized> {
    /// Whether `value` holds one of the listed types, checked in list order.
    fn contains(value: &V) -> bool;
}

/// The empty [`types!`](crate::types) list.
pub struct Nil;

/// A non-empty [`types!`](crate::types) list.
pub struct Cons<H: ?Sized, T>(PhantomData<T>, PhantomData<H>);

impl<V: ?Sized> TypeList<V> for Nil {
    #[inline]
    fn contains(_value: &V) -> bool {
        false
    }
}

impl<V, H, T> TypeList<V> for Cons<H, T>
where
    V: ?Sized + SwitchCast<H>,
    H: ?Sized,
    T: TypeList<V>,
{
    #[inline]
    fn contains(value: &V) -> bool {
        <V as SwitchCast<H>>::switch_cast(value).is_some() || T::contains(value)
    }
}

/// Spells a [`TypeList`] that may contain trait objects.
///
/// ```
/// use std::any::Any;
///
/// use typeswitch::{dyncast, is_one_of, types};
///
/// #[dyncast]
/// trait Named {}
///
/// struct Anonymous;
///
/// # fn main() {
/// let value: &dyn Any = &Anonymous;
/// assert!(!is_one_of::<types![dyn Named, u8], _>(value));
/// assert!(is_one_of::<types![dyn Named, Anonymous], _>(value));
/// assert!(!is_one_of::<types![], _>(value));
/// # }
/// ```
#[macro_export]
macro_rules! types {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::types![$($tail),*]>
    };
}

macro_rules! impl_type_list_for_tuple {
    ($($ty:ident),*) => {
        impl<V: ?Sized $(+ SwitchCast<$ty>)*, $($ty),*> TypeList<V> for ($($ty,)*) {
            #[inline]
            #[allow(unused_variables)]
            fn contains(value: &V) -> bool {
                false $(|| <V as SwitchCast<$ty>>::switch_cast(value).is_some())*
            }
        }
    };
}

impl_type_list_for_tuple!();
impl_type_list_for_tuple!(T0);
impl_type_list_for_tuple!(T0, T1);
impl_type_list_for_tuple!(T0, T1, T2);
impl_type_list_for_tuple!(T0, T1, T2, T3);
impl_type_list_for_tuple!(T0, T1, T2, T3, T4);
impl_type_list_for_tuple!(T0, T1, T2, T3, T4, T5);
impl_type_list_for_tuple!(T0, T1, T2, T3, T4, T5, T6);
impl_type_list_for_tuple!(T0, T1, T2, T3, T4, T5, T6, T7);

/// Whether `value` currently holds one of the types in `L`.
///
/// ```
/// use std::any::Any;
///
/// use typeswitch::is_one_of;
///
/// let value: &dyn Any = &3u16;
/// assert!(is_one_of::<(u8, u16), _>(value));
/// assert!(!is_one_of::<(i8, i16), _>(value));
/// assert!(!is_one_of::<(), _>(value));
/// ```
#[inline]
pub fn is_one_of<L: TypeList<V>, V: ?Sized>(value: &V) -> bool {
    L::contains(value)
}
