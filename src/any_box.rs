use std::{
    any::{self, Any, TypeId},
    fmt,
};

use crate::{cast::SwitchCast, Dyncast};

/// A box holding exactly one value of exactly one type.
///
/// The box remembers the static type the value was stored as and nothing else. In particular it
/// does not know which traits that type implements, so a [`case_of`](crate::case_of) asking for a
/// `dyn Trait` never matches a box, even when the stored value implements the trait:
///
/// ```
/// use std::cell::Cell;
///
/// use typeswitch::{case_of, dispatch, dyncast, otherwise, AnyBox};
///
/// #[dyncast]
/// trait Animal {}
///
/// struct Cat;
///
/// #[dyncast]
/// impl Animal for Cat {}
///
/// # fn main() {
/// let hit = Cell::new("");
/// dispatch(
///     &AnyBox::new(Cat),
///     (
///         case_of::<dyn Animal>(|_| hit.set("animal")),
///         case_of::<Cat>(|_| hit.set("cat")),
///         otherwise(|_| hit.set("other")),
///     ),
/// );
/// assert_eq!(hit.get(), "cat");
/// # }
/// ```
pub struct AnyBox {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any>,
}

impl AnyBox {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// Whether the stored value was stored as exactly `T`.
    #[inline]
    pub fn is<T: ?Sized + Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// The [`TypeId`] of the type the value was stored as.
    #[inline]
    pub fn stored_type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Takes the value back out, or returns the box unchanged if it holds another type.
    pub fn into_inner<T: Any>(self) -> Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self {
                type_id: self.type_id,
                type_name: self.type_name,
                value,
            }),
        }
    }
}

impl fmt::Debug for AnyBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyBox")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized + Dyncast> SwitchCast<T> for AnyBox {
    #[inline]
    fn switch_cast(&self) -> Option<&T> {
        if !self.is::<T>() {
            return None;
        }
        T::dyncast_from(&*self.value)
    }
}

#[cfg(test)]
mod tests {
    use std::any::{Any, TypeId};

    use super::AnyBox;
    use crate::SwitchCast;

    #[derive(Debug, PartialEq)]
    struct Meters(f64);

    #[test]
    fn exact_type_only() {
        let boxed = AnyBox::new(Meters(1.5));

        assert!(boxed.is::<Meters>());
        assert!(!boxed.is::<f64>());

        let meters: Option<&Meters> = boxed.switch_cast();
        assert_eq!(meters, Some(&Meters(1.5)));

        let float: Option<&f64> = boxed.switch_cast();
        assert!(float.is_none());
    }

    #[test]
    fn stored_type_is_the_static_type() {
        let boxed = AnyBox::new(Meters(2.0));
        assert_eq!(boxed.stored_type_id(), TypeId::of::<Meters>());

        let erased: Box<dyn Any> = Box::new(Meters(2.0));
        let boxed = AnyBox::new(erased);
        assert_eq!(boxed.stored_type_id(), TypeId::of::<Box<dyn Any>>());
        assert_ne!(boxed.stored_type_id(), TypeId::of::<Meters>());
    }

    #[test]
    fn into_inner_returns_box_on_mismatch() {
        let boxed = AnyBox::new(5u32);
        let boxed = boxed.into_inner::<i32>().unwrap_err();
        assert_eq!(boxed.type_name(), "u32");
        assert_eq!(boxed.into_inner::<u32>().unwrap(), 5);
    }

    #[test]
    fn downcast_mut_edits_in_place() {
        let mut boxed = AnyBox::new(vec![1, 2]);
        boxed.downcast_mut::<Vec<i32>>().unwrap().push(3);
        assert_eq!(boxed.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
        assert!(format!("{boxed:?}").contains("Vec<i32>"));
    }
}
