use std::any::Any;

use crate::Dyncast;

/// Type-directed downcast from a matchable value to `&T`.
///
/// A failed cast is an ordinary `None`: a switch tries many of these per call.
///
/// How `T` is resolved depends on the source:
///
/// * `dyn Any`: the concrete type must be exactly `T`, or `T` is a `dyn Trait` registered for
///   that concrete type through [`dyncast`](crate::dyncast).
/// * [`AnyBox`](crate::AnyBox): the stored type must be exactly `T`. A box never matches a
///   trait object request, even when the stored type implements the trait.
/// * an enum deriving [`Variant`](crate::Variant): the active alternative must hold a `T`.
///   Only payload types implement this trait, so other requests don't compile.
pub trait SwitchCast<T: ?Sized> {
    fn switch_cast(&self) -> Option<&T>;
}

macro_rules! impl_switch_cast_for_any {
    ($($source:ty),*) => {
        $(
            impl<T: ?Sized + Dyncast> SwitchCast<T> for $source {
                #[inline]
                fn switch_cast(&self) -> Option<&T> {
                    T::dyncast_from(self)
                }
            }
        )*
    };
}

impl_switch_cast_for_any!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::SwitchCast;

    struct Wrapped(u32);

    #[test]
    fn concrete_type_must_match_exactly() {
        let value: &dyn Any = &Wrapped(7);

        let wrapped: Option<&Wrapped> = value.switch_cast();
        assert_eq!(wrapped.map(|w| w.0), Some(7));

        let number: Option<&u32> = value.switch_cast();
        assert!(number.is_none());
    }

    #[test]
    fn send_sync_sources() {
        let value: &(dyn Any + Send + Sync) = &String::from("boba");
        let text: Option<&String> = value.switch_cast();
        assert_eq!(text.map(String::as_str), Some("boba"));

        let value: &(dyn Any + Send) = &1u8;
        assert!(SwitchCast::<u16>::switch_cast(value).is_none());
    }
}
