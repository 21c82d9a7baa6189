//! Ordered type switches.
//!
//! A switch tries a list of clauses against a value, in order, and runs the handler of the first
//! clause whose type matches. The value can be represented three ways:
//!
//! * a `&dyn Any`, matched against concrete types exactly, or against any trait object
//!   `dyn Trait` whose trait and impls are annotated with [`dyncast`];
//! * an [`AnyBox`], which only ever matches the exact type it was built from;
//! * an enum deriving [`Variant`], which only accepts requests for its own payload types.
//!
//! ```
//! use std::any::Any;
//! use std::cell::Cell;
//!
//! use typeswitch::{case_of, dispatch, dyncast, one_of, otherwise};
//!
//! #[dyncast]
//! trait Shape {
//!     fn area(&self) -> f64;
//! }
//!
//! struct Circle(f64);
//!
//! #[dyncast]
//! impl Shape for Circle {
//!     fn area(&self) -> f64 {
//!         3.0 * self.0 * self.0
//!     }
//! }
//!
//! fn describe(value: &dyn Any) -> String {
//!     let out = Cell::new(String::new());
//!     dispatch(
//!         value,
//!         (
//!             case_of::<dyn Shape>(|shape| out.set(format!("shape of area {}", shape.area()))),
//!             one_of::<(u8, u16), _>(|_| out.set("small number".into())),
//!             otherwise(|_| out.set("something else".into())),
//!         ),
//!     );
//!     out.take()
//! }
//!
//! # fn main() {
//! assert_eq!(describe(&Circle(1.0)), "shape of area 3");
//! assert_eq!(describe(&7u16), "small number");
//! assert_eq!(describe(&"text"), "something else");
//! # }
//! ```
//!
//! Every switch must end with [`otherwise`] or [`ignore_others`]. A switch that doesn't is
//! rejected at compile time:
//!
//! ```compile_fail,E0277
//! use std::any::Any;
//!
//! use typeswitch::{case_of, dispatch};
//!
//! let value: &dyn Any = &5i32;
//! dispatch(value, (case_of::<i32>(|_| {}), case_of::<u8>(|_| {})));
//! ```

use std::any::Any;

/// [This](`dyncast`) proc-macro can be used on trait definitions and trait impls.
///
/// Annotating a trait makes `dyn Trait` a valid target for [`Dyncast`], annotating an impl
/// registers the implementing type so that a `&dyn Any` holding it can be viewed as
/// `&dyn Trait`.
///
/// ```
/// use typeswitch::dyncast;
///
/// #[dyncast]
/// trait Foo {}
///
/// #[dyncast]
/// impl Foo for () {}
///
/// # fn main() {}
/// ```
///
/// [`dyncast`] also supports traits with generics. However, this is limited to type parameters.
///
/// ```
/// use typeswitch::dyncast;
///
/// #[dyncast]
/// trait Foo<T: 'static> {}
///
/// #[dyncast]
/// impl Foo<String> for () {}
///
/// # fn main() {}
/// ```
#[cfg(feature = "derive")]
pub use typeswitch_impl::dyncast;

/// Derives [`SwitchCast`] for every payload type of an enum.
///
/// Each variant must be a tuple variant holding exactly one value, and no two variants may hold
/// the same type. Requesting a type that isn't one of the payloads does not compile:
///
/// ```compile_fail,E0277
/// use typeswitch::{case_of, dispatch, ignore_others, Variant};
///
/// #[derive(Variant)]
/// enum Token {
///     Int(i64),
///     Word(String),
/// }
///
/// dispatch(&Token::Int(1), (case_of::<char>(|_| {}), ignore_others()));
/// ```
///
/// Generic enums are supported as long as no substitution of their parameters can make two
/// payload types equal. A payload that is a bare type parameter `T` is therefore only accepted
/// next to payloads that mention `T`, such as `Vec<T>`:
///
/// ```
/// use typeswitch::Variant;
///
/// #[derive(Variant)]
/// enum OneOrMany<T> {
///     One(T),
///     Many(Vec<T>),
/// }
/// ```
///
/// `Either<L, R>` is rejected, since `Either<u8, u8>` would hold `u8` twice:
///
/// ```compile_fail
/// use typeswitch::Variant;
///
/// #[derive(Variant)]
/// enum Either<L, R> {
///     Left(L),
///     Right(R),
/// }
/// ```
#[cfg(feature = "derive")]
pub use typeswitch_impl::Variant;

#[cfg(all(doctest, feature = "derive"))]
mod rejected;

#[doc(hidden)]
pub mod private;

mod any_box;
mod cast;
mod clause;
mod dispatch;
mod global;
mod types;

pub use crate::any_box::AnyBox;
pub use crate::cast::SwitchCast;
pub use crate::clause::{
    case_of, ignore_others, one_of, otherwise, Case, Clause, IgnoreOthers, OneOf, Otherwise,
    Terminal,
};
pub use crate::dispatch::{dispatch, Chain, Clauses};
pub use crate::types::{is_one_of, Cons, Nil, TypeList};

/// Views a `&dyn Any` as `&Self`.
///
/// Sized types succeed only for the exact concrete type. Trait objects of traits annotated with
/// [`dyncast`] succeed whenever the concrete type has an annotated impl of that trait.
pub trait Dyncast: Any {
    fn dyncast_from(source: &dyn Any) -> Option<&Self>;
}

impl<T: Any> Dyncast for T {
    #[inline(always)]
    fn dyncast_from(source: &dyn Any) -> Option<&Self> {
        source.downcast_ref::<T>()
    }
}

/// Provides a shorthand method [dyncast_to](`DyncastExt::dyncast_to`).
///
/// ```
/// use typeswitch::{dyncast, DyncastExt};
///
/// #[dyncast]
/// trait Bar {}
///
/// fn foo(val: &dyn std::any::Any) {
///     assert!(val.dyncast_to::<dyn Bar>().is_none());
/// }
///
/// # fn main() {}
/// ```
pub trait DyncastExt {
    fn dyncast_to<T: ?Sized + Dyncast>(&self) -> Option<&T>;
}

macro_rules! impl_dyncast_ext {
    ($($source:ty),*) => {
        $(
            impl DyncastExt for $source {
                #[inline(always)]
                fn dyncast_to<D: ?Sized + Dyncast>(&self) -> Option<&D> {
                    D::dyncast_from(self)
                }
            }
        )*
    };
}

impl_dyncast_ext!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);
