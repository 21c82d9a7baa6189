//! Input the proc-macros refuse, each with its own diagnostic.
//!
//! `Variant` on a struct:
//!
//! ```compile_fail
//! use typeswitch::Variant;
//!
//! #[derive(Variant)]
//! struct Meters(f64);
//! ```
//!
//! An alternative without a payload:
//!
//! ```compile_fail
//! use typeswitch::Variant;
//!
//! #[derive(Variant)]
//! enum Token {
//!     Int(i64),
//!     End,
//! }
//! ```
//!
//! An alternative holding two values:
//!
//! ```compile_fail
//! use typeswitch::Variant;
//!
//! #[derive(Variant)]
//! enum Token {
//!     Int(i64),
//!     Range(i64, i64),
//! }
//! ```
//!
//! Two alternatives holding the same type:
//!
//! ```compile_fail
//! use typeswitch::Variant;
//!
//! #[derive(Variant)]
//! enum Token {
//!     Int(i64),
//!     Line(i64),
//! }
//! ```
//!
//! A bare type parameter next to a concrete payload:
//!
//! ```compile_fail
//! use typeswitch::Variant;
//!
//! #[derive(Variant)]
//! enum Tagged<T> {
//!     Value(T),
//!     Count(usize),
//! }
//! ```
//!
//! `#[dyncast]` on an inherent impl:
//!
//! ```compile_fail
//! use typeswitch::dyncast;
//!
//! struct Circle;
//!
//! #[dyncast]
//! impl Circle {}
//!
//! # fn main() {}
//! ```
//!
//! `#[dyncast]` on a generic impl:
//!
//! ```compile_fail
//! use typeswitch::dyncast;
//!
//! #[dyncast]
//! trait Shape {}
//!
//! #[dyncast]
//! impl<T: 'static> Shape for Vec<T> {}
//!
//! # fn main() {}
//! ```
//!
//! `#[dyncast]` on a trait with a const parameter:
//!
//! ```compile_fail
//! use typeswitch::dyncast;
//!
//! #[dyncast]
//! trait Shape<const SIDES: usize> {}
//!
//! # fn main() {}
//! ```
//!
//! `#[dyncast]` on a trait with a lifetime parameter:
//!
//! ```compile_fail
//! use typeswitch::dyncast;
//!
//! #[dyncast]
//! trait Named<'a> {
//!     fn name(&self) -> &'a str;
//! }
//!
//! # fn main() {}
//! ```
