use std::{any::Any, cell::RefCell};

use typeswitch::{case_of, dispatch, dyncast, otherwise, DyncastExt};

#[dyncast]
trait Boba<A: 'static> {
    fn supper(&self) -> &'static str;
}

struct A;

#[dyncast]
impl Boba<String> for A {
    fn supper(&self) -> &'static str {
        "a"
    }
}

#[dyncast]
impl Boba<i32> for A {
    fn supper(&self) -> &'static str {
        "i32"
    }
}

struct B;

#[dyncast]
impl Boba<String> for B {
    fn supper(&self) -> &'static str {
        "b"
    }
}

#[dyncast]
trait Soba {}

#[dyncast]
impl Soba for B {}

#[test]
fn boba() {
    let a = A;
    let b = B;

    let a = &a as &dyn Any;
    let b = &b as &dyn Any;

    assert_eq!(a.dyncast_to::<dyn Boba<String>>().unwrap().supper(), "a");
    assert_eq!(a.dyncast_to::<dyn Boba<i32>>().unwrap().supper(), "i32");
    assert_eq!(b.dyncast_to::<dyn Boba<String>>().unwrap().supper(), "b");

    assert!(a.dyncast_to::<dyn Boba<usize>>().is_none());
    assert!(a.dyncast_to::<dyn Soba>().is_none());

    assert!(b.dyncast_to::<dyn Boba<Box<usize>>>().is_none());
    assert!(b.dyncast_to::<dyn Soba>().is_some());
}

#[dyncast]
trait Convert<To> {
    fn convert_to(&self) -> To;
}

struct Conv(usize);

#[dyncast]
impl Convert<String> for Conv {
    fn convert_to(&self) -> String {
        format!("{}", self.0)
    }
}

#[dyncast]
impl Convert<usize> for Conv {
    fn convert_to(&self) -> usize {
        self.0
    }
}

#[test]
fn convert() {
    let p = Box::new(Conv(1337)) as Box<dyn Any>;
    let p = &*p;
    assert_eq!(
        p.dyncast_to::<dyn Convert<usize>>().unwrap().convert_to(),
        1337
    );
    assert_eq!(
        p.dyncast_to::<dyn Convert<String>>().unwrap().convert_to(),
        "1337"
    );
}

#[test]
fn switch_over_instantiations() {
    let out = RefCell::new(Vec::new());
    let p = &Conv(42) as &dyn Any;

    dispatch(
        p,
        (
            case_of::<dyn Convert<f64>>(|c| out.borrow_mut().push(c.convert_to().to_string())),
            case_of::<dyn Convert<String>>(|c| out.borrow_mut().push(c.convert_to())),
            case_of::<dyn Convert<usize>>(|c| out.borrow_mut().push(c.convert_to().to_string())),
            otherwise(|_| out.borrow_mut().push("nothing".to_string())),
        ),
    );

    assert_eq!(*out.borrow(), ["42"]);
}
