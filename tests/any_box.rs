use std::cell::RefCell;

use typeswitch::{case_of, dispatch, dyncast, ignore_others, otherwise, AnyBox, SwitchCast};

#[dyncast]
trait Base {
    fn value(&self) -> i32;
}

struct Derived(i32);

#[dyncast]
impl Base for Derived {
    fn value(&self) -> i32 {
        self.0
    }
}

#[test]
fn supertype_request_does_not_match_a_box() {
    let hits = RefCell::new(Vec::new());
    let boxed = AnyBox::new(Derived(974496));

    dispatch(
        &boxed,
        (
            case_of::<dyn Base>(|base| hits.borrow_mut().push(format!("base({})", base.value()))),
            case_of::<Derived>(|derived| hits.borrow_mut().push(format!("derived({})", derived.0))),
            otherwise(|_| hits.borrow_mut().push("default".to_string())),
        ),
    );

    assert_eq!(*hits.borrow(), ["derived(974496)"]);
}

#[test]
fn boxed_trait_object_is_its_own_type() {
    let boxed = AnyBox::new(Box::new(Derived(1)) as Box<dyn Base>);

    assert!(SwitchCast::<Derived>::switch_cast(&boxed).is_none());
    assert!(SwitchCast::<dyn Base>::switch_cast(&boxed).is_none());

    let inner: Option<&Box<dyn Base>> = boxed.switch_cast();
    assert_eq!(inner.map(|b| b.value()), Some(1));
}

#[test]
fn boxes_hold_one_value_at_a_time() {
    let hits = RefCell::new(Vec::new());
    let boxes = [AnyBox::new(1u8), AnyBox::new("two"), AnyBox::new(3.0f64)];

    for boxed in &boxes {
        dispatch(
            boxed,
            (
                case_of::<u8>(|n| hits.borrow_mut().push(n.to_string())),
                case_of::<&str>(|s| hits.borrow_mut().push(s.to_string())),
                ignore_others(),
            ),
        );
    }

    assert_eq!(*hits.borrow(), ["1", "two"]);
}
