use std::cell::UnsafeCell;

pub use std::any::TypeId;

pub use crate::global::Global;
pub use crate::Dyncast;

/// Everything needed to view an erased `Self` pointer as a `dyn Trait` pointer.
#[derive(Copy, Clone)]
pub struct Descriptor {
    pub(crate) dyn_trait_id: TypeId,
    pub(crate) self_type_id: TypeId,
    pub(crate) attach_vtable_fn: *const (),
}

impl Descriptor {
    #[inline]
    pub fn new<T: ?Sized>(
        self_type_id: TypeId,
        dyn_trait_id: TypeId,
        attach_vtable_fn: fn(*const ()) -> *const T,
    ) -> Self {
        Self {
            dyn_trait_id,
            self_type_id,
            attach_vtable_fn: attach_vtable_fn as *const (),
        }
    }
}

#[derive(Copy, Clone)]
pub struct PartialDescriptor {
    pub(crate) attach_vtable_fn: *const (),
}

impl PartialDescriptor {
    /// # Safety
    /// `T` must be the trait object type this descriptor was registered for.
    #[inline]
    pub unsafe fn attach_vtable_fn<T: ?Sized>(&self) -> fn(*const ()) -> *const T {
        unsafe { std::mem::transmute::<*const (), fn(*const ()) -> *const T>(self.attach_vtable_fn) }
    }
}

/// A link-time registered `#[dyncast] impl`.
///
/// Entries are placed into a dedicated linker section by the proc-macro generated code and
/// collected by [`Global`] on first use.
#[repr(transparent)]
pub struct Entry(pub(crate) UnsafeCell<fn() -> Descriptor>);

// SAFETY: The inner function pointer is never written after construction.
unsafe impl Sync for Entry {}

impl Entry {
    #[inline]
    pub const fn new(descriptor: fn() -> Descriptor) -> Self {
        Self(UnsafeCell::new(descriptor))
    }
}
