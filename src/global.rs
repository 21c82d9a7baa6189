use std::{any::TypeId, collections::HashMap, hash::Hash, mem, sync::OnceLock};

use crate::private::{Descriptor, Entry, PartialDescriptor};

#[cfg(any(
    target_os = "none",
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
))]
extern "Rust" {
    #[cfg_attr(
        any(
            target_os = "none",
            target_os = "linux",
            target_os = "android",
            target_os = "freebsd"
        ),
        link_name = "__start_tswitch_casts"
    )]
    #[cfg_attr(
        any(target_os = "macos", target_os = "ios", target_os = "tvos"),
        link_name = "\x01section$start$__DATA$__tswitch_casts"
    )]
    static TYPESWITCH_START: Entry;

    #[cfg_attr(
        any(
            target_os = "none",
            target_os = "linux",
            target_os = "android",
            target_os = "freebsd"
        ),
        link_name = "__stop_tswitch_casts"
    )]
    #[cfg_attr(
        any(target_os = "macos", target_os = "ios", target_os = "tvos"),
        link_name = "\x01section$end$__DATA$__tswitch_casts"
    )]
    static TYPESWITCH_STOP: Entry;
}

// Keeps the section (and therefore its start/stop symbols) alive when nothing was registered.
#[cfg_attr(
    any(
        target_os = "none",
        target_os = "linux",
        target_os = "android",
        target_os = "freebsd"
    ),
    link_section = "tswitch_casts"
)]
#[cfg_attr(
    any(target_os = "macos", target_os = "ios", target_os = "tvos"),
    link_section = "__DATA,__tswitch_casts,regular,no_dead_strip"
)]
#[used]
static TYPESWITCH_PLEASE: [Entry; 0] = [];

#[cfg(target_os = "windows")]
#[link_section = ".tswitch_casts$a"]
static TYPESWITCH_START: [Entry; 0] = [];

#[cfg(target_os = "windows")]
#[link_section = ".tswitch_casts$c"]
static TYPESWITCH_STOP: [Entry; 0] = [];

#[cfg(not(any(
    target_os = "none",
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "windows",
)))]
std::compile_error!("typeswitch is not supported on this platform");

pub type DynTraitTypeId = TypeId;

pub type SelfTypeId = TypeId;

/// Process-wide map of every `#[dyncast] impl` linked into the binary.
pub struct Global {
    dyn_trait_map: HashMap<DynTraitTypeId, HashMap<SelfTypeId, PartialDescriptor>>,
}

// SAFETY: The raw pointers in the map are function pointers, never dereferenced as data.
unsafe impl Send for Global {}
unsafe impl Sync for Global {}

impl Global {
    pub fn singleton() -> &'static Global {
        static INIT: OnceLock<Global> = OnceLock::new();
        INIT.get_or_init(Self::build)
    }

    /// Finds how to attach the `dyn_trait` vtable to a value whose concrete type is `self_type`.
    #[inline]
    pub fn lookup(
        &self,
        dyn_trait: DynTraitTypeId,
        self_type: SelfTypeId,
    ) -> Option<&PartialDescriptor> {
        self.dyn_trait_map.get(&dyn_trait)?.get(&self_type)
    }

    /// Reads every linked entry and groups the descriptors by trait object type.
    fn build() -> Self {
        let mut descriptors = unsafe {
            descriptors(
                std::ptr::addr_of!(TYPESWITCH_START) as *const Entry,
                std::ptr::addr_of!(TYPESWITCH_STOP) as *const Entry,
            )
            .collect::<Vec<_>>()
        };

        descriptors.sort_unstable_by_key(|descriptor| descriptor.dyn_trait_id);

        let dyn_trait_map: HashMap<DynTraitTypeId, HashMap<SelfTypeId, PartialDescriptor>> =
            group_and_collect(
                descriptors.iter().copied(),
                |descriptor| descriptor.dyn_trait_id,
                |descriptor| {
                    (
                        descriptor.self_type_id,
                        PartialDescriptor {
                            attach_vtable_fn: descriptor.attach_vtable_fn,
                        },
                    )
                },
            );

        Self { dyn_trait_map }
    }
}

/// Calls each entry between `start` and `end` to produce its descriptor.
///
/// # Safety
///
/// `start..end` must be the bounds of the registry section, holding only [`Entry`] values.
unsafe fn descriptors(start: *const Entry, end: *const Entry) -> impl Iterator<Item = Descriptor> {
    assert!(start <= end);

    let mut curr = start;

    std::iter::from_fn(move || {
        if curr == end {
            return None;
        }

        let entry = unsafe { &*curr };
        curr = unsafe { curr.add(1) };

        let entry_ptr = entry.0.get().cast_const();
        assert!(!entry_ptr.is_null());

        let descriptor = unsafe { (*entry_ptr)() };
        Some(descriptor)
    })
}

fn group_and_collect<T, K, E, C>(
    iter: impl Iterator<Item = T>,
    group_key_fn: impl Fn(&T) -> K,
    entry_fn: impl Fn(T) -> E,
) -> HashMap<K, C>
where
    K: Eq + Hash + Copy,
    C: Default + Extend<E>,
{
    let mut map: HashMap<K, C> = HashMap::new();
    let mut curr_group: Option<(K, C)> = None;

    for item in iter {
        let group_key = group_key_fn(&item);

        let (curr_group_key, curr_group_entries) =
            curr_group.get_or_insert_with(|| (group_key, C::default()));

        if *curr_group_key != group_key {
            let previous_group_key = mem::replace(curr_group_key, group_key);
            let previous_group_entries = mem::take(curr_group_entries);
            map.insert(previous_group_key, previous_group_entries);
        }

        curr_group_entries.extend(Some(entry_fn(item)));
    }

    if let Some((last_group_key, last_group_entries)) = curr_group {
        map.insert(last_group_key, last_group_entries);
    }

    map
}
