// Section names shared with `src/global.rs`, which declares the start/stop symbols.

pub mod elf {
    pub const SECTION: &str = "tswitch_casts";
}

pub mod macho {
    pub const SECTION: &str = "__DATA,__tswitch_casts,regular,no_dead_strip";
}

pub mod windows {
    pub const SECTION: &str = ".tswitch_casts$b";
}
