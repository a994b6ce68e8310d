//! Binding to the generated logic library
//!
//! The FUSE compiler emits plain C functions. They are linked in from
//! `gen/libgen_logic.a` (see `build.rs`) and wrapped here so the boot
//! sequence only ever sees the safe [`GeneratedLogic`] trait.

use core::ffi::CStr;
use fuse_boot::GeneratedLogic;

mod ffi {
    use core::ffi::c_char;

    extern "C" {
        pub fn banner() -> *const c_char;
        pub fn meaning() -> i64;
        pub fn add(a: i64, b: i64) -> i64;
        pub fn max2(a: i64, b: i64) -> i64;
        pub fn demo_expr() -> i64;
    }
}

/// Generated logic reached over the C ABI
pub struct FfiLogic;

impl GeneratedLogic for FfiLogic {
    fn banner(&self) -> &CStr {
        let ptr = unsafe { ffi::banner() };
        if ptr.is_null() {
            log::warn!("logic: banner() returned NULL");
            return c"";
        }
        // SAFETY: generated code returns pointers to NUL-terminated string
        // literals with static lifetime.
        unsafe { CStr::from_ptr(ptr) }
    }

    fn meaning(&self) -> i64 {
        unsafe { ffi::meaning() }
    }

    fn add(&self, a: i64, b: i64) -> i64 {
        unsafe { ffi::add(a, b) }
    }

    fn max2(&self, a: i64, b: i64) -> i64 {
        unsafe { ffi::max2(a, b) }
    }

    fn demo_expr(&self) -> i64 {
        unsafe { ffi::demo_expr() }
    }
}
