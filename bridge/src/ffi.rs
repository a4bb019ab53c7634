//! C FFI bindings
//!
//! Status-returning entry point for non-JVM hosts, and for hosts that want
//! the failure report a `void` JNI method cannot carry.

use std::ffi::CStr;
use std::os::raw::c_char;

/// Run the greeting against a NUL-terminated `path`.
///
/// Returns 0 on success, -1 on a null or non-UTF-8 path or a failed write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn native_greeter_greet(path: *const c_char) -> i32 {
    let c_str = unsafe {
        if path.is_null() {
            return -1;
        }
        CStr::from_ptr(path)
    };

    let Ok(path) = c_str.to_str() else {
        return -1;
    };

    match greeter_core::greet(path) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("greet failed: {e}");
            -1
        }
    }
}
