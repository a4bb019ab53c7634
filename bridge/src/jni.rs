//! JNI entry points
//!
//! The managed side declares:
//!
//! ```java
//! package com.ap;
//!
//! public class NativeGreeter {
//!     public native void greet();
//! }
//! ```
//!
//! The environment and receiver references are opaque here: the operation
//! reads nothing from the JVM, so nothing beyond the calling convention is
//! needed.

use std::ffi::c_void;
use std::path::Path;

use crate::DEFAULT_OUTPUT_PATH;

/// Opaque `JNIEnv*` target. Never dereferenced.
#[repr(C)]
pub struct JniEnv {
    _opaque: [u8; 0],
}

/// Opaque `JavaVM*` target. Never dereferenced.
#[repr(C)]
pub struct JavaVm {
    _opaque: [u8; 0],
}

/// Local reference to the calling Java object.
pub type Jobject = *mut c_void;

/// JNI version reported from [`JNI_OnLoad`].
pub const JNI_VERSION_1_8: i32 = 0x0001_0008;

/// Invocation-API load hook; installs the tracing subscriber.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVm, _reserved: *mut c_void) -> i32 {
    crate::init_tracing();
    tracing::debug!("nativegreeter loaded");
    JNI_VERSION_1_8
}

/// `com.ap.NativeGreeter#greet()V`
///
/// A `void` native method has no error channel, so a failed write is logged
/// and the call returns normally instead of unwinding into the JVM.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_ap_NativeGreeter_greet(_env: *mut JniEnv, _this: Jobject) {
    if let Err(e) = greeter_core::greet(Path::new(DEFAULT_OUTPUT_PATH)) {
        tracing::error!("greet failed: {e}");
    }
}
