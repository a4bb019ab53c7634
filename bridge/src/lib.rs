//! Native greeter bridge
//!
//! C-compatible entry points for managed hosts. A JVM loads this crate as
//! `libnativegreeter.so` (`System.loadLibrary("nativegreeter")`) and calls
//! the JNI-convention export in [`jni`]; other hosts use the status-returning
//! C entry point in [`ffi`].

pub mod ffi;
pub mod jni;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Destination used by the argument-less JNI entry point.
pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/native-greeter.txt";

/// Install the global tracing subscriber, honoring `RUST_LOG`.
///
/// A subscriber may already be installed when the host loads the library
/// more than once, so the already-set error is ignored.
pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
