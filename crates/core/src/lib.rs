//! Greeter core - the greeting operation behind the native bridge
//!
//! A single synchronous operation: emit a fixed diagnostic line to the
//! console, then (over)write a one-line payload file at a caller-supplied
//! path. The file handle is scoped to the call and released on every exit
//! path. All failures surface as [`GreeterError`].

mod error;

pub use error::GreeterError;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Diagnostic line emitted to the console on every invocation.
pub const CONSOLE_MESSAGE: &str = "Code from C executed in Java";

/// Label prefixed to the payload in the output file.
pub const FILE_LABEL: &str = "Some text: ";

/// Payload written after the label.
pub const FILE_PAYLOAD: &str = "Write this to the file";

/// Run the greeting against `path`, with the diagnostic line on stdout.
pub fn greet(path: impl AsRef<Path>) -> Result<(), GreeterError> {
    let stdout = io::stdout();
    greet_to(&mut stdout.lock(), path)
}

/// Like [`greet`], but the diagnostic line goes to `console`.
///
/// The sequence is fixed: console line first, then the file. A failure to
/// open or write the file leaves the console line already emitted.
pub fn greet_to<W: Write>(console: &mut W, path: impl AsRef<Path>) -> Result<(), GreeterError> {
    let path = path.as_ref();

    writeln!(console, "{CONSOLE_MESSAGE}").map_err(GreeterError::Console)?;

    tracing::debug!(path = %path.display(), "writing greeting payload");

    let mut file = File::create(path).map_err(|e| GreeterError::io(path, e))?;
    writeln!(file, "{FILE_LABEL}{FILE_PAYLOAD}").map_err(|e| GreeterError::io(path, e))?;

    Ok(())
}
