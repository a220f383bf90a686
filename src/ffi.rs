//! Exported DLL entry points.
//!
//! Installer scripting loads the `cdylib` and calls these symbols before any
//! managed runtime is known to exist. Nothing unwinds across this boundary.

use std::panic;

use crate::probe::probe_runtime_installed;

/// Returns `true` when a .NET 7 SDK is found under Program Files.
///
/// Shows a warning dialog and returns `false` if Program Files cannot be
/// resolved. Every other failure returns `false` silently.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn IsNet7Installed() -> bool {
    panic::catch_unwind(probe_runtime_installed).unwrap_or_else(|_| {
        tracing::error!("Runtime probe panicked");
        false
    })
}
