//! Personal application launcher.
//!
//! Reads an apps file (one executable path per line), starts each entry as a
//! detached process, and asks the user for a replacement when an entry no
//! longer exists. Repairs are written back to the apps file.
//!
//! - **[`core`]**: Pure logic (apps file format, outcomes, notices). No I/O.
//! - **[`io`]**: Side effects (settings, apps file, process spawning, prompters).
//!
//! [`launch`] coordinates the two for a single run.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod launch;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
