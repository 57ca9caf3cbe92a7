//! Stable exit codes for the launcher CLI.

/// The run reached its summary. Launch failures and skips are still `OK`.
pub const OK: i32 = 0;
/// Invalid settings or command-line arguments; no run was attempted.
pub const INVALID: i32 = 1;
