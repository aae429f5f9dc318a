//! Process exit codes

/// Successful termination (also used for help display)
pub const OK: i32 = 0;

/// Any reported failure: installer error or unresolved installer module
pub const FAILURE: i32 = 1;

/// User aborted an interactive prompt (128 + SIGINT)
pub const INTERRUPTED: i32 = 130;
