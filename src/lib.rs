//! BMad Method installer front end
//!
//! Parses the command line, optionally asks for install parameters
//! interactively, and hands the work to the installer module.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
