#![forbid(unsafe_code)]

//! Real-time terminal demo for the timeline widget.
//!
//! Posts are loaded from a JSON file and scrolled with the virtual scheduler
//! driven by the wall clock. Hover is toggled periodically to show pause and
//! resume.

pub mod cli;
pub mod error;
pub mod frame;
pub mod logging;
pub mod session;

pub use cli::{Cli, run, run_from_env};
pub use error::{DemoError, Result};
