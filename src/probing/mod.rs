//! Probing implementation submodule.
//!
//! Internal machinery for checking provider CLIs:
//!
//! - `find_executable`: search-path lookup, synchronous, no side effects
//! - `run_probe`: bounded-lifetime process execution racing exit vs. timeout

mod locator;
mod runner;

pub(crate) use locator::find_executable;
pub(crate) use runner::{run_probe, ProbeExit};
