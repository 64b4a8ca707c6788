//! trnav CLI library.
//!
//! Command handlers, interactive prompting and output formatting for the
//! `trnav` binary. Handlers write to caller-supplied streams so they can be
//! exercised without a terminal.

pub mod commands;
pub mod output;
pub mod prompt;
