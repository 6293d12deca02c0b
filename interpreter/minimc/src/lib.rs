//! Minim interpreter CLI.
//!
//! Library side of the `minim` binary: session plumbing and the
//! subcommands, kept out of `main.rs` so they are testable.

pub mod commands;
pub mod repl;
mod session;

pub use session::{Session, SessionError};
