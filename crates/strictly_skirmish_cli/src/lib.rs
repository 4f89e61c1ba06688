//! Terminal driver for Strictly Skirmish.
//!
//! A thin collaborator: it parses line commands, forwards them to the
//! [`strictly_skirmish::Skirmish`] engine, and renders the snapshot that comes
//! back. No rules live here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use cli::{Cli, Command};
pub use command::{LineCommand, ParseCommandError, USAGE};
pub use config::{ConfigError, SkirmishConfig};
pub use session::Session;
